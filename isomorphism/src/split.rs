//! I provide the partition splitter:
//! a coloring of the tagged union graph,
//! projected back onto two per-graph colorings
//! that share color ids where structurally equivalent.

use tinct_refinement::coloring::Coloring;

use crate::Tagged;

/// Split a coloring of the union graph into the two per-graph colorings.
///
/// Classes are walked in ascending color id;
/// each member keeps the class's color id on its own side.
/// This shared id is exactly the signal later used to match vertices
/// across the two graphs.
/// Each output uses only the ids actually present on its side,
/// so the two sides may end up with different numbers of used colors.
pub fn split<V1, V2>(union: &Coloring<Tagged<V1, V2>>) -> (Coloring<V1>, Coloring<V2>)
where
    V1: Clone + Ord,
    V2: Clone + Ord,
{
    let mut c1 = Vec::new();
    let mut c2 = Vec::new();
    for (color, members) in union.classes() {
        for v in members {
            match v {
                Tagged::First(v) => c1.push((v, color)),
                Tagged::Second(v) => c2.push((v, color)),
            }
        }
    }
    (c1.into_iter().collect(), c2.into_iter().collect())
}

#[cfg(test)]
mod test {
    use super::*;

    type T = Tagged<u32, char>;

    #[test]
    fn routes_by_origin_under_shared_ids() {
        let union: Coloring<T> = vec![
            (Tagged::First(1), 5),
            (Tagged::Second('a'), 5),
            (Tagged::First(2), 7),
            (Tagged::First(3), 7),
            (Tagged::Second('b'), 9),
        ]
        .into_iter()
        .collect();
        let (c1, c2) = split(&union);
        assert_eq!(c1.len(), 3);
        assert_eq!(c2.len(), 2);
        assert_eq!(c1.color_of(&1), Some(5));
        assert_eq!(c2.color_of(&'a'), Some(5));
        assert_eq!(c1.color_of(&2), Some(7));
        assert_eq!(c1.color_of(&3), Some(7));
        assert_eq!(c2.color_of(&'b'), Some(9));
        // id 7 is only used on the first side, id 9 only on the second
        assert_eq!(c1.class_count(), 2);
        assert_eq!(c2.class_count(), 2);
    }

    #[test]
    fn empty_union() {
        let union: Coloring<T> = Vec::new().into_iter().collect();
        let (c1, c2) = split(&union);
        assert!(c1.is_empty());
        assert!(c2.is_empty());
    }
}
