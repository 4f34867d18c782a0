//! I define [`VertexOrdering`],
//! a stable vertex-to-integer indexing built independently of any
//! coloring, and [`IsomorphicMapping`],
//! an explicit immutable vertex bijection between two graphs.

use std::fmt::Debug;
use std::hash::Hash;

use tinct_api::graph::{GResult, Graph};

/// A stable bidirectional association between the vertices of one graph
/// and the integers `0..n`, in ascending vertex order.
///
/// Built independently of any coloring;
/// used only to materialize the final mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexOrdering<V> {
    verts: Vec<V>,
}

impl<V: Clone + Ord> VertexOrdering<V> {
    /// Build the ordering of the vertices of `g`.
    pub fn new<G>(g: &G) -> GResult<G, Self>
    where
        G: Graph<Vertex = V>,
        V: Eq + Hash + Debug,
    {
        let mut verts: Vec<V> = g.vertices().collect::<Result<_, _>>()?;
        verts.sort_unstable();
        verts.dedup();
        Ok(VertexOrdering { verts })
    }

    /// Wrap an already sorted, deduplicated vertex vector.
    pub(crate) fn from_sorted(verts: Vec<V>) -> Self {
        debug_assert!(verts.windows(2).all(|w| w[0] < w[1]));
        VertexOrdering { verts }
    }

    /// The number of vertices.
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Whether the ordering is empty.
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// The vertex at index `i`, if any.
    pub fn get(&self, i: usize) -> Option<&V> {
        self.verts.get(i)
    }

    /// The index of vertex `v`, if it belongs to the ordering.
    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.verts.binary_search(v).ok()
    }
}

/// An explicit vertex bijection between two graphs,
/// exposing forward and inverse lookup.
///
/// Immutable once built, owned by the caller,
/// and independent of later inspector state changes.
#[derive(Clone, Debug)]
pub struct IsomorphicMapping<V1, V2> {
    domain: VertexOrdering<V1>,
    codomain: VertexOrdering<V2>,
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl<V1, V2> IsomorphicMapping<V1, V2>
where
    V1: Clone + Ord,
    V2: Clone + Ord,
{
    /// Build a mapping from index pairs over the two orderings.
    ///
    /// # Precondition
    /// `pairs` must contain every domain index and every codomain index
    /// exactly once (the orderings have the same length).
    pub(crate) fn from_pairs(
        domain: VertexOrdering<V1>,
        codomain: VertexOrdering<V2>,
        pairs: &[(usize, usize)],
    ) -> Self {
        debug_assert_eq!(domain.len(), codomain.len());
        debug_assert_eq!(pairs.len(), domain.len());
        let n = domain.len();
        let mut forward = vec![usize::MAX; n];
        let mut inverse = vec![usize::MAX; n];
        for &(i, j) in pairs {
            forward[i] = j;
            inverse[j] = i;
        }
        debug_assert!(forward.iter().all(|&j| j != usize::MAX));
        debug_assert!(inverse.iter().all(|&i| i != usize::MAX));
        IsomorphicMapping {
            domain,
            codomain,
            forward,
            inverse,
        }
    }

    /// The number of paired vertices.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the mapping pairs no vertices at all
    /// (the bijection between two empty graphs).
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The vertex of the second graph paired with `v`, if any.
    pub fn image(&self, v: &V1) -> Option<&V2> {
        let i = self.domain.index_of(v)?;
        self.codomain.get(self.forward[i])
    }

    /// The vertex of the first graph paired with `v`, if any.
    pub fn preimage(&self, v: &V2) -> Option<&V1> {
        let j = self.codomain.index_of(v)?;
        self.domain.get(self.inverse[j])
    }

    /// An iterator over all pairs, in ascending first-graph vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (&V1, &V2)> {
        self.domain
            .verts
            .iter()
            .zip(&self.forward)
            .map(|(v, &j)| (v, &self.codomain.verts[j]))
    }

    /// Whether `other` is exactly the inverse bijection of `self`.
    pub fn is_inverse_of(&self, other: &IsomorphicMapping<V2, V1>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(v1, v2)| other.image(v2).is_some_and(|w| w == v1))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tinct_api::graph::EdgeListGraph;

    fn ordering<V: Clone + Ord>(mut verts: Vec<V>) -> VertexOrdering<V> {
        verts.sort();
        VertexOrdering::from_sorted(verts)
    }

    #[test]
    fn ordering_from_graph_is_sorted_and_coloring_independent() {
        let g = EdgeListGraph::undirected(vec![4u32, 2, 3, 1], vec![(4, 1)]).unwrap();
        let ord = VertexOrdering::new(&g).unwrap();
        assert_eq!(ord.len(), 4);
        assert_eq!(ord.get(0), Some(&1));
        assert_eq!(ord.get(3), Some(&4));
        assert_eq!(ord.index_of(&3), Some(2));
        assert_eq!(ord.index_of(&9), None);
    }

    #[test]
    fn forward_and_inverse_lookup() {
        let m = IsomorphicMapping::from_pairs(
            ordering(vec![1u32, 2, 3]),
            ordering(vec!['a', 'b', 'c']),
            &[(0, 2), (1, 0), (2, 1)],
        );
        assert_eq!(m.len(), 3);
        assert_eq!(m.image(&1), Some(&'c'));
        assert_eq!(m.image(&2), Some(&'a'));
        assert_eq!(m.image(&3), Some(&'b'));
        assert_eq!(m.preimage(&'c'), Some(&1));
        assert_eq!(m.preimage(&'a'), Some(&2));
        assert_eq!(m.image(&9), None);
        assert_eq!(m.preimage(&'z'), None);
    }

    #[test]
    fn iter_in_domain_order() {
        let m = IsomorphicMapping::from_pairs(
            ordering(vec![2u32, 1]),
            ordering(vec!['b', 'a']),
            &[(0, 1), (1, 0)],
        );
        let pairs: Vec<_> = m.iter().map(|(v, w)| (*v, *w)).collect();
        assert_eq!(pairs, vec![(1, 'b'), (2, 'a')]);
    }

    #[test]
    fn inverse_relation() {
        let m = IsomorphicMapping::from_pairs(
            ordering(vec![1u32, 2]),
            ordering(vec!['a', 'b']),
            &[(0, 1), (1, 0)],
        );
        let inv = IsomorphicMapping::from_pairs(
            ordering(vec!['a', 'b']),
            ordering(vec![1u32, 2]),
            &[(0, 1), (1, 0)],
        );
        assert!(m.is_inverse_of(&inv));
        assert!(inv.is_inverse_of(&m));
        let not_inv = IsomorphicMapping::from_pairs(
            ordering(vec!['a', 'b']),
            ordering(vec![1u32, 2]),
            &[(0, 0), (1, 1)],
        );
        assert!(!m.is_inverse_of(&not_inv));
    }
}
