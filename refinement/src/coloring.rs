//! I define [`Coloring`],
//! a mapping from vertices to integer color ids,
//! together with its derived view as color classes.

use std::collections::{BTreeMap, BTreeSet};

/// A vertex coloring: every vertex is mapped to an integer color id.
///
/// Color ids need not be dense.
/// The derived [`classes`](Coloring::classes) view partitions the
/// vertices into sets sharing one color id;
/// within a class, vertices are iterated in ascending order,
/// which is the "internal iteration order" other components rely on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coloring<V> {
    colors: BTreeMap<V, usize>,
    distinct: usize,
}

impl<V: Clone + Ord> Coloring<V> {
    /// The uniform coloring: every vertex gets color 0.
    pub fn uniform<I: IntoIterator<Item = V>>(vertices: I) -> Self {
        vertices.into_iter().map(|v| (v, 0)).collect()
    }

    /// The color of vertex `v`, if `v` is colored.
    pub fn color_of(&self, v: &V) -> Option<usize> {
        self.colors.get(v).copied()
    }

    /// The number of colored vertices.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether this coloring colors no vertex at all.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The number of distinct color ids in use.
    ///
    /// Computed once when the coloring is built,
    /// so this is a constant-time accessor.
    pub fn color_count(&self) -> usize {
        self.distinct
    }

    /// The number of color classes
    /// (always equal to [`color_count`](Coloring::color_count),
    /// exposed separately because both are checked when comparing
    /// colorings).
    pub fn class_count(&self) -> usize {
        self.color_count()
    }

    /// The color classes, keyed by color id;
    /// each class lists its vertices in ascending order.
    pub fn classes(&self) -> BTreeMap<usize, Vec<V>> {
        let mut classes: BTreeMap<usize, Vec<V>> = BTreeMap::new();
        for (v, &c) in &self.colors {
            classes.entry(c).or_default().push(v.clone());
        }
        classes
    }

    /// Whether every color class has exactly one vertex.
    pub fn is_discrete(&self) -> bool {
        self.color_count() == self.len()
    }

    /// An iterator over the `(vertex, color)` pairs,
    /// in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, usize)> {
        self.colors.iter().map(|(v, &c)| (v, c))
    }
}

impl<V: Ord> FromIterator<(V, usize)> for Coloring<V> {
    fn from_iter<I: IntoIterator<Item = (V, usize)>>(iter: I) -> Self {
        let colors: BTreeMap<V, usize> = iter.into_iter().collect();
        let distinct = colors.values().collect::<BTreeSet<_>>().len();
        Coloring { colors, distinct }
    }
}
