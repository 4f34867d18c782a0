// this module is transparently re-exported by its parent `graph`

use std::convert::Infallible;
use std::fmt::Debug;
use std::hash::Hash;

use super::{GEdgeSource, GResult, GVertexSource, Graph};

/// An immutable graph described by an explicit vertex list and edge list.
///
/// Edges are identified by their index in the edge list,
/// so parallel edges are representable
/// (and reported by [`Graph::has_parallel_edges`]).
/// Built once with [`EdgeListGraph::new`], then frozen;
/// this type intentionally has no mutation API.
#[derive(Clone, Debug)]
pub struct EdgeListGraph<V> {
    verts: Vec<V>,
    ends: Vec<(usize, usize)>,
    incoming: Vec<Vec<usize>>,
    outgoing: Vec<Vec<usize>>,
    directed: bool,
}

/// Error raised when building an [`EdgeListGraph`].
#[derive(Debug, thiserror::Error)]
pub enum EdgeListError<V: Debug> {
    /// An edge refers to an endpoint missing from the vertex list.
    #[error("edge endpoint {0:?} is not a vertex of the graph")]
    UnknownVertex(V),
}

impl<V> EdgeListGraph<V>
where
    V: Clone + Eq + Ord + Hash + Debug,
{
    /// Build a graph from its vertices and its edges,
    /// given as `(source, target)` pairs.
    ///
    /// Duplicate vertices are merged;
    /// an edge endpoint absent from `vertices` is an error
    /// (isolated vertices are allowed, implicit vertices are not).
    pub fn new<IV, IE>(vertices: IV, edges: IE, directed: bool) -> Result<Self, EdgeListError<V>>
    where
        IV: IntoIterator<Item = V>,
        IE: IntoIterator<Item = (V, V)>,
    {
        let mut verts: Vec<V> = vertices.into_iter().collect();
        verts.sort_unstable();
        verts.dedup();
        let index = |v: &V| verts.binary_search(v).ok();
        let mut ends = Vec::new();
        for (s, t) in edges {
            let si = index(&s).ok_or(EdgeListError::UnknownVertex(s))?;
            let ti = index(&t).ok_or(EdgeListError::UnknownVertex(t))?;
            ends.push((si, ti));
        }
        let mut incoming = vec![Vec::new(); verts.len()];
        let mut outgoing = vec![Vec::new(); verts.len()];
        for (eid, &(s, t)) in ends.iter().enumerate() {
            if directed {
                outgoing[s].push(eid);
                incoming[t].push(eid);
            } else {
                // incident edge set on both sides, once per endpoint
                outgoing[s].push(eid);
                incoming[s].push(eid);
                if t != s {
                    outgoing[t].push(eid);
                    incoming[t].push(eid);
                }
            }
        }
        Ok(EdgeListGraph {
            verts,
            ends,
            incoming,
            outgoing,
            directed,
        })
    }

    /// Build an undirected graph; see [`EdgeListGraph::new`].
    pub fn undirected<IV, IE>(vertices: IV, edges: IE) -> Result<Self, EdgeListError<V>>
    where
        IV: IntoIterator<Item = V>,
        IE: IntoIterator<Item = (V, V)>,
    {
        Self::new(vertices, edges, false)
    }

    /// Build a directed graph; see [`EdgeListGraph::new`].
    pub fn directed<IV, IE>(vertices: IV, edges: IE) -> Result<Self, EdgeListError<V>>
    where
        IV: IntoIterator<Item = V>,
        IE: IntoIterator<Item = (V, V)>,
    {
        Self::new(vertices, edges, true)
    }

    fn index_of(&self, v: &V) -> Option<usize> {
        self.verts.binary_search(v).ok()
    }
}

impl<V> Graph for EdgeListGraph<V>
where
    V: Clone + Eq + Ord + Hash + Debug,
{
    type Vertex = V;
    type Edge = usize;
    type Error = Infallible;

    fn vertices(&self) -> GVertexSource<Self> {
        Box::new(self.verts.iter().cloned().map(Ok))
    }

    fn edges(&self) -> GEdgeSource<Self> {
        Box::new((0..self.ends.len()).map(Ok))
    }

    fn edge_source(&self, e: &usize) -> GResult<Self, V> {
        Ok(self.verts[self.ends[*e].0].clone())
    }

    fn edge_target(&self, e: &usize) -> GResult<Self, V> {
        Ok(self.verts[self.ends[*e].1].clone())
    }

    fn incoming_edges<'s>(&'s self, v: &'s V) -> GEdgeSource<'s, Self> {
        match self.index_of(v) {
            None => Box::new(std::iter::empty()),
            Some(i) => Box::new(self.incoming[i].iter().copied().map(Ok)),
        }
    }

    fn outgoing_edges<'s>(&'s self, v: &'s V) -> GEdgeSource<'s, Self> {
        match self.index_of(v) {
            None => Box::new(std::iter::empty()),
            Some(i) => Box::new(self.outgoing[i].iter().copied().map(Ok)),
        }
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_mixed(&self) -> bool {
        false
    }

    fn vertex_count(&self) -> GResult<Self, usize> {
        Ok(self.verts.len())
    }

    fn edge_count(&self) -> GResult<Self, usize> {
        Ok(self.ends.len())
    }
}
