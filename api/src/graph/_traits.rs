// this module is transparently re-exported by its parent `graph`

use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fmt::Debug;
use std::hash::Hash;

/// Type alias for results produced by a graph.
pub type GResult<G, T> = Result<T, <G as Graph>::Error>;
/// Type alias for fallible vertex iterators produced by a graph.
///
/// See [`Graph::vertices`] for more information about how to use it.
pub type GVertexSource<'a, G> = Box<dyn Iterator<Item = GResult<G, <G as Graph>::Vertex>> + 'a>;
/// Type alias for fallible edge iterators produced by a graph.
///
/// See [`Graph::edges`] for more information about how to use it.
pub type GEdgeSource<'a, G> = Box<dyn Iterator<Item = GResult<G, <G as Graph>::Edge>> + 'a>;

/// Generic trait for read-only graphs.
///
/// A graph is a set of vertices together with a set of edges;
/// every edge resolves to a source and a target vertex.
/// For undirected graphs the source/target distinction is only
/// the stored orientation of the edge, and
/// [`incoming_edges`](Graph::incoming_edges) and
/// [`outgoing_edges`](Graph::outgoing_edges)
/// both yield the full incident edge set.
///
/// NB: the semantics of this trait allows a graph to contain
/// parallel edges and self-loops;
/// consumers that require simple graphs must check
/// [`has_parallel_edges`](Graph::has_parallel_edges) themselves.
pub trait Graph {
    /// The type of vertices of this graph.
    ///
    /// Vertices are opaque identifiers with structural equality;
    /// `Ord` provides the stable vertex ordering that
    /// deterministic algorithms rely on.
    type Vertex: Clone + Eq + Ord + Hash + Debug;
    /// The type of edges of this graph.
    ///
    /// Edges are opaque identifiers,
    /// resolvable through [`edge_source`](Graph::edge_source) and
    /// [`edge_target`](Graph::edge_target).
    type Edge: Clone;
    /// The error type that this graph may raise.
    type Error: 'static + Error + Send + Sync;

    /// An iterator visiting all vertices of this graph in arbitrary order.
    ///
    /// This iterator is fallible:
    /// its items are `Result`s,
    /// an error may occur at any time during the iteration.
    fn vertices(&self) -> GVertexSource<Self>;

    /// An iterator visiting all edges of this graph in arbitrary order.
    ///
    /// See also [`vertices`](Graph::vertices).
    fn edges(&self) -> GEdgeSource<Self>;

    /// The source vertex of edge `e`.
    ///
    /// # Precondition
    /// `e` must have been yielded by one of the edge iterators of this
    /// graph, otherwise this method may panic.
    fn edge_source(&self, e: &Self::Edge) -> GResult<Self, Self::Vertex>;

    /// The target vertex of edge `e`.
    ///
    /// # Precondition
    /// `e` must have been yielded by one of the edge iterators of this
    /// graph, otherwise this method may panic.
    fn edge_target(&self, e: &Self::Edge) -> GResult<Self, Self::Vertex>;

    /// An iterator visiting all edges pointing into `v`
    /// (for undirected graphs: all edges incident to `v`).
    ///
    /// Yields nothing if `v` is not a vertex of this graph.
    fn incoming_edges<'s>(&'s self, v: &'s Self::Vertex) -> GEdgeSource<'s, Self>;

    /// An iterator visiting all edges pointing out of `v`
    /// (for undirected graphs: all edges incident to `v`).
    ///
    /// Yields nothing if `v` is not a vertex of this graph.
    fn outgoing_edges<'s>(&'s self, v: &'s Self::Vertex) -> GEdgeSource<'s, Self>;

    /// Whether the edges of this graph are directed.
    fn is_directed(&self) -> bool;

    /// Whether this graph mixes directed and undirected edges.
    ///
    /// When this returns `true`,
    /// [`is_directed`](Graph::is_directed) is not meaningful.
    fn is_mixed(&self) -> bool;

    /// The number of vertices of this graph.
    fn vertex_count(&self) -> GResult<Self, usize> {
        let mut n = 0;
        for v in self.vertices() {
            v?;
            n += 1;
        }
        Ok(n)
    }

    /// The number of edges of this graph.
    fn edge_count(&self) -> GResult<Self, usize> {
        let mut n = 0;
        for e in self.edges() {
            e?;
            n += 1;
        }
        Ok(n)
    }

    /// Whether this graph contains two distinct edges
    /// with the same endpoints
    /// (regardless of orientation, for undirected graphs).
    fn has_parallel_edges(&self) -> GResult<Self, bool> {
        let directed = self.is_directed();
        let mut seen = HashSet::new();
        for e in self.edges() {
            let e = e?;
            let s = self.edge_source(&e)?;
            let t = self.edge_target(&e)?;
            let key = if !directed && t < s { (t, s) } else { (s, t) };
            if !seen.insert(key) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether every connected component of this graph is a tree.
    ///
    /// Edge orientation is ignored:
    /// a directed graph is a forest iff its underlying undirected graph
    /// is acyclic. A self-loop or a parallel edge makes a cycle.
    fn is_forest(&self) -> GResult<Self, bool> {
        fn root(parent: &mut [usize], mut x: usize) -> usize {
            while parent[x] != x {
                parent[x] = parent[parent[x]];
                x = parent[x];
            }
            x
        }
        let mut index = BTreeMap::new();
        for v in self.vertices() {
            let n = index.len();
            index.entry(v?).or_insert(n);
        }
        let mut parent: Vec<usize> = (0..index.len()).collect();
        for e in self.edges() {
            let e = e?;
            let s = index[&self.edge_source(&e)?];
            let t = index[&self.edge_target(&e)?];
            let (rs, rt) = (root(&mut parent, s), root(&mut parent, t));
            if rs == rt {
                return Ok(false);
            }
            parent[rs] = rt;
        }
        Ok(true)
    }
}
