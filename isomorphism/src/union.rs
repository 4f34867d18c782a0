//! I define the union adapter:
//! two input graphs presented as one graph
//! over a disjoint, tagged vertex space,
//! so that refining the union colors both graphs in one pass
//! and the resulting colors are directly comparable.

use std::convert::Infallible;
use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;

use tinct_api::graph::{GEdgeSource, GResult, GVertexSource, Graph};

use crate::InspectorError;

/// Which of the two input graphs a [`Tagged`] value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Origin {
    /// The first input graph.
    First,
    /// The second input graph.
    Second,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Origin::First => f.write_str("first"),
            Origin::Second => f.write_str("second"),
        }
    }
}

/// A vertex (or edge) of the union graph:
/// a value of one of the input graphs, tagged with its origin.
///
/// Equality, ordering and hashing are structural,
/// with every `First` ordered before every `Second`;
/// the tag is an explicit part of the identity,
/// so equal values from the two graphs never collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tagged<T1, T2> {
    /// A value of the first input graph.
    First(T1),
    /// A value of the second input graph.
    Second(T2),
}

impl<T1, T2> Tagged<T1, T2> {
    /// The graph this value came from.
    pub fn origin(&self) -> Origin {
        match self {
            Tagged::First(_) => Origin::First,
            Tagged::Second(_) => Origin::Second,
        }
    }
}

/// An indexed snapshot of one input graph:
/// sorted vertices, edge endpoint table,
/// and per-vertex incoming/outgoing edge ids.
#[derive(Clone, Debug)]
pub(crate) struct Side<V> {
    pub verts: Vec<V>,
    pub ends: Vec<(usize, usize)>,
    pub inn: Vec<Vec<usize>>,
    pub out: Vec<Vec<usize>>,
}

impl<V: Clone + Ord> Side<V> {
    fn new<G: Graph<Vertex = V>>(g: &G) -> Result<Self, G::Error> {
        let mut verts: Vec<V> = g.vertices().collect::<Result<_, _>>()?;
        verts.sort_unstable();
        verts.dedup();
        let index = |v: &V| verts.binary_search(v).expect("endpoint is a vertex");
        let directed = g.is_directed();
        let mut ends = Vec::new();
        let mut inn = vec![Vec::new(); verts.len()];
        let mut out = vec![Vec::new(); verts.len()];
        for e in g.edges() {
            let e = e?;
            let s = index(&g.edge_source(&e)?);
            let t = index(&g.edge_target(&e)?);
            let eid = ends.len();
            ends.push((s, t));
            if directed {
                out[s].push(eid);
                inn[t].push(eid);
            } else {
                out[s].push(eid);
                inn[s].push(eid);
                if t != s {
                    out[t].push(eid);
                    inn[t].push(eid);
                }
            }
        }
        Ok(Side {
            verts,
            ends,
            inn,
            out,
        })
    }

    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.verts.binary_search(v).ok()
    }
}

/// Two input graphs presented as one [`Graph`]
/// over [`Tagged`] vertices and edges.
///
/// Construction validates, failing fast:
/// both graphs must be simple (no parallel edges),
/// neither may mix edge directedness,
/// and the two must share the same directedness.
/// Both graphs are ingested once into internal snapshots,
/// so all later access is infallible
/// and independent of the source graphs.
#[derive(Clone, Debug)]
pub struct UnionGraph<V1, V2> {
    side1: Side<V1>,
    side2: Side<V2>,
    directed: bool,
}

impl<V1, V2> UnionGraph<V1, V2>
where
    V1: Clone + Eq + Ord + Hash + Debug,
    V2: Clone + Eq + Ord + Hash + Debug,
{
    /// Build the union of `g1` and `g2`, validating both.
    pub fn try_new<G1, G2>(
        g1: &G1,
        g2: &G2,
    ) -> Result<Self, InspectorError<G1::Error, G2::Error>>
    where
        G1: Graph<Vertex = V1>,
        G2: Graph<Vertex = V2>,
    {
        if g1.is_mixed() {
            return Err(InspectorError::MixedGraph(Origin::First));
        }
        if g2.is_mixed() {
            return Err(InspectorError::MixedGraph(Origin::Second));
        }
        if g1.is_directed() != g2.is_directed() {
            return Err(InspectorError::DirectednessMismatch);
        }
        if g1.has_parallel_edges().map_err(InspectorError::First)? {
            return Err(InspectorError::ParallelEdges(Origin::First));
        }
        if g2.has_parallel_edges().map_err(InspectorError::Second)? {
            return Err(InspectorError::ParallelEdges(Origin::Second));
        }
        let side1 = Side::new(g1).map_err(InspectorError::First)?;
        let side2 = Side::new(g2).map_err(InspectorError::Second)?;
        Ok(UnionGraph {
            side1,
            side2,
            directed: g1.is_directed(),
        })
    }

    pub(crate) fn side1(&self) -> &Side<V1> {
        &self.side1
    }

    pub(crate) fn side2(&self) -> &Side<V2> {
        &self.side2
    }
}

impl<V1, V2> Graph for UnionGraph<V1, V2>
where
    V1: Clone + Eq + Ord + Hash + Debug,
    V2: Clone + Eq + Ord + Hash + Debug,
{
    type Vertex = Tagged<V1, V2>;
    type Edge = Tagged<usize, usize>;
    type Error = Infallible;

    fn vertices(&self) -> GVertexSource<Self> {
        Box::new(
            (self.side1.verts.iter().cloned().map(Tagged::First))
                .chain(self.side2.verts.iter().cloned().map(Tagged::Second))
                .map(Ok),
        )
    }

    fn edges(&self) -> GEdgeSource<Self> {
        Box::new(
            (0..self.side1.ends.len())
                .map(Tagged::First)
                .chain((0..self.side2.ends.len()).map(Tagged::Second))
                .map(Ok),
        )
    }

    fn edge_source(&self, e: &Self::Edge) -> GResult<Self, Self::Vertex> {
        Ok(match e {
            Tagged::First(e) => Tagged::First(self.side1.verts[self.side1.ends[*e].0].clone()),
            Tagged::Second(e) => Tagged::Second(self.side2.verts[self.side2.ends[*e].0].clone()),
        })
    }

    fn edge_target(&self, e: &Self::Edge) -> GResult<Self, Self::Vertex> {
        Ok(match e {
            Tagged::First(e) => Tagged::First(self.side1.verts[self.side1.ends[*e].1].clone()),
            Tagged::Second(e) => Tagged::Second(self.side2.verts[self.side2.ends[*e].1].clone()),
        })
    }

    fn incoming_edges<'s>(&'s self, v: &'s Self::Vertex) -> GEdgeSource<'s, Self> {
        match v {
            Tagged::First(v) => match self.side1.index_of(v) {
                None => Box::new(std::iter::empty()),
                Some(i) => Box::new(self.side1.inn[i].iter().map(|&e| Ok(Tagged::First(e)))),
            },
            Tagged::Second(v) => match self.side2.index_of(v) {
                None => Box::new(std::iter::empty()),
                Some(i) => Box::new(self.side2.inn[i].iter().map(|&e| Ok(Tagged::Second(e)))),
            },
        }
    }

    fn outgoing_edges<'s>(&'s self, v: &'s Self::Vertex) -> GEdgeSource<'s, Self> {
        match v {
            Tagged::First(v) => match self.side1.index_of(v) {
                None => Box::new(std::iter::empty()),
                Some(i) => Box::new(self.side1.out[i].iter().map(|&e| Ok(Tagged::First(e)))),
            },
            Tagged::Second(v) => match self.side2.index_of(v) {
                None => Box::new(std::iter::empty()),
                Some(i) => Box::new(self.side2.out[i].iter().map(|&e| Ok(Tagged::Second(e)))),
            },
        }
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_mixed(&self) -> bool {
        false
    }

    fn vertex_count(&self) -> GResult<Self, usize> {
        Ok(self.side1.verts.len() + self.side2.verts.len())
    }

    fn edge_count(&self) -> GResult<Self, usize> {
        Ok(self.side1.ends.len() + self.side2.ends.len())
    }
}
