//! I define [`ColorRefinementInspector`],
//! the run-once decision procedure turning a joint refinement of two
//! graphs into a verdict:
//! not isomorphic, isomorphic with an explicit mapping,
//! or [`Undecidable`].

use std::cell::OnceCell;
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;
use tinct_api::graph::Graph;
use tinct_refinement::{refine, RefinementError};

use crate::compare::{canonical_classes, colorings_match};
use crate::forest::match_forests;
use crate::mapping::{IsomorphicMapping, VertexOrdering};
use crate::split::split;
use crate::union::UnionGraph;
use crate::{InspectorError, Undecidable};

/// Which branch of the decision certified a positive verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Certificate {
    /// Every color class of both refined colorings is a singleton.
    DiscreteColoring,
    /// Both graphs are forests with matching refined colorings.
    Forest,
}

/// The memoized outcome of one decision run.
#[derive(Clone, Debug)]
enum Verdict<V1, V2> {
    NonIsomorphic,
    Isomorphic {
        mapping: IsomorphicMapping<V1, V2>,
        certificate: Certificate,
    },
    Undecidable,
}

/// Decides whether two graphs are isomorphic
/// using the color-refinement heuristic.
///
/// All fallible access to the input graphs happens in
/// [`new`](ColorRefinementInspector::new):
/// the graphs are validated and ingested once,
/// and the inspector is independent of them afterwards.
/// The decision itself runs at most once per inspector,
/// on first query, and is memoized;
/// re-queries replay the cached outcome
/// (an [`Undecidable`] outcome re-raises on every query).
///
/// Strictly sequential use is assumed: the inspector is
/// single-threaded and holds no shared state across instances.
pub struct ColorRefinementInspector<V1, V2> {
    union: UnionGraph<V1, V2>,
    forests: bool,
    verdict: OnceCell<Verdict<V1, V2>>,
}

impl<V1, V2> ColorRefinementInspector<V1, V2>
where
    V1: Clone + Eq + Ord + Hash + Debug,
    V2: Clone + Eq + Ord + Hash + Debug,
{
    /// Build an inspector for `g1` and `g2`.
    ///
    /// Fails fast on invalid input:
    /// parallel edges in either graph,
    /// mixed edge directedness within a graph,
    /// or directedness mismatch between the two graphs.
    pub fn new<G1, G2>(g1: &G1, g2: &G2) -> Result<Self, InspectorError<G1::Error, G2::Error>>
    where
        G1: Graph<Vertex = V1>,
        G2: Graph<Vertex = V2>,
    {
        let forest1 = g1.is_forest().map_err(InspectorError::First)?;
        let forest2 = g2.is_forest().map_err(InspectorError::Second)?;
        let union = UnionGraph::try_new(g1, g2)?;
        Ok(ColorRefinementInspector {
            union,
            forests: forest1 && forest2,
            verdict: OnceCell::new(),
        })
    }

    /// Whether the two graphs are isomorphic.
    ///
    /// Runs the decision on first call and memoizes it;
    /// an inconclusive refinement raises [`Undecidable`]
    /// on this and every later call.
    pub fn isomorphism_exists(&self) -> Result<bool, Undecidable> {
        match self.verdict() {
            Verdict::NonIsomorphic => Ok(false),
            Verdict::Isomorphic { .. } => Ok(true),
            Verdict::Undecidable => Err(Undecidable),
        }
    }

    /// An iterator over the mappings found: one per positive verdict,
    /// none for a negative one (without raising).
    ///
    /// Runs the decision if it has not run yet;
    /// propagates [`Undecidable`].
    pub fn mappings(
        &self,
    ) -> Result<impl Iterator<Item = &IsomorphicMapping<V1, V2>>, Undecidable> {
        let found = match self.verdict() {
            Verdict::NonIsomorphic => None,
            Verdict::Isomorphic { mapping, .. } => Some(mapping),
            Verdict::Undecidable => return Err(Undecidable),
        };
        Ok(found.into_iter())
    }

    /// Whether the verdict was certified by a discrete coloring.
    ///
    /// Runs the decision if it has not run yet.
    pub fn is_coloring_discrete(&self) -> bool {
        matches!(
            self.verdict(),
            Verdict::Isomorphic {
                certificate: Certificate::DiscreteColoring,
                ..
            }
        )
    }

    /// Whether the verdict was certified by the forest branch.
    ///
    /// Runs the decision if it has not run yet.
    /// A pair certified by a discrete coloring reports `false` here
    /// even when both graphs happen to be forests:
    /// the discrete branch takes precedence.
    pub fn is_forest(&self) -> bool {
        matches!(
            self.verdict(),
            Verdict::Isomorphic {
                certificate: Certificate::Forest,
                ..
            }
        )
    }

    fn verdict(&self) -> &Verdict<V1, V2> {
        self.verdict.get_or_init(|| self.decide())
    }

    fn decide(&self) -> Verdict<V1, V2> {
        let (side1, side2) = (self.union.side1(), self.union.side2());
        if side1.verts.len() != side2.verts.len() || side1.ends.len() != side2.ends.len() {
            debug!("size mismatch, refinement not run");
            return Verdict::NonIsomorphic;
        }
        let union_coloring = match refine(&self.union) {
            Ok(c) => c,
            Err(RefinementError::Graph(never)) => match never {},
        };
        let (c1, c2) = split(&union_coloring);
        if c1.color_count() != c2.color_count() || c1.class_count() != c2.class_count() {
            debug!("refined colorings differ in color or class count");
            return Verdict::NonIsomorphic;
        }
        if !colorings_match(&c1, &c2) {
            debug!("refined colorings differ at some canonical rank");
            return Verdict::NonIsomorphic;
        }
        let ord1 = VertexOrdering::from_sorted(side1.verts.clone());
        let ord2 = VertexOrdering::from_sorted(side2.verts.clone());
        if c1.is_discrete() && c2.is_discrete() {
            debug!("certified by discrete coloring");
            let ranks1 = canonical_classes(&c1);
            let ranks2 = canonical_classes(&c2);
            let pairs: Vec<(usize, usize)> = ranks1
                .iter()
                .zip(&ranks2)
                .map(|((_, m1), (_, m2))| {
                    let i = ord1.index_of(&m1[0]).expect("class member is a vertex");
                    let j = ord2.index_of(&m2[0]).expect("class member is a vertex");
                    (i, j)
                })
                .collect();
            Verdict::Isomorphic {
                mapping: IsomorphicMapping::from_pairs(ord1, ord2, &pairs),
                certificate: Certificate::DiscreteColoring,
            }
        } else if self.forests {
            debug!("certified by forest structure");
            let pairs = match_forests(side1, side2, self.union.is_directed());
            Verdict::Isomorphic {
                mapping: IsomorphicMapping::from_pairs(ord1, ord2, &pairs),
                certificate: Certificate::Forest,
            }
        } else {
            debug!("coloring too coarse to certify either outcome");
            Verdict::Undecidable
        }
    }
}
