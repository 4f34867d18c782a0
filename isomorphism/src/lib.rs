//! This crate is part of [Tinct],
//! a color-refinement and graph-isomorphism toolkit in Rust.
//!
//! It decides whether two graphs are isomorphic
//! with the color-refinement heuristic:
//! both graphs are refined jointly through a [union adapter](UnionGraph),
//! the resulting coloring is [split](split()) back into per-graph colorings,
//! and a [comparator](colorings_match) plus the
//! [`ColorRefinementInspector`] turn the outcome into a verdict:
//! not isomorphic, isomorphic with an explicit
//! [vertex bijection](IsomorphicMapping),
//! or the declared [`Undecidable`] outcome when the coloring is too
//! coarse to certify either conclusion.
//!
//! [Tinct]: https://github.com/tinct-rs/tinct
#![deny(missing_docs)]

mod compare;
mod forest;
mod inspector;
mod mapping;
mod split;
mod union;

pub use compare::{canonical_classes, colorings_match};
pub use inspector::{Certificate, ColorRefinementInspector};
pub use mapping::{IsomorphicMapping, VertexOrdering};
pub use split::split;
pub use union::{Origin, Tagged, UnionGraph};

use thiserror::Error;

/// Error raised when building a [`ColorRefinementInspector`]
/// (or its [`UnionGraph`]); fatal to the construction.
#[derive(Debug, Error)]
pub enum InspectorError<E1, E2>
where
    E1: std::error::Error + Send + Sync + 'static,
    E2: std::error::Error + Send + Sync + 'static,
{
    /// The first graph raised an error while being traversed
    #[error("Error from first graph: {0}")]
    First(#[source] E1),
    /// The second graph raised an error while being traversed
    #[error("Error from second graph: {0}")]
    Second(#[source] E2),
    /// One of the graphs contains parallel edges
    #[error("Parallel edges in {0} graph: only simple graphs are supported")]
    ParallelEdges(Origin),
    /// One of the graphs mixes directed and undirected edges
    #[error("Mixed edge directedness in {0} graph")]
    MixedGraph(Origin),
    /// The two graphs do not share the same directedness
    #[error("Directedness mismatch between the two graphs")]
    DirectednessMismatch,
}

/// The declared inconclusive outcome of the decision:
/// refinement converged and the colorings matched,
/// but neither discreteness nor forest structure could certify
/// isomorphism.
///
/// This is a defined result, not a bug:
/// callers must escalate to an exact algorithm,
/// never read it as true or false.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("Color refinement cannot certify whether the graphs are isomorphic")]
pub struct Undecidable;


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
