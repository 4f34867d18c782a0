//! This crate is part of [Tinct],
//! a color-refinement and graph-isomorphism toolkit in Rust.
//!
//! It provides the color-refinement engine:
//! starting from an initial vertex [`Coloring`](coloring::Coloring)
//! (by default, the uniform one),
//! [`refine`] iteratively splits color classes by neighbor-color signature
//! until the coarsest stable coloring is reached.
//!
//! [Tinct]: https://github.com/tinct-rs/tinct
#![deny(missing_docs)]

pub mod coloring;
mod refine;
pub use refine::*;

use thiserror::Error;

/// Refinement error.
#[derive(Debug, Error)]
pub enum RefinementError<E: std::error::Error + Send + Sync + 'static> {
    /// The graph raised an error while being traversed
    #[error("Error from graph: {0}")]
    Graph(#[from] E),
}

#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
