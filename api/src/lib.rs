//! This crate is part of [Tinct],
//! a color-refinement and graph-isomorphism toolkit in Rust.
//!
//! It defines the minimal read-only graph capability
//! consumed by the other Tinct crates:
//! the [`Graph`](graph::Graph) trait,
//! and [`EdgeListGraph`](graph::EdgeListGraph),
//! an immutable implementation of it.
//!
//! [Tinct]: https://github.com/tinct-rs/tinct
#![deny(missing_docs)]

pub mod graph;
pub mod prelude;
