//! A "prelude" module re-exporting the most commonly used items of this crate.

pub use crate::graph::{EdgeListGraph, Graph};
