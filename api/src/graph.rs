//! A graph, for the purpose of this toolkit,
//! is a read-only collection of vertices and edges,
//! where every edge resolves to a source and a target vertex.
//!
//! This module provides the [reusable abstraction](Graph)
//! consumed by the refinement and isomorphism crates,
//! as well as one implementation for it ([`EdgeListGraph`]).
//!
//! Mutation is deliberately out of scope:
//! all algorithms built on this capability treat their input as frozen.

mod _traits;
pub use self::_traits::*;
mod _edge_list;
pub use self::_edge_list::*;
