//! The mutable graph owned by the control loop.
//!
//! Nodes are identified by their placement coordinate ([`NodePos`]), edges are
//! symmetric adjacency entries, and hit-testing resolves a pointer position to
//! the earliest-inserted node within radius.

mod position;
mod store;

pub use position::*;
pub use store::*;
