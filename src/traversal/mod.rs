//! Traversal engine: lazy BFS/DFS walks over an immutable graph borrow.
//!
//! A [`Walk`] yields one [`Snapshot`] per frontier pop, the cumulative
//! visited set as of processing that node, which is exactly what the
//! animation driver turns into frames.

mod frontier;
mod mode;
mod walk;

pub use frontier::*;
pub use mode::*;
pub use walk::*;
