use thiserror::Error;

use crate::graph::NodePos;

/// Failures the graph core can report to its caller.
///
/// Both variants are local, synchronous failures: the graph is left unmodified
/// and no animation step happens. In normal interactive operation the input
/// layer only dispatches hit-tested requests, so reaching these paths means
/// the caller sent a node it never looked up.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum GraphError {
    #[error("node ({},{}) is not present in the graph", .0.x, .0.y)]
    MissingNode(NodePos),

    #[error("traversal start ({},{}) is not present in the graph", .0.x, .0.y)]
    InvalidStart(NodePos),
}
