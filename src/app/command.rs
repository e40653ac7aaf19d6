use crate::{graph::NodePos, traversal::TraversalMode};

/// What a pointer click means right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    AddNode,
    AddEdge,
    Traverse(TraversalMode),
}

/// High-level commands from the input layer, already translated from raw
/// pointer/key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetMode(InteractionMode),
    PointerClick(NodePos),
    Reset,
}
