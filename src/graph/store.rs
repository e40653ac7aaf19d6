use hashbrown::HashMap;
use tracing::debug;

use crate::{error::GraphError, graph::NodePos};

/// The undirected graph the user builds with clicks.
///
/// # Invariants
/// - `nodes` holds insertion order and never contains a position twice.
/// - Every position in `nodes` has an entry in `adjacency` (possibly empty),
///   created at insert time, before any edge can reference it.
/// - Adjacency is symmetric: if `b` appears among `a`'s neighbors then `a`
///   appears among `b`'s.
///
/// Neighbor lists keep edge insertion order, which is what makes traversal
/// order reproducible. Duplicate edges are appended verbatim and self-loops
/// pass through; the traversal's visited-set guard makes both harmless.
#[derive(Debug, Default)]
pub struct GraphStore {
    nodes: Vec<NodePos>,
    adjacency: HashMap<NodePos, Vec<NodePos>>,
}

impl GraphStore {
    pub fn new() -> Self {
        GraphStore {
            nodes: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Appends a node at `pos` with an empty neighbor list.
    ///
    /// Inserting at an already-occupied position is a no-op: identity is by
    /// coordinate, so the first insert wins and existing adjacency is never
    /// clobbered.
    pub fn add_node(&mut self, pos: NodePos) {
        if self.adjacency.contains_key(&pos) {
            debug!(x = pos.x, y = pos.y, "ignoring duplicate node position");
            return;
        }
        self.nodes.push(pos);
        self.adjacency.insert(pos, Vec::new());
        debug!(x = pos.x, y = pos.y, total = self.nodes.len(), "node added");
    }

    /// Registers `a` and `b` as neighbors of each other.
    ///
    /// # Errors
    /// [`GraphError::MissingNode`] if either endpoint has not been added yet;
    /// the graph is left unmodified in that case.
    pub fn add_edge(&mut self, a: NodePos, b: NodePos) -> Result<(), GraphError> {
        if !self.adjacency.contains_key(&a) {
            return Err(GraphError::MissingNode(a));
        }
        if !self.adjacency.contains_key(&b) {
            return Err(GraphError::MissingNode(b));
        }

        // both checked above, so or_default never actually inserts
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
        debug!(?a, ?b, "edge added");
        Ok(())
    }

    /// Resolves a pointer position to a node: the first node in insertion
    /// order whose distance to `pos` is at most `radius`. Earliest-inserted
    /// wins when circles overlap.
    pub fn node_at(&self, pos: NodePos, radius: i32) -> Option<NodePos> {
        self.nodes.iter().copied().find(|n| n.within(&pos, radius))
    }

    pub fn contains(&self, pos: &NodePos) -> bool {
        self.adjacency.contains_key(pos)
    }

    /// Neighbors of `pos` in edge insertion order. Empty for unknown nodes;
    /// existence is the caller's concern (see [`GraphStore::contains`]).
    pub fn neighbors(&self, pos: &NodePos) -> &[NodePos] {
        self.adjacency.get(pos).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[NodePos] {
        &self.nodes
    }

    /// Every adjacency entry as a directed pair, both directions included,
    /// matching how the renderer draws edge lines (once per entry).
    pub fn edges(&self) -> impl Iterator<Item = (NodePos, NodePos)> + '_ {
        self.nodes.iter().flat_map(move |&n| {
            self.neighbors(&n).iter().map(move |&m| (n, m))
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Discards all nodes and edges. Idempotent.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.adjacency.clear();
        debug!("graph reset");
    }
}
