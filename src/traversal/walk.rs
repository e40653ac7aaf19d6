use hashbrown::HashSet;
use tracing::trace;

use crate::{
    error::GraphError,
    graph::{GraphStore, NodePos},
    traversal::{FifoFrontier, Frontier, LifoFrontier, TraversalMode},
};

/// The visited set at one discrete traversal step.
///
/// `current` is the node the step just processed; `visited` is the cumulative
/// set as of that moment, cloned before the step expands any neighbors so the
/// frame shows discovery one step at a time.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub current: NodePos,
    pub visited: HashSet<NodePos>,
}

impl Snapshot {
    pub fn contains(&self, node: &NodePos) -> bool {
        self.visited.contains(node)
    }
}

/// One in-flight traversal over an immutable graph borrow.
///
/// Lazy, finite and non-restartable: each [`Iterator::next`] pops the frontier
/// once, emits a [`Snapshot`], and eagerly marks unvisited neighbors before
/// pushing them. Marking at push time (not pop time) is the single mechanism
/// that keeps cyclic graphs from re-queuing a node, and it is applied
/// identically under both frontier disciplines.
///
/// Borrowing the graph shared means nothing can mutate it while a walk is
/// alive; the control loop drains a walk fully before touching the store.
#[derive(Debug)]
pub struct Walk<'g, F: Frontier> {
    graph: &'g GraphStore,
    frontier: F,
    visited: HashSet<NodePos>,
}

impl<'g, F: Frontier> Walk<'g, F> {
    /// Seeds the frontier and the visited set with `start`.
    ///
    /// # Errors
    /// [`GraphError::InvalidStart`] if `start` is not in the graph.
    pub fn new(graph: &'g GraphStore, start: NodePos) -> Result<Self, GraphError> {
        if !graph.contains(&start) {
            return Err(GraphError::InvalidStart(start));
        }

        let mut frontier = F::default();
        frontier.push(start);
        let mut visited = HashSet::new();
        visited.insert(start);

        Ok(Walk {
            graph,
            frontier,
            visited,
        })
    }
}

impl<F: Frontier> Iterator for Walk<'_, F> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        let current = self.frontier.pop()?;

        // Frame state first, then discover: the emitted set must not yet
        // include the neighbors this step is about to mark.
        let snapshot = Snapshot {
            current,
            visited: self.visited.clone(),
        };

        for &neighbor in self.graph.neighbors(&current) {
            if self.visited.insert(neighbor) {
                self.frontier.push(neighbor);
            }
        }

        trace!(?current, visited = self.visited.len(), "traversal step");
        Some(snapshot)
    }
}

/// A mode-selected walk, so callers can hold BFS and DFS runs behind one type.
#[derive(Debug)]
pub enum WalkRun<'g> {
    Bfs(Walk<'g, FifoFrontier>),
    Dfs(Walk<'g, LifoFrontier>),
}

impl<'g> WalkRun<'g> {
    /// Starts a traversal of `graph` from `start` in the given mode.
    ///
    /// # Errors
    /// [`GraphError::InvalidStart`] if `start` is not in the graph.
    pub fn start(
        graph: &'g GraphStore,
        start: NodePos,
        mode: TraversalMode,
    ) -> Result<Self, GraphError> {
        match mode {
            TraversalMode::Bfs => Walk::new(graph, start).map(WalkRun::Bfs),
            TraversalMode::Dfs => Walk::new(graph, start).map(WalkRun::Dfs),
        }
    }
}

impl Iterator for WalkRun<'_> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        match self {
            WalkRun::Bfs(walk) => walk.next(),
            WalkRun::Dfs(walk) => walk.next(),
        }
    }
}
