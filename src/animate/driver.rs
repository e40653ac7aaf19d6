use std::time::Duration;

use hashbrown::HashSet;
use tracing::debug;

use crate::{
    animate::{Frame, Pacer, RenderSink},
    error::GraphError,
    graph::{GraphStore, NodePos},
    statistics::Stats,
    traversal::{TraversalMode, WalkRun},
};

/// Delay between traversal steps; half a second reads well at demo scale.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(500);

/// Drains a walk at a fixed pace, issuing exactly one render request per
/// snapshot, strictly in engine order with no skipping or batching.
///
/// The driver blocks the single control thread between steps (see
/// [`Pacer`]), so a run is not interruptible: it drains to completion before
/// control returns to the caller. If the engine cannot even start
/// ([`GraphError::InvalidStart`]), no step and no render happens and the
/// previously visible visited state stays untouched.
pub struct AnimationDriver<S: RenderSink, P: Pacer> {
    sink: S,
    pacer: P,
    delay: Duration,
    stats: Stats,
}

impl<S: RenderSink, P: Pacer> AnimationDriver<S, P> {
    pub fn new(sink: S, pacer: P, delay: Duration) -> Self {
        AnimationDriver {
            sink,
            pacer,
            delay,
            stats: Stats::new(),
        }
    }

    /// Starts a traversal and animates it to completion.
    ///
    /// Returns the final visited set, which stays the externally visible
    /// state until the next run or a reset.
    ///
    /// # Errors
    /// [`GraphError::InvalidStart`] if `start` is not in `graph`; zero steps
    /// are performed in that case.
    pub fn run(
        &mut self,
        graph: &GraphStore,
        start: NodePos,
        mode: TraversalMode,
    ) -> Result<HashSet<NodePos>, GraphError> {
        let walk = WalkRun::start(graph, start, mode)?;
        debug!(?start, %mode, "traversal started");
        self.stats.bump_traversals();

        // A started walk emits at least its start node, and once the frontier
        // runs dry the last snapshot's set is the complete reachable set.
        let mut final_visited = HashSet::new();
        for snapshot in walk {
            // Pause first, then draw: the previous frame stays on screen
            // for the full inter-step delay.
            self.pacer.pause(self.delay);
            self.sink.render(&Frame::compose(graph, &snapshot));
            self.stats.bump_snapshots();
            self.stats.bump_edges(graph.neighbors(&snapshot.current).len());
            final_visited = snapshot.visited;
        }

        debug!(reached = final_visited.len(), "traversal finished");
        Ok(final_visited)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
