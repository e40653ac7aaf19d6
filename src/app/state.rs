use hashbrown::HashSet;
use tracing::{debug, info};

use crate::{
    animate::{AnimationDriver, Pacer, RenderSink},
    app::{Command, InteractionMode},
    error::GraphError,
    graph::{GraphStore, NodePos},
};

/// Hit-test radius in pixels, matching the drawn node circles.
pub const NODE_RADIUS: i32 = 20;

/// The one mutable state of the tool, owned by the control loop and passed
/// explicitly to command handlers instead of living in a process-wide
/// singleton.
///
/// Everything runs on a single cooperative thread: a traversal started by
/// [`AppState::apply`] drains to completion inside the call, so no command
/// can ever observe (or corrupt) a half-finished run.
#[derive(Debug)]
pub struct AppState {
    store: GraphStore,
    mode: InteractionMode,
    pending: Option<NodePos>,
    visited_view: HashSet<NodePos>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            store: GraphStore::new(),
            // the tool opens in node-placement mode
            mode: InteractionMode::AddNode,
            pending: None,
            visited_view: HashSet::new(),
        }
    }

    /// Applies one command, animating through `driver` when the command
    /// starts a traversal.
    ///
    /// Misses (clicks that hit no node in a hit-tested mode) are deliberate
    /// no-ops, not errors.
    ///
    /// # Errors
    /// Propagates [`GraphError`] from the store or the engine. With a sane
    /// input layer these only fire on programming misuse; the graph and the
    /// visited view are left unchanged either way.
    pub fn apply<S: RenderSink, P: Pacer>(
        &mut self,
        command: Command,
        driver: &mut AnimationDriver<S, P>,
    ) -> Result<(), GraphError> {
        match command {
            Command::SetMode(mode) => {
                debug!(?mode, "interaction mode set");
                self.mode = mode;
                Ok(())
            }
            Command::PointerClick(pos) => self.click(pos, driver),
            Command::Reset => {
                self.store.reset();
                self.pending = None;
                self.visited_view.clear();
                info!("application reset");
                Ok(())
            }
        }
    }

    fn click<S: RenderSink, P: Pacer>(
        &mut self,
        pos: NodePos,
        driver: &mut AnimationDriver<S, P>,
    ) -> Result<(), GraphError> {
        match self.mode {
            // No hit test: every click places a node.
            InteractionMode::AddNode => {
                self.store.add_node(pos);
                Ok(())
            }

            InteractionMode::AddEdge => {
                let Some(hit) = self.store.node_at(pos, NODE_RADIUS) else {
                    // A miss does not clear the pending selection.
                    return Ok(());
                };
                match self.pending.take() {
                    None => {
                        debug!(?hit, "edge endpoint selected");
                        self.pending = Some(hit);
                        Ok(())
                    }
                    Some(first) => self.store.add_edge(first, hit),
                }
            }

            InteractionMode::Traverse(mode) => {
                let Some(hit) = self.store.node_at(pos, NODE_RADIUS) else {
                    return Ok(());
                };
                // Drains the whole animation before returning; the visited
                // view only changes once the run completes.
                self.visited_view = driver.run(&self.store, hit, mode)?;
                Ok(())
            }
        }
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn pending(&self) -> Option<NodePos> {
        self.pending
    }

    /// The visited set of the last completed traversal, retained read-only
    /// for final rendering until the next run or a reset.
    pub fn visited_view(&self) -> &HashSet<NodePos> {
        &self.visited_view
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}
