use serde::Serialize;
use tracing::info;

use crate::{
    graph::{GraphStore, NodePos},
    traversal::Snapshot,
};

/// Everything a renderer needs to redraw from scratch: the full node list,
/// every adjacency pair (for edge lines), and the current visited set (for
/// highlight coloring). The renderer holds no traversal state of its own.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub nodes: Vec<NodePos>,
    pub edges: Vec<(NodePos, NodePos)>,
    pub current: NodePos,
    pub visited: Vec<NodePos>,
}

impl Frame {
    /// Assembles a frame from the graph and one traversal snapshot. The
    /// visited list is sorted so equal states serialize identically.
    pub fn compose(graph: &GraphStore, snapshot: &Snapshot) -> Self {
        let mut visited: Vec<NodePos> = snapshot.visited.iter().copied().collect();
        visited.sort_unstable();

        Frame {
            nodes: graph.nodes().to_vec(),
            edges: graph.edges().collect(),
            current: snapshot.current,
            visited,
        }
    }
}

/// Where frames go. The real GUI renderer lives outside this crate; the
/// shipped binary uses [`TerminalSink`], tests use [`RecordingSink`].
pub trait RenderSink {
    fn render(&mut self, frame: &Frame);
}

/// Logs each frame, optionally as a machine-readable JSON line on stdout.
#[derive(Debug, Default)]
pub struct TerminalSink {
    pub json: bool,
}

impl RenderSink for TerminalSink {
    fn render(&mut self, frame: &Frame) {
        if self.json {
            match serde_json::to_string(frame) {
                Ok(line) => println!("{line}"),
                Err(err) => info!(%err, "frame serialization failed"),
            }
        }
        info!(
            current = ?frame.current,
            visited = frame.visited.len(),
            total = frame.nodes.len(),
            "frame"
        );
    }
}

/// Collects frames for assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<Frame>,
}

impl RenderSink for RecordingSink {
    fn render(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;

    fn pos(x: i32, y: i32) -> NodePos {
        NodePos::new(x, y)
    }

    fn two_node_graph() -> GraphStore {
        let mut store = GraphStore::new();
        store.add_node(pos(0, 0));
        store.add_node(pos(10, 0));
        store.add_edge(pos(0, 0), pos(10, 0)).unwrap();
        store
    }

    #[test]
    fn compose_carries_the_whole_scene() {
        let store = two_node_graph();
        let snapshot = Snapshot {
            current: pos(0, 0),
            visited: HashSet::from_iter([pos(0, 0)]),
        };

        let frame = Frame::compose(&store, &snapshot);
        assert_eq!(frame.nodes, vec![pos(0, 0), pos(10, 0)]);
        assert_eq!(frame.edges.len(), 2);
        assert_eq!(frame.current, pos(0, 0));
        assert_eq!(frame.visited, vec![pos(0, 0)]);
    }

    #[test]
    fn compose_sorts_visited_for_stable_output() {
        let store = two_node_graph();
        let snapshot = Snapshot {
            current: pos(10, 0),
            visited: HashSet::from_iter([pos(10, 0), pos(0, 0)]),
        };

        let frame = Frame::compose(&store, &snapshot);
        assert_eq!(frame.visited, vec![pos(0, 0), pos(10, 0)]);
    }

    #[test]
    fn frame_serializes_to_json() {
        let store = two_node_graph();
        let snapshot = Snapshot {
            current: pos(0, 0),
            visited: HashSet::from_iter([pos(0, 0)]),
        };

        let frame = Frame::compose(&store, &snapshot);
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"current\":{\"x\":0,\"y\":0}"));
        assert!(json.contains("\"visited\""));
    }

    #[test]
    fn recording_sink_keeps_frames_in_order() {
        let store = two_node_graph();
        let mut sink = RecordingSink::default();

        for node in [pos(0, 0), pos(10, 0)] {
            let snapshot = Snapshot {
                current: node,
                visited: HashSet::from_iter([node]),
            };
            sink.render(&Frame::compose(&store, &snapshot));
        }

        assert_eq!(sink.frames.len(), 2);
        assert_eq!(sink.frames[0].current, pos(0, 0));
        assert_eq!(sink.frames[1].current, pos(10, 0));
    }
}
