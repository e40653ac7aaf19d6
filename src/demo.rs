//! Seeded demo graph generation for the shipped binary.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

use crate::graph::{GraphStore, NodePos};

/// Canvas bounds the scatter stays inside, sized like the visualizer window.
pub const CANVAS_WIDTH: i32 = 800;
pub const CANVAS_HEIGHT: i32 = 600;

/// Scatters `node_count` random nodes and connects `edge_count` random pairs.
///
/// Deterministic under a fixed `seed`. Position collisions are soaked up by
/// the store's duplicate no-op, so the final node count can come in slightly
/// under `node_count` on crowded canvases.
pub fn scatter(node_count: usize, edge_count: usize, seed: u64) -> GraphStore {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut store = GraphStore::new();

    for _ in 0..node_count {
        let pos = NodePos::new(
            rng.random_range(0..CANVAS_WIDTH),
            rng.random_range(0..CANVAS_HEIGHT),
        );
        store.add_node(pos);
    }

    let nodes: Vec<NodePos> = store.nodes().to_vec();
    if nodes.len() > 1 {
        for _ in 0..edge_count {
            let a = nodes[rng.random_range(0..nodes.len())];
            let b = nodes[rng.random_range(0..nodes.len())];
            store
                .add_edge(a, b)
                .expect("endpoints taken from the store");
        }
    }

    info!(
        nodes = store.len(),
        requested = node_count,
        edges = edge_count,
        seed,
        "demo graph scattered"
    );
    store
}
