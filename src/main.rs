use std::time::Duration;

use clap::Parser;
use ripple::{
    animate::{AnimationDriver, SleepPacer, TerminalSink},
    demo,
    statistics::Stats,
    traversal::TraversalMode,
};
use tracing_subscriber::EnvFilter;

/// Graph traversal visualizer core, demo runner.
///
/// The GUI renderer and input layer live outside this crate; this binary
/// scatters a seeded demo graph and animates traversals over it through the
/// terminal render sink.
#[derive(Parser, Debug)]
#[command(name = "ripple")]
#[command(about = "Animated BFS/DFS over a scattered demo graph", long_about = None)]
struct Args {
    /// Number of nodes to scatter
    #[arg(short, long, default_value_t = 12)]
    nodes: usize,

    /// Number of random edges to connect
    #[arg(short, long, default_value_t = 16)]
    edges: usize,

    /// Seed for the scatter, fixed seed gives a fixed graph
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Delay between animation steps, in milliseconds
    #[arg(short, long, default_value_t = 500)]
    delay_ms: u64,

    /// Traversal modes to animate (comma-separated list, e.g., "bfs,dfs")
    #[arg(short, long, value_delimiter = ',', default_values_t = [TraversalMode::Bfs, TraversalMode::Dfs])]
    modes: Vec<TraversalMode>,

    /// Emit each frame as a JSON line on stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let graph = demo::scatter(args.nodes, args.edges, args.seed);
    println!("Demo graph scattered with {} nodes", graph.len());

    let Some(&start) = graph.nodes().first() else {
        println!("Nothing to traverse, scatter produced an empty graph");
        return;
    };

    let mut combined_stats = Stats::new();
    for &mode in &args.modes {
        println!("\n==========");
        println!("Running {mode} from ({}, {})", start.x, start.y);
        println!("==========");

        let start_time = std::time::Instant::now();
        let mut driver = AnimationDriver::new(
            TerminalSink { json: args.json },
            SleepPacer,
            Duration::from_millis(args.delay_ms),
        );

        match driver.run(&graph, start, mode) {
            Ok(visited) => {
                let elapsed = start_time.elapsed();
                println!(
                    "Reached {}/{} nodes in {:.2}s",
                    visited.len(),
                    graph.len(),
                    elapsed.as_secs_f64()
                );
            }
            Err(err) => println!("Traversal failed: {err}"),
        }

        combined_stats = combined_stats.merge(driver.stats());
    }

    println!("\n==========");
    println!(
        "All runs completed: {} traversals, {} frames, {} adjacency entries examined",
        combined_stats.get_traversals(),
        combined_stats.get_snapshots(),
        combined_stats.get_edges_examined()
    );
    println!("==========");
}
