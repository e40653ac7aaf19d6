use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraversalMode {
    Bfs,
    Dfs,
}

impl std::fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraversalMode::Bfs => write!(f, "bfs"),
            TraversalMode::Dfs => write!(f, "dfs"),
        }
    }
}
