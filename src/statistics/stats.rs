/// Counters accumulated across animation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    traversals: usize,
    snapshots: usize,
    edges_examined: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            traversals: 0,
            snapshots: 0,
            edges_examined: 0,
        }
    }

    /// Record that a new traversal run has started
    pub fn bump_traversals(&mut self) {
        self.traversals += 1
    }

    /// Record that one snapshot was rendered
    pub fn bump_snapshots(&mut self) {
        self.snapshots += 1
    }

    /// Record that a bunch of adjacency entries were examined while expanding
    /// a node
    pub fn bump_edges(&mut self, edge_amount: usize) {
        self.edges_examined += edge_amount
    }

    pub fn get_traversals(&self) -> usize {
        self.traversals
    }

    pub fn get_snapshots(&self) -> usize {
        self.snapshots
    }

    pub fn get_edges_examined(&self) -> usize {
        self.edges_examined
    }

    pub fn merge(&self, other: &Stats) -> Stats {
        Stats {
            traversals: self.traversals + other.traversals,
            snapshots: self.snapshots + other.snapshots,
            edges_examined: self.edges_examined + other.edges_examined,
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_initialized_to_zero() {
        let stats = Stats::new();
        assert_eq!(stats.get_traversals(), 0);
        assert_eq!(stats.get_snapshots(), 0);
        assert_eq!(stats.get_edges_examined(), 0);
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(Stats::default(), Stats::new());
    }

    #[test]
    fn test_bumps_accumulate() {
        let mut stats = Stats::new();
        stats.bump_traversals();
        stats.bump_snapshots();
        stats.bump_snapshots();
        stats.bump_edges(5);
        stats.bump_edges(3);

        assert_eq!(stats.get_traversals(), 1);
        assert_eq!(stats.get_snapshots(), 2);
        assert_eq!(stats.get_edges_examined(), 8);
    }

    #[test]
    fn test_bump_edges_with_zero() {
        let mut stats = Stats::new();
        stats.bump_edges(0);
        assert_eq!(stats.get_edges_examined(), 0);
    }

    #[test]
    fn test_merge_sums_fieldwise() {
        let mut a = Stats::new();
        a.bump_traversals();
        a.bump_snapshots();
        a.bump_edges(4);

        let mut b = Stats::new();
        b.bump_traversals();
        b.bump_traversals();
        b.bump_edges(6);

        let merged = a.merge(&b);
        assert_eq!(merged.get_traversals(), 3);
        assert_eq!(merged.get_snapshots(), 1);
        assert_eq!(merged.get_edges_examined(), 10);
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let mut a = Stats::new();
        a.bump_snapshots();
        a.bump_edges(7);

        assert_eq!(a.merge(&Stats::new()), a);
    }
}
