use serde::Serialize;

/// A node's placement on the canvas, and also its identity.
///
/// Two nodes are the same entity iff their coordinates are equal; there is no
/// separate node id. Coordinates are pixel positions, so plain `i32` is plenty
/// and keeps hit-testing in exact integer math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodePos {
    pub x: i32,
    pub y: i32,
}

impl NodePos {
    pub fn new(x: i32, y: i32) -> Self {
        NodePos { x, y }
    }

    /// Squared Euclidean distance to `other`, widened so canvas-scale
    /// coordinates never overflow the multiply.
    pub fn dist_sq(&self, other: &NodePos) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// Whether `other` falls within `radius` of this position (inclusive).
    ///
    /// Compares squared distances so no float ever enters the hit test.
    pub fn within(&self, other: &NodePos, radius: i32) -> bool {
        self.dist_sq(other) <= i64::from(radius) * i64::from(radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dist_sq_of_identical_positions_is_zero() {
        let p = NodePos::new(100, 100);
        assert_eq!(p.dist_sq(&p), 0);
    }

    #[test]
    fn dist_sq_matches_pythagoras() {
        let a = NodePos::new(0, 0);
        let b = NodePos::new(3, 4);
        assert_eq!(a.dist_sq(&b), 25);
        assert_eq!(b.dist_sq(&a), 25);
    }

    #[test]
    fn within_is_inclusive_at_the_boundary() {
        let a = NodePos::new(0, 0);
        let b = NodePos::new(3, 4);
        assert!(a.within(&b, 5));
        assert!(!a.within(&b, 4));
    }

    #[test]
    fn within_handles_distant_coordinates() {
        let a = NodePos::new(-1_000_000, -1_000_000);
        let b = NodePos::new(1_000_000, 1_000_000);
        // dist_sq is way past i32 but must not overflow the widened math.
        assert_eq!(a.dist_sq(&b), 8_000_000_000_000);
        assert!(!a.within(&b, 1_000));
    }

    #[test]
    fn value_identity_by_coordinates() {
        assert_eq!(NodePos::new(7, 9), NodePos::new(7, 9));
        assert_ne!(NodePos::new(7, 9), NodePos::new(9, 7));
    }
}
