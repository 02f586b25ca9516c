use crate::math::{Point3, PointKey};

/// An undirected polygon side, keyed by the exact values of its two endpoints.
///
/// Color is not part of the key: two faces meeting along the same segment
/// share the edge whatever their vertex colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    lo: PointKey,
    hi: PointKey,
}

impl Edge {
    /// Creates the edge between two positions, in either order.
    #[must_use]
    pub fn new(a: &Point3, b: &Point3) -> Self {
        Self::from_keys(PointKey::from_point(a), PointKey::from_point(b))
    }

    /// Creates the edge between two point keys, in either order.
    #[must_use]
    pub fn from_keys(a: PointKey, b: PointKey) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Both endpoint keys.
    #[must_use]
    pub fn endpoints(&self) -> [PointKey; 2] {
        [self.lo, self.hi]
    }

    /// Returns `true` if `key` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, key: &PointKey) -> bool {
        self.lo == *key || self.hi == *key
    }

    /// Returns `true` if the two edges have an endpoint in common.
    #[must_use]
    pub fn shares_endpoint(&self, other: &Self) -> bool {
        other.touches(&self.lo) || other.touches(&self.hi)
    }
}
