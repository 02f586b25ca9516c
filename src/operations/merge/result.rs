//! Result types for neighbour merging.

// Polygon counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]

use crate::geometry::Polygon;

/// Result of a merge traversal.
#[derive(Debug, Clone)]
pub struct MergeResult {
    /// The decimated polygons.
    pub polygons: Vec<Polygon>,

    /// Number of polygons handed in.
    pub original_polygons: usize,

    /// Number of polygons handed out.
    pub final_polygons: usize,

    /// Number of pairwise merges performed.
    pub merges_performed: usize,

    /// Number of chains cut short by a non-manifold edge.
    pub invalid_neighbours: usize,
}

impl MergeResult {
    /// Get the reduction ratio (final / original).
    #[must_use]
    pub fn reduction_ratio(&self) -> f64 {
        if self.original_polygons == 0 {
            1.0
        } else {
            self.final_polygons as f64 / self.original_polygons as f64
        }
    }

    /// Check if any merge occurred.
    #[must_use]
    pub const fn was_merged(&self) -> bool {
        self.merges_performed > 0
    }
}

impl std::fmt::Display for MergeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Merge: {} → {} polygons ({} merges, {} invalid neighbours)",
            self.original_polygons,
            self.final_polygons,
            self.merges_performed,
            self.invalid_neighbours
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(original: usize, final_polygons: usize, merges: usize) -> MergeResult {
        MergeResult {
            polygons: Vec::new(),
            original_polygons: original,
            final_polygons,
            merges_performed: merges,
            invalid_neighbours: 0,
        }
    }

    #[test]
    fn test_reduction_ratio() {
        assert!((result(10, 4, 6).reduction_ratio() - 0.4).abs() < 1e-12);
        assert!((result(0, 0, 0).reduction_ratio() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_was_merged() {
        assert!(!result(5, 5, 0).was_merged());
        assert!(result(5, 2, 3).was_merged());
    }

    #[test]
    fn test_display() {
        let display = format!("{}", result(5, 2, 3));
        assert!(display.contains("5 → 2"));
        assert!(display.contains("3 merges"));
    }
}
