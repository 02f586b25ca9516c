//! Hidden-surface filtering.
//!
//! Faces extracted cell by cell include the walls between touching cells
//! twice, back to back. Those pairs are invisible and are removed before
//! merging. An optional second phase removes faces of a coarse cell that are
//! exactly covered by the four faces of a finer neighbouring level.

mod additive;
mod exact;

use tracing::info;

use crate::error::{ParameterError, Result};
use crate::geometry::Polygon;

/// Default bounding-box margin of the additive phase.
pub const DEFAULT_ADDITIVE_MARGIN: f64 = 0.01;

/// Removes faces hidden by coincident faces.
pub struct FilterHiddenPolygons {
    additive: bool,
    margin: f64,
}

impl FilterHiddenPolygons {
    /// Creates a new `FilterHiddenPolygons` operation. `additive` enables the
    /// four-covers-one phase.
    #[must_use]
    pub fn new(additive: bool) -> Self {
        Self {
            additive,
            margin: DEFAULT_ADDITIVE_MARGIN,
        }
    }

    /// Sets the additive-phase bounding-box margin, as a fraction of the
    /// covered face's largest extent.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Executes the filter, returning the visible polygons in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if the margin is negative or not finite.
    pub fn execute(&self, polygons: &[Polygon]) -> Result<FilterResult> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ParameterError::InvalidParameters(format!(
                "additive margin must be a non-negative fraction, got {}",
                self.margin
            ))
            .into());
        }

        let exact = exact::remove_exact_duplicates(polygons.to_vec());
        let (kept, additive_groups_removed) = if self.additive {
            let outcome = additive::remove_additive_neighbourhoods(exact.kept, self.margin);
            (outcome.kept, outcome.groups_removed)
        } else {
            (exact.kept, 0)
        };

        let result = FilterResult {
            original_polygons: polygons.len(),
            exact_pairs_removed: exact.pairs_removed,
            ambiguous_groups: exact.ambiguous_groups,
            additive_groups_removed,
            polygons: kept,
        };
        info!(
            original = result.original_polygons,
            kept = result.polygons.len(),
            ambiguous = result.ambiguous_groups,
            "Filtered hidden polygons"
        );
        Ok(result)
    }
}

/// Result of hidden-surface filtering.
#[derive(Debug, Clone)]
pub struct FilterResult {
    /// The visible polygons, in input order.
    pub polygons: Vec<Polygon>,
    /// Number of polygons handed in.
    pub original_polygons: usize,
    /// Back-to-back pairs removed (two polygons each).
    pub exact_pairs_removed: usize,
    /// Coincident groups of more than two faces, kept as-is.
    pub ambiguous_groups: usize,
    /// Covered faces removed by the additive phase (five polygons each).
    pub additive_groups_removed: usize,
}

impl FilterResult {
    /// Total number of polygons removed.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.original_polygons - self.polygons.len()
    }
}

impl std::fmt::Display for FilterResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Filter: {} → {} polygons ({} hidden pairs, {} covered faces, {} ambiguous groups)",
            self.original_polygons,
            self.polygons.len(),
            self.exact_pairs_removed,
            self.additive_groups_removed,
            self.ambiguous_groups
        )
    }
}
