//! Greedy merging of coplanar, color-compatible neighbouring quads.

mod matching;
mod result;
mod traversal;

pub use result::MergeResult;

use tracing::info;

use crate::error::Result;
use crate::geometry::Polygon;
use crate::params::DecimateParams;

use traversal::Traversal;

/// Merges adjacent quads that share an edge, agree in color, and lie in the
/// same plane, chaining each merge into the next neighbour along the same
/// direction.
///
/// Only `neighbour_color_distance_threshold`, `neighbour_angle_threshold`,
/// `next_cell_finder`, `polygon_builder` and `normalize_normals` are read
/// from the params.
pub struct MergeNeighbours {
    params: DecimateParams,
}

impl MergeNeighbours {
    /// Creates a new `MergeNeighbours` operation.
    #[must_use]
    pub fn new(params: DecimateParams) -> Self {
        Self { params }
    }

    /// Executes the merge, returning the reduced polygon list.
    ///
    /// The input slice is never modified. Non-manifold edges met on the way
    /// are counted in [`MergeResult::invalid_neighbours`] rather than
    /// reported as errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the params are invalid or if the envelope builder
    /// cannot order a merged quad (e.g. `Area360` fed non-coplanar corners).
    pub fn execute(&self, polygons: &[Polygon]) -> Result<MergeResult> {
        self.params.validate()?;
        info!(polygons = polygons.len(), "Starting neighbour merge");

        let result = Traversal::new(&self.params, polygons)?.run()?;

        info!(
            original = result.original_polygons,
            merged = result.final_polygons,
            merges = result.merges_performed,
            invalid = result.invalid_neighbours,
            "Finished neighbour merge"
        );
        Ok(result)
    }
}
