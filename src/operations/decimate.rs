use crate::error::Result;
use crate::geometry::Polygon;
use crate::params::DecimateParams;

use super::filter::FilterHiddenPolygons;
use super::merge::MergeNeighbours;

/// Counters collected across a full decimation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecimationStats {
    /// Polygons handed in.
    pub original_polygons: usize,
    /// Polygons left after hidden-surface filtering.
    pub visible_polygons: usize,
    /// Back-to-back pairs removed.
    pub exact_pairs_removed: usize,
    /// Coincident groups of more than two faces, kept as-is.
    pub ambiguous_groups: usize,
    /// Covered faces removed by the additive phase.
    pub additive_groups_removed: usize,
    /// Pairwise merges performed.
    pub merges_performed: usize,
    /// Merge chains cut short by a non-manifold edge.
    pub invalid_neighbours: usize,
}

/// Output of [`Decimate`].
#[derive(Debug, Clone)]
pub struct DecimationResult {
    /// Polygons to hand to the renderer.
    pub polygons: Vec<Polygon>,
    /// Diagnostics of the run.
    pub stats: DecimationStats,
}

impl std::fmt::Display for DecimationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Decimate: {} → {} → {} polygons ({} merges, {} invalid neighbours)",
            self.stats.original_polygons,
            self.stats.visible_polygons,
            self.polygons.len(),
            self.stats.merges_performed,
            self.stats.invalid_neighbours
        )
    }
}

/// Full decimation pipeline: hidden-surface filtering, then neighbour merging.
pub struct Decimate {
    params: DecimateParams,
}

impl Decimate {
    /// Creates a new `Decimate` operation.
    #[must_use]
    pub fn new(params: DecimateParams) -> Self {
        Self { params }
    }

    /// Executes the pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the params are invalid or a merge cannot be
    /// ordered into a simple polygon.
    pub fn execute(&self, polygons: &[Polygon]) -> Result<DecimationResult> {
        self.params.validate()?;

        let mut stats = DecimationStats {
            original_polygons: polygons.len(),
            visible_polygons: polygons.len(),
            ..DecimationStats::default()
        };

        let filtered;
        let visible: &[Polygon] = if self.params.filter_hidden_polygons {
            let result = FilterHiddenPolygons::new(self.params.filter_additive_neighbourhood)
                .with_margin(self.params.additive_margin)
                .execute(polygons)?;
            stats.visible_polygons = result.polygons.len();
            stats.exact_pairs_removed = result.exact_pairs_removed;
            stats.ambiguous_groups = result.ambiguous_groups;
            stats.additive_groups_removed = result.additive_groups_removed;
            filtered = result.polygons;
            &filtered
        } else {
            polygons
        };

        let merged = MergeNeighbours::new(self.params.clone()).execute(visible)?;
        stats.merges_performed = merged.merges_performed;
        stats.invalid_neighbours = merged.invalid_neighbours;

        Ok(DecimationResult {
            polygons: merged.polygons,
            stats,
        })
    }
}
