//! Parameters for polygon decimation.

use crate::error::ParameterError;
use crate::operations::envelope::EnvelopeStrategy;
use crate::operations::next_cell::NextCellStrategy;

/// Parameters for hidden-surface filtering and neighbour merging.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimateParams {
    /// Color compatibility between neighbours.
    ///
    /// Negative: the non-shared corner colors must match exactly (as sets).
    /// Positive: the mean squared color distance over all pairs of
    /// non-shared corners must not exceed this value. Zero: never merge.
    /// Default: 0.5
    pub neighbour_color_distance_threshold: f64,

    /// Maximum angle in degrees between neighbour face normals, in either
    /// orientation. Default: 0.0 (parallel or anti-parallel only)
    pub neighbour_angle_threshold: f64,

    /// How a merge chain picks its first neighbour. Default: `ByPointId`
    pub next_cell_finder: NextCellStrategy,

    /// How the merged corners are ordered. Default: `ShortestPath`
    pub polygon_builder: EnvelopeStrategy,

    /// Force unit-length normals on merged polygons. When false, the flag is
    /// copied from the source polygon. Default: true
    pub normalize_normals: bool,

    /// Remove back-to-back duplicate faces before merging. Default: true
    pub filter_hidden_polygons: bool,

    /// Also remove big faces covered by four smaller ones. Default: false
    pub filter_additive_neighbourhood: bool,

    /// Bounding-box margin for the additive filter, as a fraction of the
    /// covered face's largest extent. Default: 0.01
    pub additive_margin: f64,
}

impl Default for DecimateParams {
    fn default() -> Self {
        Self {
            neighbour_color_distance_threshold: 0.5,
            neighbour_angle_threshold: 0.0,
            next_cell_finder: NextCellStrategy::ByPointId,
            polygon_builder: EnvelopeStrategy::ShortestPath,
            normalize_normals: true,
            filter_hidden_polygons: true,
            filter_additive_neighbourhood: false,
            additive_margin: 0.01,
        }
    }
}

impl DecimateParams {
    /// Params requiring identical non-shared corner colors.
    #[must_use]
    pub fn exact_color() -> Self {
        Self {
            neighbour_color_distance_threshold: -1.0,
            ..Default::default()
        }
    }

    /// Set the color distance threshold.
    #[must_use]
    pub const fn with_color_threshold(mut self, threshold: f64) -> Self {
        self.neighbour_color_distance_threshold = threshold;
        self
    }

    /// Set the normal angle threshold, in degrees.
    #[must_use]
    pub const fn with_angle_threshold(mut self, degrees: f64) -> Self {
        self.neighbour_angle_threshold = degrees;
        self
    }

    /// Set the next-cell finder.
    #[must_use]
    pub const fn with_next_cell_finder(mut self, finder: NextCellStrategy) -> Self {
        self.next_cell_finder = finder;
        self
    }

    /// Set the envelope builder.
    #[must_use]
    pub const fn with_polygon_builder(mut self, builder: EnvelopeStrategy) -> Self {
        self.polygon_builder = builder;
        self
    }

    /// Set normal normalization for merged polygons.
    #[must_use]
    pub const fn with_normalize_normals(mut self, normalize: bool) -> Self {
        self.normalize_normals = normalize;
        self
    }

    /// Enable or disable exact-duplicate filtering.
    #[must_use]
    pub const fn with_filter_hidden(mut self, filter: bool) -> Self {
        self.filter_hidden_polygons = filter;
        self
    }

    /// Enable or disable additive-neighbourhood filtering.
    #[must_use]
    pub const fn with_filter_additive(mut self, filter: bool) -> Self {
        self.filter_additive_neighbourhood = filter;
        self
    }

    /// Set the additive filter margin.
    #[must_use]
    pub const fn with_additive_margin(mut self, margin: f64) -> Self {
        self.additive_margin = margin;
        self
    }

    /// Checks the parameters for values the algorithms cannot use.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidParameters`] for a non-finite color
    /// threshold, an angle threshold outside `[0, 180]`, or a negative or
    /// non-finite additive margin.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.neighbour_color_distance_threshold.is_finite() {
            return Err(ParameterError::InvalidParameters(format!(
                "color distance threshold must be finite, got {}",
                self.neighbour_color_distance_threshold
            )));
        }
        if !(0.0..=180.0).contains(&self.neighbour_angle_threshold) {
            return Err(ParameterError::InvalidParameters(format!(
                "angle threshold must be within [0, 180] degrees, got {}",
                self.neighbour_angle_threshold
            )));
        }
        if !self.additive_margin.is_finite() || self.additive_margin < 0.0 {
            return Err(ParameterError::InvalidParameters(format!(
                "additive margin must be a non-negative fraction, got {}",
                self.additive_margin
            )));
        }
        Ok(())
    }
}
