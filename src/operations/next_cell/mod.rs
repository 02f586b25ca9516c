//! Next-cell finders: which neighbour a merge chain tries first.

mod by_direction;
mod by_point_id;

pub use by_direction::ByDirection;
pub use by_point_id::ByPointId;

use crate::error::TopologyError;
use crate::geometry::Edge;
use crate::topology::{Neighbourhood, PolygonId, PolygonStore};

/// A merge candidate: the neighbouring polygon and the edge both share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextCell {
    /// The polygon across `shared_edge`.
    pub neighbour: PolygonId,
    /// The side shared with the current polygon.
    pub shared_edge: Edge,
}

/// Chooses the first merge candidate for a polygon.
pub trait NextCellFinder {
    /// Returns the neighbour to try merging `current` with, or `None` when
    /// every side is a boundary.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidTopology`] if a side the finder looks
    /// at is shared by more than two polygons, or
    /// [`TopologyError::PolygonNotFound`] for a stale `current`.
    fn find(
        &self,
        store: &PolygonStore,
        index: &Neighbourhood,
        current: PolygonId,
    ) -> Result<Option<NextCell>, TopologyError>;
}

/// Selectable next-cell finder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NextCellStrategy {
    /// Prefer neighbours in a fixed world-axis order.
    ByDirection,
    /// Prefer neighbours in local vertex order.
    #[default]
    ByPointId,
}

impl NextCellFinder for NextCellStrategy {
    fn find(
        &self,
        store: &PolygonStore,
        index: &Neighbourhood,
        current: PolygonId,
    ) -> Result<Option<NextCell>, TopologyError> {
        match self {
            Self::ByDirection => ByDirection.find(store, index, current),
            Self::ByPointId => ByPointId.find(store, index, current),
        }
    }
}
