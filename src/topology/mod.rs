pub mod neighbourhood;

pub use neighbourhood::{NeighbourLookup, Neighbourhood};

use crate::error::TopologyError;
use crate::geometry::Polygon;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Unique identifier for a polygon in the polygon store.
    pub struct PolygonId;
}

/// Arena that owns the polygons of one decimation run.
///
/// The adjacency index and the work queue refer to polygons by [`PolygonId`]
/// (generational index), so retiring a polygon invalidates stale IDs instead
/// of leaving dangling references.
#[derive(Debug, Default)]
pub struct PolygonStore {
    polygons: SlotMap<PolygonId, Polygon>,
}

impl PolygonStore {
    /// Creates a new, empty polygon store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding copies of `polygons`, returning their IDs in
    /// input order.
    #[must_use]
    pub fn from_polygons(polygons: &[Polygon]) -> (Self, Vec<PolygonId>) {
        let mut store = Self::new();
        let ids = polygons.iter().map(|p| store.add(p.clone())).collect();
        (store, ids)
    }

    /// Inserts a polygon and returns its ID.
    pub fn add(&mut self, polygon: Polygon) -> PolygonId {
        self.polygons.insert(polygon)
    }

    /// Returns a reference to the polygon, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::PolygonNotFound`] if the ID was retired.
    pub fn polygon(&self, id: PolygonId) -> Result<&Polygon, TopologyError> {
        self.polygons.get(id).ok_or(TopologyError::PolygonNotFound)
    }

    /// Removes a polygon from the store and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::PolygonNotFound`] if the ID was already retired.
    pub fn remove(&mut self, id: PolygonId) -> Result<Polygon, TopologyError> {
        self.polygons.remove(id).ok_or(TopologyError::PolygonNotFound)
    }

    /// Returns `true` if the polygon is still live.
    #[must_use]
    pub fn contains(&self, id: PolygonId) -> bool {
        self.polygons.contains_key(id)
    }

    /// Number of live polygons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns `true` if the store holds no polygons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}
