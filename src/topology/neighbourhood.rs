//! Edge-adjacency index.
//!
//! Maps every undirected polygon side to the polygons currently using it. On a
//! manifold surface an edge carries one polygon (boundary) or two (interior);
//! more than two marks ambiguous, non-manifold input.

use std::collections::HashMap;

use crate::error::TopologyError;
use crate::geometry::{Edge, Polygon};

use super::{PolygonId, PolygonStore};

/// How a single-neighbour lookup treats a non-manifold edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighbourLookup {
    /// Report an edge with more than two polygons as [`TopologyError::InvalidTopology`].
    Strict,
    /// Treat an edge with more than two polygons as having no neighbour.
    Lenient,
}

/// Multimap from [`Edge`] to the polygons incident on it.
#[derive(Debug, Clone, Default)]
pub struct Neighbourhood {
    edge_to_polygons: HashMap<Edge, Vec<PolygonId>>,
}

impl Neighbourhood {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index over the given polygons.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::PolygonNotFound`] if an ID is not in `store`.
    pub fn build(store: &PolygonStore, ids: &[PolygonId]) -> Result<Self, TopologyError> {
        let mut index = Self::new();
        for &id in ids {
            index.register(id, store.polygon(id)?);
        }
        Ok(index)
    }

    /// Registers `id` on every side of `polygon`.
    pub fn register(&mut self, id: PolygonId, polygon: &Polygon) {
        for edge in polygon.edges() {
            self.put(edge, id);
        }
    }

    /// Unregisters `id` from every side of `polygon`.
    pub fn retire(&mut self, id: PolygonId, polygon: &Polygon) {
        for edge in polygon.edges() {
            self.unregister(&edge, id);
        }
    }

    /// Polygons incident on `edge`, in registration order.
    #[must_use]
    pub fn neighbours_at(&self, edge: &Edge) -> &[PolygonId] {
        self.edge_to_polygons
            .get(edge)
            .map_or(&[], Vec::as_slice)
    }

    /// The other polygon sharing `edge` with `id`, or `None` on a boundary edge.
    ///
    /// # Errors
    ///
    /// With [`NeighbourLookup::Strict`], returns
    /// [`TopologyError::InvalidTopology`] when more than two polygons use the
    /// edge. [`NeighbourLookup::Lenient`] returns `Ok(None)` instead.
    pub fn neighbour(
        &self,
        id: PolygonId,
        edge: &Edge,
        lookup: NeighbourLookup,
    ) -> Result<Option<PolygonId>, TopologyError> {
        let incident = self.neighbours_at(edge);
        if incident.len() > 2 {
            return match lookup {
                NeighbourLookup::Strict => Err(TopologyError::InvalidTopology {
                    incident: incident.len(),
                }),
                NeighbourLookup::Lenient => Ok(None),
            };
        }
        Ok(incident.iter().copied().find(|&other| other != id))
    }

    /// Adds `id` to `edge`.
    pub fn put(&mut self, edge: Edge, id: PolygonId) {
        self.edge_to_polygons.entry(edge).or_default().push(id);
    }

    /// Clears `edge`, returning the polygons that used it.
    pub fn remove_all(&mut self, edge: &Edge) -> Vec<PolygonId> {
        self.edge_to_polygons.remove(edge).unwrap_or_default()
    }

    /// Removes `id` from `edge`. Returns `true` if it was registered there.
    pub fn unregister(&mut self, edge: &Edge, id: PolygonId) -> bool {
        let Some(list) = self.edge_to_polygons.get_mut(edge) else {
            return false;
        };
        let Some(pos) = list.iter().position(|&other| other == id) else {
            return false;
        };
        list.remove(pos);
        if list.is_empty() {
            self.edge_to_polygons.remove(edge);
        }
        true
    }

    /// Moves `edge` from `old` to `new`, keeping its incidence count.
    pub fn replace(&mut self, edge: Edge, old: PolygonId, new: PolygonId) {
        let before = self.neighbours_at(&edge).len();
        let removed = self.unregister(&edge, old);
        self.put(edge, new);
        debug_assert!(
            self.neighbours_at(&edge).len() <= before.max(1),
            "edge incidence grew during replace (removed old: {removed})"
        );
    }

    /// Total number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_to_polygons.len()
    }

    /// Number of edges used by exactly one polygon.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_to_polygons
            .values()
            .filter(|ids| ids.len() == 1)
            .count()
    }

    /// Edges used by more than two polygons, sorted.
    #[must_use]
    pub fn non_manifold_edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .edge_to_polygons
            .iter()
            .filter(|(_, ids)| ids.len() > 2)
            .map(|(&edge, _)| edge)
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Returns `true` if no edge has more than two polygons.
    #[must_use]
    pub fn is_manifold(&self) -> bool {
        self.edge_to_polygons.values().all(|ids| ids.len() <= 2)
    }
}
