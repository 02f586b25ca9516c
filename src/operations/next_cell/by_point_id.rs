use crate::error::TopologyError;
use crate::topology::{NeighbourLookup, Neighbourhood, PolygonId, PolygonStore};

use super::{NextCell, NextCellFinder};

/// Walks the sides in local vertex order (`v0→v1`, `v1→v2`, ...) and returns
/// the first one with a neighbour.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByPointId;

impl NextCellFinder for ByPointId {
    fn find(
        &self,
        store: &PolygonStore,
        index: &Neighbourhood,
        current: PolygonId,
    ) -> Result<Option<NextCell>, TopologyError> {
        let polygon = store.polygon(current)?;
        for shared_edge in polygon.edges() {
            if let Some(neighbour) = index.neighbour(current, &shared_edge, NeighbourLookup::Strict)? {
                return Ok(Some(NextCell {
                    neighbour,
                    shared_edge,
                }));
            }
        }
        Ok(None)
    }
}
