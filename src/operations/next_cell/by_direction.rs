use std::f64::consts::FRAC_1_SQRT_2;

use crate::error::TopologyError;
use crate::geometry::Edge;
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::topology::{NeighbourLookup, Neighbourhood, PolygonId, PolygonStore};

use super::{NextCell, NextCellFinder};

/// World directions in preference order.
const DIRECTIONS: [[f64; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

/// Prefers neighbours along `+X`, then `-X`, `+Y`, `-Y`, `+Z`, `-Z`.
///
/// A side faces a direction when the vector from the polygon centroid to the
/// side midpoint lies within 45° of it. Chains started this way grow along
/// the same world axis across the whole mesh.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByDirection;

impl NextCellFinder for ByDirection {
    fn find(
        &self,
        store: &PolygonStore,
        index: &Neighbourhood,
        current: PolygonId,
    ) -> Result<Option<NextCell>, TopologyError> {
        let polygon = store.polygon(current)?;
        let points = polygon.positions();
        let sides = outward_sides(&points);

        for dir in DIRECTIONS {
            let dir = Vector3::new(dir[0], dir[1], dir[2]);
            for (shared_edge, outward) in &sides {
                if outward.dot(&dir) < FRAC_1_SQRT_2 - TOLERANCE {
                    continue;
                }
                if let Some(neighbour) =
                    index.neighbour(current, shared_edge, NeighbourLookup::Strict)?
                {
                    return Ok(Some(NextCell {
                        neighbour,
                        shared_edge: *shared_edge,
                    }));
                }
            }
        }
        Ok(None)
    }
}

/// Each side with the unit direction from the centroid to its midpoint.
fn outward_sides(points: &[Point3]) -> Vec<(Edge, Vector3)> {
    let n = points.len();
    #[allow(clippy::cast_precision_loss)]
    let centroid = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords)
        / n as f64;
    (0..n)
        .filter_map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            let mid = (a.coords + b.coords) * 0.5;
            (mid - centroid)
                .try_normalize(TOLERANCE)
                .map(|outward| (Edge::new(&a, &b), outward))
        })
        .collect()
}
