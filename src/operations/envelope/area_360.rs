use std::f64::consts::TAU;

use crate::error::GeometryError;
use crate::geometry::Vertex;
use crate::math::polygon_3d::interior_angle_sum;
use crate::math::Point3;

use super::{permute, EnvelopeBuilder};

/// Tolerance on the interior-angle sum, in radians.
const ANGLE_SUM_TOL: f64 = 1e-4;

/// Exhaustive envelope search over all 24 orderings.
///
/// Accepts the first ordering (lexicographic) whose interior angles sum to
/// `2π`. Only coplanar corners can satisfy this; anything else is reported
/// as [`GeometryError::UnresolvableEnvelope`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Area360;

impl EnvelopeBuilder for Area360 {
    fn order(&self, corners: &[Vertex; 4]) -> Result<[Vertex; 4], GeometryError> {
        permutations()
            .into_iter()
            .map(|order| permute(corners, order))
            .find(|candidate| {
                let points: [Point3; 4] = candidate.map(|v| v.position);
                (interior_angle_sum(&points) - TAU).abs() < ANGLE_SUM_TOL
            })
            .ok_or(GeometryError::UnresolvableEnvelope)
    }
}

/// All permutations of `0..4` in lexicographic order.
fn permutations() -> Vec<[usize; 4]> {
    let mut out = Vec::with_capacity(24);
    for a in 0..4 {
        for b in (0..4).filter(|&b| b != a) {
            for c in (0..4).filter(|&c| c != a && c != b) {
                let d = 6 - a - b - c;
                out.push([a, b, c, d]);
            }
        }
    }
    out
}
