use crate::error::GeometryError;
use crate::geometry::Vertex;
use crate::math::polygon_3d::loop_length_squared;

use super::{permute, EnvelopeBuilder};

/// Candidate orderings. Four points admit three distinct closed loops; every
/// other permutation is a rotation or reflection of one of these and has the
/// same perimeter.
const ORDERINGS: [[usize; 4]; 4] = [[0, 1, 2, 3], [1, 0, 2, 3], [0, 2, 1, 3], [0, 2, 3, 1]];

/// Picks the ordering with the smallest closed-loop squared edge length.
///
/// The shortest loop is the convex, non-self-intersecting one. Unlike
/// [`super::Area360`] this tolerates corners that are only nearly coplanar.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPath;

impl EnvelopeBuilder for ShortestPath {
    fn order(&self, corners: &[Vertex; 4]) -> Result<[Vertex; 4], GeometryError> {
        let mut best = permute(corners, ORDERINGS[0]);
        let mut best_len = loop_length(&best);
        for &order in &ORDERINGS[1..] {
            let candidate = permute(corners, order);
            let len = loop_length(&candidate);
            if len < best_len {
                best = candidate;
                best_len = len;
            }
        }
        Ok(best)
    }
}

fn loop_length(corners: &[Vertex; 4]) -> f64 {
    loop_length_squared(&corners.map(|v| v.position))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::TAU;

    use super::*;
    use crate::geometry::Color;
    use crate::math::polygon_3d::interior_angle_sum;
    use crate::math::Point3;

    fn v(x: f64, y: f64, z: f64) -> Vertex {
        Vertex::new(Point3::new(x, y, z), Color::WHITE)
    }

    #[test]
    fn merge_corners_become_rectangle() {
        // Two corners of each source quad, as collected by the merge.
        let corners = [
            v(0.0, 0.0, 0.0),
            v(0.0, 1.0, 0.0),
            v(2.0, 0.0, 0.0),
            v(2.0, 1.0, 0.0),
        ];
        let ordered = ShortestPath.order(&corners).unwrap();
        let points = ordered.map(|v| v.position);
        assert!((interior_angle_sum(&points) - TAU).abs() < 1e-9);
        assert!((loop_length_squared(&points) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn chosen_loop_is_minimal_over_all_permutations() {
        let corners = [
            v(0.0, 0.0, 0.0),
            v(3.0, 2.0, 0.0),
            v(3.0, 0.0, 0.0),
            v(0.0, 2.0, 0.0),
        ];
        let chosen = loop_length(&ShortestPath.order(&corners).unwrap());
        for a in 0..4 {
            for b in (0..4).filter(|&b| b != a) {
                for c in (0..4).filter(|&c| c != a && c != b) {
                    let other = loop_length(&permute(&corners, [a, b, c, 6 - a - b - c]));
                    assert!(chosen <= other + 1e-12);
                }
            }
        }
    }

    #[test]
    fn tolerates_near_planar_input() {
        let corners = [
            v(0.0, 0.0, 0.0),
            v(1.0, 1.0, 1e-3),
            v(1.0, 0.0, 0.0),
            v(0.0, 1.0, 0.0),
        ];
        let ordered = ShortestPath.order(&corners).unwrap();
        let points = ordered.map(|v| v.position);
        assert!((interior_angle_sum(&points) - TAU).abs() < 1e-3);
    }
}
