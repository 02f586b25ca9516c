//! Mergeability tests and side bookkeeping for a pair of adjacent quads.

use crate::geometry::{Color, Edge, Polygon, Vertex};
use crate::math::PointKey;

/// `|cos|` at or above this counts as parallel when no angle is allowed.
const PARALLEL_COS_TOL: f64 = 1e-9;

/// Colors of the corners not on `shared`.
fn free_colors(polygon: &Polygon, shared: &Edge) -> Vec<Color> {
    free_vertices(polygon, shared).map(|v| v.color).collect()
}

/// Corners not on `shared`, in vertex order.
pub(super) fn free_vertices<'a>(
    polygon: &'a Polygon,
    shared: &'a Edge,
) -> impl Iterator<Item = &'a Vertex> + 'a {
    polygon
        .vertices()
        .iter()
        .filter(move |v| !shared.touches(&v.key()))
}

/// Color compatibility of two neighbours across `shared`.
///
/// * `threshold < 0`: the free corner colors must be equal as sets.
/// * `threshold > 0`: the mean squared distance over every pairing of a free
///   corner of `a` with a free corner of `b` must be `<= threshold`.
/// * `threshold == 0`: never matches.
pub(super) fn match_color(a: &Polygon, b: &Polygon, shared: &Edge, threshold: f64) -> bool {
    let colors_a = free_colors(a, shared);
    let colors_b = free_colors(b, shared);

    if threshold < 0.0 {
        colors_a.iter().all(|c| colors_b.contains(c)) && colors_b.iter().all(|c| colors_a.contains(c))
    } else if threshold > 0.0 {
        let pairs = colors_a.len() * colors_b.len();
        if pairs == 0 {
            return false;
        }
        let total: f64 = colors_a
            .iter()
            .flat_map(|ca| colors_b.iter().map(move |cb| ca.distance_squared(cb)))
            .sum();
        #[allow(clippy::cast_precision_loss)]
        let mean = total / pairs as f64;
        mean <= threshold
    } else {
        false
    }
}

/// Normal compatibility: face normals parallel, anti-parallel, or within
/// `threshold_deg` degrees in either orientation.
///
/// Faces extracted from independent cells carry no consistent outward
/// orientation, so a flipped normal still counts as coplanar.
pub(super) fn match_normals(a: &Polygon, b: &Polygon, threshold_deg: f64) -> bool {
    let (Some(na), Some(nb)) = (a.face_normal(), b.face_normal()) else {
        return false;
    };
    let cos = na.normalize().dot(&nb.normalize()).abs().min(1.0);
    if cos >= 1.0 - PARALLEL_COS_TOL {
        return true;
    }
    cos.acos().to_degrees() <= threshold_deg
}

/// The side of `polygon` that touches neither endpoint of `shared`.
///
/// The two free corners form that side only if their local indices are
/// sequential, i.e. differ by 1 or by `n - 1`.
pub(super) fn opposite_edge(polygon: &Polygon, shared: &Edge) -> Option<Edge> {
    let keys = polygon.point_keys();
    let n = keys.len();
    let free: Vec<usize> = (0..n).filter(|&i| !shared.touches(&keys[i])).collect();
    let [i, j] = free[..] else {
        return None;
    };
    is_sequential(i, j, n).then(|| Edge::from_keys(keys[i], keys[j]))
}

/// Sides other than `shared` and `opposite`; after a merge they lie inside
/// the new face's outline or are split from it.
pub(super) fn perpendicular_edges(polygon: &Polygon, shared: &Edge, opposite: &Edge) -> Vec<Edge> {
    polygon
        .edges()
        .filter(|e| e != shared && e != opposite)
        .collect()
}

/// Returns `true` if every corner sits at its own position.
pub(super) fn distinct_corners(corners: &[Vertex]) -> bool {
    let mut keys: Vec<PointKey> = corners.iter().map(Vertex::key).collect();
    keys.sort_unstable();
    keys.dedup();
    keys.len() == corners.len()
}

fn is_sequential(i: usize, j: usize, n: usize) -> bool {
    let d = i.abs_diff(j);
    d == 1 || d == n - 1
}
