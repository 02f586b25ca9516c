use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::geometry::{Edge, Polygon};
use crate::math::polygon_3d::Aabb;
use crate::math::PointKey;

/// Number of covering faces, and of inner edges they contribute, in a 2×2
/// subdivision.
const COVER_COUNT: usize = 4;

/// Outcome of the additive phase.
pub(super) struct AdditiveOutcome {
    pub(super) kept: Vec<Polygon>,
    pub(super) groups_removed: usize,
}

/// Drops big quads covered by four smaller coplanar quads, together with the
/// four covering quads.
///
/// A candidate qualifies when each of its corners is touched by exactly one
/// other polygon that shares no other corner with it, and the sides of those
/// four polygons away from their contact corner form exactly four distinct
/// edges inside the candidate's bounding box (grown by `margin`, a fraction
/// of its largest extent). The box test rejects faces meeting the candidate's
/// corners from a perpendicular plane.
pub(super) fn remove_additive_neighbourhoods(polygons: Vec<Polygon>, margin: f64) -> AdditiveOutcome {
    let mut at_point: HashMap<PointKey, Vec<usize>> = HashMap::new();
    for (i, polygon) in polygons.iter().enumerate() {
        for key in polygon.corner_set() {
            at_point.entry(key).or_default().push(i);
        }
    }

    let mut removed = vec![false; polygons.len()];
    let mut groups_removed = 0;

    for candidate in 0..polygons.len() {
        if removed[candidate] {
            continue;
        }
        let Some(covers) = covering_faces(&polygons, candidate, &at_point, &removed, margin) else {
            continue;
        };
        removed[candidate] = true;
        for &cover in &covers {
            removed[cover] = true;
        }
        groups_removed += 1;
        debug!(candidate, ?covers, "removed face covered by four sub-faces");
    }

    let kept = polygons
        .into_iter()
        .zip(removed)
        .filter_map(|(polygon, gone)| (!gone).then_some(polygon))
        .collect();

    AdditiveOutcome {
        kept,
        groups_removed,
    }
}

/// The four polygons covering `candidate`, if it is covered.
fn covering_faces(
    polygons: &[Polygon],
    candidate: usize,
    at_point: &HashMap<PointKey, Vec<usize>>,
    removed: &[bool],
    margin: f64,
) -> Option<Vec<usize>> {
    let big = &polygons[candidate];
    let corners = big.corner_set();
    if !big.is_quad() || corners.len() != COVER_COUNT {
        return None;
    }

    let mut contacts = Vec::with_capacity(COVER_COUNT);
    for key in &corners {
        let mut touching = at_point
            .get(key)
            .into_iter()
            .flatten()
            .copied()
            .filter(|&other| other != candidate && !removed[other])
            .filter(|&other| single_contact(&polygons[other], &corners));
        let first = touching.next()?;
        if touching.next().is_some() {
            return None;
        }
        contacts.push((first, *key));
    }

    let bounds = big.bounding_box()?.expanded(margin);
    let mut inner: HashSet<Edge> = HashSet::new();
    for &(cover, contact) in &contacts {
        inner.extend(inner_edges(&polygons[cover], &contact, &bounds));
    }

    (inner.len() == COVER_COUNT).then(|| contacts.into_iter().map(|(cover, _)| cover).collect())
}

/// Returns `true` if `polygon` shares exactly one corner with `corners`.
fn single_contact(polygon: &Polygon, corners: &[PointKey]) -> bool {
    polygon
        .corner_set()
        .iter()
        .filter(|key| corners.contains(key))
        .count()
        == 1
}

/// Sides of `polygon` away from `contact` whose endpoints both lie in `bounds`.
fn inner_edges<'a>(
    polygon: &'a Polygon,
    contact: &'a PointKey,
    bounds: &'a Aabb,
) -> impl Iterator<Item = Edge> + 'a {
    let vertices = polygon.vertices();
    let n = vertices.len();
    (0..n).filter_map(move |i| {
        let a = &vertices[i];
        let b = &vertices[(i + 1) % n];
        let away = a.key() != *contact && b.key() != *contact;
        (away && bounds.contains(&a.position) && bounds.contains(&b.position))
            .then(|| Edge::new(&a.position, &b.position))
    })
}
