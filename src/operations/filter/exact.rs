use std::collections::HashMap;

use tracing::warn;

use crate::geometry::Polygon;
use crate::math::PointKey;

/// Outcome of the exact-duplicate phase.
pub(super) struct ExactOutcome {
    pub(super) kept: Vec<Polygon>,
    pub(super) pairs_removed: usize,
    pub(super) ambiguous_groups: usize,
}

/// Drops back-to-back coincident faces.
///
/// Polygons are grouped by their corner set, ignoring vertex order. A group
/// of exactly two is a pair of faces hiding each other and both go. Larger
/// groups are ambiguous: every member is kept and the group is reported.
/// Survivors keep their input order.
pub(super) fn remove_exact_duplicates(polygons: Vec<Polygon>) -> ExactOutcome {
    let mut groups: HashMap<Vec<PointKey>, Vec<usize>> = HashMap::new();
    for (i, polygon) in polygons.iter().enumerate() {
        groups.entry(polygon.corner_set()).or_default().push(i);
    }

    let mut hidden = vec![false; polygons.len()];
    let mut pairs_removed = 0;
    let mut ambiguous_groups = 0;
    for members in groups.values() {
        match members.len() {
            2 => {
                hidden[members[0]] = true;
                hidden[members[1]] = true;
                pairs_removed += 1;
            }
            n if n > 2 => {
                ambiguous_groups += 1;
                warn!(
                    members = n,
                    first = members[0],
                    "more than two coincident faces, keeping all"
                );
            }
            _ => {}
        }
    }

    let kept = polygons
        .into_iter()
        .zip(hidden)
        .filter_map(|(polygon, hide)| (!hide).then_some(polygon))
        .collect();

    ExactOutcome {
        kept,
        pairs_removed,
        ambiguous_groups,
    }
}
