//! Property-based tests for filtering, merging and envelope building.
//!
//! Run with: cargo test --test properties

#![allow(clippy::unwrap_used)]

use std::f64::consts::TAU;

use proptest::prelude::*;
use quadfuse::math::polygon_3d::{interior_angle_sum, loop_length_squared, polygon_area_3d};
use quadfuse::math::{Point3, Vector3};
use quadfuse::{
    Color, DecimateParams, EnvelopeBuilder, EnvelopeStrategy, FilterHiddenPolygons,
    MergeNeighbours, NextCellStrategy, Polygon, Vertex,
};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const PALETTE: [Color; 3] = [
    Color::rgb(0.0, 0.0, 1.0),
    Color::rgb(1.0, 0.0, 0.0),
    Color::rgb(0.0, 1.0, 0.0),
];

fn init_tracing() {
    let filter = EnvFilter::from_default_env().add_directive(LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Strategies
// =============================================================================

fn unit_quad(x: usize, y: usize, color: Color) -> Polygon {
    #[allow(clippy::cast_precision_loss)]
    let (x, y) = (x as f64, y as f64);
    Polygon::from_points(
        &[
            Point3::new(x, y, 0.0),
            Point3::new(x + 1.0, y, 0.0),
            Point3::new(x + 1.0, y + 1.0, 0.0),
            Point3::new(x, y + 1.0, 0.0),
        ],
        color,
    )
    .unwrap()
}

/// A flat `w × h` grid of unit quads, each painted from a small palette.
fn arb_grid() -> impl Strategy<Value = Vec<Polygon>> {
    (1..6usize, 1..6usize).prop_flat_map(|(w, h)| {
        prop::collection::vec(0..PALETTE.len(), w * h).prop_map(move |paint| {
            paint
                .iter()
                .enumerate()
                .map(|(i, &c)| unit_quad(i % w, i / w, PALETTE[c]))
                .collect()
        })
    })
}

fn arb_params() -> impl Strategy<Value = DecimateParams> {
    (any::<bool>(), any::<bool>()).prop_map(|(by_direction, area_360)| {
        DecimateParams::default()
            .with_next_cell_finder(if by_direction {
                NextCellStrategy::ByDirection
            } else {
                NextCellStrategy::ByPointId
            })
            .with_polygon_builder(if area_360 {
                EnvelopeStrategy::Area360
            } else {
                EnvelopeStrategy::ShortestPath
            })
    })
}

/// Corners of a rectangle placed anywhere in space, in shuffled order.
fn arb_rectangle_corners() -> impl Strategy<Value = [Vertex; 4]> {
    (
        0.1..10.0f64,
        0.1..10.0f64,
        prop::array::uniform3(-50.0..50.0f64),
        prop::array::uniform3(-1.0..1.0f64),
        Just(vec![0usize, 1, 2, 3]).prop_shuffle(),
    )
        .prop_filter_map(
            "axis must not be degenerate",
            |(w, h, origin, axis, order)| {
                let u = Vector3::new(axis[0], axis[1], axis[2]).try_normalize(1e-3)?;
                let v = u.cross(&Vector3::z()).try_normalize(1e-3)?;
                let o = Point3::new(origin[0], origin[1], origin[2]);
                let outline = [o, o + u * w, o + u * w + v * h, o + v * h];
                Some([0, 1, 2, 3].map(|k| Vertex::new(outline[order[k]], Color::WHITE)))
            },
        )
}

fn total_area(polygons: &[Polygon]) -> f64 {
    polygons
        .iter()
        .map(|p| polygon_area_3d(&p.positions(), &p.face_normal().unwrap()))
        .sum()
}

fn vertex_count(polygons: &[Polygon]) -> usize {
    polygons.iter().map(Polygon::len).sum()
}

// =============================================================================
// Hidden-surface filter
// =============================================================================

proptest! {
    /// Removing exact duplicates from already filtered output changes nothing.
    #[test]
    fn exact_filter_is_idempotent(grid in arb_grid(), copies in prop::collection::vec(0..25usize, 0..8)) {
        init_tracing();
        let mut input = grid.clone();
        for i in copies {
            if let Some(face) = grid.get(i) {
                input.push(face.clone());
            }
        }

        let filter = FilterHiddenPolygons::new(false);
        let once = filter.execute(&input).unwrap();
        let twice = filter.execute(&once.polygons).unwrap();
        prop_assert_eq!(&twice.polygons, &once.polygons);
        prop_assert_eq!(twice.exact_pairs_removed, 0);
    }
}

// =============================================================================
// Merge traversal
// =============================================================================

proptest! {
    /// Merging never adds polygons or vertices.
    #[test]
    fn merge_never_grows(grid in arb_grid(), params in arb_params()) {
        init_tracing();
        let result = MergeNeighbours::new(params).execute(&grid).unwrap();
        prop_assert!(result.polygons.len() <= grid.len());
        prop_assert!(vertex_count(&result.polygons) <= vertex_count(&grid));
        prop_assert_eq!(result.polygons.len() + result.merges_performed, grid.len());
    }

    /// Merged rectangles tile exactly the area of the grid.
    #[test]
    fn merge_preserves_area(grid in arb_grid(), params in arb_params()) {
        let result = MergeNeighbours::new(params).execute(&grid).unwrap();
        prop_assert!((total_area(&result.polygons) - total_area(&grid)).abs() < 1e-9);
    }

    /// Every merged polygon keeps a single color.
    #[test]
    fn merge_keeps_colors_apart(grid in arb_grid(), params in arb_params()) {
        let result = MergeNeighbours::new(params).execute(&grid).unwrap();
        for polygon in &result.polygons {
            let first = polygon.vertices()[0].color;
            prop_assert!(polygon.vertices().iter().all(|v| v.color == first));
        }
    }

    /// The same input and params give the same output.
    #[test]
    fn merge_is_deterministic(grid in arb_grid(), params in arb_params()) {
        let first = MergeNeighbours::new(params.clone()).execute(&grid).unwrap();
        let second = MergeNeighbours::new(params).execute(&grid).unwrap();
        prop_assert_eq!(first.polygons, second.polygons);
    }
}

// =============================================================================
// Envelope builders
// =============================================================================

proptest! {
    /// Both builders order shuffled rectangle corners into a simple loop.
    #[test]
    fn envelope_is_a_simple_loop(corners in arb_rectangle_corners()) {
        for builder in [EnvelopeStrategy::Area360, EnvelopeStrategy::ShortestPath] {
            let ordered = builder.order(&corners).unwrap();
            let points = ordered.map(|v| v.position);
            prop_assert!((interior_angle_sum(&points) - TAU).abs() < 1e-4);
        }
    }

    /// The shortest-path loop is no longer than any other ordering.
    #[test]
    fn shortest_path_is_minimal(corners in arb_rectangle_corners()) {
        let ordered = EnvelopeStrategy::ShortestPath.order(&corners).unwrap();
        let best = loop_length_squared(&ordered.map(|v| v.position));
        for order in [[0, 1, 2, 3], [1, 0, 2, 3], [0, 2, 1, 3], [0, 2, 3, 1]] {
            let candidate = order.map(|i| corners[i].position);
            prop_assert!(best <= loop_length_squared(&candidate) + 1e-9);
        }
    }
}
