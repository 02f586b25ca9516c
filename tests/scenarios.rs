//! End-to-end decimation scenarios on small hand-built meshes.

#![allow(clippy::unwrap_used)]

use quadfuse::error::TopologyError;
use quadfuse::math::{Point3, PointKey};
use quadfuse::operations::creation::MakeHexahedron;
use quadfuse::tessellation::TessellatePolygons;
use quadfuse::topology::{NeighbourLookup, Neighbourhood, PolygonStore};
use quadfuse::{
    Color, Decimate, DecimateParams, Edge, FilterHiddenPolygons, MergeNeighbours, Polygon,
};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
const RED: Color = Color::rgb(1.0, 0.0, 0.0);

fn init_tracing() {
    let filter = EnvFilter::from_default_env().add_directive(LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64, color: Color) -> Polygon {
    Polygon::from_points(
        &[p(x0, y0, 0.0), p(x1, y0, 0.0), p(x1, y1, 0.0), p(x0, y1, 0.0)],
        color,
    )
    .unwrap()
}

fn unit(x0: f64, color: Color) -> Polygon {
    rect(x0, 0.0, x0 + 1.0, 1.0, color)
}

fn keys(points: &[Point3]) -> Vec<PointKey> {
    let mut keys: Vec<PointKey> = points.iter().map(PointKey::from_point).collect();
    keys.sort_unstable();
    keys
}

fn unit_cube(x0: f64) -> Vec<Polygon> {
    MakeHexahedron::axis_aligned(p(x0, 0.0, 0.0), p(x0 + 1.0, 1.0, 1.0), Color::WHITE)
        .execute()
        .unwrap()
}

#[test]
fn two_quads_of_one_color_merge() {
    init_tracing();
    let result = MergeNeighbours::new(DecimateParams::default())
        .execute(&[unit(0.0, BLUE), unit(1.0, BLUE)])
        .unwrap();

    assert_eq!(result.polygons.len(), 1);
    assert_eq!(
        result.polygons[0].corner_set(),
        keys(&[p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(2.0, 1.0, 0.0), p(0.0, 1.0, 0.0)])
    );
}

#[test]
fn recolored_quad_stays_separate() {
    init_tracing();
    let result = MergeNeighbours::new(DecimateParams::default())
        .execute(&[unit(0.0, BLUE), unit(1.0, RED)])
        .unwrap();

    assert_eq!(result.polygons.len(), 2);
    assert_eq!(result.merges_performed, 0);
}

#[test]
fn row_splits_at_color_change() {
    init_tracing();
    let row: Vec<Polygon> = (0..5)
        .map(|i| unit(f64::from(i), if i < 3 { BLUE } else { RED }))
        .collect();
    let result = MergeNeighbours::new(DecimateParams::default())
        .execute(&row)
        .unwrap();

    assert_eq!(result.polygons.len(), 2);
    assert_eq!(
        result.polygons[0].corner_set(),
        keys(&[p(0.0, 0.0, 0.0), p(3.0, 0.0, 0.0), p(3.0, 1.0, 0.0), p(0.0, 1.0, 0.0)])
    );
    assert_eq!(
        result.polygons[1].corner_set(),
        keys(&[p(3.0, 0.0, 0.0), p(5.0, 0.0, 0.0), p(5.0, 1.0, 0.0), p(3.0, 1.0, 0.0)])
    );
    assert!(result.polygons[0].vertices().iter().all(|v| v.color == BLUE));
    assert!(result.polygons[1].vertices().iter().all(|v| v.color == RED));
}

#[test]
fn touching_cubes_lose_their_shared_face() {
    init_tracing();
    let mut faces = unit_cube(0.0);
    faces.extend(unit_cube(1.0));

    let result = FilterHiddenPolygons::new(false).execute(&faces).unwrap();

    assert_eq!(result.polygons.len(), 10);
    assert_eq!(result.exact_pairs_removed, 1);
    let wall = keys(&[p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(1.0, 1.0, 1.0), p(1.0, 0.0, 1.0)]);
    assert!(result.polygons.iter().all(|f| f.corner_set() != wall));
}

#[test]
fn subdivided_face_is_removed_with_its_covers() {
    init_tracing();
    let bystanders = vec![rect(5.0, 0.0, 6.0, 1.0, BLUE), rect(6.0, 0.0, 7.0, 1.0, RED)];
    let mut faces = vec![
        rect(0.0, 0.0, 2.0, 2.0, BLUE),
        rect(0.0, 0.0, 1.0, 1.0, BLUE),
        rect(1.0, 0.0, 2.0, 1.0, BLUE),
        rect(1.0, 1.0, 2.0, 2.0, BLUE),
        rect(0.0, 1.0, 1.0, 2.0, BLUE),
    ];
    faces.extend(bystanders.iter().cloned());

    let result = FilterHiddenPolygons::new(true).execute(&faces).unwrap();

    assert_eq!(result.additive_groups_removed, 1);
    assert_eq!(result.polygons, bystanders);
}

#[test]
fn strict_lookup_raises_on_non_manifold_edge() {
    init_tracing();
    let fin = Polygon::from_points(
        &[p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(1.0, 1.0, 1.0), p(1.0, 0.0, 1.0)],
        BLUE,
    )
    .unwrap();
    let (store, ids) = PolygonStore::from_polygons(&[unit(0.0, BLUE), unit(1.0, BLUE), fin]);
    let index = Neighbourhood::build(&store, &ids).unwrap();
    let shared = Edge::new(&p(1.0, 0.0, 0.0), &p(1.0, 1.0, 0.0));

    assert_eq!(
        index.neighbour(ids[0], &shared, NeighbourLookup::Strict),
        Err(TopologyError::InvalidTopology { incident: 3 })
    );
    assert_eq!(
        index.neighbour(ids[0], &shared, NeighbourLookup::Lenient),
        Ok(None)
    );
    assert_eq!(index.non_manifold_edges(), vec![shared]);
}

#[test]
fn decimated_cubes_tessellate_for_rendering() {
    init_tracing();
    let mut faces = unit_cube(0.0);
    faces.extend(unit_cube(1.0));

    let params = DecimateParams::default()
        .with_next_cell_finder(quadfuse::NextCellStrategy::ByDirection);
    let decimated = Decimate::new(params).execute(&faces).unwrap();
    assert_eq!(decimated.polygons.len(), 6);

    let mesh = TessellatePolygons::new(&decimated.polygons)
        .execute()
        .unwrap();
    assert_eq!(mesh.triangle_count(), 12);
    assert!(mesh
        .normals
        .iter()
        .all(|n| (n.norm() - 1.0).abs() < 1e-12));
}
