use crate::error::Result;
use crate::geometry::Polygon;

use super::TriangleMesh;

/// Fan-triangulates polygons into a single mesh for the renderer.
///
/// Polygons whose faces are not displayed are skipped. Every polygon gets its
/// own vertices so per-face normals and colors stay sharp at shared corners.
pub struct TessellatePolygons<'a> {
    polygons: &'a [Polygon],
}

impl<'a> TessellatePolygons<'a> {
    /// Creates a new `TessellatePolygons` operation.
    #[must_use]
    pub fn new(polygons: &'a [Polygon]) -> Self {
        Self { polygons }
    }

    /// Executes the tessellation, returning a combined triangle mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if a displayed polygon has automatic normals but
    /// collinear leading vertices.
    pub fn execute(&self) -> Result<TriangleMesh> {
        let mut combined = TriangleMesh::default();
        for polygon in self.polygons.iter().filter(|p| p.flags.face_displayed) {
            combined.merge(&fan(polygon)?);
        }
        Ok(combined)
    }
}

/// Triangle fan around the first vertex.
#[allow(clippy::cast_possible_truncation)]
fn fan(polygon: &Polygon) -> Result<TriangleMesh> {
    let normals = polygon.vertex_normals()?;
    let n = polygon.len() as u32;
    Ok(TriangleMesh {
        vertices: polygon.positions(),
        normals,
        colors: polygon.vertices().iter().map(|v| v.color.to_array()).collect(),
        indices: (1..n - 1).map(|i| [0, i, i + 1]).collect(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{Color, Normals};
    use crate::math::{Point3, Vector3};

    fn square(z: f64) -> Polygon {
        Polygon::from_points(
            &[
                Point3::new(0.0, 0.0, z),
                Point3::new(2.0, 0.0, z),
                Point3::new(2.0, 2.0, z),
                Point3::new(0.0, 2.0, z),
            ],
            Color::rgb(0.0, 0.0, 1.0),
        )
        .unwrap()
    }

    #[test]
    fn quad_becomes_two_triangles() {
        let mesh = TessellatePolygons::new(&[square(0.0)]).execute().unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![[0, 1, 2], [0, 2, 3]]);
        assert_eq!(mesh.colors[0], [0.0, 0.0, 1.0, 1.0]);
        for normal in &mesh.normals {
            assert_relative_eq!(*normal, Vector3::z(), epsilon = 1e-12);
        }
    }

    #[test]
    fn hidden_faces_are_skipped() {
        let mut hidden = square(1.0);
        hidden.flags.face_displayed = false;
        let mesh = TessellatePolygons::new(&[square(0.0), hidden]).execute().unwrap();
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn explicit_normals_are_kept() {
        let mut polygon = square(0.0)
            .with_normals(Normals::PerFace(Vector3::new(0.0, 0.0, -3.0)))
            .unwrap();
        polygon.flags.normalize_normals = false;
        let mesh = TessellatePolygons::new(&[polygon]).execute().unwrap();
        assert_relative_eq!(mesh.normals[2], Vector3::new(0.0, 0.0, -3.0));
    }

    #[test]
    fn pentagon_fans_into_three_triangles() {
        let pentagon = Polygon::from_points(
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(3.0, 1.0, 0.0),
                Point3::new(1.0, 2.0, 0.0),
                Point3::new(-1.0, 1.0, 0.0),
            ],
            Color::WHITE,
        )
        .unwrap();
        let mesh = TessellatePolygons::new(&[pentagon, square(1.0)])
            .execute()
            .unwrap();
        assert_eq!(mesh.triangle_count(), 5);
        assert_eq!(mesh.indices[3], [5, 6, 7]);
    }
}
