use crate::error::{GeometryError, Result};
use crate::geometry::{Color, Polygon};
use crate::math::Point3;

/// Corner indices of the six faces, ordered counter-clockwise seen from
/// outside. Corners 0-3 are the bottom ring, 4-7 the top ring above them.
pub const HEXAHEDRON_FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1], // bottom
    [4, 5, 6, 7], // top
    [0, 1, 5, 4], // front
    [1, 2, 6, 5], // right
    [2, 3, 7, 6], // back
    [3, 0, 4, 7], // left
];

/// Extracts the six quad faces of a hexahedral cell.
pub struct MakeHexahedron {
    corners: [Point3; 8],
    colors: [Color; 6],
}

impl MakeHexahedron {
    /// Creates a new `MakeHexahedron` operation from eight corners in
    /// bottom-ring-then-top-ring order, all faces one color.
    #[must_use]
    pub fn new(corners: [Point3; 8], color: Color) -> Self {
        Self {
            corners,
            colors: [color; 6],
        }
    }

    /// Creates the operation for an axis-aligned cell.
    #[must_use]
    pub fn axis_aligned(min: Point3, max: Point3, color: Color) -> Self {
        let corners = [
            Point3::new(min.x, min.y, min.z),
            Point3::new(max.x, min.y, min.z),
            Point3::new(max.x, max.y, min.z),
            Point3::new(min.x, max.y, min.z),
            Point3::new(min.x, min.y, max.z),
            Point3::new(max.x, min.y, max.z),
            Point3::new(max.x, max.y, max.z),
            Point3::new(min.x, max.y, max.z),
        ];
        Self::new(corners, color)
    }

    /// Colors each face separately, in [`HEXAHEDRON_FACES`] order.
    #[must_use]
    pub fn with_face_colors(mut self, colors: [Color; 6]) -> Self {
        self.colors = colors;
        self
    }

    /// Executes the operation, returning the six faces.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if any face has collinear leading
    /// corners (a collapsed cell).
    pub fn execute(&self) -> Result<Vec<Polygon>> {
        HEXAHEDRON_FACES
            .iter()
            .zip(self.colors)
            .map(|(face, color)| -> Result<Polygon> {
                let points = face.map(|i| self.corners[i]);
                let polygon = Polygon::from_points(&points, color)?;
                if polygon.face_normal().is_none() {
                    return Err(GeometryError::Degenerate("collapsed hexahedron face".into()).into());
                }
                Ok(polygon)
            })
            .collect()
    }
}
