use crate::math::{Point3, PointKey};

use super::Color;

/// A polygon corner: position plus color.
///
/// Vertices are plain values; merges copy them into the new polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// The 3D position of the vertex.
    pub position: Point3,
    /// The vertex color.
    pub color: Color,
}

impl Vertex {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(position: Point3, color: Color) -> Self {
        Self { position, color }
    }

    /// Hash key of the position.
    #[must_use]
    pub fn key(&self) -> PointKey {
        PointKey::from_point(&self.position)
    }
}
