use crate::error::GeometryError;
use crate::math::polygon_3d::{face_normal, Aabb};
use crate::math::{Point3, PointKey, Vector3};

use super::{Color, Edge, Vertex};

/// Normal data carried by a polygon.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Normals {
    /// Recompute the face normal from the first three vertices.
    #[default]
    Auto,
    /// One normal for the whole face.
    PerFace(Vector3),
    /// One normal per vertex, in vertex order.
    PerVertex(Vec<Vector3>),
}

/// Rendering attributes that travel with a polygon through decimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayFlags {
    /// Color of the wireframe outline.
    pub wireframe_color: Color,
    /// Whether the wireframe outline is drawn.
    pub wireframe_visible: bool,
    /// Whether the filled face is drawn.
    pub face_displayed: bool,
    /// Whether the face takes part in lighting.
    pub reflect_light: bool,
    /// Whether the renderer should draw the face as triangles.
    pub split_into_triangles: bool,
    /// Whether normals are scaled to unit length before upload.
    pub normalize_normals: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            wireframe_color: Color::BLACK,
            wireframe_visible: false,
            face_displayed: true,
            reflect_light: true,
            split_into_triangles: false,
            normalize_normals: true,
        }
    }
}

/// An ordered face of a cell mesh.
///
/// Polygons are immutable once built: merging produces a new polygon and
/// drops the two sources.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vertex>,
    normals: Normals,
    /// Rendering attributes.
    pub flags: DisplayFlags,
}

impl Polygon {
    /// Creates a polygon with automatic normals and default display flags.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::MalformedPolygon`] for fewer than three vertices.
    pub fn new(vertices: Vec<Vertex>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::MalformedPolygon {
                expected: 3,
                found: vertices.len(),
            });
        }
        Ok(Self {
            vertices,
            normals: Normals::Auto,
            flags: DisplayFlags::default(),
        })
    }

    /// Creates a polygon whose vertices all share one color.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::MalformedPolygon`] for fewer than three points.
    pub fn from_points(points: &[Point3], color: Color) -> Result<Self, GeometryError> {
        Self::new(points.iter().map(|&p| Vertex::new(p, color)).collect())
    }

    /// Replaces the normal data.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::MalformedPolygon`] if per-vertex normals do not
    /// match the vertex count.
    pub fn with_normals(mut self, normals: Normals) -> Result<Self, GeometryError> {
        if let Normals::PerVertex(ref list) = normals {
            if list.len() != self.vertices.len() {
                return Err(GeometryError::MalformedPolygon {
                    expected: self.vertices.len(),
                    found: list.len(),
                });
            }
        }
        self.normals = normals;
        Ok(self)
    }

    /// Replaces the display flags.
    #[must_use]
    pub fn with_flags(mut self, flags: DisplayFlags) -> Self {
        self.flags = flags;
        self
    }

    /// The ordered vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of vertices. Never below three.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` for four-vertex polygons.
    #[must_use]
    pub fn is_quad(&self) -> bool {
        self.vertices.len() == 4
    }

    /// The stored normal data.
    #[must_use]
    pub fn normals(&self) -> &Normals {
        &self.normals
    }

    /// Vertex positions in order.
    #[must_use]
    pub fn positions(&self) -> Vec<Point3> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// Position keys in vertex order.
    #[must_use]
    pub fn point_keys(&self) -> Vec<PointKey> {
        self.vertices.iter().map(Vertex::key).collect()
    }

    /// The distinct position keys, sorted. Two polygons covering the same
    /// corners in any order share this set.
    #[must_use]
    pub fn corner_set(&self) -> Vec<PointKey> {
        let mut keys = self.point_keys();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Local index of the vertex at `key`.
    #[must_use]
    pub fn index_of(&self, key: &PointKey) -> Option<usize> {
        self.vertices.iter().position(|v| v.key() == *key)
    }

    /// The side from vertex `i` to vertex `i + 1` (wrapping).
    #[must_use]
    pub fn edge(&self, i: usize) -> Edge {
        let n = self.vertices.len();
        Edge::new(
            &self.vertices[i % n].position,
            &self.vertices[(i + 1) % n].position,
        )
    }

    /// All sides in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.vertices.len()).map(|i| self.edge(i))
    }

    /// Geometric face normal from the first three vertices, not normalized.
    #[must_use]
    pub fn face_normal(&self) -> Option<Vector3> {
        let pts: Vec<Point3> = self.vertices.iter().take(3).map(|v| v.position).collect();
        face_normal(&pts)
    }

    /// Per-vertex normals for rendering.
    ///
    /// Explicit normals are returned as stored; automatic normals repeat the
    /// face normal. Unit length is applied when `normalize_normals` is set.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] when automatic normals are
    /// requested for collinear leading vertices.
    pub fn vertex_normals(&self) -> Result<Vec<Vector3>, GeometryError> {
        let raw = match &self.normals {
            Normals::Auto => {
                let n = self.face_normal().ok_or_else(|| {
                    GeometryError::Degenerate("first three vertices are collinear".into())
                })?;
                vec![n; self.vertices.len()]
            }
            Normals::PerFace(n) => vec![*n; self.vertices.len()],
            Normals::PerVertex(list) => list.clone(),
        };
        if self.flags.normalize_normals {
            Ok(raw
                .into_iter()
                .map(|n| n.try_normalize(0.0).unwrap_or(n))
                .collect())
        } else {
            Ok(raw)
        }
    }

    /// Bounding box of the vertex positions.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}
