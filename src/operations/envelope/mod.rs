//! Polygon envelope builders.
//!
//! After two quads merge, the four corners that survive (two from each face)
//! arrive unordered. An envelope builder puts them back into a simple loop.

mod area_360;
mod shortest_path;

pub use area_360::Area360;
pub use shortest_path::ShortestPath;

use crate::error::GeometryError;
use crate::geometry::{Polygon, Vertex};

/// Orders four unordered corners into a simple polygon loop.
pub trait EnvelopeBuilder {
    /// Returns the corners in loop order.
    ///
    /// # Errors
    ///
    /// Returns an error if no simple loop can be found.
    fn order(&self, corners: &[Vertex; 4]) -> Result<[Vertex; 4], GeometryError>;

    /// Builds the merged polygon from its four corners.
    ///
    /// The ordered loop is rotated so its first two corners move to the end,
    /// display flags are copied from `template`, and normals are reset to
    /// automatic: normals of the source faces no longer describe the larger
    /// face.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::MalformedPolygon`] unless exactly four corners
    /// are given, or whatever [`EnvelopeBuilder::order`] reports.
    fn build(&self, corners: &[Vertex], template: &Polygon) -> Result<Polygon, GeometryError> {
        let quad: &[Vertex; 4] =
            corners
                .try_into()
                .map_err(|_| GeometryError::MalformedPolygon {
                    expected: 4,
                    found: corners.len(),
                })?;
        let mut ordered = self.order(quad)?;
        ordered.rotate_left(2);
        Ok(Polygon::new(ordered.to_vec())?.with_flags(template.flags))
    }
}

/// Selectable envelope builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnvelopeStrategy {
    /// Exhaustive search for a permutation whose interior angles sum to `2π`.
    Area360,
    /// Shortest closed loop among the three distinct quad topologies.
    #[default]
    ShortestPath,
}

impl EnvelopeBuilder for EnvelopeStrategy {
    fn order(&self, corners: &[Vertex; 4]) -> Result<[Vertex; 4], GeometryError> {
        match self {
            Self::Area360 => Area360.order(corners),
            Self::ShortestPath => ShortestPath.order(corners),
        }
    }
}

/// Applies a permutation of local indices to four corners.
fn permute(corners: &[Vertex; 4], order: [usize; 4]) -> [Vertex; 4] {
    order.map(|i| corners[i])
}
