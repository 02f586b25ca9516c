pub mod color;
pub mod edge;
pub mod polygon;
pub mod vertex;

pub use color::Color;
pub use edge::Edge;
pub use polygon::{DisplayFlags, Normals, Polygon};
pub use vertex::Vertex;
