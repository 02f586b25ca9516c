//! Decimation of quad-face meshes extracted from volumetric cells.
//!
//! Faces come in as an ordered list of [`Polygon`]s, usually quads with
//! per-vertex colors. [`FilterHiddenPolygons`] drops faces hidden by
//! coincident faces, [`MergeNeighbours`] greedily fuses coplanar
//! same-colored neighbours into larger quads, and [`Decimate`] runs both.
//! The result can be handed to a renderer through
//! [`tessellation::TessellatePolygons`].

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod params;
pub mod tessellation;
pub mod topology;

pub use error::{QuadfuseError, Result};
pub use geometry::{Color, DisplayFlags, Edge, Normals, Polygon, Vertex};
pub use operations::envelope::{EnvelopeBuilder, EnvelopeStrategy};
pub use operations::filter::{FilterHiddenPolygons, FilterResult};
pub use operations::merge::{MergeNeighbours, MergeResult};
pub use operations::next_cell::{NextCellFinder, NextCellStrategy};
pub use operations::{Decimate, DecimationResult, DecimationStats};
pub use params::DecimateParams;
