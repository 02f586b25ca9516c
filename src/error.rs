use thiserror::Error;

/// Top-level error type for the quadfuse decimation core.
#[derive(Debug, Error)]
pub enum QuadfuseError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Errors related to polygon geometry.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("malformed polygon: expected {expected} vertices, found {found}")]
    MalformedPolygon { expected: usize, found: usize },

    #[error("no ordering of the envelope points forms a simple loop")]
    UnresolvableEnvelope,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to the edge-adjacency graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("invalid topology: edge shared by {incident} polygons")]
    InvalidTopology { incident: usize },

    #[error("polygon not found in store")]
    PolygonNotFound,
}

/// Errors related to configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

impl QuadfuseError {
    /// Returns `true` if this error reports a non-manifold edge.
    #[must_use]
    pub fn is_invalid_topology(&self) -> bool {
        matches!(self, Self::Topology(TopologyError::InvalidTopology { .. }))
    }
}

/// Convenience type alias for results using [`QuadfuseError`].
pub type Result<T> = std::result::Result<T, QuadfuseError>;
