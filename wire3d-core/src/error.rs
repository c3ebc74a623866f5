/// Error types for mesh construction, transform composition and projection
use thiserror::Error;

/// Errors raised by the geometry core.
///
/// Every failure here is either a construction bug on the caller's side or a
/// numeric edge case of the projection. None of them are transient.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// A transform operand did not have the expected shape.
    #[error("dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Perspective projection hit a camera-relative depth of zero, or the
    /// projected coordinate is not finite.
    #[error("degenerate projection of vertex {vertex} at depth {depth}")]
    DegenerateProjection { vertex: usize, depth: f32 },

    /// An edge references a vertex outside the mesh.
    #[error("edge {edge} references vertex {index}, but the mesh has {vertex_count} vertices")]
    EdgeOutOfRange {
        edge: usize,
        index: usize,
        vertex_count: usize,
    },

    /// `Scene::pop` called without a matching `Scene::push`.
    #[error("transform stack is empty")]
    EmptyTransformStack,

    #[error("unknown solid '{0}'")]
    UnknownSolid(String),

    /// Wireframe import failure.
    #[error("STL import failed: {0}")]
    Stl(String),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
