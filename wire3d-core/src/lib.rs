/// Wire3D Core Library - Scene graph and wireframe projection
///
/// This library provides the geometry core for wireframe rendering: the
/// homogeneous transform pipeline, the Platonic solid generators, orthographic
/// and weak-perspective projection, and the drawing interface renderers implement.

pub mod error;
pub mod geometry;
pub mod polyhedra;
pub mod projection;
pub mod render;
pub mod scene;
pub mod stl;
pub mod transform;

// Re-export commonly used types
pub use error::{GeometryError, Result};
pub use geometry::{Edge, Mesh, Vertex};
pub use polyhedra::SolidKind;
pub use projection::{Camera, ProjectionMode};
pub use render::{DrawCall, RecordingRenderer, RenderOptions, Renderer};
pub use scene::Scene;
