/// Wireframe mesh: vertices, edges and a cumulative object transform
use nalgebra::{DMatrix, Matrix4, Point2, Vector4};

use crate::error::{GeometryError, Result};
use crate::projection::{self, Camera, ProjectionMode, LABEL_OFFSET};
use crate::render::{RenderOptions, Renderer};
use crate::transform;

/// A homogeneous vertex `[x, y, z, 1]`
pub type Vertex = Vector4<f32>;

/// A pair of indices into the owning mesh's vertex list
pub type Edge = [usize; 2];

/// Build a homogeneous vertex
pub fn vertex(x: f32, y: f32, z: f32) -> Vertex {
    Vector4::new(x, y, z, 1.0)
}

/// A wireframe mesh.
///
/// Vertices and edges are fixed once the mesh is built. Only the transform
/// changes, and only through [`Mesh::apply_transform`].
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    transform: Matrix4<f32>,
}

impl Mesh {
    /// Build a mesh, rejecting edges that point outside `vertices`.
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<Self> {
        let mesh = Self::from_parts(vertices, edges);
        mesh.validate()?;
        Ok(mesh)
    }

    /// Build a mesh from trusted generator output.
    pub(crate) fn from_parts(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        Self {
            vertices,
            edges,
            transform: Matrix4::identity(),
        }
    }

    /// Check that every edge index is in range.
    pub fn validate(&self) -> Result<()> {
        let vertex_count = self.vertices.len();
        for (edge, pair) in self.edges.iter().enumerate() {
            if let Some(&index) = pair.iter().find(|&&i| i >= vertex_count) {
                return Err(GeometryError::EdgeOutOfRange {
                    edge,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn transform(&self) -> &Matrix4<f32> {
        &self.transform
    }

    /// Post-multiply the stored transform: `transform ← transform × t`.
    pub fn apply_transform(&mut self, t: &Matrix4<f32>) {
        self.transform = self.transform * t;
    }

    /// Like [`Mesh::apply_transform`] for a matrix whose shape is only known
    /// at runtime. Leaves the mesh untouched on a shape mismatch.
    pub fn try_apply_transform(&mut self, t: &DMatrix<f32>) -> Result<()> {
        let t = transform::matrix4_from_dynamic(t)?;
        self.apply_transform(&t);
        Ok(())
    }

    /// Orthographic projection of every vertex, in vertex order.
    pub fn project_ortho(&self) -> Vec<Point2<f32>> {
        self.vertices
            .iter()
            .map(|v| projection::project_ortho(&self.transform, v))
            .collect()
    }

    /// Weak-perspective projection of every vertex, in vertex order.
    ///
    /// Fails on the first vertex whose camera-relative depth is zero.
    pub fn project_perspective(&self, camera: &Camera) -> Result<Vec<Point2<f32>>> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| projection::project_weak_perspective(&self.transform, v, camera, i))
            .collect()
    }

    pub fn project(&self, mode: ProjectionMode, camera: &Camera) -> Result<Vec<Point2<f32>>> {
        match mode {
            ProjectionMode::Orthographic => Ok(self.project_ortho()),
            ProjectionMode::Perspective => self.project_perspective(camera),
        }
    }

    /// Project once, then hand edges and vertex markers to `renderer`.
    ///
    /// Nothing is drawn if the projection fails.
    pub fn render<R: Renderer + ?Sized>(
        &self,
        camera: &Camera,
        renderer: &mut R,
        options: RenderOptions,
    ) -> Result<()> {
        let projected = self.project(options.mode, camera)?;
        self.draw(&projected, renderer, options);
        Ok(())
    }

    /// Draw points already projected from this mesh, one per vertex.
    pub(crate) fn draw<R: Renderer + ?Sized>(
        &self,
        projected: &[Point2<f32>],
        renderer: &mut R,
        options: RenderOptions,
    ) {
        if options.edges {
            for &[a, b] in &self.edges {
                let (p, q) = (projected[a], projected[b]);
                renderer.connect_points(p.x, p.y, q.x, q.y);
            }
        }

        if options.vertices {
            for (i, p) in projected.iter().enumerate() {
                renderer.draw_label(&i.to_string(), p.x + LABEL_OFFSET.0, p.y + LABEL_OFFSET.1);
                renderer.draw_point(p.x, p.y);
            }
        }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polyhedra::SolidKind;
    use crate::render::{DrawCall, RecordingRenderer};
    use crate::transform::{rotation_y, translation};
    use approx::assert_relative_eq;

    fn triangle() -> Mesh {
        Mesh::new(
            vec![
                vertex(0.0, 0.0, 0.0),
                vertex(1.0, 0.0, 0.0),
                vertex(0.0, 1.0, 0.0),
            ],
            vec![[0, 1], [1, 2], [2, 0]],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_out_of_range_edge() {
        let err = Mesh::new(vec![vertex(0.0, 0.0, 0.0)], vec![[0, 0], [0, 3]]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::EdgeOutOfRange {
                edge: 1,
                index: 3,
                vertex_count: 1
            }
        );
    }

    #[test]
    fn test_default_is_empty_identity() {
        let mesh = Mesh::default();
        assert!(mesh.vertices().is_empty());
        assert!(mesh.edges().is_empty());
        assert_eq!(mesh.transform(), &Matrix4::identity());
        assert!(mesh.project_perspective(&Camera::default()).unwrap().is_empty());
    }

    #[test]
    fn test_identity_transform_is_neutral() {
        let mut mesh = SolidKind::Dodecahedron.mesh(1.0);
        let before = mesh.project_ortho();
        mesh.apply_transform(&Matrix4::identity());
        assert_eq!(mesh.transform(), &Matrix4::identity());
        assert_eq!(mesh.project_ortho(), before);
    }

    #[test]
    fn test_transform_composition() {
        let a = translation(1.0, -2.0, 0.5);
        let b = rotation_y(0.7);

        let mut stepwise = SolidKind::Cube.mesh(1.0);
        stepwise.apply_transform(&a);
        stepwise.apply_transform(&b);

        let mut combined = SolidKind::Cube.mesh(1.0);
        combined.apply_transform(&(a * b));

        assert_relative_eq!(*stepwise.transform(), *combined.transform(), epsilon = 1e-6);
    }

    #[test]
    fn test_try_apply_transform_checks_shape() {
        let mut mesh = triangle();
        let err = mesh.try_apply_transform(&DMatrix::zeros(3, 3)).unwrap_err();
        assert!(matches!(err, GeometryError::DimensionMismatch { .. }));
        assert_eq!(mesh.transform(), &Matrix4::identity());

        let t = DMatrix::from_row_slice(
            4,
            4,
            &[
                1.0, 0.0, 0.0, 2.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        );
        mesh.try_apply_transform(&t).unwrap();
        assert_eq!(mesh.transform(), &translation(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_ortho_projection_scales_by_200() {
        let mesh = SolidKind::Tetrahedron.mesh(1.0);
        let projected = mesh.project_ortho();
        assert_eq!(projected.len(), mesh.vertices().len());
        for (p, v) in projected.iter().zip(mesh.vertices()) {
            assert_relative_eq!(p.x, 200.0 * v.x);
            assert_relative_eq!(p.y, 200.0 * v.y);
        }
    }

    #[test]
    fn test_perspective_rejects_zero_depth() {
        // The cube's back face sits at z = 1, the camera pulls it to z = 0
        let mesh = SolidKind::Cube.mesh(2.0);
        let err = mesh.project_perspective(&Camera::new(0.0, 0.0, -1.0)).unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateProjection { depth, .. } if depth == 0.0));
    }

    #[test]
    fn test_render_edges_and_labels() {
        let mesh = triangle();
        let camera = Camera::new(0.0, 0.0, 2.0);
        let mut renderer = RecordingRenderer::new();
        mesh.render(
            &camera,
            &mut renderer,
            RenderOptions {
                vertices: true,
                edges: true,
                ..RenderOptions::default()
            },
        )
        .unwrap();

        // z_scale = 2 / 2 = 1, so screen coords are 200× the vertex coords
        assert_eq!(renderer.lines().count(), 3);
        assert_eq!(
            renderer.calls()[0],
            DrawCall::Line {
                from: Point2::new(0.0, 0.0),
                to: Point2::new(200.0, 0.0)
            }
        );
        assert_eq!(
            renderer.calls()[5],
            DrawCall::Label {
                text: "1".to_string(),
                at: Point2::new(205.0, 10.0)
            }
        );
        assert_eq!(
            renderer.calls()[6],
            DrawCall::Point {
                at: Point2::new(200.0, 0.0)
            }
        );
    }

    #[test]
    fn test_failed_projection_draws_nothing() {
        let mesh = triangle();
        let mut renderer = RecordingRenderer::new();
        let result = mesh.render(
            &Camera::new(0.0, 0.0, 0.0),
            &mut renderer,
            RenderOptions::default(),
        );
        assert!(result.is_err());
        assert!(renderer.calls().is_empty());
    }
}
