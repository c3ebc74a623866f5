/// Scene graph: owned meshes, cameras and a pending cumulative transform
use nalgebra::Matrix4;

use crate::error::{GeometryError, Result};
use crate::geometry::Mesh;
use crate::projection::Camera;
use crate::render::{RenderOptions, Renderer};
use crate::transform;

/// A collection of meshes sharing a cumulative transform.
///
/// The transform is baked into a mesh when it is added. Later transform calls
/// only affect meshes added after them.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<Mesh>,
    cameras: Vec<Camera>,
    transform: Matrix4<f32>,
    stack: Vec<Matrix4<f32>>,
    compose_scale: bool,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            cameras: Vec::new(),
            transform: Matrix4::identity(),
            stack: Vec::new(),
            compose_scale: false,
        }
    }

    /// Make [`Scene::scale`] compose its matrix like the other transform calls.
    pub fn with_scale_composition(mut self, enabled: bool) -> Self {
        self.compose_scale = enabled;
        self
    }

    pub fn objects(&self) -> &[Mesh] {
        &self.objects
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn camera(&self, index: usize) -> Option<&Camera> {
        self.cameras.get(index)
    }

    pub fn transform(&self) -> &Matrix4<f32> {
        &self.transform
    }

    /// Drop every mesh, the saved transforms and the pending transform.
    /// Cameras are kept.
    pub fn reset(&mut self) {
        self.objects.clear();
        self.stack.clear();
        self.transform = Matrix4::identity();
    }

    /// Bake a copy of the current transform into `mesh` and take ownership of it.
    pub fn add(&mut self, mut mesh: Mesh) {
        let snapshot = self.transform;
        mesh.apply_transform(&snapshot);
        tracing::debug!(
            vertices = mesh.vertices().len(),
            edges = mesh.edges().len(),
            index = self.objects.len(),
            "mesh added to scene"
        );
        self.objects.push(mesh);
    }

    pub fn add_camera(&mut self, camera: Camera) {
        self.cameras.push(camera);
    }

    /// Save the current transform.
    pub fn push(&mut self) {
        self.stack.push(self.transform);
    }

    /// Restore the most recently saved transform.
    pub fn pop(&mut self) -> Result<()> {
        self.transform = self.stack.pop().ok_or(GeometryError::EmptyTransformStack)?;
        Ok(())
    }

    /// Post-multiply the pending transform by `t`.
    pub fn apply_transform(&mut self, t: &Matrix4<f32>) {
        self.transform = self.transform * t;
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.apply_transform(&transform::translation(x, y, z));
    }

    pub fn rotate_x(&mut self, angle: f32) {
        self.apply_transform(&transform::rotation_x(angle));
    }

    pub fn rotate_y(&mut self, angle: f32) {
        self.apply_transform(&transform::rotation_y(angle));
    }

    pub fn rotate_z(&mut self, angle: f32) {
        self.apply_transform(&transform::rotation_z(angle));
    }

    /// Build a scale matrix. It is discarded unless scale composition was
    /// enabled with [`Scene::with_scale_composition`].
    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        let scale = transform::scaling(x, y, z);
        if self.compose_scale {
            self.apply_transform(&scale);
        } else {
            tracing::warn!(
                x,
                y,
                z,
                "Scene::scale does not compose without scale composition enabled"
            );
        }
    }

    /// Render every mesh in insertion order.
    ///
    /// All meshes are projected before the first draw call, so a failing
    /// projection leaves the frame untouched.
    pub fn render<R: Renderer + ?Sized>(
        &self,
        camera: &Camera,
        renderer: &mut R,
        options: RenderOptions,
    ) -> Result<()> {
        let projected = self
            .objects
            .iter()
            .map(|mesh| mesh.project(options.mode, camera))
            .collect::<Result<Vec<_>>>()?;

        for (index, (mesh, points)) in self.objects.iter().zip(&projected).enumerate() {
            tracing::trace!(index, ?options, "rendering mesh");
            mesh.draw(points, renderer, options);
        }
        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
