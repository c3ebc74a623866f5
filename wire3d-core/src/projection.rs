/// Camera and projection utilities
use nalgebra::{Matrix2x4, Matrix4, Point2, Vector4};

use crate::error::{GeometryError, Result};

/// Uniform factor applied to every projected coordinate.
pub const SCREEN_SCALE: f32 = 200.0;

/// Default focal length of the weak-perspective projection.
pub const FOCAL_LENGTH: f32 = 2.0;

/// Pixel offset of a vertex label from its marker.
pub const LABEL_OFFSET: (f32, f32) = (5.0, 10.0);

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    Orthographic,
    #[default]
    Perspective,
}

/// A fixed viewpoint.
///
/// The position is a homogeneous column `[x, y, z, 1]`. Perspective projection
/// adds it to every transformed vertex; it is not inverted into a view matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vector4<f32>,
    pub focal_length: f32,
}

impl Camera {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vector4::new(x, y, z, 1.0),
            focal_length: FOCAL_LENGTH,
        }
    }

    pub fn with_focal_length(mut self, focal_length: f32) -> Self {
        self.focal_length = focal_length;
        self
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(0.0, 0.0, -1.0)
    }
}

/// Drop z and scale to screen units.
pub fn project_ortho(transform: &Matrix4<f32>, vertex: &Vector4<f32>) -> Point2<f32> {
    let ortho = Matrix2x4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0,
    );
    Point2::from(ortho * (transform * vertex) * SCREEN_SCALE)
}

/// Weak-perspective projection of a single vertex.
///
/// Both axes are scaled by `focal_length / z` where `z` is the depth after
/// adding the camera position. `index` only labels the error.
pub fn project_weak_perspective(
    transform: &Matrix4<f32>,
    vertex: &Vector4<f32>,
    camera: &Camera,
    index: usize,
) -> Result<Point2<f32>> {
    let relative = transform * vertex + camera.position;
    let depth = relative.z;

    if depth == 0.0 {
        return Err(GeometryError::DegenerateProjection {
            vertex: index,
            depth,
        });
    }

    let z_scale = camera.focal_length / depth;
    let perspective = Matrix2x4::new(
        z_scale, 0.0, 0.0, 0.0, //
        0.0, z_scale, 0.0, 0.0,
    );
    let projected = perspective * relative * SCREEN_SCALE;

    if !(projected.x.is_finite() && projected.y.is_finite()) {
        return Err(GeometryError::DegenerateProjection {
            vertex: index,
            depth,
        });
    }

    Ok(Point2::from(projected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::default();
        assert_eq!(camera.position, Vector4::new(0.0, 0.0, -1.0, 1.0));
        assert_eq!(camera.focal_length, FOCAL_LENGTH);
        assert_eq!(ProjectionMode::default(), ProjectionMode::Perspective);
    }

    #[test]
    fn test_ortho_discards_depth() {
        let p = project_ortho(&Matrix4::identity(), &Vector4::new(0.5, -0.25, 9.0, 1.0));
        assert_relative_eq!(p, Point2::new(100.0, -50.0));
    }

    #[test]
    fn test_weak_perspective_scale() {
        let camera = Camera::new(1.0, 0.0, 3.0);
        let p = project_weak_perspective(
            &Matrix4::identity(),
            &Vector4::new(1.0, 2.0, 1.0, 1.0),
            &camera,
            0,
        )
        .unwrap();
        // relative = (2, 2, 4), z_scale = 0.5
        assert_relative_eq!(p, Point2::new(200.0, 200.0));

        let wide = camera.with_focal_length(4.0);
        let p = project_weak_perspective(
            &Matrix4::identity(),
            &Vector4::new(1.0, 2.0, 1.0, 1.0),
            &wide,
            0,
        )
        .unwrap();
        assert_relative_eq!(p, Point2::new(400.0, 400.0));
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let camera = Camera::new(0.0, 0.0, -1.0);
        let err = project_weak_perspective(
            &Matrix4::identity(),
            &Vector4::new(0.3, 0.3, 1.0, 1.0),
            &camera,
            7,
        )
        .unwrap_err();
        assert_eq!(
            err,
            GeometryError::DegenerateProjection {
                vertex: 7,
                depth: 0.0
            }
        );
    }
}
