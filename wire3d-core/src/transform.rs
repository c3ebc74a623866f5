/// 3D homogeneous transformation matrices
use nalgebra::{DMatrix, Matrix4};

use crate::error::{GeometryError, Result};

/// Create a translation matrix
pub fn translation(x: f32, y: f32, z: f32) -> Matrix4<f32> {
    Matrix4::new(
        1.0, 0.0, 0.0, x, //
        0.0, 1.0, 0.0, y, //
        0.0, 0.0, 1.0, z, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation about the X axis (radians)
pub fn rotation_x(angle: f32) -> Matrix4<f32> {
    let (s, c) = angle.sin_cos();
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, c, -s, 0.0, //
        0.0, s, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation about the Y axis (radians).
///
/// The sine terms sit at `[0][2] = -sin` and `[2][0] = +sin`, so a positive
/// angle turns +X towards +Z.
pub fn rotation_y(angle: f32) -> Matrix4<f32> {
    let (s, c) = angle.sin_cos();
    Matrix4::new(
        c, 0.0, -s, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        s, 0.0, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation about the Z axis (radians)
pub fn rotation_z(angle: f32) -> Matrix4<f32> {
    let (s, c) = angle.sin_cos();
    Matrix4::new(
        c, -s, 0.0, 0.0, //
        s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Create a non-uniform scale matrix
pub fn scaling(x: f32, y: f32, z: f32) -> Matrix4<f32> {
    Matrix4::new(
        x, 0.0, 0.0, 0.0, //
        0.0, y, 0.0, 0.0, //
        0.0, 0.0, z, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Convert a runtime-shaped matrix into a 4×4 transform.
pub fn matrix4_from_dynamic(m: &DMatrix<f32>) -> Result<Matrix4<f32>> {
    if m.shape() != (4, 4) {
        return Err(GeometryError::DimensionMismatch {
            expected: (4, 4),
            found: m.shape(),
        });
    }
    Ok(m.fixed_view::<4, 4>(0, 0).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector4;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_translation_moves_points_only() {
        let t = translation(1.0, 2.0, 3.0);
        let p = t * Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_relative_eq!(p, Vector4::new(2.0, 3.0, 4.0, 1.0));

        // Directions (w = 0) are unaffected
        let d = t * Vector4::new(1.0, 0.0, 0.0, 0.0);
        assert_relative_eq!(d, Vector4::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_quarter_turns() {
        let x = Vector4::new(1.0, 0.0, 0.0, 1.0);
        let y = Vector4::new(0.0, 1.0, 0.0, 1.0);

        assert_relative_eq!(rotation_z(FRAC_PI_2) * x, y, epsilon = 1e-6);
        assert_relative_eq!(
            rotation_x(FRAC_PI_2) * y,
            Vector4::new(0.0, 0.0, 1.0, 1.0),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            rotation_y(FRAC_PI_2) * x,
            Vector4::new(0.0, 0.0, 1.0, 1.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_zero_angle_is_identity() {
        assert_relative_eq!(rotation_x(0.0), Matrix4::identity());
        assert_relative_eq!(rotation_y(0.0), Matrix4::identity());
        assert_relative_eq!(rotation_z(0.0), Matrix4::identity());
    }

    #[test]
    fn test_scaling() {
        let p = scaling(2.0, 3.0, 4.0) * Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_relative_eq!(p, Vector4::new(2.0, 3.0, 4.0, 1.0));
    }

    #[test]
    fn test_dynamic_conversion() {
        let ok = DMatrix::<f32>::identity(4, 4);
        assert_eq!(matrix4_from_dynamic(&ok).unwrap(), Matrix4::identity());

        let column = DMatrix::<f32>::zeros(4, 1);
        assert_eq!(
            matrix4_from_dynamic(&column),
            Err(GeometryError::DimensionMismatch {
                expected: (4, 4),
                found: (4, 1),
            })
        );
    }
}
