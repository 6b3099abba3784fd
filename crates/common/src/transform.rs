use glam::{EulerRot, Mat4, Vec3};

/// Spatial transform: position, Euler rotation, scale.
///
/// Rotation is stored as raw Euler angles rather than a quaternion because
/// the animation path accumulates per-frame increments on individual axes
/// without bound; the angles are only converted to a matrix at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, intrinsic XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Local transform matrix: translation * rotation * scale.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
            * Mat4::from_scale(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.local_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn translation_lands_in_last_column() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        let m = t.local_matrix();
        assert_eq!(m.col(3).truncate(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn rotation_matches_euler_xyz() {
        let t = Transform {
            rotation: Vec3::new(0.3, 0.5, 0.7),
            ..Transform::default()
        };
        let expected = Mat4::from_euler(EulerRot::XYZ, 0.3, 0.5, 0.7);
        let got = t.local_matrix();
        for i in 0..4 {
            assert!((got.col(i) - expected.col(i)).length() < 1e-6);
        }
    }
}
