use glam::{Mat4, Vec3};

/// Perspective camera with a position and a look-at target.
///
/// The aspect ratio is owned by the resize path: after any surface resize it
/// must equal surface width / surface height.
#[derive(Debug, Clone, Copy)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl PerspectiveCamera {
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y,
            aspect,
            near,
            far,
            ..Self::default()
        }
    }

    /// Aim the camera at a point in world space.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Re-establish the aspect invariant from a surface size in pixels.
    /// A zero height is clamped so a minimized window cannot poison the
    /// projection with a division by zero.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_is_valid() {
        let cam = PerspectiveCamera::default();
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
        assert!((cam.fov_y - 75.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn set_aspect_tracks_surface_size() {
        let mut cam = PerspectiveCamera::default();
        cam.set_aspect(1280, 720);
        assert!((cam.aspect - 1280.0 / 720.0).abs() < 1e-6);

        // A later resize re-establishes the invariant at the new size
        cam.set_aspect(800, 600);
        assert!((cam.aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn zero_height_is_clamped() {
        let mut cam = PerspectiveCamera::default();
        cam.set_aspect(640, 0);
        assert!(cam.aspect.is_finite());
        assert!((cam.aspect - 640.0).abs() < 1e-6);
    }

    #[test]
    fn look_at_origin_centers_target() {
        let mut cam = PerspectiveCamera::default();
        cam.position = Vec3::new(1.5, 1.3, 2.8);
        cam.look_at(Vec3::ZERO);

        // The view matrix maps the target in front of the camera (-Z)
        let viewed = cam.view_matrix().transform_point3(cam.target);
        assert!(viewed.z < 0.0);
        assert!(viewed.x.abs() < 1e-5);
        assert!(viewed.y.abs() < 1e-5);
    }
}
