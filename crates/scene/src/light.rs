use glam::Vec3;
use spinview_common::Color;

/// Uniform fill light with no direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(color: Color, intensity: f32) -> Self {
        Self { color, intensity }
    }
}

/// Directional light: parallel rays aimed from `position` at the origin.
///
/// Only the direction derived from the position matters; the light has no
/// falloff and no location in the shading model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    pub fn new(color: Color, intensity: f32, position: Vec3) -> Self {
        Self {
            color,
            intensity,
            position,
        }
    }

    /// Unit vector from the light position toward the origin.
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_points_at_origin() {
        let light = DirectionalLight::new(Color::WHITE, 1.0, Vec3::new(5.0, 10.0, 7.5));
        let dir = light.direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        // Opposite the position vector
        assert!((dir + light.position.normalize()).length() < 1e-6);
    }

    #[test]
    fn degenerate_position_yields_zero_direction() {
        let light = DirectionalLight::new(Color::WHITE, 1.0, Vec3::ZERO);
        assert_eq!(light.direction(), Vec3::ZERO);
    }
}
