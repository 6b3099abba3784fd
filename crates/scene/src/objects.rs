use crate::graph::Node;
use spinview_common::Color;

/// Edge color of the wireframe cube.
pub const CUBE_EDGE_COLOR: u32 = 0x00ff00;

/// Sphere radius used when the caller does not pick one.
pub const DEFAULT_SPHERE_RADIUS: f32 = 0.2;

const SPHERE_ROUGHNESS: f32 = 0.5;
const SPHERE_METALNESS: f32 = 0.1;

/// Shaded surface parameters for solid meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
}

/// What a node draws, if anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Pure transform node, nothing rendered.
    Empty,
    /// Unit 1x1x1 cube drawn as edge line segments.
    WireCube { color: Color },
    /// Shaded sphere. The radius scales the unit sphere mesh at draw time.
    Sphere { radius: f32, material: Material },
}

/// Build the wireframe cube: unit extent, green edges, identity transform.
pub fn create_cube() -> Node {
    Node::new(Primitive::WireCube {
        color: Color::from_hex(CUBE_EDGE_COLOR),
    })
}

/// Build a shaded sphere with the default radius.
pub fn create_sphere(color: Color) -> Node {
    create_sphere_with_radius(color, DEFAULT_SPHERE_RADIUS)
}

/// Build a shaded sphere with an explicit radius.
///
/// The radius must be positive; a non-positive value is not rejected here
/// and degenerates at mesh-scaling time.
pub fn create_sphere_with_radius(color: Color, radius: f32) -> Node {
    Node::new(Primitive::Sphere {
        radius,
        material: Material {
            color,
            roughness: SPHERE_ROUGHNESS,
            metalness: SPHERE_METALNESS,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use spinview_common::Transform;

    #[test]
    fn cube_is_green_wireframe() {
        let cube = create_cube();
        assert_eq!(cube.transform, Transform::default());
        match cube.primitive {
            Primitive::WireCube { color } => assert_eq!(color, Color::from_hex(0x00ff00)),
            other => panic!("expected wire cube, got {other:?}"),
        }
    }

    #[test]
    fn sphere_defaults_radius() {
        let sphere = create_sphere(Color::from_hex(0x0000ff));
        match sphere.primitive {
            Primitive::Sphere { radius, material } => {
                assert_eq!(radius, 0.2);
                assert_eq!(material.color, Color::from_hex(0x0000ff));
                assert_eq!(material.roughness, 0.5);
                assert_eq!(material.metalness, 0.1);
            }
            other => panic!("expected sphere, got {other:?}"),
        }
    }

    #[test]
    fn sphere_takes_explicit_radius() {
        let sphere = create_sphere_with_radius(Color::from_hex(0x800000), 0.25);
        match sphere.primitive {
            Primitive::Sphere { radius, .. } => assert_eq!(radius, 0.25),
            other => panic!("expected sphere, got {other:?}"),
        }
    }
}
