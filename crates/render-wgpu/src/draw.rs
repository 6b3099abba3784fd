use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use spinview_common::Color;
use spinview_scene::{Primitive, Scene};

/// Per-instance GPU record: world matrix columns, color, and material
/// parameters (x = roughness, y = metalness).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct InstanceData {
    pub model_0: [f32; 4],
    pub model_1: [f32; 4],
    pub model_2: [f32; 4],
    pub model_3: [f32; 4],
    pub color: [f32; 4],
    pub params: [f32; 4],
}

impl InstanceData {
    fn new(model: Mat4, color: Color, roughness: f32, metalness: f32) -> Self {
        let cols = model.to_cols_array_2d();
        let [r, g, b] = color.to_array();
        Self {
            model_0: cols[0],
            model_1: cols[1],
            model_2: cols[2],
            model_3: cols[3],
            color: [r, g, b, 1.0],
            params: [roughness, metalness, 0.0, 0.0],
        }
    }
}

/// Flattened draw state for one frame, split by pipeline.
#[derive(Debug, Default)]
pub struct DrawList {
    /// Instances of the unit edge cube.
    pub wires: Vec<InstanceData>,
    /// Instances of the unit sphere.
    pub solids: Vec<InstanceData>,
}

/// Flatten the scene graph into per-instance draw records.
///
/// World matrices come straight from scene-graph composition; the only
/// renderer-side adjustment is folding a sphere's radius into the leaf
/// scale, since the GPU mesh is a unit sphere.
pub fn build_draw_list(scene: &Scene) -> DrawList {
    let mut list = DrawList::default();
    for (id, node) in scene.nodes() {
        let Some(world) = scene.world_transform(id) else {
            continue;
        };
        match node.primitive {
            Primitive::Empty => {}
            Primitive::WireCube { color } => {
                list.wires.push(InstanceData::new(world, color, 0.0, 0.0));
            }
            Primitive::Sphere { radius, material } => {
                let model = world * Mat4::from_scale(Vec3::splat(radius));
                list.solids.push(InstanceData::new(
                    model,
                    material.color,
                    material.roughness,
                    material.metalness,
                ));
            }
        }
    }
    list
}
