//! wgpu render backend for the spinview scene graph.
//!
//! Two pipelines: a line-list pipeline for wireframe primitives and a
//! triangle-list pipeline for shaded meshes. Both draw instanced copies of a
//! static mesh (the unit edge cube, the unit UV sphere) with per-instance
//! world matrices and material parameters flattened out of the scene graph.
//!
//! # Invariants
//! - The renderer never mutates scene state.
//! - Draw-list construction is a pure function of the scene and carries no
//!   GPU types, so it is unit-testable without a device.

mod draw;
mod gpu;
mod mesh;
mod shaders;

pub use draw::{build_draw_list, DrawList, InstanceData};
pub use gpu::SceneRenderer;
