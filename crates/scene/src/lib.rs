//! Scene graph, camera, lights, and object factories.
//!
//! The scene owns a tree of transform nodes. A node's world transform is its
//! parent's world transform composed with its own local transform; children
//! therefore inherit every parent motion without being mutated themselves.
//!
//! # Invariants
//! - Node iteration order is deterministic (BTreeMap keyed by NodeId).
//! - `world_transform` is a pure function of the stored transforms; radius
//!   and other primitive parameters never leak into it.
//! - The scene never talks to the GPU; rendering derives from it.

pub mod camera;
pub mod graph;
pub mod light;
pub mod objects;

pub use camera::PerspectiveCamera;
pub use graph::{Node, NodeId, Scene, SceneError};
pub use light::{AmbientLight, DirectionalLight};
pub use objects::{create_cube, create_sphere, create_sphere_with_radius, Material, Primitive};
