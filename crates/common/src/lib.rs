//! Shared leaf types: colors and spatial transforms.
//!
//! # Invariants
//! - `Transform` rotation is Euler angles in radians, intrinsic XYZ order.
//! - These types carry no behavior beyond construction and matrix building;
//!   scene-graph semantics live in `spinview-scene`.

pub mod color;
pub mod transform;

pub use color::Color;
pub use transform::Transform;
