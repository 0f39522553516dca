//! Math utilities module
//!
//! Builds the translation and axis-rotation matrices the rig composes each
//! frame, and applies them to points through homogeneous coordinates.

mod transform;

pub use transform::{
    heading_degrees, rotation, transform_point, translation, translation_vec, Axis,
};

// Re-export commonly used glam types
pub use glam::{Mat4, Vec3, Vec4};
