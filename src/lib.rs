//! # car-rig
//!
//! Rigid-body posing for a car body mesh and its four wheels, driven by
//! explicitly built 4x4 homogeneous matrices rather than an engine's
//! transform component.
//!
//! ## Features
//! - Translation and axis-rotation matrix builders (degrees, X/Y/Z)
//! - Fixed-order composites: `body = T(displacement * t) × R(angle, axis)`,
//!   `wheel = body × T(offset) × R(spin * t, X)`
//! - Rest-pose vertex capture with per-frame working buffers
//! - Host-agnostic mesh seam, plus a CPU mesh with normal/bounds rebuilds
//! - JSON rig configuration
//!
//! ## Example
//! ```rust,ignore
//! use car_rig::mesh::CpuMesh;
//! use car_rig::rig::{CarRigBuilder, WheelSlot};
//! use glam::Vec3;
//!
//! let body = CpuMesh::cuboid(Vec3::new(1.0, 0.5, 2.0));
//! let wheels = std::array::from_fn(|_| CpuMesh::wheel(0.35, 0.25, 24));
//!
//! let mut rig = CarRigBuilder::new()
//!     .displacement(Vec3::new(0.0, 0.0, 3.0))
//!     .spin_all(360.0)
//!     .build(body, wheels);
//!
//! // Once per frame, with the time since start in seconds
//! let pose = rig.update(1.25)?;
//! println!("front-left hub at {:?}", pose.wheel(WheelSlot::FrontLeft).w_axis);
//! ```

pub mod error;
pub mod math;
pub mod mesh;
pub mod rig;

pub use error::{RigError, RigResult};
pub use math::{heading_degrees, rotation, transform_point, translation, Axis};
pub use mesh::{Aabb, CpuMesh, DeformableMesh, Vertex, VertexBuffer};
pub use rig::{
    BodyMotion, CarRig, CarRigBuilder, FramePose, HeadingMode, RigConfig, Wheel, WheelConfig,
    WheelParams, WheelSlot,
};
