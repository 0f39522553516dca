//! Car rig module
//!
//! Composes the body and wheel transforms each frame and writes the posed
//! vertices back into the meshes.

pub mod car;
pub mod config;
pub mod wheel;

pub use car::{BodyMotion, CarRig, CarRigBuilder, FramePose, HeadingMode};
pub use config::{RigConfig, WheelConfig};
pub use wheel::{Wheel, WheelParams, WheelSlot};
