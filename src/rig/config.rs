use super::car::{BodyMotion, HeadingMode};
use super::wheel::{WheelParams, WheelSlot};
use crate::error::RigResult;
use crate::math::Axis;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WheelConfig {
    /// Mounting point; the slot's default offset when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Vec3>,
    /// Degrees per second about the wheel's X axis.
    pub spin: f32,
}

impl WheelConfig {
    pub fn resolve(&self, slot: WheelSlot) -> WheelParams {
        WheelParams::new(self.offset.unwrap_or_else(|| slot.default_offset()), self.spin)
    }
}

/// Serializable rig parameters. Missing fields fall back to a car at rest
/// with conventional wheel offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RigConfig {
    pub displacement: Vec3,
    pub angle: f32,
    pub axis: Axis,
    pub heading: HeadingMode,
    pub wheels: [WheelConfig; 4],
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            displacement: Vec3::ZERO,
            angle: 0.0,
            axis: Axis::Y,
            heading: HeadingMode::Fixed,
            wheels: [WheelConfig::default(); 4],
        }
    }
}

impl RigConfig {
    pub fn from_json_str(json: &str) -> RigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> RigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::debug!("Loaded rig config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_string(&self) -> RigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn body_motion(&self) -> BodyMotion {
        BodyMotion {
            displacement: self.displacement,
            angle: self.angle,
            axis: self.axis,
            heading: self.heading,
        }
    }

    pub fn wheel_params(&self) -> [WheelParams; 4] {
        std::array::from_fn(|i| self.wheels[i].resolve(WheelSlot::ALL[i]))
    }
}
