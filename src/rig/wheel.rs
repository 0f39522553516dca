use crate::math::{rotation, translation_vec, Axis};
use crate::mesh::{DeformableMesh, VertexBuffer};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Position of a wheel on the car. The rig always holds exactly one wheel
/// per slot, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelSlot {
    FrontLeft,
    FrontRight,
    RearLeft,
    RearRight,
}

impl WheelSlot {
    pub const ALL: [WheelSlot; 4] = [
        WheelSlot::FrontLeft,
        WheelSlot::FrontRight,
        WheelSlot::RearLeft,
        WheelSlot::RearRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Conventional mounting point for a car whose forward axis is +Z.
    pub fn default_offset(self) -> Vec3 {
        match self {
            WheelSlot::FrontLeft => Vec3::new(-0.9, 0.35, 1.4),
            WheelSlot::FrontRight => Vec3::new(0.9, 0.35, 1.4),
            WheelSlot::RearLeft => Vec3::new(-0.9, 0.35, -1.4),
            WheelSlot::RearRight => Vec3::new(0.9, 0.35, -1.4),
        }
    }
}

/// Wheel parameters independent of any mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelParams {
    pub offset: Vec3,
    /// Spin rate about the wheel's X axis, in degrees per second.
    pub spin: f32,
}

impl WheelParams {
    pub fn new(offset: Vec3, spin: f32) -> Self {
        Self { offset, spin }
    }

    pub fn for_slot(slot: WheelSlot) -> Self {
        Self::new(slot.default_offset(), 0.0)
    }

    /// `body × translation(offset) × rotation(spin * elapsed, X)`.
    pub fn composite(&self, body: &Mat4, elapsed: f32) -> Mat4 {
        *body * translation_vec(self.offset) * rotation(self.spin * elapsed, Axis::X)
    }
}

pub struct Wheel<M> {
    pub(crate) slot: WheelSlot,
    pub(crate) mesh: M,
    pub(crate) buffer: VertexBuffer,
    pub(crate) params: WheelParams,
}

impl<M: DeformableMesh> Wheel<M> {
    pub fn new(slot: WheelSlot, mesh: M, params: WheelParams) -> Self {
        let buffer = VertexBuffer::capture(&mesh);
        if buffer.is_empty() {
            log::warn!("{:?} wheel mesh has no vertices", slot);
        }
        Self {
            slot,
            mesh,
            buffer,
            params,
        }
    }

    pub fn slot(&self) -> WheelSlot {
        self.slot
    }

    pub fn mesh(&self) -> &M {
        &self.mesh
    }

    pub fn mesh_mut(&mut self) -> &mut M {
        &mut self.mesh
    }

    pub fn buffer(&self) -> &VertexBuffer {
        &self.buffer
    }

    pub fn params(&self) -> &WheelParams {
        &self.params
    }

    pub fn offset(&self) -> Vec3 {
        self.params.offset
    }

    pub fn spin(&self) -> f32 {
        self.params.spin
    }

    pub fn set_spin(&mut self, spin: f32) {
        self.params.spin = spin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{transform_point, translation};

    const EPS: f32 = 1e-5;

    #[test]
    fn slots_index_in_declaration_order() {
        for (i, slot) in WheelSlot::ALL.into_iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn default_offsets_are_mirrored() {
        let fl = WheelSlot::FrontLeft.default_offset();
        let fr = WheelSlot::FrontRight.default_offset();
        let rl = WheelSlot::RearLeft.default_offset();
        assert_eq!(fl.x, -fr.x);
        assert_eq!(fl.z, -rl.z);
    }

    #[test]
    fn composite_is_body_then_offset_then_spin() {
        let body = translation(5.0, 0.0, 0.0) * rotation(90.0, Axis::Y);
        let params = WheelParams::new(Vec3::new(0.0, 0.0, 2.0), 45.0);
        let elapsed = 2.0;

        let expected = body * translation(0.0, 0.0, 2.0) * rotation(90.0, Axis::X);
        assert!(params.composite(&body, elapsed).abs_diff_eq(expected, EPS));

        let spin_first = rotation(90.0, Axis::X) * translation(0.0, 0.0, 2.0) * body;
        assert!(!params.composite(&body, elapsed).abs_diff_eq(spin_first, EPS));
    }

    #[test]
    fn spin_turns_about_the_wheel_hub() {
        let params = WheelParams::new(Vec3::new(1.0, 0.0, 0.0), 90.0);
        let m = params.composite(&Mat4::IDENTITY, 1.0);

        // The hub stays at the offset; a rim point rolls from +Y to +Z.
        assert!(transform_point(&m, Vec3::ZERO).abs_diff_eq(Vec3::X, EPS));
        let rim = transform_point(&m, Vec3::Y);
        assert!(rim.abs_diff_eq(Vec3::new(1.0, 0.0, 1.0), EPS));
    }
}
