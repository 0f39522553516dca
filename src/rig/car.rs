use super::config::RigConfig;
use super::wheel::{Wheel, WheelParams, WheelSlot};
use crate::error::{RigError, RigResult};
use crate::math::{heading_degrees, rotation, translation_vec, Axis};
use crate::mesh::{DeformableMesh, VertexBuffer};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Where the body rotation angle comes from each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingMode {
    /// Use the configured angle as-is.
    #[default]
    Fixed,
    /// Replace the angle with the yaw of the displacement direction.
    FollowDisplacement,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMotion {
    /// Velocity in units per second; the body sits at `displacement * t`.
    pub displacement: Vec3,
    /// Rotation in degrees, ignored under [`HeadingMode::FollowDisplacement`].
    pub angle: f32,
    pub axis: Axis,
    pub heading: HeadingMode,
}

impl Default for BodyMotion {
    fn default() -> Self {
        Self {
            displacement: Vec3::ZERO,
            angle: 0.0,
            axis: Axis::Y,
            heading: HeadingMode::Fixed,
        }
    }
}

impl BodyMotion {
    pub fn body_angle(&self) -> f32 {
        match self.heading {
            HeadingMode::Fixed => self.angle,
            HeadingMode::FollowDisplacement => heading_degrees(self.displacement),
        }
    }

    /// `translation(displacement * elapsed) × rotation(angle, axis)`.
    pub fn composite(&self, elapsed: f32) -> Mat4 {
        translation_vec(self.displacement * elapsed) * rotation(self.body_angle(), self.axis)
    }
}

/// Composite matrices computed for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FramePose {
    pub elapsed: f32,
    pub body: Mat4,
    pub wheels: [Mat4; 4],
}

impl FramePose {
    pub fn wheel(&self, slot: WheelSlot) -> &Mat4 {
        &self.wheels[slot.index()]
    }
}

/// A car body and its four wheels, re-posed from their rest vertices every
/// frame.
pub struct CarRig<M> {
    body: M,
    body_buffer: VertexBuffer,
    motion: BodyMotion,
    wheels: [Wheel<M>; 4],
}

impl<M: DeformableMesh> CarRig<M> {
    pub fn body(&self) -> &M {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut M {
        &mut self.body
    }

    pub fn body_buffer(&self) -> &VertexBuffer {
        &self.body_buffer
    }

    pub fn motion(&self) -> &BodyMotion {
        &self.motion
    }

    pub fn motion_mut(&mut self) -> &mut BodyMotion {
        &mut self.motion
    }

    pub fn wheels(&self) -> &[Wheel<M>; 4] {
        &self.wheels
    }

    pub fn wheel(&self, slot: WheelSlot) -> &Wheel<M> {
        &self.wheels[slot.index()]
    }

    pub fn wheel_mut(&mut self, slot: WheelSlot) -> &mut Wheel<M> {
        &mut self.wheels[slot.index()]
    }

    /// Computes the body and wheel composites for `elapsed` seconds since
    /// start without touching any mesh.
    pub fn pose(&self, elapsed: f32) -> FramePose {
        let body = self.motion.composite(elapsed);
        let wheels = self.wheels.each_ref().map(|w| w.params.composite(&body, elapsed));
        FramePose {
            elapsed,
            body,
            wheels,
        }
    }

    /// Re-poses every mesh for `elapsed` seconds since start: transforms the
    /// rest vertices, commits them and triggers normal/bounds recomputation.
    ///
    /// Vertex counts are checked against the captured rest poses before any
    /// mesh is written, so a mismatch leaves every mesh as it was.
    pub fn update(&mut self, elapsed: f32) -> RigResult<FramePose> {
        self.check_vertex_counts()?;
        let pose = self.pose(elapsed);
        log::trace!("t={:.3} body composite {:?}", elapsed, pose.body);

        self.body_buffer.apply(&pose.body);
        for (wheel, matrix) in self.wheels.iter_mut().zip(&pose.wheels) {
            wheel.buffer.apply(matrix);
        }

        for wheel in &mut self.wheels {
            wheel.buffer.commit(&mut wheel.mesh)?;
        }
        self.body_buffer.commit(&mut self.body)?;

        Ok(pose)
    }

    fn check_vertex_counts(&self) -> RigResult<()> {
        let meshes = std::iter::once((self.body.vertex_count(), self.body_buffer.len())).chain(
            self.wheels
                .iter()
                .map(|w| (w.mesh.vertex_count(), w.buffer.len())),
        );

        for (actual, expected) in meshes {
            if actual != expected {
                return Err(RigError::VertexCountMismatch { expected, actual });
            }
        }
        Ok(())
    }

    /// Hands the meshes back to the host.
    pub fn into_meshes(self) -> (M, [M; 4]) {
        (self.body, self.wheels.map(|w| w.mesh))
    }
}

pub struct CarRigBuilder {
    motion: BodyMotion,
    wheels: [WheelParams; 4],
}

impl CarRigBuilder {
    pub fn new() -> Self {
        Self {
            motion: BodyMotion::default(),
            wheels: WheelSlot::ALL.map(WheelParams::for_slot),
        }
    }

    pub fn from_config(config: &RigConfig) -> Self {
        Self {
            motion: config.body_motion(),
            wheels: config.wheel_params(),
        }
    }

    pub fn displacement(mut self, displacement: Vec3) -> Self {
        self.motion.displacement = displacement;
        self
    }

    pub fn angle(mut self, angle_degrees: f32) -> Self {
        self.motion.angle = angle_degrees;
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.motion.axis = axis;
        self
    }

    pub fn heading(mut self, heading: HeadingMode) -> Self {
        self.motion.heading = heading;
        self
    }

    pub fn wheel(mut self, slot: WheelSlot, params: WheelParams) -> Self {
        self.wheels[slot.index()] = params;
        self
    }

    pub fn wheel_offset(mut self, slot: WheelSlot, offset: Vec3) -> Self {
        self.wheels[slot.index()].offset = offset;
        self
    }

    pub fn wheel_spin(mut self, slot: WheelSlot, spin: f32) -> Self {
        self.wheels[slot.index()].spin = spin;
        self
    }

    pub fn spin_all(mut self, spin: f32) -> Self {
        for params in &mut self.wheels {
            params.spin = spin;
        }
        self
    }

    /// Captures the rest vertices of `body` and of each wheel mesh, given in
    /// [`WheelSlot::ALL`] order.
    pub fn build<M: DeformableMesh>(self, body: M, wheels: [M; 4]) -> CarRig<M> {
        let body_buffer = VertexBuffer::capture(&body);
        let [fl, fr, rl, rr] = wheels;
        let [p_fl, p_fr, p_rl, p_rr] = self.wheels;

        let wheels = [
            Wheel::new(WheelSlot::FrontLeft, fl, p_fl),
            Wheel::new(WheelSlot::FrontRight, fr, p_fr),
            Wheel::new(WheelSlot::RearLeft, rl, p_rl),
            Wheel::new(WheelSlot::RearRight, rr, p_rr),
        ];

        log::debug!(
            "Built car rig: body {} vertices, wheels {:?}",
            body_buffer.len(),
            wheels.each_ref().map(|w| w.buffer.len())
        );

        CarRig {
            body,
            body_buffer,
            motion: self.motion,
            wheels,
        }
    }
}

impl Default for CarRigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
