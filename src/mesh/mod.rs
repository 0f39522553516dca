//! Mesh module
//!
//! The seam between the rig and whatever owns the meshes. A host engine
//! implements [`DeformableMesh`] for its own mesh type; [`CpuMesh`] is the
//! in-crate implementation used by the headless driver and the tests.

pub mod buffer;
pub mod cpu;

pub use buffer::VertexBuffer;
pub use cpu::{Aabb, CpuMesh, Vertex};

use crate::error::RigResult;
use glam::Vec3;

/// A mesh whose vertex positions can be read once and overwritten each frame.
pub trait DeformableMesh {
    fn vertices(&self) -> &[Vec3];

    /// Replaces every vertex position. Implementations may reject a slice
    /// whose length differs from the current vertex count.
    fn set_vertices(&mut self, vertices: &[Vec3]) -> RigResult<()>;

    fn recalculate_normals(&mut self);

    fn recalculate_bounds(&mut self);

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }
}
