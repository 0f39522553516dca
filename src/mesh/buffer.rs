use super::DeformableMesh;
use crate::error::RigResult;
use crate::math::transform_point;
use glam::{Mat4, Vec3};

/// Rest-pose vertices captured from a mesh, plus the buffer each frame's
/// transformed positions are written into.
///
/// `base` is never written after [`VertexBuffer::capture`]; `working` always
/// has the same length as `base`.
#[derive(Debug, Clone)]
pub struct VertexBuffer {
    base: Vec<Vec3>,
    working: Vec<Vec3>,
}

impl VertexBuffer {
    pub fn capture<M: DeformableMesh + ?Sized>(mesh: &M) -> Self {
        Self::from_vertices(mesh.vertices().to_vec())
    }

    pub fn from_vertices(base: Vec<Vec3>) -> Self {
        let working = base.clone();
        Self { base, working }
    }

    pub fn base(&self) -> &[Vec3] {
        &self.base
    }

    pub fn working(&self) -> &[Vec3] {
        &self.working
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Transforms every base vertex by `matrix` into the working buffer.
    pub fn apply(&mut self, matrix: &Mat4) {
        for (out, point) in self.working.iter_mut().zip(&self.base) {
            *out = transform_point(matrix, *point);
        }
    }

    /// Pushes the working buffer into `mesh` and asks it to rebuild its
    /// normals and bounds.
    pub fn commit<M: DeformableMesh + ?Sized>(&self, mesh: &mut M) -> RigResult<()> {
        mesh.set_vertices(&self.working)?;
        mesh.recalculate_normals();
        mesh.recalculate_bounds();
        Ok(())
    }
}
