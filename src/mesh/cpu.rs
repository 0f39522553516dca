use super::DeformableMesh;
use crate::error::{RigError, RigResult};
use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::f32::consts::PI;

/// Interleaved vertex record, laid out for direct upload as a vertex buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Smallest box enclosing `points`; a zero box when `points` is empty.
    pub fn from_points(points: &[Vec3]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::default();
        };

        rest.iter().fold(
            Self {
                min: *first,
                max: *first,
            },
            |aabb, p| Self {
                min: aabb.min.min(*p),
                max: aabb.max.max(*p),
            },
        )
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Triangle mesh kept in host memory.
#[derive(Debug, Clone)]
pub struct CpuMesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
    bounds: Aabb,
}

impl CpuMesh {
    /// Builds a mesh from positions and a triangle list, computing normals
    /// and bounds up front.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        let mut mesh = Self {
            normals: vec![Vec3::ZERO; positions.len()],
            positions,
            indices,
            bounds: Aabb::default(),
        };
        mesh.recalculate_normals();
        mesh.recalculate_bounds();
        mesh
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex_data(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(p, n)| Vertex {
                position: p.to_array(),
                normal: n.to_array(),
            })
            .collect()
    }

    /// Box centred on the origin with four vertices per face, so each face
    /// keeps a flat normal.
    pub fn cuboid(half_extents: Vec3) -> Self {
        // (normal, u, v) with u x v == normal, so (0, 1, 2) winds outward.
        const FACES: [(Vec3, Vec3, Vec3); 6] = [
            (Vec3::X, Vec3::Y, Vec3::Z),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::Z, Vec3::X),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::Y, Vec3::X),
        ];

        let mut positions = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (normal, u, v) in FACES {
            let base = positions.len() as u32;
            for corner in [normal - u - v, normal + u - v, normal + u + v, normal - u + v] {
                positions.push(corner * half_extents);
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self::new(positions, indices)
    }

    /// Capped cylinder lying along the X axis, so that rotating it about X
    /// rolls it like a wheel.
    pub fn wheel(radius: f32, width: f32, segments: u32) -> Self {
        let segments = segments.max(3);
        let half_width = width / 2.0;
        let mut positions = Vec::new();
        let mut indices = Vec::new();

        let ring = |i: u32| {
            let theta = 2.0 * PI * i as f32 / segments as f32;
            Vec3::new(0.0, theta.cos() * radius, theta.sin() * radius)
        };

        for i in 0..=segments {
            let r = ring(i);
            positions.push(Vec3::new(-half_width, r.y, r.z));
            positions.push(Vec3::new(half_width, r.y, r.z));
        }

        for i in 0..segments {
            let base = i * 2;
            indices.push(base);
            indices.push(base + 3);
            indices.push(base + 1);

            indices.push(base);
            indices.push(base + 2);
            indices.push(base + 3);
        }

        for (side, x) in [(1.0_f32, half_width), (-1.0, -half_width)] {
            let center_idx = positions.len() as u32;
            positions.push(Vec3::new(x, 0.0, 0.0));

            for i in 0..=segments {
                let r = ring(i);
                positions.push(Vec3::new(x, r.y, r.z));
            }

            for i in 0..segments {
                let a = center_idx + 1 + i;
                let b = a + 1;
                if side > 0.0 {
                    indices.extend_from_slice(&[center_idx, a, b]);
                } else {
                    indices.extend_from_slice(&[center_idx, b, a]);
                }
            }
        }

        Self::new(positions, indices)
    }
}

impl DeformableMesh for CpuMesh {
    fn vertices(&self) -> &[Vec3] {
        &self.positions
    }

    fn set_vertices(&mut self, vertices: &[Vec3]) -> RigResult<()> {
        if vertices.len() != self.positions.len() {
            return Err(RigError::VertexCountMismatch {
                expected: self.positions.len(),
                actual: vertices.len(),
            });
        }
        self.positions.copy_from_slice(vertices);
        Ok(())
    }

    /// Area-weighted average of the face normals around each vertex.
    /// Triangles with an out-of-range index are skipped.
    fn recalculate_normals(&mut self) {
        let mut accum = vec![Vec3::ZERO; self.positions.len()];

        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let (Some(pa), Some(pb), Some(pc)) = (
                self.positions.get(a),
                self.positions.get(b),
                self.positions.get(c),
            ) else {
                continue;
            };

            let face = (*pb - *pa).cross(*pc - *pa);
            accum[a] += face;
            accum[b] += face;
            accum[c] += face;
        }

        self.normals = accum.into_iter().map(Vec3::normalize_or_zero).collect();
    }

    fn recalculate_bounds(&mut self) {
        self.bounds = Aabb::from_points(&self.positions);
    }
}
