//! CPU-side mesh generation shared by both renderers.

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Unit-radius latitude/longitude sphere. Scaled per body through the model
/// matrix, so one mesh serves every sphere in the scene.
pub fn uv_sphere(stacks: u32, slices: u32) -> MeshData {
    let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
    for stack in 0..=stacks {
        let v = stack as f32 / stacks as f32;
        let phi = v * std::f32::consts::PI;
        let y = phi.cos();
        let r = phi.sin();
        for slice in 0..=slices {
            let u = slice as f32 / slices as f32;
            let theta = u * std::f32::consts::TAU;
            let position = [r * theta.cos(), y, r * theta.sin()];
            vertices.push(Vertex {
                position,
                normal: position,
                uv: [u, v],
            });
        }
    }

    let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);
    let row = slices + 1;
    for stack in 0..stacks {
        for slice in 0..slices {
            let a = stack * row + slice;
            let b = a + row;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    MeshData { vertices, indices }
}

/// Flat annulus in the XZ plane, normal +Y; `uv.x` runs around the ring,
/// `uv.y` from the inner to the outer edge.
pub fn ring(inner: f32, outer: f32, segments: u32) -> MeshData {
    let mut vertices = Vec::with_capacity(((segments + 1) * 2) as usize);
    for seg in 0..=segments {
        let u = seg as f32 / segments as f32;
        let theta = u * std::f32::consts::TAU;
        let (sin, cos) = theta.sin_cos();
        for (edge, radius) in [(0.0, inner), (1.0, outer)] {
            vertices.push(Vertex {
                position: [radius * cos, 0.0, radius * sin],
                normal: [0.0, 1.0, 0.0],
                uv: [u, edge],
            });
        }
    }

    let mut indices = Vec::with_capacity((segments * 6) as usize);
    for seg in 0..segments {
        let a = seg * 2;
        indices.extend_from_slice(&[a, a + 1, a + 2, a + 2, a + 1, a + 3]);
    }

    MeshData { vertices, indices }
}
