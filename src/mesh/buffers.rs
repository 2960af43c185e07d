//! Mesh buffer types shared by the batcher and the renderer seam

use bytemuck::{Pod, Zeroable};

/// Vertex layout for terrain meshes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Face normal (unit length).
    pub normal: [f32; 3],
}

/// Merged vertex/index buffers for draw submission.
///
/// Indices are 16-bit; the batcher's vertex budget guarantees they never
/// overflow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

impl MeshBuffers {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// One renderable unit: merged buffers, a single flat color, and an optional
/// collision copy (identical geometry, no material).
#[derive(Clone, Debug)]
pub struct CombinedMesh {
    pub mesh: MeshBuffers,
    /// Linear RGB.
    pub color: [f32; 3],
    pub collision: Option<MeshBuffers>,
}
