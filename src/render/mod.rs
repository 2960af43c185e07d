//! Renderer seam: the host-facing interface terrain output is pushed through

use crate::core::error::Error;
use crate::core::types::Result;
use crate::mesh::buffers::MeshBuffers;

/// Opaque renderable identifier returned by [`Renderer::upload`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u64);

/// Host renderer interface.
///
/// Implementations own the GPU-side resources behind each handle; every
/// handle returned from `upload` must eventually be passed back to
/// `destroy`.
pub trait Renderer {
    /// Upload one mesh with a single flat color, returning an opaque handle.
    fn upload(&mut self, mesh: &MeshBuffers, color: [f32; 3]) -> Result<MeshHandle>;

    /// Release the renderable behind `handle`.
    fn destroy(&mut self, handle: MeshHandle);
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn upload(&mut self, mesh: &MeshBuffers, color: [f32; 3]) -> Result<MeshHandle> {
        (**self).upload(mesh, color)
    }

    fn destroy(&mut self, handle: MeshHandle) {
        (**self).destroy(handle)
    }
}

/// Records uploads and destroys without touching a GPU.
///
/// Used by the demo binary and tests; `failing_after` injects an upload
/// failure to exercise the abort path.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    next_id: u64,
    live: Vec<MeshHandle>,
    uploads: usize,
    destroys: usize,
    uploaded_vertices: usize,
    fail_after: Option<usize>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer whose uploads start failing after `uploads` successes.
    pub fn failing_after(uploads: usize) -> Self {
        Self {
            fail_after: Some(uploads),
            ..Self::default()
        }
    }

    /// Number of renderables currently alive.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Total successful uploads.
    pub fn uploads(&self) -> usize {
        self.uploads
    }

    /// Total destroys.
    pub fn destroys(&self) -> usize {
        self.destroys
    }

    /// Total vertices across all successful uploads.
    pub fn uploaded_vertices(&self) -> usize {
        self.uploaded_vertices
    }
}

impl Renderer for HeadlessRenderer {
    fn upload(&mut self, mesh: &MeshBuffers, _color: [f32; 3]) -> Result<MeshHandle> {
        if let Some(limit) = self.fail_after {
            if self.uploads >= limit {
                return Err(Error::Renderer("upload budget exhausted".into()));
            }
        }
        let handle = MeshHandle(self.next_id);
        self.next_id += 1;
        self.uploads += 1;
        self.uploaded_vertices += mesh.vertex_count();
        self.live.push(handle);
        Ok(handle)
    }

    fn destroy(&mut self, handle: MeshHandle) {
        if let Some(at) = self.live.iter().position(|h| *h == handle) {
            self.live.swap_remove(at);
            self.destroys += 1;
        }
    }
}
