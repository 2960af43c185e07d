//! Per-cell box mesh descriptors

use crate::core::types::Vec3;
use crate::mesh::buffers::MeshBuffers;
use crate::mesh::cube;
use crate::terrain::bands;
use crate::terrain::config::ColorBand;

/// One terrain column as plain data: a box transform plus the color band it
/// belongs to. Produced and consumed within a single generation pass, never
/// materialized as a host object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMesh {
    pub position: Vec3,
    pub scale: Vec3,
    /// Index into the pass's color-band list.
    pub band: usize,
}

impl CellMesh {
    /// Append this cell's cube into `out`.
    pub fn emit(&self, out: &mut MeshBuffers) {
        cube::emit_cube(out, self.position, self.scale);
    }
}

/// Builds positioned, color-tagged cell boxes from evaluated heights
pub struct CellMeshBuilder<'a> {
    y_scale: f32,
    bands: &'a [ColorBand],
}

impl<'a> CellMeshBuilder<'a> {
    pub fn new(y_scale: f32, bands: &'a [ColorBand]) -> Self {
        Self { y_scale, bands }
    }

    /// Box for cell (x, z): base at y = 0, top at `height * y_scale`, unit
    /// horizontal footprint so columns tile without gaps. The band is chosen
    /// from the pre-scale height.
    pub fn build(&self, x: u32, z: u32, height: f32) -> CellMesh {
        let column = height * self.y_scale;
        CellMesh {
            position: Vec3::new(x as f32, column * 0.5, z as f32),
            scale: Vec3::new(1.0, column, 1.0),
            band: bands::band_index(self.bands, height),
        }
    }
}
