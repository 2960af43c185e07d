//! Vertex-budget-aware batching of cell meshes into combined buffers

use crate::mesh::buffers::MeshBuffers;
use crate::mesh::cell::CellMesh;
use crate::mesh::cube::VERTS_PER_CUBE;

/// Largest multiple of 24 (one cube's vertex count) under the 65536 ceiling
/// of a 16-bit index format.
pub const MAX_COMBINE_VERTICES: usize = 65520;

/// A sealed group: merged buffers for `cube_count` cubes of one band.
#[derive(Clone, Debug)]
pub struct Batch {
    pub band: usize,
    pub mesh: MeshBuffers,
    pub cube_count: usize,
}

#[derive(Default)]
struct OpenGroup {
    mesh: MeshBuffers,
    cube_count: usize,
}

impl OpenGroup {
    fn seal(&mut self, band: usize) -> Batch {
        Batch {
            band,
            mesh: std::mem::take(&mut self.mesh),
            cube_count: std::mem::replace(&mut self.cube_count, 0),
        }
    }
}

/// Accumulates cell meshes into per-band groups that never exceed
/// [`MAX_COMBINE_VERTICES`], sealing a group the moment the next cube would
/// overflow it.
///
/// All bands accumulate simultaneously, so cube order within a batch equals
/// push order regardless of how bands interleave in the scan.
pub struct VertexBudgetBatcher {
    open: Vec<OpenGroup>,
    sealed: Vec<Batch>,
}

impl VertexBudgetBatcher {
    /// One open group per color band. With zero bands no grouping occurs and
    /// pushes are dropped.
    pub fn new(band_count: usize) -> Self {
        Self {
            open: (0..band_count).map(|_| OpenGroup::default()).collect(),
            sealed: Vec::new(),
        }
    }

    /// Add one cell to its band's open group.
    ///
    /// The budget check runs *before* the append: a group already holding
    /// `MAX_COMBINE_VERTICES / 24` cubes is sealed first, then the cell
    /// starts a fresh group.
    pub fn push(&mut self, cell: CellMesh) {
        let Some(group) = self.open.get_mut(cell.band) else {
            return;
        };
        if group.cube_count * VERTS_PER_CUBE >= MAX_COMBINE_VERTICES {
            let batch = group.seal(cell.band);
            self.sealed.push(batch);
        }
        cell.emit(&mut group.mesh);
        group.cube_count += 1;
    }

    /// Seal every remaining non-empty group and return all batches.
    ///
    /// Empty open groups produce nothing.
    pub fn finish(mut self) -> Vec<Batch> {
        for (band, group) in self.open.iter_mut().enumerate() {
            if group.cube_count > 0 {
                let batch = group.seal(band);
                self.sealed.push(batch);
            }
        }
        self.sealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec3;

    /// Cubes per batch at the budget.
    const FULL: usize = MAX_COMBINE_VERTICES / VERTS_PER_CUBE;

    fn cell(band: usize, i: usize) -> CellMesh {
        CellMesh {
            position: Vec3::new(i as f32, 0.5, 0.0),
            scale: Vec3::ONE,
            band,
        }
    }

    #[test]
    fn test_full_constant() {
        assert_eq!(FULL, 2730);
        assert_eq!(MAX_COMBINE_VERTICES % VERTS_PER_CUBE, 0);
        assert!(MAX_COMBINE_VERTICES < 65536);
    }

    #[test]
    fn test_exact_budget_seals_one_batch() {
        let mut batcher = VertexBudgetBatcher::new(1);
        for i in 0..FULL {
            batcher.push(cell(0, i));
        }
        let batches = batcher.finish();

        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].cube_count, FULL);
        assert_eq!(batches[0].mesh.vertex_count(), MAX_COMBINE_VERTICES);
    }

    #[test]
    fn test_one_over_budget_seals_two_batches() {
        let mut batcher = VertexBudgetBatcher::new(1);
        for i in 0..FULL + 1 {
            batcher.push(cell(0, i));
        }
        let batches = batcher.finish();

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].cube_count, FULL);
        assert_eq!(batches[1].cube_count, 1);
    }

    #[test]
    fn test_batches_never_exceed_budget() {
        let mut batcher = VertexBudgetBatcher::new(2);
        for i in 0..3 * FULL {
            batcher.push(cell(i % 2, i));
        }
        for batch in batcher.finish() {
            assert!(batch.mesh.vertex_count() <= MAX_COMBINE_VERTICES);
            assert_eq!(batch.mesh.vertex_count() % VERTS_PER_CUBE, 0);
            assert_eq!(batch.mesh.vertex_count(), batch.cube_count * VERTS_PER_CUBE);
        }
    }

    #[test]
    fn test_bands_accumulate_simultaneously() {
        // Interleaved pushes across three bands still come out grouped by
        // band, one batch each.
        let mut batcher = VertexBudgetBatcher::new(3);
        for i in 0..30 {
            batcher.push(cell(i % 3, i));
        }
        let batches = batcher.finish();

        assert_eq!(batches.len(), 3);
        let mut bands: Vec<usize> = batches.iter().map(|b| b.band).collect();
        bands.sort();
        assert_eq!(bands, vec![0, 1, 2]);
        assert!(batches.iter().all(|b| b.cube_count == 10));
    }

    #[test]
    fn test_push_order_preserved_within_batch() {
        let mut batcher = VertexBudgetBatcher::new(1);
        for i in 0..5 {
            batcher.push(cell(0, i));
        }
        let batches = batcher.finish();

        // First vertex of cube i carries the x position it was pushed with.
        let mesh = &batches[0].mesh;
        for i in 0..5 {
            let first = mesh.vertices[i * VERTS_PER_CUBE].position[0];
            assert_eq!(first, i as f32 + 0.5);
        }
    }

    #[test]
    fn test_finish_without_pushes_is_empty() {
        let batcher = VertexBudgetBatcher::new(4);
        assert!(batcher.finish().is_empty());
    }

    #[test]
    fn test_unused_band_produces_no_batch() {
        let mut batcher = VertexBudgetBatcher::new(2);
        for i in 0..8 {
            batcher.push(cell(0, i));
        }
        let batches = batcher.finish();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].band, 0);
    }

    #[test]
    fn test_zero_bands_drops_pushes() {
        let mut batcher = VertexBudgetBatcher::new(0);
        for i in 0..16 {
            batcher.push(cell(0, i));
        }
        assert!(batcher.finish().is_empty());
    }
}
