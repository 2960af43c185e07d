//! Generation-pass orchestration: heights to cell boxes to batches to renderer

use std::time::Instant;

use crate::core::types::Result;
use crate::math::Aabb;
use crate::mesh::batcher::{Batch, VertexBudgetBatcher};
use crate::mesh::buffers::{CombinedMesh, MeshBuffers};
use crate::mesh::cell::{CellMesh, CellMeshBuilder};
use crate::render::{MeshHandle, Renderer};
use crate::terrain::bands;
use crate::terrain::config::TerrainConfig;
use crate::terrain::heightfield::HeightField;

/// All output of one generation pass: combined meshes, their renderer
/// handles, and enough bookkeeping to tear everything down before the next
/// pass.
#[derive(Debug, Default)]
pub struct TerrainInstance {
    meshes: Vec<CombinedMesh>,
    handles: Vec<MeshHandle>,
    bounds: Aabb,
    cube_count: usize,
}

impl TerrainInstance {
    /// The pass's output meshes, in upload order.
    pub fn meshes(&self) -> &[CombinedMesh] {
        &self.meshes
    }

    /// Number of live renderables.
    pub fn renderable_count(&self) -> usize {
        self.handles.len()
    }

    /// Total cubes across all output meshes.
    pub fn cube_count(&self) -> usize {
        self.cube_count
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Bounding box over every generated cell box (zero-sized when empty).
    /// Hosts use its center to spin the terrain.
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    fn push(&mut self, mesh: CombinedMesh, handle: MeshHandle, cubes: usize) {
        self.meshes.push(mesh);
        self.handles.push(handle);
        self.cube_count += cubes;
    }
}

/// Owns the renderer seam and the current terrain instance.
///
/// Regeneration is teardown-then-build: the previous instance is fully
/// destroyed before any new geometry is produced, and a failed pass tears
/// its partial output down too. Calls are synchronous; at most one
/// `regenerate`/`clear` may be in flight at a time.
pub struct TerrainAssembly<R: Renderer> {
    renderer: R,
    instance: TerrainInstance,
}

impl<R: Renderer> TerrainAssembly<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            instance: TerrainInstance::default(),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The current terrain (empty before the first `regenerate`).
    pub fn instance(&self) -> &TerrainInstance {
        &self.instance
    }

    /// Run one full generation pass, replacing any previous terrain.
    pub fn regenerate(&mut self, config: &TerrainConfig) -> Result<&TerrainInstance> {
        self.clear();

        let start = Instant::now();
        let field = HeightField::new(&config.noise);
        let builder = CellMeshBuilder::new(config.grid.y_scale as f32, &config.bands);

        let mut instance = TerrainInstance::default();
        let mut bounds: Option<Aabb> = None;

        if config.combine_meshes {
            let mut batcher = VertexBudgetBatcher::new(config.bands.len());
            for x in 0..config.grid.x_cells {
                for z in 0..config.grid.z_cells {
                    let cell = builder.build(x, z, field.evaluate(x as i32, z as i32));
                    grow(&mut bounds, &cell);
                    batcher.push(cell);
                }
            }
            for batch in batcher.finish() {
                let Batch { band, mesh, cube_count } = batch;
                let combined = CombinedMesh {
                    color: bands::band_color(&config.bands, band),
                    collision: config.generate_collision.then(|| mesh.clone()),
                    mesh,
                };
                if let Err(err) = Self::upload(&mut self.renderer, &mut instance, combined, cube_count) {
                    Self::teardown(&mut self.renderer, &mut instance);
                    return Err(err);
                }
            }
        } else {
            // Unoptimized path: every cell is its own renderable.
            for x in 0..config.grid.x_cells {
                for z in 0..config.grid.z_cells {
                    let cell = builder.build(x, z, field.evaluate(x as i32, z as i32));
                    grow(&mut bounds, &cell);
                    let mut mesh = MeshBuffers::default();
                    cell.emit(&mut mesh);
                    let combined = CombinedMesh {
                        color: bands::band_color(&config.bands, cell.band),
                        collision: config.generate_collision.then(|| mesh.clone()),
                        mesh,
                    };
                    if let Err(err) = Self::upload(&mut self.renderer, &mut instance, combined, 1) {
                        Self::teardown(&mut self.renderer, &mut instance);
                        return Err(err);
                    }
                }
            }
        }

        instance.bounds = bounds.unwrap_or_default();

        log::info!(
            "Regenerated terrain: {} cells -> {} meshes ({} cubes) in {:.1}ms",
            config.grid.cell_count(),
            instance.renderable_count(),
            instance.cube_count(),
            start.elapsed().as_secs_f64() * 1000.0,
        );

        self.instance = instance;
        Ok(&self.instance)
    }

    /// Destroy the current terrain, releasing every renderer handle.
    /// Calling on an empty instance is a no-op.
    pub fn clear(&mut self) {
        Self::teardown(&mut self.renderer, &mut self.instance);
    }

    fn upload(
        renderer: &mut R,
        instance: &mut TerrainInstance,
        combined: CombinedMesh,
        cubes: usize,
    ) -> Result<()> {
        let handle = renderer.upload(&combined.mesh, combined.color)?;
        instance.push(combined, handle, cubes);
        Ok(())
    }

    fn teardown(renderer: &mut R, instance: &mut TerrainInstance) {
        for handle in instance.handles.drain(..) {
            renderer.destroy(handle);
        }
        instance.meshes.clear();
        instance.cube_count = 0;
        instance.bounds = Aabb::default();
    }
}

impl<R: Renderer> Drop for TerrainAssembly<R> {
    fn drop(&mut self) {
        self.clear();
    }
}

fn grow(bounds: &mut Option<Aabb>, cell: &CellMesh) {
    let cell_box = Aabb::from_center_half_extent(cell.position, cell.scale * 0.5);
    *bounds = Some(match bounds {
        Some(current) => current.merged(&cell_box),
        None => cell_box,
    });
}
