//! Terrain generation configuration, the plain data the host passes in

use serde::{Deserialize, Serialize};

/// Grid dimensions for one generation pass.
///
/// Cells cover the coordinate domain `[0, x_cells) x [0, z_cells)`;
/// `y_scale` multiplies evaluated heights into world units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    pub x_cells: u32,
    pub y_scale: u32,
    pub z_cells: u32,
}

impl GridDims {
    pub fn new(x_cells: u32, y_scale: u32, z_cells: u32) -> Self {
        Self { x_cells, y_scale, z_cells }
    }

    /// Total number of cells in the XZ domain.
    pub fn cell_count(&self) -> usize {
        self.x_cells as usize * self.z_cells as usize
    }
}

impl Default for GridDims {
    fn default() -> Self {
        Self {
            x_cells: 100,
            y_scale: 10,
            z_cells: 100,
        }
    }
}

/// Noise variant selecting how heights are evaluated.
///
/// All variants are deterministic for a fixed seed except [`Random`],
/// which ignores coordinates entirely.
///
/// [`Random`]: NoiseVariant::Random
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoiseVariant {
    Perlin,
    #[default]
    Fbm,
    Warp,
    Turbulence,
    Ridge,
    Random,
}

/// Parameters controlling height evaluation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseParams {
    pub seed: u32,
    pub variant: NoiseVariant,
    pub amplitude: f32,     // Vertical span of the noise contribution
    pub frequency: f32,     // Grid-to-noise coordinate scale
    pub offset: f32,        // Added to both noise coordinates
    pub octaves: u32,       // Fractal octaves (clamped to >= 1 at construction)
    pub height_offset: f32, // Flat bias added after amplitude scaling
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            seed: 12345,
            variant: NoiseVariant::default(),
            amplitude: 1.0,
            frequency: 0.05,
            offset: 0.0,
            octaves: 4,
            height_offset: 0.0,
        }
    }
}

/// One color band: heights strictly above `threshold` select it.
///
/// Band lists are position-ordered; see [`crate::terrain::bands`] for the
/// exact assignment rule.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorBand {
    pub threshold: f32,
    /// Linear RGB.
    pub color: [f32; 3],
}

impl ColorBand {
    pub fn new(threshold: f32, color: [f32; 3]) -> Self {
        Self { threshold, color }
    }
}

/// Full configuration for one generation pass. Immutable while the pass runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    pub grid: GridDims,
    pub noise: NoiseParams,
    /// Ordered (threshold, color) bands.
    pub bands: Vec<ColorBand>,
    /// When false, batching is skipped and every cell becomes its own
    /// renderable.
    pub combine_meshes: bool,
    /// Derive a collision copy for every output mesh.
    pub generate_collision: bool,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            grid: GridDims::default(),
            noise: NoiseParams::default(),
            bands: vec![
                ColorBand::new(0.0, [0.18, 0.33, 0.61]),  // water
                ColorBand::new(0.35, [0.76, 0.70, 0.50]), // sand
                ColorBand::new(0.45, [0.33, 0.53, 0.27]), // grass
                ColorBand::new(0.65, [0.45, 0.42, 0.40]), // rock
                ColorBand::new(0.85, [0.93, 0.94, 0.95]), // snow
            ],
            combine_meshes: true,
            generate_collision: false,
        }
    }
}
