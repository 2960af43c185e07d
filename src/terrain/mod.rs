//! Procedural terrain generation and assembly

pub mod assembly;
pub mod bands;
pub mod config;
pub mod heightfield;

pub use assembly::{TerrainAssembly, TerrainInstance};
pub use config::{ColorBand, GridDims, NoiseParams, NoiseVariant, TerrainConfig};
pub use heightfield::HeightField;
