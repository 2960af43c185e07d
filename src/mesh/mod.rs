//! Cell-box meshing and vertex-budget batching

pub mod batcher;
pub mod buffers;
pub mod cell;
pub mod cube;

pub use batcher::{Batch, VertexBudgetBatcher, MAX_COMBINE_VERTICES};
pub use buffers::{CombinedMesh, MeshBuffers, MeshVertex};
pub use cell::{CellMesh, CellMeshBuilder};
