//! Unit-cube face tables and emission into mesh buffers

use crate::core::types::Vec3;
use crate::mesh::buffers::{MeshBuffers, MeshVertex};

/// Vertices emitted per cube: 4 per face, 6 faces.
pub const VERTS_PER_CUBE: usize = 24;

/// Triangle-list indices emitted per cube.
pub const INDICES_PER_CUBE: usize = 36;

/// Per-face (normal, corners) for a unit cube spanning [-0.5, 0.5].
/// Corners wind counter-clockwise seen from outside.
const FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
    // +X
    ([1.0, 0.0, 0.0], [
        [0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5],
    ]),
    // -X
    ([-1.0, 0.0, 0.0], [
        [-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5],
    ]),
    // +Y
    ([0.0, 1.0, 0.0], [
        [-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5],
    ]),
    // -Y
    ([0.0, -1.0, 0.0], [
        [-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5],
    ]),
    // +Z
    ([0.0, 0.0, 1.0], [
        [-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5],
    ]),
    // -Z
    ([0.0, 0.0, -1.0], [
        [0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5],
    ]),
];

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Append one cube at `position` with `scale` into `out`.
///
/// Callers keep `out` under the 16-bit index ceiling; this function does not
/// check.
pub fn emit_cube(out: &mut MeshBuffers, position: Vec3, scale: Vec3) {
    for (normal, corners) in FACES {
        let base = out.vertices.len() as u16;
        for corner in corners {
            out.vertices.push(MeshVertex {
                position: [
                    position.x + corner[0] * scale.x,
                    position.y + corner[1] * scale.y,
                    position.z + corner[2] * scale.z,
                ],
                normal,
            });
        }
        for index in QUAD_INDICES {
            out.indices.push(base + index);
        }
    }
}
