//! Axis-aligned box generator, the building block of every landmark mesh.

use crate::mesh::{MeshBuffer, MeshBuilder};
use glam::Vec3;

/// Triangles emitted per box.
pub const BOX_TRIANGLES: usize = 12;
/// Vertices emitted per box.
pub const BOX_VERTICES: usize = BOX_TRIANGLES * 3;

/// Each face as (outward normal, u, v) with `u x v == normal`, so the quad
/// `-u-v, +u-v, +u+v, -u+v` winds counter-clockwise seen from outside.
/// Order: top, bottom, front (+Z), back, left (-X), right (+X).
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::X, Vec3::Y, Vec3::Z),
];

/// Append a closed box (12 triangles, per-face axis normals) to `builder`.
pub fn emit_box(builder: &mut MeshBuilder, half_extents: Vec3, center: Vec3) {
    for (normal, u, v) in FACES {
        let face_center = center + normal * half_extents;
        let du = u * half_extents;
        let dv = v * half_extents;
        builder.push_quad(
            face_center - du - dv,
            face_center + du - dv,
            face_center + du + dv,
            face_center - du + dv,
            normal,
        );
    }
}

/// A buffer holding a single box.
pub fn generate_box(half_extents: Vec3, center: Vec3) -> MeshBuffer {
    let mut builder = MeshBuilder::with_triangle_capacity(BOX_TRIANGLES);
    emit_box(&mut builder, half_extents, center);
    builder.finish()
}

/// Unit cube centred at the origin, used for instanced props.
pub fn unit_cube() -> MeshBuffer {
    generate_box(Vec3::splat(0.5), Vec3::ZERO)
}
