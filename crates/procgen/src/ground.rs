//! Flat ground plane at y = 0.

use crate::error::{ensure_positive, GenerationError};
use crate::mesh::{MeshBuffer, MeshBuilder};
use glam::Vec3;

/// Two up-facing triangles covering `[-half, half]` on X and Z.
pub fn generate_ground(half_extent: f32) -> Result<MeshBuffer, GenerationError> {
    let h = ensure_positive("ground_half_extent", half_extent)?;
    let mut builder = MeshBuilder::with_triangle_capacity(2);
    builder.push_quad(
        Vec3::new(-h, 0.0, -h),
        Vec3::new(-h, 0.0, h),
        Vec3::new(h, 0.0, h),
        Vec3::new(h, 0.0, -h),
        Vec3::Y,
    );
    Ok(builder.finish())
}
