//! Temple entrances: a dark doorway slab on each face of the temple.

use crate::cuboid::{emit_box, BOX_TRIANGLES};
use crate::error::{ensure_positive, GenerationError};
use crate::mesh::{MeshBuffer, MeshBuilder};
use crate::pyramid::PyramidConfig;
use engine_core::Cardinal;
use glam::Vec3;

/// Size of one doorway opening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorwayConfig {
    pub half_width: f32,
    pub height: f32,
    /// How far the slab stands proud of the temple wall.
    pub depth: f32,
}

impl Default for DoorwayConfig {
    fn default() -> Self {
        Self {
            half_width: 0.9,
            height: 2.4,
            depth: 0.05,
        }
    }
}

impl DoorwayConfig {
    pub fn validate(&self, pyramid: &PyramidConfig) -> Result<(), GenerationError> {
        ensure_positive("doorway_half_width", self.half_width)?;
        ensure_positive("doorway_height", self.height)?;
        ensure_positive("doorway_depth", self.depth)?;
        if self.half_width >= pyramid.temple_half_extent || self.height >= pyramid.temple_height {
            return Err(GenerationError::DoorwayTooLarge {
                half_width: self.half_width,
                height: self.height,
                temple_half_extent: pyramid.temple_half_extent,
                temple_height: pyramid.temple_height,
            });
        }
        Ok(())
    }
}

/// Four doorway slabs, one per temple face, built on the +Z face and rotated.
pub fn generate_temple_doorways(
    pyramid: &PyramidConfig,
    doorway: &DoorwayConfig,
) -> Result<MeshBuffer, GenerationError> {
    pyramid.validate()?;
    doorway.validate(pyramid)?;

    let (temple_bottom, _) = pyramid.temple_vertical_range();
    let half_extents = Vec3::new(doorway.half_width, doorway.height * 0.5, doorway.depth * 0.5);
    let center = Vec3::new(
        0.0,
        temple_bottom + doorway.height * 0.5,
        pyramid.temple_half_extent + doorway.depth * 0.5,
    );

    let mut front = MeshBuilder::with_triangle_capacity(BOX_TRIANGLES);
    emit_box(&mut front, half_extents, center);
    let front = front.finish();

    let mut builder = MeshBuilder::with_triangle_capacity(4 * BOX_TRIANGLES);
    for dir in Cardinal::ALL {
        builder.extend_from(&front.rotated(dir));
    }
    Ok(builder.finish())
}
