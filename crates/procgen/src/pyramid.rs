//! Terraced step-pyramid body: stacked inset boxes capped by a temple.

use crate::cuboid::{emit_box, BOX_TRIANGLES};
use crate::error::{ensure_finite, ensure_positive, GenerationError};
use crate::mesh::{MeshBuffer, MeshBuilder};
use glam::Vec3;

/// Parameters of the terraced body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PyramidConfig {
    pub terrace_count: u32,
    /// Half width (X and Z) of the bottom terrace.
    pub base_half_extent: f32,
    /// Full height of each terrace.
    pub terrace_height: f32,
    /// How much each terrace's half extent shrinks relative to the one below.
    pub inset: f32,
    /// Half width (X and Z) of the temple.
    pub temple_half_extent: f32,
    /// Full height of the temple.
    pub temple_height: f32,
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self {
            terrace_count: 9,
            base_half_extent: 13.5,
            terrace_height: 1.4,
            inset: 1.2,
            temple_half_extent: 3.0,
            temple_height: 4.0,
        }
    }
}

/// One terrace level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerraceSpec {
    pub half_extent_xz: f32,
    pub half_height: f32,
    pub center_y: f32,
}

impl TerraceSpec {
    pub fn bottom_y(&self) -> f32 {
        self.center_y - self.half_height
    }

    pub fn top_y(&self) -> f32 {
        self.center_y + self.half_height
    }
}

impl PyramidConfig {
    /// Check every parameter before any geometry is built.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.terrace_count == 0 {
            return Err(GenerationError::NoTerraces);
        }
        ensure_positive("base_half_extent", self.base_half_extent)?;
        ensure_positive("terrace_height", self.terrace_height)?;
        ensure_positive("temple_half_extent", self.temple_half_extent)?;
        ensure_positive("temple_height", self.temple_height)?;
        ensure_finite("inset", self.inset)?;
        if self.terrace_count > 1 {
            // Strictly shrinking terraces need a positive inset.
            ensure_positive("inset", self.inset)?;
        }

        let top = self.terrace(self.terrace_count - 1);
        if top.half_extent_xz <= 0.0 {
            return Err(GenerationError::TerraceCollapsed {
                index: self.terrace_count - 1,
                half_extent: top.half_extent_xz,
                base: self.base_half_extent,
                inset: self.inset,
            });
        }
        if self.temple_half_extent > top.half_extent_xz {
            return Err(GenerationError::TempleOverhang {
                temple: self.temple_half_extent,
                top_terrace: top.half_extent_xz,
            });
        }
        Ok(())
    }

    /// Terrace `index` (0 = bottom). Does not validate.
    pub fn terrace(&self, index: u32) -> TerraceSpec {
        let half_height = self.terrace_height * 0.5;
        TerraceSpec {
            half_extent_xz: self.base_half_extent - index as f32 * self.inset,
            half_height,
            center_y: index as f32 * self.terrace_height + half_height,
        }
    }

    /// All terraces, bottom first.
    pub fn terraces(&self) -> impl Iterator<Item = TerraceSpec> + '_ {
        (0..self.terrace_count).map(|i| self.terrace(i))
    }

    /// Height of the terraced body, i.e. where the temple starts.
    pub fn terraces_height(&self) -> f32 {
        self.terrace_count as f32 * self.terrace_height
    }

    /// Temple sits on the top terrace.
    pub fn temple_center_y(&self) -> f32 {
        self.terraces_height() + self.temple_height * 0.5
    }

    /// Vertical extent `(bottom, top)` of the temple.
    pub fn temple_vertical_range(&self) -> (f32, f32) {
        (self.terraces_height(), self.terraces_height() + self.temple_height)
    }

    /// Half extents of the temple box.
    pub fn temple_half_extents(&self) -> Vec3 {
        Vec3::new(
            self.temple_half_extent,
            self.temple_height * 0.5,
            self.temple_half_extent,
        )
    }
}

/// Build the whole body: every terrace, then the temple.
///
/// Output is deterministic: the same config reproduces the same vertex
/// sequence bit for bit.
pub fn generate_pyramid(config: &PyramidConfig) -> Result<MeshBuffer, GenerationError> {
    config.validate()?;

    let boxes = config.terrace_count as usize + 1;
    let mut builder = MeshBuilder::with_triangle_capacity(boxes * BOX_TRIANGLES);
    for terrace in config.terraces() {
        emit_box(
            &mut builder,
            Vec3::new(terrace.half_extent_xz, terrace.half_height, terrace.half_extent_xz),
            Vec3::new(0.0, terrace.center_y, 0.0),
        );
    }
    emit_box(
        &mut builder,
        config.temple_half_extents(),
        Vec3::new(0.0, config.temple_center_y(), 0.0),
    );

    log::debug!(
        "Pyramid: {} terraces + temple, {} triangles",
        config.terrace_count,
        builder.vertex_count() / 3
    );
    Ok(builder.finish())
}
