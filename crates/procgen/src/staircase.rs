//! Corner staircases climbing the terraced body.
//!
//! A flight is laid out in a local frame facing +Z (climbing from
//! `base_z_start` towards `base_z_end`) and then rotated a quarter-turn
//! multiple about +Y. Generation stops at the first step whose centre would
//! rise above `max_stair_y`, which keeps every step below the temple.

use crate::cuboid::{emit_box, BOX_TRIANGLES};
use crate::error::{ensure_finite, ensure_positive, GenerationError};
use crate::mesh::{MeshBuffer, MeshBuilder};
use engine_core::Cardinal;
use glam::Vec3;

/// Steps reserved below the top of the body.
const CLAMP_STEPS: f32 = 3.0;

/// Parameters of one flight, shared by all four orientations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaircaseConfig {
    /// Height of the terraced body the flight climbs.
    pub pyramid_height: f32,
    pub step_count: u32,
    /// Height the first step rests on.
    pub base_y: f32,
    /// Local Z of the first step (outside the base).
    pub base_z_start: f32,
    /// Local Z the flight would reach at `t = 1`.
    pub base_z_end: f32,
    /// Width (along local X) of the first step.
    pub base_width: f32,
    /// Total narrowing from the first step to `t = 1`.
    pub width_taper: f32,
}

impl Default for StaircaseConfig {
    fn default() -> Self {
        Self {
            pyramid_height: 12.6,
            step_count: 36,
            base_y: 0.0,
            base_z_start: 14.7,
            base_z_end: 3.9,
            base_width: 4.0,
            width_taper: 1.0,
        }
    }
}

/// One emitted step, in the flight's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StairStep {
    pub center_y: f32,
    pub center_z: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
}

impl StairStep {
    pub fn top_y(&self) -> f32 {
        self.center_y + self.height * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.width * 0.5, self.height * 0.5, self.depth * 0.5)
    }

    pub fn center(&self) -> Vec3 {
        Vec3::new(0.0, self.center_y, self.center_z)
    }
}

impl StaircaseConfig {
    pub fn step_height(&self) -> f32 {
        self.pyramid_height / self.step_count as f32
    }

    /// No step centre may rise above this.
    pub fn max_stair_y(&self) -> f32 {
        self.pyramid_height - CLAMP_STEPS * self.step_height()
    }

    /// Depth of a step: the horizontal run between consecutive step centres.
    pub fn step_depth(&self) -> f32 {
        (self.base_z_end - self.base_z_start).abs() / (self.step_count - 1) as f32
    }

    /// Highest point any step of this flight can reach.
    pub fn max_step_top(&self) -> f32 {
        self.max_stair_y() + self.step_height() * 0.5
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.step_count < 2 {
            return Err(GenerationError::TooFewSteps(self.step_count));
        }
        ensure_positive("pyramid_height", self.pyramid_height)?;
        ensure_finite("base_y", self.base_y)?;
        ensure_finite("base_z_start", self.base_z_start)?;
        ensure_finite("base_z_end", self.base_z_end)?;
        ensure_positive("base_width", self.base_width)?;
        ensure_finite("width_taper", self.width_taper)?;

        if self.base_z_start == self.base_z_end {
            return Err(GenerationError::DegenerateRun {
                start: self.base_z_start,
                end: self.base_z_end,
            });
        }
        let narrowest = self.base_width - self.width_taper.max(0.0);
        if narrowest <= 0.0 {
            return Err(GenerationError::StairTooNarrow {
                width: self.base_width,
                taper: self.width_taper,
                narrowest,
            });
        }
        let first_center_y = self.step_center_y(0);
        if first_center_y > self.max_stair_y() {
            return Err(GenerationError::NoStepsFit {
                max_stair_y: self.max_stair_y(),
                first_center_y,
            });
        }
        Ok(())
    }

    fn step_center_y(&self, index: u32) -> f32 {
        self.base_y + (index as f32 + 0.5) * self.step_height()
    }

    /// Steps in climbing order, stopping before the first one above the clamp.
    pub fn steps(&self) -> Result<Vec<StairStep>, GenerationError> {
        self.validate()?;

        let max_y = self.max_stair_y();
        let height = self.step_height();
        let depth = self.step_depth();
        let last = (self.step_count - 1) as f32;

        // Each centre is the previous one plus one step height, so the step
        // after the last emitted one is exactly `last.center_y + height`.
        let mut steps = Vec::with_capacity(self.step_count as usize);
        let mut center_y = self.step_center_y(0);
        for i in 0..self.step_count {
            if center_y > max_y {
                log::trace!(
                    "Staircase clamped after {} of {} steps (y {} > {})",
                    i,
                    self.step_count,
                    center_y,
                    max_y
                );
                break;
            }
            let t = i as f32 / last;
            steps.push(StairStep {
                center_y,
                center_z: self.base_z_start + (self.base_z_end - self.base_z_start) * t,
                width: self.base_width - t * self.width_taper,
                depth,
                height,
            });
            center_y += height;
        }
        Ok(steps)
    }
}

/// Build one flight as boxes and rotate it into `orientation`.
pub fn generate_staircase(
    orientation: Cardinal,
    config: &StaircaseConfig,
) -> Result<MeshBuffer, GenerationError> {
    let steps = config.steps()?;
    let mut builder = MeshBuilder::with_triangle_capacity(steps.len() * BOX_TRIANGLES);
    for step in &steps {
        emit_box(&mut builder, step.half_extents(), step.center());
    }
    log::debug!(
        "Staircase {}°: {} of {} steps emitted",
        orientation.degrees(),
        steps.len(),
        config.step_count
    );
    Ok(builder.finish().rotated(orientation))
}
