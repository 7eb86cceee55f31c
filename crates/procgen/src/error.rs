//! Configuration errors raised before any geometry is emitted.

use thiserror::Error;

/// A generator configuration that cannot produce valid geometry.
///
/// Every variant is detected up front; generators never hand out a partially
/// built buffer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("parameter `{name}` must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("pyramid needs at least one terrace")]
    NoTerraces,

    #[error("terrace {index} would have half extent {half_extent} (base {base} - {index} * inset {inset})")]
    TerraceCollapsed {
        index: u32,
        half_extent: f32,
        base: f32,
        inset: f32,
    },

    #[error("temple half extent {temple} overhangs the top terrace half extent {top_terrace}")]
    TempleOverhang { temple: f32, top_terrace: f32 },

    #[error("staircase needs at least 2 steps, got {0}")]
    TooFewSteps(u32),

    #[error("staircase run is degenerate: z start {start} equals z end {end}")]
    DegenerateRun { start: f32, end: f32 },

    #[error("staircase narrows to {narrowest} at the top (width {width} - taper {taper})")]
    StairTooNarrow {
        width: f32,
        taper: f32,
        narrowest: f32,
    },

    #[error("staircase clamp at y = {max_stair_y} leaves no room for a step centred at {first_center_y}")]
    NoStepsFit { max_stair_y: f32, first_center_y: f32 },

    #[error("doorway {half_width} x {height} does not fit a temple face of half extent {temple_half_extent} and height {temple_height}")]
    DoorwayTooLarge {
        half_width: f32,
        height: f32,
        temple_half_extent: f32,
        temple_height: f32,
    },
}

/// Reject NaN and infinities.
pub(crate) fn ensure_finite(name: &'static str, value: f32) -> Result<f32, GenerationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GenerationError::NonFinite { name, value })
    }
}

/// Reject non-finite, zero and negative values.
pub(crate) fn ensure_positive(name: &'static str, value: f32) -> Result<f32, GenerationError> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(GenerationError::NonPositive { name, value })
    }
}
