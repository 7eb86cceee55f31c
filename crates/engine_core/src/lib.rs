//! Core engine types and utilities for the Itza fly-through.
//!
//! This crate provides the foundational types used across all engine systems:
//! - Transform and quarter-turn orientation math
//! - Frame timing and the fixed-tick animation clock
//! - Scene state and the render configuration derived from it

pub mod clock;
pub mod scene;
pub mod time;
pub mod transform;

pub use clock::*;
pub use scene::*;
pub use time::*;
pub use transform::*;
