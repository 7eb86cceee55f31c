//! The whole landmark: body, four staircases, temple doorways and ground,
//! validated together and generated once at startup.

use crate::error::GenerationError;
use crate::ground::generate_ground;
use crate::mesh::MeshBuffer;
use crate::pyramid::{generate_pyramid, PyramidConfig};
use crate::staircase::{generate_staircase, StaircaseConfig};
use crate::temple::{generate_temple_doorways, DoorwayConfig};
use engine_core::Cardinal;

/// Staircase layout relative to the pyramid. The flight height is always
/// taken from the pyramid so the two cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StairLayout {
    pub step_count: u32,
    pub base_z_start: f32,
    pub base_z_end: f32,
    pub base_width: f32,
    pub width_taper: f32,
}

impl Default for StairLayout {
    fn default() -> Self {
        let stairs = StaircaseConfig::default();
        Self {
            step_count: stairs.step_count,
            base_z_start: stairs.base_z_start,
            base_z_end: stairs.base_z_end,
            base_width: stairs.base_width,
            width_taper: stairs.width_taper,
        }
    }
}

impl StairLayout {
    pub fn for_pyramid(&self, pyramid: &PyramidConfig) -> StaircaseConfig {
        StaircaseConfig {
            pyramid_height: pyramid.terraces_height(),
            step_count: self.step_count,
            base_y: 0.0,
            base_z_start: self.base_z_start,
            base_z_end: self.base_z_end,
            base_width: self.base_width,
            width_taper: self.width_taper,
        }
    }
}

/// Fixed numeric constants the landmark is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkConfig {
    pub pyramid: PyramidConfig,
    pub stairs: StairLayout,
    pub doorway: DoorwayConfig,
    pub ground_half_extent: f32,
}

impl Default for LandmarkConfig {
    fn default() -> Self {
        Self {
            pyramid: PyramidConfig::default(),
            stairs: StairLayout::default(),
            doorway: DoorwayConfig::default(),
            ground_half_extent: 80.0,
        }
    }
}

impl LandmarkConfig {
    /// Validate every generator and the couplings between them.
    pub fn validate(&self) -> Result<(), GenerationError> {
        self.pyramid.validate()?;
        let stairs = self.stairs.for_pyramid(&self.pyramid);
        stairs.validate()?;
        self.doorway.validate(&self.pyramid)?;

        // The flight height is the body height, so the clamp alone keeps the
        // highest step top at least 2.5 steps below the temple base.
        debug_assert!(
            stairs.max_step_top() < self.pyramid.temple_vertical_range().0,
            "stair clamp no longer tracks the temple base"
        );
        if !(self.ground_half_extent.is_finite() && self.ground_half_extent > 0.0) {
            return Err(GenerationError::NonPositive {
                name: "ground_half_extent",
                value: self.ground_half_extent,
            });
        }
        Ok(())
    }
}

/// Immutable geometry of the landmark, ready for upload.
#[derive(Debug, Clone)]
pub struct Landmark {
    pub body: MeshBuffer,
    pub staircases: Vec<(Cardinal, MeshBuffer)>,
    pub doorways: MeshBuffer,
    pub ground: MeshBuffer,
}

impl Landmark {
    /// Validate the whole configuration, then generate every buffer.
    pub fn generate(config: &LandmarkConfig) -> Result<Self, GenerationError> {
        config.validate()?;

        let body = generate_pyramid(&config.pyramid)?;
        let stairs = config.stairs.for_pyramid(&config.pyramid);
        let staircases = Cardinal::ALL
            .iter()
            .map(|&dir| generate_staircase(dir, &stairs).map(|mesh| (dir, mesh)))
            .collect::<Result<Vec<_>, _>>()?;
        let doorways = generate_temple_doorways(&config.pyramid, &config.doorway)?;
        let ground = generate_ground(config.ground_half_extent)?;

        let landmark = Self {
            body,
            staircases,
            doorways,
            ground,
        };
        log::info!(
            "Landmark generated: body {} tris, stairs {} x {} tris, doorways {} tris, ground {} tris",
            landmark.body.triangle_count(),
            landmark.staircases.len(),
            landmark.staircases.first().map_or(0, |(_, m)| m.triangle_count()),
            landmark.doorways.triangle_count(),
            landmark.ground.triangle_count()
        );
        Ok(landmark)
    }

    pub fn total_triangles(&self) -> usize {
        self.body.triangle_count()
            + self.staircases.iter().map(|(_, m)| m.triangle_count()).sum::<usize>()
            + self.doorways.triangle_count()
            + self.ground.triangle_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_landmark_generates() {
        let landmark = Landmark::generate(&LandmarkConfig::default()).unwrap();
        assert_eq!(landmark.staircases.len(), 4);
        assert_eq!(landmark.body.vertex_count(), 10 * 36);
        assert!(landmark.total_triangles() > landmark.body.triangle_count());
    }

    #[test]
    fn staircases_never_enter_the_temple_band() {
        let config = LandmarkConfig::default();
        let landmark = Landmark::generate(&config).unwrap();
        let (temple_base, _) = config.pyramid.temple_vertical_range();
        for (dir, mesh) in &landmark.staircases {
            let (_, hi) = mesh.bounds().unwrap();
            assert!(hi.y < temple_base, "{:?} reaches {}", dir, hi.y);
        }
    }

    #[test]
    fn stair_height_follows_pyramid() {
        let config = LandmarkConfig {
            pyramid: PyramidConfig {
                terrace_count: 5,
                ..Default::default()
            },
            ..Default::default()
        };
        let stairs = config.stairs.for_pyramid(&config.pyramid);
        assert!((stairs.pyramid_height - 7.0).abs() < 1e-5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn derived_flight_stays_below_temple_for_any_layout() {
        for terrace_count in 1..=30u32 {
            for step_count in 4..=200u32 {
                let config = LandmarkConfig {
                    pyramid: PyramidConfig {
                        terrace_count,
                        inset: 0.1,
                        ..Default::default()
                    },
                    stairs: StairLayout {
                        step_count,
                        ..Default::default()
                    },
                    ..Default::default()
                };
                assert!(config.validate().is_ok(), "{terrace_count} terraces, {step_count} steps");
                let stairs = config.stairs.for_pyramid(&config.pyramid);
                let (temple_base, _) = config.pyramid.temple_vertical_range();
                assert!(stairs.max_step_top() < temple_base);
            }
        }
    }

    #[test]
    fn flight_too_short_for_the_clamp_is_rejected() {
        // With 3 steps the clamp sits at y = 0, below the first step centre.
        let config = LandmarkConfig {
            stairs: StairLayout {
                step_count: 3,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenerationError::NoStepsFit { .. })
        ));
        assert!(Landmark::generate(&config).is_err());
    }

    #[test]
    fn oversized_doorway_fails_whole_landmark() {
        let config = LandmarkConfig {
            doorway: DoorwayConfig {
                height: 5.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            Landmark::generate(&config),
            Err(GenerationError::DoorwayTooLarge { .. })
        ));
    }

    #[test]
    fn invalid_part_fails_whole_landmark() {
        let config = LandmarkConfig {
            stairs: StairLayout {
                step_count: 1,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            Landmark::generate(&config),
            Err(GenerationError::TooFewSteps(1))
        ));

        let config = LandmarkConfig {
            ground_half_extent: -1.0,
            ..Default::default()
        };
        assert!(Landmark::generate(&config).is_err());
    }
}
