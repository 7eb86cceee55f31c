//! Scene state (Ancient/Modern) and the render configuration derived from it.
//!
//! Consumers call [`RenderConfig::for_scene`] every frame instead of caching
//! its result, so a toggle is visible on the very next frame.

use glam::Vec3;

/// Which era of the landmark is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneState {
    /// Night, overgrown jungle, moonlight and a camera headlight.
    #[default]
    Ancient,
    /// Day, landscaped tourist site under a bright sun.
    Modern,
}

impl SceneState {
    /// Flip to the other scene. No guards, no side effects beyond the enum.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// The opposite scene.
    pub fn toggled(self) -> Self {
        match self {
            SceneState::Ancient => SceneState::Modern,
            SceneState::Modern => SceneState::Ancient,
        }
    }

    /// Caption shown in the window title.
    pub fn caption(self) -> &'static str {
        match self {
            SceneState::Ancient => "Ancient Chichen Itza - Lost in the Jungle",
            SceneState::Modern => "Modern Chichen Itza - Tourist Landmark",
        }
    }
}

/// Positional light with fixed-function style colour terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
}

/// Spotlight bound to the camera; position and direction come from the camera each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Headlight {
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    /// Half-angle of the cone in degrees.
    pub cutoff_degrees: f32,
    /// Falloff exponent towards the cone edge.
    pub exponent: f32,
}

/// Linear distance fog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub color: [f32; 3],
    pub start: f32,
    pub end: f32,
}

/// Material colours for everything drawn in a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub ground: [f32; 3],
    pub stone: [f32; 3],
    pub doorway: [f32; 3],
    pub trunk: [f32; 3],
    pub canopy: [f32; 3],
    pub tourist_body: [f32; 3],
    pub tourist_head: [f32; 3],
    pub cloud: [f32; 3],
}

/// How many decorative props the scene places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropDensity {
    /// A dense ring of jungle trees, no visitors.
    Overgrown,
    /// A few landscaped trees, tourists and clouds.
    Landscaped,
}

/// Everything the renderer needs to know about the current scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub clear_color: [f32; 3],
    pub global_ambient: [f32; 3],
    pub key_light: PointLight,
    pub headlight: Option<Headlight>,
    /// Fog this scene allows; `None` means the scene is never fogged.
    pub fog: Option<Fog>,
    pub palette: Palette,
    pub prop_density: PropDensity,
}

const NIGHT_SKY: [f32; 3] = [0.02, 0.02, 0.08];
const DAY_SKY: [f32; 3] = [0.6, 0.8, 1.0];

impl RenderConfig {
    /// Derive the full configuration for a scene. Pure; call it every frame.
    pub fn for_scene(scene: SceneState) -> Self {
        match scene {
            SceneState::Ancient => Self {
                clear_color: NIGHT_SKY,
                global_ambient: [0.1, 0.1, 0.1],
                key_light: PointLight {
                    position: Vec3::new(30.0, 40.0, 10.0),
                    ambient: [0.05, 0.05, 0.15],
                    diffuse: [0.2, 0.2, 0.4],
                    specular: [0.2, 0.2, 0.4],
                },
                headlight: Some(Headlight {
                    diffuse: [0.9, 0.9, 0.8],
                    specular: [1.0, 1.0, 1.0],
                    cutoff_degrees: 30.0,
                    exponent: 10.0,
                }),
                fog: Some(Fog {
                    color: NIGHT_SKY,
                    start: 30.0,
                    end: 140.0,
                }),
                palette: Palette {
                    ground: [0.2, 0.15, 0.1],
                    stone: [0.6, 0.5, 0.4],
                    doorway: [0.08, 0.06, 0.05],
                    trunk: [0.35, 0.2, 0.1],
                    canopy: [0.05, 0.25, 0.05],
                    tourist_body: [0.2, 0.4, 0.8],
                    tourist_head: [1.0, 0.8, 0.6],
                    cloud: [0.3, 0.3, 0.35],
                },
                prop_density: PropDensity::Overgrown,
            },
            SceneState::Modern => Self {
                clear_color: DAY_SKY,
                global_ambient: [0.1, 0.1, 0.1],
                key_light: PointLight {
                    position: Vec3::new(0.0, 60.0, 30.0),
                    ambient: [0.3, 0.3, 0.3],
                    diffuse: [0.9, 0.9, 0.8],
                    specular: [0.6, 0.6, 0.5],
                },
                headlight: None,
                fog: None,
                palette: Palette {
                    ground: [0.4, 0.7, 0.3],
                    stone: [1.0, 0.95, 0.85],
                    doorway: [0.15, 0.12, 0.1],
                    trunk: [0.35, 0.2, 0.1],
                    canopy: [0.1, 0.5, 0.1],
                    tourist_body: [0.2, 0.4, 0.8],
                    tourist_head: [1.0, 0.8, 0.6],
                    cloud: [0.95, 0.95, 0.98],
                },
                prop_density: PropDensity::Landscaped,
            },
        }
    }

    /// Fog to apply this frame, given the user's fog switch.
    pub fn effective_fog(&self, fog_enabled: bool) -> Option<Fog> {
        if fog_enabled {
            self.fog
        } else {
            None
        }
    }
}
