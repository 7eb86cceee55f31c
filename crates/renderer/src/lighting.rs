//! Per-frame lighting and fog uniform, rebuilt from the scene's render config.

use crate::camera::Camera;
use bytemuck::{Pod, Zeroable};
use engine_core::RenderConfig;

/// Specular strength shared by all materials.
const MATERIAL_SPECULAR: f32 = 0.4;
/// Blinn-Phong exponent shared by all materials.
const MATERIAL_SHININESS: f32 = 30.0;

/// Lighting uniform (must match scene.wgsl `Lighting`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LightingUniform {
    pub global_ambient: [f32; 4],
    pub key_position: [f32; 4],
    pub key_ambient: [f32; 4],
    pub key_diffuse: [f32; 4],
    pub key_specular: [f32; 4],
    /// xyz = camera position, w = enabled (0 or 1)
    pub head_position: [f32; 4],
    /// xyz = camera direction, w = cos(cutoff)
    pub head_direction: [f32; 4],
    /// rgb = diffuse, w = spot exponent
    pub head_diffuse: [f32; 4],
    pub head_specular: [f32; 4],
    /// rgb = colour, w = enabled (0 or 1)
    pub fog_color: [f32; 4],
    /// x = start, y = end
    pub fog_range: [f32; 4],
    /// x = specular strength, y = shininess
    pub material: [f32; 4],
}

fn rgb(c: [f32; 3], w: f32) -> [f32; 4] {
    [c[0], c[1], c[2], w]
}

impl LightingUniform {
    /// Build from the current scene config, camera (for the headlight) and fog switch.
    pub fn new(config: &RenderConfig, camera: &Camera, fog_enabled: bool) -> Self {
        let key = &config.key_light;
        let mut uniform = Self {
            global_ambient: rgb(config.global_ambient, 1.0),
            key_position: [key.position.x, key.position.y, key.position.z, 1.0],
            key_ambient: rgb(key.ambient, 1.0),
            key_diffuse: rgb(key.diffuse, 1.0),
            key_specular: rgb(key.specular, 1.0),
            material: [MATERIAL_SPECULAR, MATERIAL_SHININESS, 0.0, 0.0],
            ..Zeroable::zeroed()
        };

        if let Some(head) = config.headlight {
            let pos = camera.position;
            let dir = camera.direction();
            uniform.head_position = [pos.x, pos.y, pos.z, 1.0];
            uniform.head_direction = [dir.x, dir.y, dir.z, head.cutoff_degrees.to_radians().cos()];
            uniform.head_diffuse = rgb(head.diffuse, head.exponent);
            uniform.head_specular = rgb(head.specular, 1.0);
        }

        if let Some(fog) = config.effective_fog(fog_enabled) {
            uniform.fog_color = rgb(fog.color, 1.0);
            uniform.fog_range = [fog.start, fog.end, 0.0, 0.0];
        }

        uniform
    }
}
