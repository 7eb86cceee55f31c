//! Viewer configuration (window, camera, input). Loaded from config.ron at startup; never written.

use glam::Vec3;
use input::InputBindings;
use renderer::Camera;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Viewer settings. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Window width in logical pixels.
    pub window_width: u32,
    /// Window height in logical pixels.
    pub window_height: u32,
    /// Enable vsync (recommended to avoid tearing).
    pub vsync: bool,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub start_position: [f32; 3],
    /// Start heading in degrees. The default 0 looks down -Z, from the south
    /// side towards the pyramid at the origin; 180 would face away from it.
    pub start_yaw: f32,
    pub start_pitch: f32,
    /// World units per movement key press.
    pub move_step: f32,
    /// Degrees per arrow key press.
    pub rotate_step: f32,
    /// Degrees per pixel of left-button drag.
    pub drag_sensitivity: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let bindings = InputBindings::default();
        Self {
            window_width: 1280,
            window_height: 720,
            vsync: true,
            fov_degrees: 60.0,
            start_position: [0.0, 10.0, 40.0],
            start_yaw: 0.0,
            start_pitch: -10.0,
            move_step: bindings.move_step,
            rotate_step: bindings.rotate_step,
            drag_sensitivity: bindings.drag_sensitivity,
        }
    }
}

impl ViewerConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(data) => Self::parse(&data).unwrap_or_else(|e| {
                log::warn!("Invalid config at {:?}: {}, using defaults", path, e);
                Self::default()
            }),
            Err(_) => {
                log::debug!("No config at {:?}, using defaults", path);
                Self::default()
            }
        }
    }

    pub fn parse(data: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(data)
    }

    pub fn bindings(&self) -> InputBindings {
        InputBindings {
            move_step: self.move_step,
            rotate_step: self.rotate_step,
            drag_sensitivity: self.drag_sensitivity,
        }
    }

    /// Camera at the configured start pose.
    pub fn camera(&self) -> Camera {
        let mut camera = Camera::new(
            Vec3::from_array(self.start_position),
            self.start_yaw,
            self.start_pitch,
        );
        camera.fov_degrees = self.fov_degrees;
        camera.set_aspect(self.window_width, self.window_height);
        camera
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bindings() {
        let config = ViewerConfig::default();
        assert_eq!(config.move_step, 1.5);
        assert_eq!(config.drag_sensitivity, 0.3);
        assert_eq!(config.bindings(), InputBindings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config = ViewerConfig::parse("(vsync: false, move_step: 2.0)").unwrap();
        assert!(!config.vsync);
        assert_eq!(config.move_step, 2.0);
        assert_eq!(config.window_width, 1280);
    }

    #[test]
    fn invalid_file_is_an_error() {
        assert!(ViewerConfig::parse("(vsync: 12").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = ViewerConfig::load_from(Path::new("/nonexistent/config.ron"));
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn default_start_faces_the_pyramid() {
        let config = ViewerConfig::default();
        let camera = config.camera();
        let to_origin = -camera.position;
        let dir = camera.direction();
        assert!(dir.z < 0.0, "default heading {dir:?} looks away from the landmark");
        assert!(dir.dot(to_origin) > 0.0);

        let turned = ViewerConfig {
            start_yaw: 180.0,
            ..Default::default()
        };
        assert!(turned.camera().direction().z > 0.0);
    }

    #[test]
    fn start_pose_reaches_camera() {
        let config = ViewerConfig {
            start_position: [1.0, 2.0, 3.0],
            start_yaw: 180.0,
            start_pitch: 120.0,
            fov_degrees: 45.0,
            ..Default::default()
        };
        let camera = config.camera();
        assert_eq!(camera.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.yaw(), 180.0);
        assert_eq!(camera.pitch(), 89.0, "start pitch is clamped like any other");
        assert_eq!(camera.fov_degrees, 45.0);
    }
}
