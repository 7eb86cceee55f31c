//! The running session: every piece of mutable viewer state, in one place.

use engine_core::{AnimationClock, RenderConfig, SceneState};
use input::InputAction;
use renderer::Camera;

/// Camera, scene, clock and fog switch. Passed explicitly to update and render.
#[derive(Debug, Clone)]
pub struct Session {
    pub camera: Camera,
    pub scene: SceneState,
    pub clock: AnimationClock,
    /// User fog switch; only has an effect in fog-eligible scenes.
    pub fog_enabled: bool,
    pub running: bool,
}

impl Session {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            scene: SceneState::default(),
            clock: AnimationClock::new(),
            fog_enabled: true,
            running: true,
        }
    }

    /// Apply one input action.
    pub fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::Move { forward, right, up } => self.camera.move_by(forward, right, up),
            InputAction::Rotate { yaw, pitch } => self.camera.rotate(yaw, pitch),
            InputAction::ToggleScene => {
                self.scene.toggle();
                log::info!("Scene: {}", self.scene.caption());
            }
            InputAction::ToggleFog => {
                self.fog_enabled = !self.fog_enabled;
                log::info!("Fog {}", if self.fog_enabled { "on" } else { "off" });
            }
            InputAction::Quit => {
                log::info!("Quit requested");
                self.running = false;
            }
        }
    }

    /// Advance the animation clock by one fixed tick.
    pub fn tick(&mut self, delta_seconds: f32) {
        self.clock.tick(delta_seconds);
    }

    /// Lighting, fog and palette for the current scene, re-derived on each call.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::for_scene(self.scene)
    }

    /// Whether fog is actually drawn this frame.
    pub fn fog_active(&self) -> bool {
        self.render_config().effective_fog(self.fog_enabled).is_some()
    }

    pub fn title(&self) -> String {
        format!("{} ({})", self.scene.caption(), if self.fog_active() { "fog" } else { "clear" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::FIXED_TICK_SECONDS;
    use glam::Vec3;

    fn session() -> Session {
        Session::new(Camera::new(Vec3::new(0.0, 10.0, 40.0), 180.0, 0.0))
    }

    #[test]
    fn facing_south_forward_move_increases_z() {
        let mut s = session();
        s.apply(InputAction::Move { forward: 1.5, right: 0.0, up: 0.0 });
        let p = s.camera.position;
        assert!((p.z - 41.5).abs() < 1e-5, "z = {}", p.z);
        assert!(p.x.abs() < 1e-5);
        assert_eq!(p.y, 10.0);
    }

    #[test]
    fn vertical_move_ignores_orientation() {
        let mut s = session();
        s.camera.set_yaw_pitch(37.0, 60.0);
        s.apply(InputAction::Move { forward: 0.0, right: 0.0, up: -1.5 });
        assert_eq!(s.camera.position, Vec3::new(0.0, 8.5, 40.0));
    }

    #[test]
    fn pitch_clamps_through_actions() {
        let mut s = session();
        for _ in 0..100 {
            s.apply(InputAction::Rotate { yaw: 10.0, pitch: 10.0 });
        }
        assert_eq!(s.camera.pitch(), 89.0);
        assert_eq!(s.camera.yaw(), 1180.0);
    }

    #[test]
    fn scene_toggle_switches_config_immediately() {
        let mut s = session();
        assert_eq!(s.scene, SceneState::Ancient);
        assert!(s.fog_active());
        s.apply(InputAction::ToggleScene);
        assert_eq!(s.scene, SceneState::Modern);
        assert!(!s.fog_active(), "modern scene is never fogged");
        assert!(s.render_config().headlight.is_none());
        s.apply(InputAction::ToggleScene);
        assert_eq!(s.scene, SceneState::Ancient);
    }

    #[test]
    fn fog_needs_both_switch_and_eligible_scene() {
        let mut s = session();
        s.apply(InputAction::ToggleFog);
        assert!(!s.fog_active());
        s.apply(InputAction::ToggleScene);
        s.apply(InputAction::ToggleFog);
        assert!(s.fog_enabled);
        assert!(!s.fog_active());
        s.apply(InputAction::ToggleScene);
        assert!(s.fog_active());
    }

    #[test]
    fn quit_stops_session() {
        let mut s = session();
        s.apply(InputAction::Quit);
        assert!(!s.running);
    }

    #[test]
    fn ticks_drive_clock() {
        let mut s = session();
        for _ in 0..10 {
            s.tick(FIXED_TICK_SECONDS);
        }
        assert_eq!(s.clock.ticks(), 10);
        assert!((s.clock.time() - 0.16).abs() < 1e-5);
    }

    #[test]
    fn title_carries_caption() {
        let s = session();
        assert!(s.title().starts_with(SceneState::Ancient.caption()));
    }
}
