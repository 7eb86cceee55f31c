//! Input handling: raw keyboard and mouse events become discrete [`InputAction`]s.
//!
//! Movement and rotation keys fire once per press and again on every OS
//! auto-repeat. Toggles and quit fire on the initial press only.

use glam::Vec2;
use std::collections::HashSet;

/// Something the session should do in response to input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Camera-local displacement in world units.
    Move { forward: f32, right: f32, up: f32 },
    /// Orientation change in degrees.
    Rotate { yaw: f32, pitch: f32 },
    ToggleScene,
    ToggleFog,
    Quit,
}

/// Step sizes applied per key press or per pixel of drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputBindings {
    /// World units per movement key press.
    pub move_step: f32,
    /// Degrees per arrow key press.
    pub rotate_step: f32,
    /// Degrees per pixel of pointer drag.
    pub drag_sensitivity: f32,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            move_step: 1.5,
            rotate_step: 3.0,
            drag_sensitivity: 0.3,
        }
    }
}

/// Manages input state and the queue of actions produced since the last drain.
#[derive(Debug, Default)]
pub struct InputState {
    bindings: InputBindings,

    /// Mouse buttons currently held.
    mouse_held: HashSet<MouseButton>,

    /// Mouse position in window coordinates, once known.
    mouse_position: Option<Vec2>,

    actions: Vec<InputAction>,
}

impl InputState {
    pub fn new(bindings: InputBindings) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    /// Process a keyboard event. `repeat` is true for OS auto-repeat presses.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        if state != ElementState::Pressed {
            return;
        }
        if let Some(action) = self.map_key(key, repeat) {
            self.actions.push(action);
        }
    }

    fn map_key(&self, key: KeyCode, repeat: bool) -> Option<InputAction> {
        let m = self.bindings.move_step;
        let r = self.bindings.rotate_step;
        let mv = |forward, right, up| Some(InputAction::Move { forward, right, up });
        let rot = |yaw, pitch| Some(InputAction::Rotate { yaw, pitch });
        match key {
            KeyCode::KeyW => mv(m, 0.0, 0.0),
            KeyCode::KeyS => mv(-m, 0.0, 0.0),
            KeyCode::KeyD => mv(0.0, m, 0.0),
            KeyCode::KeyA => mv(0.0, -m, 0.0),
            KeyCode::KeyQ => mv(0.0, 0.0, m),
            KeyCode::KeyE => mv(0.0, 0.0, -m),
            KeyCode::ArrowLeft => rot(-r, 0.0),
            KeyCode::ArrowRight => rot(r, 0.0),
            KeyCode::ArrowUp => rot(0.0, r),
            KeyCode::ArrowDown => rot(0.0, -r),
            KeyCode::Space if !repeat => Some(InputAction::ToggleScene),
            KeyCode::KeyF if !repeat => Some(InputAction::ToggleFog),
            KeyCode::Escape if !repeat => Some(InputAction::Quit),
            _ => None,
        }
    }

    /// Process a mouse button event.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.mouse_held.insert(button);
            }
            ElementState::Released => {
                self.mouse_held.remove(&button);
            }
        }
    }

    /// Process cursor position update. While the left button is held the
    /// movement since the previous position becomes a look rotation.
    pub fn process_cursor_position(&mut self, position: (f64, f64)) {
        let position = Vec2::new(position.0 as f32, position.1 as f32);
        if let Some(previous) = self.mouse_position {
            if self.is_mouse_held(MouseButton::Left) {
                let delta = position - previous;
                if delta != Vec2::ZERO {
                    let s = self.bindings.drag_sensitivity;
                    self.actions.push(InputAction::Rotate {
                        yaw: delta.x * s,
                        pitch: -delta.y * s,
                    });
                }
            }
        }
        self.mouse_position = Some(position);
    }

    /// Forget the cursor position, e.g. when it leaves the window.
    pub fn cursor_left(&mut self) {
        self.mouse_position = None;
    }

    /// Take every action produced since the last call, in arrival order.
    pub fn drain_actions(&mut self) -> Vec<InputAction> {
        std::mem::take(&mut self.actions)
    }

    /// Check if a mouse button is held.
    pub fn is_mouse_held(&self, button: MouseButton) -> bool {
        self.mouse_held.contains(&button)
    }
}

// Re-export for convenience
pub use winit::event::{ElementState, MouseButton};
pub use winit::keyboard::KeyCode;

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut InputState, key: KeyCode) {
        input.process_keyboard(key, ElementState::Pressed, false);
        input.process_keyboard(key, ElementState::Released, false);
    }

    #[test]
    fn movement_keys_map_to_fixed_steps() {
        let mut input = InputState::new(InputBindings::default());
        press(&mut input, KeyCode::KeyS);
        press(&mut input, KeyCode::KeyA);
        press(&mut input, KeyCode::KeyQ);
        assert_eq!(
            input.drain_actions(),
            vec![
                InputAction::Move { forward: -1.5, right: 0.0, up: 0.0 },
                InputAction::Move { forward: 0.0, right: -1.5, up: 0.0 },
                InputAction::Move { forward: 0.0, right: 0.0, up: 1.5 },
            ]
        );
        assert!(input.drain_actions().is_empty(), "drain empties the queue");
    }

    #[test]
    fn auto_repeat_moves_but_does_not_toggle() {
        let mut input = InputState::new(InputBindings::default());
        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed, false);
        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed, true);
        input.process_keyboard(KeyCode::Space, ElementState::Pressed, false);
        input.process_keyboard(KeyCode::Space, ElementState::Pressed, true);
        let actions = input.drain_actions();
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[2], InputAction::ToggleScene);
    }

    #[test]
    fn arrows_rotate_by_rotate_step() {
        let bindings = InputBindings { rotate_step: 5.0, ..Default::default() };
        let mut input = InputState::new(bindings);
        press(&mut input, KeyCode::ArrowRight);
        press(&mut input, KeyCode::ArrowDown);
        assert_eq!(
            input.drain_actions(),
            vec![
                InputAction::Rotate { yaw: 5.0, pitch: 0.0 },
                InputAction::Rotate { yaw: 0.0, pitch: -5.0 },
            ]
        );
    }

    #[test]
    fn left_drag_rotates_only_while_held() {
        let mut input = InputState::new(InputBindings::default());
        input.process_cursor_position((100.0, 100.0));
        input.process_cursor_position((110.0, 100.0));
        assert!(input.drain_actions().is_empty(), "hover without a button does nothing");

        input.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        input.process_cursor_position((120.0, 90.0));
        let actions = input.drain_actions();
        assert_eq!(actions.len(), 1);
        match actions[0] {
            InputAction::Rotate { yaw, pitch } => {
                assert!((yaw - 3.0).abs() < 1e-5);
                assert!((pitch - 3.0).abs() < 1e-5, "dragging up pitches up");
            }
            other => panic!("expected rotate, got {other:?}"),
        }

        input.process_mouse_button(MouseButton::Left, ElementState::Released);
        input.process_cursor_position((200.0, 200.0));
        assert!(input.drain_actions().is_empty());
    }

    #[test]
    fn control_keys() {
        let mut input = InputState::new(InputBindings::default());
        press(&mut input, KeyCode::KeyF);
        press(&mut input, KeyCode::Escape);
        press(&mut input, KeyCode::KeyZ);
        assert_eq!(
            input.drain_actions(),
            vec![InputAction::ToggleFog, InputAction::Quit]
        );
    }
}
