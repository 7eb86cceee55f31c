//! Window event handling for GameState.

use winit::event::WindowEvent;

impl crate::GameState {
    /// Handle a window event. Returns true if the app should exit.
    pub(crate) fn handle_window_event(&mut self, event: WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                self.session.running = false;
                true
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(size);
                self.session.camera.set_aspect(size.width, size.height);
                false
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let winit::keyboard::PhysicalKey::Code(key) = event.physical_key {
                    self.input.process_keyboard(key, event.state, event.repeat);
                }
                false
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.process_mouse_button(button, state);
                false
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.process_cursor_position((position.x, position.y));
                false
            }
            WindowEvent::CursorLeft { .. } => {
                self.input.cursor_left();
                false
            }
            WindowEvent::RedrawRequested => {
                self.update();
                if !self.session.running {
                    return true;
                }
                if let Err(e) = self.render() {
                    log::error!("Render error: {}", e);
                }
                self.renderer.window.request_redraw();
                false
            }
            _ => false,
        }
    }
}
