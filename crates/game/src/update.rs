//! Per-frame session advancement: input actions, then fixed clock ticks.

use engine_core::FIXED_TICK_SECONDS;

use crate::GameState;

/// Run one frame of update. Called from `GameState::update()`.
pub fn frame(state: &mut GameState) {
    state.time.update();

    for action in state.input.drain_actions() {
        state.session.apply(action);
    }

    while state.time.should_fixed_update() {
        state.session.tick(FIXED_TICK_SECONDS);
    }

    let title = state.session.title();
    if title != state.window_title {
        state.renderer.window.set_title(&title);
        state.window_title = title;
    }
}
