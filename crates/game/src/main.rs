//! Itza - a fly-through of a procedurally generated step pyramid.

mod config;
mod events;
mod props;
mod render;
mod session;
mod state;
mod update;

use anyhow::{Context, Result};
use engine_core::Time;
use input::InputState;
use procgen::{Landmark, LandmarkConfig};
use renderer::Renderer;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use config::ViewerConfig;
use session::Session;
use state::SceneMeshes;

/// Everything owned by the running viewer.
pub struct GameState {
    renderer: Renderer,
    input: InputState,
    time: Time,
    session: Session,
    meshes: SceneMeshes,
    window_title: String,
}

impl GameState {
    async fn new(window: Arc<Window>, config: &ViewerConfig, landmark: &Landmark) -> Result<Self> {
        let renderer = Renderer::new(window, config.vsync).await?;
        let meshes = SceneMeshes::upload(renderer.device(), landmark);

        let mut camera = config.camera();
        let (width, height) = renderer.dimensions();
        camera.set_aspect(width, height);

        Ok(Self {
            renderer,
            input: InputState::new(config.bindings()),
            time: Time::new(),
            session: Session::new(camera),
            meshes,
            window_title: String::new(),
        })
    }

    fn update(&mut self) {
        update::frame(self);
    }

    fn render(&mut self) -> Result<()> {
        render::run(self)
    }
}

/// Application handler for winit.
struct App {
    config: ViewerConfig,
    landmark: Landmark,
    state: Option<GameState>,
    /// Startup failure that ended the event loop, reported by `main`.
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: ViewerConfig, landmark: Landmark) -> Self {
        Self {
            config,
            landmark,
            state: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title("Itza")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window_width,
                    self.config.window_height,
                ));

            let window = match event_loop.create_window(window_attrs) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    self.fail(event_loop, anyhow::Error::new(e).context("failed to create window"));
                    return;
                }
            };

            let state = pollster::block_on(GameState::new(window.clone(), &self.config, &self.landmark));
            match state {
                Ok(s) => {
                    self.state = Some(s);
                    window.request_redraw();
                }
                Err(e) => self.fail(event_loop, e.context("failed to initialize viewer")),
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(state) = &mut self.state {
            if state.handle_window_event(event) || !state.session.running {
                event_loop.exit();
            }
        }
    }
}

/// Generate the landmark geometry. A bad configuration aborts before any
/// window or GPU work.
fn generate_landmark(config: &LandmarkConfig) -> Result<Landmark> {
    let landmark = Landmark::generate(config).context("landmark configuration rejected")?;
    log::info!("Landmark: {} triangles total", landmark.total_triangles());
    Ok(landmark)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                              Itza                                ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║  CONTROLS:                                                       ║");
    println!("║    W/S        - Forward/back   │  A/D        - Strafe            ║");
    println!("║    Q/E        - Up/down        │  Arrows     - Turn and tilt     ║");
    println!("║    Left Drag  - Look around    │  Space      - Switch scene      ║");
    println!("║    F          - Toggle fog     │  Escape     - Quit              ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");

    let config = ViewerConfig::load();
    log::info!("Starting Itza ({}x{}, vsync {})", config.window_width, config.window_height, config.vsync);

    let landmark = generate_landmark(&LandmarkConfig::default())?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, landmark);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procgen::{GenerationError, StairLayout};

    #[test]
    fn rejected_landmark_is_a_startup_error() {
        let config = LandmarkConfig {
            stairs: StairLayout {
                step_count: 1,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = generate_landmark(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GenerationError>(),
            Some(GenerationError::TooFewSteps(1))
        ));
        assert!(format!("{:#}", err).starts_with("landmark configuration rejected"));
    }

    #[test]
    fn default_landmark_starts() {
        let landmark = generate_landmark(&LandmarkConfig::default()).unwrap();
        assert_eq!(landmark.staircases.len(), 4);
    }
}
