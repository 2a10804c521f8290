use std::sync::Arc;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use amplituhedron::animation::AnimationDriver;
use amplituhedron::camera::OrbitCamera;
use amplituhedron::cli::Cli;
use amplituhedron::clock::Clock;
use amplituhedron::overlay::Overlay;
use amplituhedron::polytope;
use amplituhedron::renderer::HeroRenderer;
use amplituhedron::scene::SceneAssembly;
use amplituhedron::script::hero_script;
use amplituhedron::sequencer::Sequencer;

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;

/// The single application context: scene, camera, timeline, overlay
/// and animation driver, all constructed once at startup. No statics.
struct App {
    window: Option<Arc<Window>>,
    renderer: Option<HeroRenderer>,
    scene: SceneAssembly,
    camera: OrbitCamera,
    clock: Clock,
    sequencer: Sequencer,
    overlay: Overlay,
    driver: AnimationDriver,
}

impl App {
    fn new(scene: SceneAssembly, no_ui: bool) -> Self {
        let overlay = if no_ui {
            Overlay::disabled()
        } else {
            Overlay::new()
        };

        Self {
            window: None,
            renderer: None,
            scene,
            camera: OrbitCamera::new(INITIAL_WINDOW_WIDTH as f32 / INITIAL_WINDOW_HEIGHT as f32),
            clock: Clock::new(),
            sequencer: Sequencer::new(hero_script()),
            overlay,
            driver: AnimationDriver::new(),
        }
    }

    /// One frame: advance the schedule, fire due beats, sample tweens,
    /// then render with the current transform.
    fn redraw(&mut self) {
        let delta = self.clock.tick();
        self.sequencer
            .tick(self.clock.elapsed(), &mut self.overlay, &mut self.driver);
        self.driver.advance(delta, &mut self.scene.transform);

        let mvp = self.camera.view_projection() * self.scene.transform.matrix();
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if let Err(e) = renderer.render(mvp, window, &self.overlay) {
                log::error!("render error: {}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Amplituhedron")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(HeroRenderer::new(window.clone(), &self.scene))
            {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            self.camera.set_aspect(size.width, size.height);
            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui see the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
                self.camera.set_aspect(new_size.width, new_size.height);
            }
            WindowEvent::MouseInput { button, state, .. } => {
                self.camera.process_mouse_button(button, state);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.camera.process_cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.camera.process_scroll(delta);
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Degenerate clouds fail here; no re-sampling, fatal at startup.
    let (surface, edges) = polytope::build(&mut rng, cli.points, cli.bounds)?;
    let scene = SceneAssembly::new(&surface, &edges, cli.bounds);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(scene, cli.no_ui);

    log::info!("starting hero timeline ({} points)", cli.points);
    event_loop.run_app(&mut app)?;

    Ok(())
}
