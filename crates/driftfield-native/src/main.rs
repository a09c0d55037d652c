//! Desktop window hosting the same simulation and renderer as the web page.

mod overrides;
mod scene;

use std::sync::Arc;

use driftfield_core::{action_for_key, apply_to_sim, Action, GpuState, Simulation};
use scene::Scene;
use glam::Vec2;
use instant::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

const TITLE: &str = "driftfield";

struct Running {
    window: Arc<Window>,
    scene: Scene,
}

struct App {
    running: Option<Running>,
    clock: Instant,
}

impl App {
    fn new() -> Self {
        Self {
            running: None,
            clock: Instant::now(),
        }
    }

    fn now_ms(&self) -> f64 {
        self.clock.elapsed().as_secs_f64() * 1000.0
    }

    fn init(event_loop: &ActiveEventLoop) -> anyhow::Result<Running> {
        let attrs = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(LogicalSize::new(1280.0, 800.0));
        let window = Arc::new(event_loop.create_window(attrs)?);
        let size = window.inner_size();

        // Keep simulating without a GPU, as the page does.
        let gpu = match init_gpu(window.clone()) {
            Ok(g) => Some(g),
            Err(e) => {
                log::error!("[gpu] init error: {:?}", e);
                None
            }
        };

        let logical = size.to_logical::<f32>(window.scale_factor());
        let cfg = overrides::load(|name| std::env::var(name).ok());
        let sim = Simulation::new(cfg, logical.width.max(1.0), logical.height.max(1.0));
        log::info!(
            "[init] {}x{} logical px, {} particles",
            logical.width,
            logical.height,
            sim.particle_count()
        );
        Ok(Running {
            window,
            scene: Scene::new(sim, gpu),
        })
    }

    fn on_key(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        let key = match &event.logical_key {
            Key::Character(s) => s.as_str(),
            Key::Named(NamedKey::Space) => "Space",
            _ => return,
        };
        let Some(action) = action_for_key(key) else {
            return;
        };
        log::info!("[keys] {:?}", action);
        let Some(r) = &mut self.running else {
            return;
        };
        if apply_to_sim(&mut r.scene.sim, action) {
            if action.changes_population() {
                update_title(r);
            }
            return;
        }
        debug_assert_eq!(action, Action::ToggleAnimation);
        if r.scene.scheduler.toggle() {
            r.window.request_redraw();
        }
    }

    fn redraw(&mut self) {
        let now = self.now_ms();
        let Some(r) = &mut self.running else {
            return;
        };
        if r.scene.frame(now) {
            r.window.request_redraw();
        }
    }
}

fn init_gpu(window: Arc<Window>) -> anyhow::Result<GpuState<'static>> {
    let size = window.inner_size();
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(window)?;
    pollster::block_on(GpuState::new(&instance, surface, size.width, size.height))
}

fn update_title(r: &Running) {
    r.window
        .set_title(&format!("{TITLE} ({} particles)", r.scene.sim.particle_count()));
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }
        match Self::init(event_loop) {
            Ok(mut r) => {
                update_title(&r);
                if r.scene.scheduler.start() {
                    r.window.request_redraw();
                }
                self.running = Some(r);
            }
            Err(e) => {
                log::error!("init error: {:?}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(r) = &mut self.running {
                    if let Some(gpu) = &mut r.scene.gpu {
                        gpu.resize_if_needed(size.width, size.height);
                    }
                    let logical = size.to_logical::<f32>(r.window.scale_factor());
                    r.scene
                        .sim
                        .resize(logical.width.max(1.0), logical.height.max(1.0));
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let now = self.now_ms();
                if let Some(r) = &mut self.running {
                    let p = position.to_logical::<f32>(r.window.scale_factor());
                    r.scene.pointer_moved(Vec2::new(p.x, p.y), now);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.on_key(&event),
            WindowEvent::Occluded(hidden) => {
                log::info!("[loop] window occluded={}", hidden);
                if let Some(r) = &mut self.running {
                    if r.scene.scheduler.set_hidden(hidden) {
                        r.window.request_redraw();
                    }
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}
