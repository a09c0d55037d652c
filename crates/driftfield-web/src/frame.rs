use crate::dom;
use crate::style;
use driftfield_core::{GpuState, Scheduler, Simulation};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub sim: Simulation,
    pub scheduler: Scheduler,
    pub gpu: Option<GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub clock: Instant,
    last_filter: String,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        sim: Simulation,
        gpu: Option<GpuState<'a>>,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        Self {
            sim,
            scheduler: Scheduler::new(),
            gpu,
            canvas,
            clock: Instant::now(),
            last_filter: String::new(),
        }
    }

    /// Milliseconds on the clock shared by frames and pointer samples.
    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.clock.elapsed().as_secs_f64() * 1000.0
    }

    /// Pointer samples only count while the animation is enabled.
    pub fn pointer_moved(&mut self, pos: Vec2) {
        if !self.scheduler.is_enabled() {
            return;
        }
        let now = self.now_ms();
        self.sim.pointer_moved(pos, now);
    }

    pub fn resize(&mut self) {
        let [w, h] = dom::sync_canvas_backing_size(&self.canvas);
        if [w, h] != self.sim.canvas_size() {
            self.sim.resize(w, h);
        }
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
        }
    }

    pub fn frame(&mut self) {
        let now = self.now_ms();
        self.sim.step(now);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(&self.sim) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }

        self.sim.end_frame();
        self.update_glow();
    }

    fn update_glow(&mut self) {
        let filter = style::glow_filter(self.sim.colors().glow);
        if filter != self.last_filter {
            dom::set_canvas_filter(&self.canvas, &filter);
            self.last_filter = filter;
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuState<'static>> {
    let instance = wgpu::Instance::default();
    let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
        Ok(s) => s,
        Err(e) => {
            log::error!("WebGPU surface error: {:?}", e);
            return None;
        }
    };
    match GpuState::new(&instance, surface, canvas.width(), canvas.height()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// The requestAnimationFrame loop plus the context it drives.
#[derive(Clone)]
pub struct FrameLoop {
    pub ctx: Rc<RefCell<FrameContext<'static>>>,
    tick: Tick,
}

impl FrameLoop {
    pub fn new(ctx: Rc<RefCell<FrameContext<'static>>>) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let ctx_tick = ctx.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let again = {
                let mut c = ctx_tick.borrow_mut();
                c.frame();
                c.scheduler.end_of_frame()
            };
            if again {
                request_frame(&tick_clone);
            }
        }) as Box<dyn FnMut()>));
        Self { ctx, tick }
    }

    pub fn start(&self) {
        let arm = self.ctx.borrow_mut().scheduler.start();
        if arm {
            request_frame(&self.tick);
        }
    }

    pub fn stop(&self) {
        self.ctx.borrow_mut().scheduler.stop();
    }

    pub fn toggle(&self) {
        let arm = self.ctx.borrow_mut().scheduler.toggle();
        if arm {
            request_frame(&self.tick);
        }
    }

    pub fn set_hidden(&self, hidden: bool) {
        let arm = self.ctx.borrow_mut().scheduler.set_hidden(hidden);
        if arm {
            request_frame(&self.tick);
        }
    }

    pub fn is_running(&self) -> bool {
        self.ctx.borrow().scheduler.is_running()
    }
}

fn request_frame(tick: &Tick) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
