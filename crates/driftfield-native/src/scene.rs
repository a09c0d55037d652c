use driftfield_core::{GpuState, Rgb, Scheduler, Simulation};
use glam::Vec2;

/// Backdrop for the native window; the page version is transparent.
const BACKDROP: [f64; 3] = [0.02, 0.02, 0.035];
/// How much of the glow color bleeds into the backdrop.
const GLOW_TINT: f64 = 0.06;

/// Window-independent frame state: the simulation, the renderer if one could
/// be created, and the loop flags.
pub struct Scene {
    pub sim: Simulation,
    pub gpu: Option<GpuState<'static>>,
    pub scheduler: Scheduler,
}

impl Scene {
    pub fn new(sim: Simulation, gpu: Option<GpuState<'static>>) -> Self {
        Self {
            sim,
            gpu,
            scheduler: Scheduler::new(),
        }
    }

    /// Pointer samples only count while the animation is enabled.
    pub fn pointer_moved(&mut self, pos: Vec2, now_ms: f64) -> bool {
        if !self.scheduler.is_enabled() {
            return false;
        }
        self.sim.pointer_moved(pos, now_ms)
    }

    /// One frame; drawing is skipped without a GPU. Returns whether another
    /// redraw should be requested.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        self.sim.step(now_ms);
        if let Some(gpu) = &mut self.gpu {
            gpu.set_clear_color(backdrop(self.sim.colors().glow));
            match gpu.render(&self.sim) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
        self.sim.end_frame();
        self.scheduler.end_of_frame()
    }
}

pub fn backdrop(glow: Rgb) -> wgpu::Color {
    wgpu::Color {
        r: BACKDROP[0] + glow.r as f64 / 255.0 * GLOW_TINT,
        g: BACKDROP[1] + glow.g as f64 / 255.0 * GLOW_TINT,
        b: BACKDROP[2] + glow.b as f64 / 255.0 * GLOW_TINT,
        a: 1.0,
    }
}
