use crate::bucket::SpatialBuckets;
use crate::color::ColorState;
use crate::config::SimConfig;
use crate::constants::{FLOATS_PER_PARTICLE, POINTER_KICK_CEILING};
use crate::field::DirectionField;
use crate::grid::GridGeometry;
use crate::mode::Mode;
use crate::pointer::PointerTracker;
use crate::pool::ParticlePool;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How the pointer pass picks its candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerPass {
    /// Only particles bucketed into touched cells.
    #[default]
    Bucketed,
    /// Every particle; for comparison.
    BruteForce,
}

/// What one [`Simulation::step`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub pointer_engaged: bool,
    pub buckets_rebuilt: bool,
    pub touched_cells: usize,
    pub influenced: usize,
    pub advected: bool,
}

/// Everything the frame loop mutates, owned in one place.
pub struct Simulation {
    config: SimConfig,
    pool: ParticlePool,
    field: DirectionField,
    field_geom: GridGeometry,
    pointer: PointerTracker,
    buckets: SpatialBuckets,
    colors: ColorState,
    mode: Mode,
    pointer_pass: PointerPass,
    width: f32,
    height: f32,
    frame: u64,
    alignment_factor: f32,
    random_accel_factor: f32,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: SimConfig, width: f32, height: f32) -> Self {
        Self::with_rng(config, width, height, StdRng::from_entropy())
    }

    pub fn with_rng(config: SimConfig, width: f32, height: f32, mut rng: StdRng) -> Self {
        let pool = ParticlePool::random(
            config.num_particles,
            width,
            height,
            config.max_speed,
            &mut rng,
        );
        let field_geom = GridGeometry::new(config.grid_rows, config.grid_cols, width, height);
        let pointer_geom = GridGeometry::new(
            config.pointer_grid_rows,
            config.pointer_grid_cols,
            width,
            height,
        );
        let mut sim = Self {
            pool,
            field: DirectionField::new(config.grid_rows, config.grid_cols),
            field_geom,
            pointer: PointerTracker::new(
                config.pointer_radius,
                config.pointer_strength,
                config.pointer_decay,
            ),
            buckets: SpatialBuckets::new(pointer_geom),
            colors: ColorState::new(config.color_blend),
            mode: Mode::Flow,
            pointer_pass: PointerPass::Bucketed,
            width,
            height,
            frame: 0,
            alignment_factor: config.alignment_factor(),
            random_accel_factor: 0.0,
            rng,
            config,
        };
        sim.apply_mode(Mode::Flow);
        sim.buckets.rebuild(&sim.pool);
        sim
    }

    // ---------------- accessors ----------------

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    /// Direct particle access, mainly for seeding scenarios.
    #[inline]
    pub fn pool_mut(&mut self) -> &mut ParticlePool {
        &mut self.pool
    }

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.pool.len()
    }

    #[inline]
    pub fn field(&self) -> &DirectionField {
        &self.field
    }

    #[inline]
    pub fn field_mut(&mut self) -> &mut DirectionField {
        &mut self.field
    }

    #[inline]
    pub fn field_geometry(&self) -> &GridGeometry {
        &self.field_geom
    }

    #[inline]
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Tuning and reset access for the pointer trail.
    #[inline]
    pub fn pointer_mut(&mut self) -> &mut PointerTracker {
        &mut self.pointer
    }

    #[inline]
    pub fn buckets(&self) -> &SpatialBuckets {
        &self.buckets
    }

    #[inline]
    pub fn colors(&self) -> &ColorState {
        &self.colors
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn canvas_size(&self) -> [f32; 2] {
        [self.width, self.height]
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn alignment_factor(&self) -> f32 {
        self.alignment_factor
    }

    #[inline]
    pub fn random_accel_factor(&self) -> f32 {
        self.random_accel_factor
    }

    /// Override the jitter magnitude until the next mode switch.
    #[inline]
    pub fn set_random_accel_factor(&mut self, factor: f32) {
        self.random_accel_factor = factor;
    }

    #[inline]
    pub fn pointer_pass(&self) -> PointerPass {
        self.pointer_pass
    }

    // ---------------- modes ----------------

    /// Rewrite the field targets, jitter and target colors for `mode`.
    pub fn apply_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.random_accel_factor = self.alignment_factor * mode.jitter_ratio();
        self.colors.set_targets(mode.tint(), mode.glow());
        self.shape_field();
        log::info!("[sim] mode={}", mode.name());
    }

    pub fn set_flow_mode(&mut self) {
        self.apply_mode(Mode::Flow);
    }

    pub fn set_blue_flow_mode(&mut self) {
        self.apply_mode(Mode::BlueFlow);
    }

    pub fn set_straight_mode(&mut self) {
        self.apply_mode(Mode::Straight);
    }

    pub fn set_rotate_mode(&mut self) {
        self.apply_mode(Mode::Rotate);
    }

    /// Wave with freshly rolled row phases.
    pub fn set_wave_mode(&mut self) {
        let mode = Mode::wave(&mut self.rng);
        self.apply_mode(mode);
    }

    fn shape_field(&mut self) {
        self.mode.shape_field(
            &mut self.field,
            &self.field_geom,
            [self.width, self.height],
            self.config.max_speed,
            self.config.max_angular_velocity,
            &mut self.rng,
        );
    }

    // ---------------- population ----------------

    /// Add one batch of particles at random positions, at rest.
    pub fn grow(&mut self) -> usize {
        let batch = self.config.population_batch;
        self.pool.grow(batch, self.width, self.height, &mut self.rng);
        self.buckets.invalidate();
        log::info!("[sim] particles={}", self.pool.len());
        self.pool.len()
    }

    /// Remove one batch; ignored when no more than one batch remains.
    pub fn shrink(&mut self) -> bool {
        let removed = self.pool.shrink(self.config.population_batch);
        if removed {
            self.buckets.invalidate();
            log::info!("[sim] particles={}", self.pool.len());
        }
        removed
    }

    // ---------------- geometry ----------------

    /// New canvas size: regrid both grids and re-shape the field for the
    /// current mode. Particle data is left alone; wrapping pulls strays back.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.field_geom =
            GridGeometry::new(self.config.grid_rows, self.config.grid_cols, width, height);
        let pointer_geom = GridGeometry::new(
            self.buckets.geometry().rows,
            self.buckets.geometry().cols,
            width,
            height,
        );
        self.buckets.set_geometry(pointer_geom);
        self.shape_field();
        log::info!("[sim] resized to {}x{}", width, height);
    }

    /// Change the pointer bucketing resolution; values below 1 clamp to 1.
    pub fn set_pointer_grid(&mut self, rows: usize, cols: usize) -> (usize, usize) {
        let geom = GridGeometry::new(rows, cols, self.width, self.height);
        self.buckets.set_geometry(geom);
        self.buckets.rebuild(&self.pool);
        log::info!("[sim] pointer grid={}x{}", geom.rows, geom.cols);
        (geom.rows, geom.cols)
    }

    pub fn set_pointer_pass(&mut self, pass: PointerPass) {
        self.pointer_pass = pass;
        self.buckets.invalidate();
        log::info!("[sim] pointer pass={:?}", pass);
    }

    pub fn toggle_pointer_pass(&mut self) -> PointerPass {
        let next = match self.pointer_pass {
            PointerPass::Bucketed => PointerPass::BruteForce,
            PointerPass::BruteForce => PointerPass::Bucketed,
        };
        self.set_pointer_pass(next);
        next
    }

    /// Feed a canvas-space pointer position.
    pub fn pointer_moved(&mut self, pos: Vec2, now_ms: f64) -> bool {
        self.pointer.sample(pos, now_ms, self.pool.len())
    }

    // ---------------- frame ----------------

    /// Run the pre-render phases of a frame: color easing, pointer decay,
    /// touch marking and bucket rebuild, integration, pointer influence.
    ///
    /// Call [`end_frame`](Self::end_frame) after drawing.
    pub fn step(&mut self, now_ms: f64) -> StepReport {
        let mut report = StepReport::default();
        self.colors.ease();
        self.pointer.decay(now_ms);

        let engaged = self.pointer.is_engaged();
        report.pointer_engaged = engaged;
        if engaged && self.pointer_pass == PointerPass::Bucketed {
            self.buckets.clear_touched();
            if let Some((min, max)) = self.pointer.influence_bounds() {
                self.buckets.mark_touched(min, max);
            }
            report.buckets_rebuilt =
                self.buckets
                    .rebuild_if_due(&self.pool, now_ms, self.config.bucket_interval_ms);
            report.touched_cells = self.buckets.touched_cells().len();
        } else if !engaged {
            self.buckets.clear_touched();
        }

        integrate(
            self.pool.as_mut_slice(),
            &self.field,
            &self.field_geom,
            Motion {
                alignment: self.alignment_factor,
                jitter: self.random_accel_factor,
                max_speed: self.config.max_speed,
                width: self.width,
                height: self.height,
            },
            &mut self.rng,
        );

        if engaged {
            report.influenced = self.apply_pointer();
        }
        report
    }

    /// Count the frame and advect the field every `frame_interval` frames
    /// in flow modes. Returns whether the field moved.
    pub fn end_frame(&mut self) -> bool {
        self.frame += 1;
        if !self.mode.is_flow() || self.frame % self.config.frame_interval != 0 {
            return false;
        }
        self.field.advect(
            self.config.max_speed,
            self.config.max_angular_velocity,
            self.config.angular_velocity_noise,
            &mut self.rng,
        );
        true
    }

    /// A whole frame with nothing drawn in between.
    pub fn tick(&mut self, now_ms: f64) -> StepReport {
        let mut report = self.step(now_ms);
        report.advected = self.end_frame();
        report
    }

    fn apply_pointer(&mut self) -> usize {
        let max_speed = self.config.max_speed;
        let ceiling_sq = max_speed * max_speed * POINTER_KICK_CEILING;
        let live = self.pool.len();
        let data = self.pool.as_mut_slice();
        let mut influenced = 0;
        match self.pointer_pass {
            PointerPass::Bucketed => {
                for i in self.buckets.touched_particles(live) {
                    if kick(data, i, &self.pointer, max_speed, ceiling_sq) {
                        influenced += 1;
                    }
                }
            }
            PointerPass::BruteForce => {
                for i in 0..live {
                    if kick(data, i, &self.pointer, max_speed, ceiling_sq) {
                        influenced += 1;
                    }
                }
            }
        }
        influenced
    }
}

/// Per-frame motion constants for [`integrate`].
#[derive(Clone, Copy, Debug)]
pub struct Motion {
    pub alignment: f32,
    pub jitter: f32,
    pub max_speed: f32,
    pub width: f32,
    pub height: f32,
}

/// Steer, jitter, clamp and move every particle in `data`.
pub fn integrate<R: Rng + ?Sized>(
    data: &mut [f32],
    field: &DirectionField,
    geom: &GridGeometry,
    m: Motion,
    rng: &mut R,
) {
    let max_sq = m.max_speed * m.max_speed;
    let max_dist_sq = geom.max_center_dist_sq();
    for p in data.chunks_exact_mut(FLOATS_PER_PARTICLE) {
        let (mut x, mut y, mut vx, mut vy) = (p[0], p[1], p[2], p[3]);

        let (col, row) = geom.cell_coords(x, y);
        let [tx, ty] = field.target(row * geom.cols + col);
        let (cx, cy) = geom.cell_center(col, row);
        let dx = x - cx;
        let dy = y - cy;
        let t = 1.0 - ((dx * dx + dy * dy) / max_dist_sq).clamp(0.0, 1.0);
        let align = m.alignment * t * t;

        vx += (tx - vx) * align;
        vy += (ty - vy) * align;

        if m.jitter != 0.0 {
            vx += (rng.gen::<f32>() - 0.5) * m.jitter;
            vy += (rng.gen::<f32>() - 0.5) * m.jitter;
        }

        let sp2 = vx * vx + vy * vy;
        if sp2 > max_sq {
            let inv = m.max_speed / sp2.sqrt();
            vx *= inv;
            vy *= inv;
        }

        x = wrap(x + vx, m.width);
        y = wrap(y + vy, m.height);

        p[0] = x;
        p[1] = y;
        p[2] = vx;
        p[3] = vy;
    }
}

/// Toroidal wrap into `[0, extent)`.
#[inline]
pub fn wrap(v: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    let mut v = v;
    if v < 0.0 {
        v += extent;
    } else if v >= extent {
        v -= extent;
    }
    if v < 0.0 || v >= extent {
        // far outside (e.g. after the canvas shrank) or rounded onto the edge
        v = v.rem_euclid(extent);
        if v >= extent {
            v = 0.0;
        }
    }
    v
}

#[inline]
fn kick(
    data: &mut [f32],
    i: usize,
    pointer: &PointerTracker,
    max_speed: f32,
    ceiling_sq: f32,
) -> bool {
    let j = i * FLOATS_PER_PARTICLE;
    let Some(dv) = pointer.influence_at(Vec2::new(data[j], data[j + 1])) else {
        return false;
    };
    let mut vx = data[j + 2] + dv.x;
    let mut vy = data[j + 3] + dv.y;
    let sp2 = vx * vx + vy * vy;
    if sp2 > ceiling_sq {
        let inv = max_speed / sp2.sqrt();
        vx *= inv;
        vy *= inv;
    }
    data[j + 2] = vx;
    data[j + 3] = vy;
    true
}

#[cfg(test)]
mod tests {
    use super::wrap;

    #[test]
    fn wrap_crosses_each_edge_once() {
        assert_eq!(wrap(801.0, 800.0), 1.0);
        assert_eq!(wrap(-1.0, 800.0), 799.0);
        assert_eq!(wrap(800.0, 800.0), 0.0);
        assert_eq!(wrap(400.0, 800.0), 400.0);
    }

    #[test]
    fn wrap_handles_far_strays_and_rounding() {
        let v = wrap(2500.0, 800.0);
        assert!((0.0..800.0).contains(&v));
        assert!((v - 100.0).abs() < 1e-3);
        let tiny = wrap(-1e-9, 800.0);
        assert!((0.0..800.0).contains(&tiny));
        assert_eq!(wrap(5.0, 0.0), 0.0);
    }
}
