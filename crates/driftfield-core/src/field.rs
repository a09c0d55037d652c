use crate::grid::GridGeometry;
use rand::Rng;
use std::f32::consts::TAU;

/// Per-cell target velocities that particles are biased toward.
///
/// Stored as parallel arrays indexed by `row * cols + col`.
#[derive(Clone, Debug)]
pub struct DirectionField {
    pub rows: usize,
    pub cols: usize,
    angle: Vec<f32>,
    ang_vel: Vec<f32>,
    target_vx: Vec<f32>,
    target_vy: Vec<f32>,
}

impl DirectionField {
    /// All targets start at zero; call [`initialize`](Self::initialize) or apply a mode.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let n = rows * cols;
        Self {
            rows,
            cols,
            angle: vec![0.0; n],
            ang_vel: vec![0.0; n],
            target_vx: vec![0.0; n],
            target_vy: vec![0.0; n],
        }
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.angle.len()
    }

    #[inline]
    pub fn target(&self, idx: usize) -> [f32; 2] {
        [self.target_vx[idx], self.target_vy[idx]]
    }

    #[inline]
    pub fn angle(&self, idx: usize) -> f32 {
        self.angle[idx]
    }

    #[inline]
    pub fn angular_velocity(&self, idx: usize) -> f32 {
        self.ang_vel[idx]
    }

    /// Random headings and spin rates, targets at full speed.
    pub fn initialize<R: Rng + ?Sized>(&mut self, max_speed: f32, max_ang_vel: f32, rng: &mut R) {
        for i in 0..self.cell_count() {
            let a = rng.gen::<f32>() * TAU;
            self.angle[i] = if a >= TAU { 0.0 } else { a };
            self.ang_vel[i] = if max_ang_vel > 0.0 {
                rng.gen_range(-max_ang_vel..=max_ang_vel)
            } else {
                0.0
            };
            self.set_heading(i, self.angle[i], max_speed);
        }
    }

    /// Spin every cell by its angular velocity and jitter that velocity.
    pub fn advect<R: Rng + ?Sized>(
        &mut self,
        max_speed: f32,
        max_ang_vel: f32,
        noise: f32,
        rng: &mut R,
    ) {
        let limit = max_ang_vel.abs();
        for i in 0..self.cell_count() {
            let a = (self.angle[i] + self.ang_vel[i]).rem_euclid(TAU);
            self.angle[i] = if a >= TAU { 0.0 } else { a };
            let jitter = (rng.gen::<f32>() - 0.5) * noise;
            self.ang_vel[i] = (self.ang_vel[i] + jitter).clamp(-limit, limit);
            self.set_heading(i, self.angle[i], max_speed);
        }
    }

    /// Point a cell along `angle` at `speed`.
    #[inline]
    pub fn set_heading(&mut self, idx: usize, angle: f32, speed: f32) {
        self.angle[idx] = angle;
        self.target_vx[idx] = angle.cos() * speed;
        self.target_vy[idx] = angle.sin() * speed;
    }

    /// Overwrite a cell's target and stop its spin.
    #[inline]
    pub fn set_target(&mut self, idx: usize, vx: f32, vy: f32) {
        self.target_vx[idx] = vx;
        self.target_vy[idx] = vy;
        self.angle[idx] = vy.atan2(vx).rem_euclid(TAU);
        self.ang_vel[idx] = 0.0;
    }

    /// Same target everywhere.
    pub fn fill(&mut self, vx: f32, vy: f32) {
        for i in 0..self.cell_count() {
            self.set_target(i, vx, vy);
        }
    }

    /// Tangents around the canvas center; counter-clockwise as seen on a y-down canvas.
    pub fn fill_rotation(&mut self, geom: &GridGeometry, width: f32, height: f32, speed: f32) {
        let (cx, cy) = (width * 0.5, height * 0.5);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let (x, y) = geom.cell_center(col, row);
                let dx = x - cx;
                let dy = y - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                let idx = row * self.cols + col;
                if dist > 0.0 {
                    self.set_target(idx, dy / dist * speed, -dx / dist * speed);
                } else {
                    // tangent is undefined at the exact center
                    self.set_target(idx, speed, 0.0);
                }
            }
        }
    }

    /// Sinusoidal heading along x with one phase per row.
    ///
    /// The vertical component is stretched by 1.5, so these targets exceed
    /// `speed` in magnitude.
    pub fn fill_wave(&mut self, geom: &GridGeometry, width: f32, phases: &[f32], speed: f32) {
        let frequency = 3.0 * TAU / if width > 0.0 { width } else { 1.0 };
        for row in 0..self.rows {
            let phase = phases.get(row).copied().unwrap_or(0.0);
            for col in 0..self.cols {
                let (x, _) = geom.cell_center(col, row);
                let angle = (frequency * x + phase).sin();
                self.set_target(
                    row * self.cols + col,
                    angle.cos() * speed,
                    angle.sin() * speed * 1.5,
                );
            }
        }
    }
}
