//! Motion presets selectable from the page.

use crate::color::*;
use crate::field::DirectionField;
use crate::grid::GridGeometry;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Slowly spinning random field, rainbow tint.
    Flow,
    /// Flow motion with the straight-mode glow.
    BlueFlow,
    /// Everything drifts left.
    Straight,
    /// Tangential swirl around the canvas center.
    Rotate,
    /// Per-row sine headings; `phase_seed` picks each row's phase.
    Wave { phase_seed: u64 },
}

impl Mode {
    /// Wave with a fresh random phase seed.
    pub fn wave<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Mode::Wave {
            phase_seed: rng.gen(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Flow => "flow",
            Mode::BlueFlow => "blue-flow",
            Mode::Straight => "straight",
            Mode::Rotate => "rotate",
            Mode::Wave { .. } => "wave",
        }
    }

    /// Flow-family modes keep advecting the field.
    pub fn is_flow(&self) -> bool {
        matches!(self, Mode::Flow | Mode::BlueFlow)
    }

    /// Jitter magnitude as a multiple of the alignment factor.
    pub fn jitter_ratio(&self) -> f32 {
        match self {
            Mode::Flow | Mode::BlueFlow => 1.0 / 15.0,
            Mode::Straight | Mode::Wave { .. } => 2.0,
            Mode::Rotate => 1.0 / 7.0,
        }
    }

    pub fn tint(&self) -> &'static [Rgb] {
        match self {
            Mode::Flow | Mode::BlueFlow => FLOW_TINT,
            Mode::Straight | Mode::Rotate => STRAIGHT_TINT,
            Mode::Wave { .. } => WAVE_TINT,
        }
    }

    pub fn glow(&self) -> Rgb {
        match self {
            Mode::Flow => FLOW_GLOW,
            Mode::BlueFlow | Mode::Straight | Mode::Rotate => STRAIGHT_GLOW,
            Mode::Wave { .. } => WAVE_GLOW,
        }
    }

    /// Per-row phases in `[0, PI)` derived from the wave seed.
    pub fn wave_phases(phase_seed: u64, rows: usize) -> Vec<f32> {
        let mut rng = StdRng::seed_from_u64(phase_seed);
        (0..rows).map(|_| rng.gen::<f32>() * PI).collect()
    }

    /// Rewrite every cell of `field` for this mode.
    pub fn shape_field<R: Rng + ?Sized>(
        &self,
        field: &mut DirectionField,
        geom: &GridGeometry,
        canvas: [f32; 2],
        max_speed: f32,
        max_ang_vel: f32,
        rng: &mut R,
    ) {
        match *self {
            Mode::Flow | Mode::BlueFlow => field.initialize(max_speed, max_ang_vel, rng),
            Mode::Straight => field.fill(-max_speed, 0.0),
            Mode::Rotate => field.fill_rotation(geom, canvas[0], canvas[1], max_speed),
            Mode::Wave { phase_seed } => {
                let phases = Mode::wave_phases(phase_seed, field.rows);
                field.fill_wave(geom, canvas[0], &phases, max_speed);
            }
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Flow
    }
}
