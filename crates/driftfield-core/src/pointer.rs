//! Pointer trail, velocity estimate and rest decay.

use crate::constants::*;
use glam::Vec2;
use smallvec::SmallVec;

pub type Trail = SmallVec<[Vec2; 8]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerPhase {
    #[default]
    Idle,
    Active,
    Decaying,
}

#[derive(Clone, Debug)]
pub struct PointerTracker {
    trail: Trail,
    velocity: Vec2,
    phase: PointerPhase,
    last_move_ms: f64,
    last_sample_ms: Option<f64>,
    pub radius: f32,
    pub strength: f32,
    decay: f32,
}

impl PointerTracker {
    pub fn new(radius: f32, strength: f32, decay: f32) -> Self {
        Self {
            trail: Trail::new(),
            velocity: Vec2::ZERO,
            phase: PointerPhase::Idle,
            last_move_ms: 0.0,
            last_sample_ms: None,
            radius,
            strength,
            decay,
        }
    }

    #[inline]
    pub fn phase(&self) -> PointerPhase {
        self.phase
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn trail(&self) -> &[Vec2] {
        &self.trail
    }

    /// Trail cap for the given population.
    #[inline]
    pub fn trail_cap(particle_count: usize) -> usize {
        if particle_count >= TRAIL_DENSE_THRESHOLD {
            TRAIL_LEN_DENSE
        } else {
            TRAIL_LEN
        }
    }

    /// Record a canvas-space pointer position.
    ///
    /// Samples closer than ~8 ms to the previous accepted one are dropped.
    /// Returns whether the sample was taken.
    pub fn sample(&mut self, pos: Vec2, now_ms: f64, particle_count: usize) -> bool {
        if let Some(prev) = self.last_sample_ms {
            if now_ms - prev < POINTER_SAMPLE_MIN_MS {
                return false;
            }
        }
        self.last_sample_ms = Some(now_ms);

        let cap = Self::trail_cap(particle_count);
        self.trail.push(pos);
        while self.trail.len() > cap {
            self.trail.remove(0);
        }
        self.velocity = pos - self.trail[0];
        self.last_move_ms = now_ms;
        self.phase = PointerPhase::Active;
        true
    }

    /// Per-frame rest handling: once the pointer has been still past the grace
    /// period, shrink the velocity and eventually go idle.
    pub fn decay(&mut self, now_ms: f64) {
        if self.phase == PointerPhase::Idle || now_ms - self.last_move_ms <= POINTER_GRACE_MS {
            return;
        }
        self.velocity *= self.decay;
        self.phase = PointerPhase::Decaying;
        if self.velocity.length_squared() < POINTER_REST_EPSILON_SQ {
            self.reset();
        }
    }

    /// Drop the trail and velocity immediately.
    pub fn reset(&mut self) {
        self.velocity = Vec2::ZERO;
        self.trail.clear();
        self.phase = PointerPhase::Idle;
    }

    /// Whether the pointer should push particles this frame.
    #[inline]
    pub fn is_engaged(&self) -> bool {
        self.phase != PointerPhase::Idle && self.trail.len() >= 2 && self.velocity != Vec2::ZERO
    }

    /// Axis-aligned bounds of the trail grown by the influence radius.
    pub fn influence_bounds(&self) -> Option<(Vec2, Vec2)> {
        let first = *self.trail.first()?;
        let (min, max) = self
            .trail
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        let r = Vec2::splat(self.radius);
        Some((min - r, max + r))
    }

    /// Velocity kick for a particle at `p`, or `None` outside the radius.
    #[inline]
    pub fn influence_at(&self, p: Vec2) -> Option<Vec2> {
        let d2 = min_distance_to_polyline_sq(p, &self.trail);
        if d2 >= self.radius * self.radius {
            return None;
        }
        let u = 1.0 - d2.sqrt() / self.radius;
        Some(self.velocity * (u * u * self.strength))
    }
}

/// Squared distance from `p` to segment `ab`. A degenerate segment is a point.
#[inline]
pub fn distance_to_segment_sq(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return ap.length_squared();
    }
    let t = (ap.dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length_squared()
}

/// Minimum squared distance from `p` to consecutive segments of `pts`;
/// infinite with fewer than two points.
#[inline]
pub fn min_distance_to_polyline_sq(p: Vec2, pts: &[Vec2]) -> f32 {
    pts.windows(2)
        .map(|w| distance_to_segment_sq(p, w[0], w[1]))
        .fold(f32::INFINITY, f32::min)
}
