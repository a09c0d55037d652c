//! Tint gradients, glow colors and their per-frame easing.

use crate::constants::MAX_GRADIENT_STOPS;

/// RGB in 0..=255 space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255.0, 255.0, 255.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Step toward `target` by `factor` of the remaining distance.
    #[inline]
    pub fn ease_toward(&mut self, target: Rgb, factor: f32) {
        self.r += (target.r - self.r) * factor;
        self.g += (target.g - self.g) * factor;
        self.b += (target.b - self.b) * factor;
    }

    #[inline]
    pub fn to_unit(self) -> [f32; 3] {
        [self.r / 255.0, self.g / 255.0, self.b / 255.0]
    }

    /// `rgb(r, g, b)` with truncated channels, for CSS.
    pub fn to_css(self) -> String {
        format!(
            "rgb({}, {}, {})",
            self.r.clamp(0.0, 255.0) as u8,
            self.g.clamp(0.0, 255.0) as u8,
            self.b.clamp(0.0, 255.0) as u8
        )
    }
}

/// Up to [`MAX_GRADIENT_STOPS`] colors sampled around the velocity angle.
/// A single stop renders as a flat tint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    stops: [Rgb; MAX_GRADIENT_STOPS],
    len: usize,
}

impl Gradient {
    /// Extra stops past the maximum are dropped; an empty slice yields white.
    pub fn new(stops: &[Rgb]) -> Self {
        let mut out = [Rgb::WHITE; MAX_GRADIENT_STOPS];
        let len = stops.len().min(MAX_GRADIENT_STOPS);
        out[..len].copy_from_slice(&stops[..len]);
        Self {
            stops: out,
            len: len.max(1),
        }
    }

    pub fn solid(color: Rgb) -> Self {
        Self::new(&[color])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn stops(&self) -> &[Rgb] {
        &self.stops[..self.len]
    }
}

/// Current colors chase their targets by a fixed fraction per frame.
#[derive(Clone, Debug)]
pub struct ColorState {
    pub tint: Gradient,
    pub tint_target: Gradient,
    pub glow: Rgb,
    pub glow_target: Rgb,
    blend: f32,
}

impl ColorState {
    pub fn new(blend: f32) -> Self {
        Self {
            tint: Gradient::solid(Rgb::WHITE),
            tint_target: Gradient::solid(Rgb::WHITE),
            glow: Rgb::WHITE,
            glow_target: Rgb::WHITE,
            blend,
        }
    }

    pub fn set_targets(&mut self, tint: &[Rgb], glow: Rgb) {
        self.tint_target = Gradient::new(tint);
        self.glow_target = glow;
    }

    /// One frame of exponential smoothing.
    ///
    /// The gradient takes the target's stop count immediately; each stop then
    /// eases from whatever color previously sat at that slot.
    pub fn ease(&mut self) {
        let len = self.tint_target.len;
        for i in 0..len {
            let target = self.tint_target.stops[i];
            self.tint.stops[i].ease_toward(target, self.blend);
        }
        self.tint.len = len;
        self.glow.ease_toward(self.glow_target, self.blend);
    }
}

// Palettes

pub const FLOW_TINT: &[Rgb] = &[
    Rgb::new(230.0, 120.0, 120.0), // soft red
    Rgb::new(230.0, 160.0, 110.0), // soft orange
    Rgb::new(230.0, 210.0, 120.0), // soft yellow
    Rgb::new(120.0, 200.0, 130.0), // soft green
    Rgb::new(110.0, 190.0, 210.0), // soft cyan
    Rgb::new(120.0, 140.0, 220.0), // soft blue
    Rgb::new(180.0, 130.0, 210.0), // soft violet
];

pub const STRAIGHT_TINT: &[Rgb] = &[Rgb::new(173.0, 216.0, 230.0)];

pub const WAVE_TINT: &[Rgb] = &[
    Rgb::new(170.0, 85.0, 210.0),
    Rgb::new(200.0, 90.0, 215.0),
    Rgb::new(225.0, 110.0, 200.0),
    Rgb::new(185.0, 95.0, 220.0),
    Rgb::new(153.0, 73.0, 196.0),
    Rgb::new(120.0, 95.0, 220.0),
    Rgb::new(100.0, 120.0, 235.0),
    Rgb::new(135.0, 100.0, 220.0),
];

pub const FLOW_GLOW: Rgb = Rgb::WHITE;
pub const STRAIGHT_GLOW: Rgb = Rgb::new(56.0, 90.0, 242.0);
pub const WAVE_GLOW: Rgb = Rgb::new(66.0, 123.0, 255.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_approaches_without_overshoot() {
        let mut c = Rgb::new(0.0, 0.0, 0.0);
        let target = Rgb::new(100.0, 200.0, 50.0);
        let mut prev = c;
        for _ in 0..200 {
            c.ease_toward(target, 0.05);
            assert!(c.r >= prev.r && c.r <= target.r);
            assert!(c.g >= prev.g && c.g <= target.g);
            prev = c;
        }
        assert!((c.r - target.r).abs() < 0.01);
    }

    #[test]
    fn gradient_caps_stop_count() {
        let many = [Rgb::WHITE; MAX_GRADIENT_STOPS + 4];
        assert_eq!(Gradient::new(&many).len(), MAX_GRADIENT_STOPS);
        assert_eq!(Gradient::new(&[]).len(), 1);
    }

    #[test]
    fn css_truncates_channels() {
        assert_eq!(Rgb::new(56.9, 90.2, 300.0).to_css(), "rgb(56, 90, 255)");
    }
}
