use glam::Vec2;

/// Map a viewport point into simulation space.
///
/// `rect_origin`/`rect_size` are the canvas' client rect in CSS pixels and
/// `sim_size` the simulation extent. `None` for a collapsed rect.
#[inline]
pub fn client_to_sim(
    client: [f32; 2],
    rect_origin: [f32; 2],
    rect_size: [f32; 2],
    sim_size: [f32; 2],
) -> Option<Vec2> {
    if rect_size[0] <= 0.0 || rect_size[1] <= 0.0 {
        return None;
    }
    let u = (client[0] - rect_origin[0]) / rect_size[0];
    let v = (client[1] - rect_origin[1]) / rect_size[1];
    Some(Vec2::new(u * sim_size[0], v * sim_size[1]))
}

/// Simulation extent for a canvas laid out at `css_size`: at least 1x1.
#[inline]
pub fn sim_extent(css_size: [f64; 2]) -> [f32; 2] {
    let clamp = |v: f64| if v.is_finite() && v >= 1.0 { v as f32 } else { 1.0 };
    [clamp(css_size[0]), clamp(css_size[1])]
}

/// Backing-store pixels for `css_size` at `dpr`.
#[inline]
pub fn backing_size(css_size: [f64; 2], dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_size[0] * dpr) as u32;
    let h = (css_size[1] * dpr) as u32;
    (w.max(1), h.max(1))
}
