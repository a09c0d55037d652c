use driftfield_core::Rgb;

/// Two stacked drop shadows in the glow color, wide then tight.
pub fn glow_filter(glow: Rgb) -> String {
    let c = glow.to_css();
    format!("drop-shadow(0px 0px 50px {c}) drop-shadow(0px 0px 10px {c})")
}
