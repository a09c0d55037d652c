use driftfield_core::SimConfig;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Name of the optional global holding numeric overrides.
pub const OVERRIDES_GLOBAL: &str = "DRIFTFIELD";

/// Defaults merged with `window.DRIFTFIELD`, if present.
///
/// Non-numeric values are skipped. An override set that fails validation is
/// dropped wholesale in favor of the defaults.
pub fn load(window: &web::Window) -> SimConfig {
    let defaults = SimConfig::default();
    let overrides = read_overrides(window);
    if overrides.is_empty() {
        return defaults;
    }
    match defaults.with_overrides(overrides.iter().map(|(k, v)| (k.as_str(), *v))) {
        Ok(cfg) => {
            log::info!("[config] applied {} override(s)", overrides.len());
            cfg
        }
        Err(e) => {
            log::warn!("[config] {e}; using defaults");
            defaults
        }
    }
}

fn read_overrides(window: &web::Window) -> Vec<(String, f64)> {
    let Ok(obj) = js_sys::Reflect::get(window, &JsValue::from_str(OVERRIDES_GLOBAL)) else {
        return Vec::new();
    };
    if !obj.is_object() {
        return Vec::new();
    }
    let mut out = Vec::new();
    for key in SimConfig::KEYS {
        let Ok(value) = js_sys::Reflect::get(&obj, &JsValue::from_str(key)) else {
            continue;
        };
        if value.is_undefined() {
            continue;
        }
        match value.as_f64() {
            Some(v) => out.push((key.to_string(), v)),
            None => log::warn!("[config] {key} is not a number; ignored"),
        }
    }
    out
}
