//! Page-facing entry points, named after the globals the markup calls.

use crate::actions;
use crate::frame::FrameLoop;
use driftfield_core::{Action, PointerPass};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static APP: RefCell<Option<FrameLoop>> = const { RefCell::new(None) };
}

pub(crate) fn install(frame_loop: FrameLoop) {
    APP.with(|app| *app.borrow_mut() = Some(frame_loop));
}

/// Run `f` against the live loop; calls before init are no-ops.
fn with_app<T>(f: impl FnOnce(&FrameLoop) -> T) -> Option<T> {
    let frame_loop = APP.with(|app| app.borrow().clone());
    match frame_loop {
        Some(l) => Some(f(&l)),
        None => {
            log::warn!("[api] called before init");
            None
        }
    }
}

fn act(action: Action) {
    with_app(|l| actions::apply(l, action));
}

#[wasm_bindgen(js_name = setFlowMode)]
pub fn set_flow_mode() {
    act(Action::FlowMode);
}

#[wasm_bindgen(js_name = setBlueFlowMode)]
pub fn set_blue_flow_mode() {
    act(Action::BlueFlowMode);
}

#[wasm_bindgen(js_name = setStraightMode)]
pub fn set_straight_mode() {
    act(Action::StraightMode);
}

#[wasm_bindgen(js_name = setClockwiseCircleMode)]
pub fn set_clockwise_circle_mode() {
    act(Action::RotateMode);
}

#[wasm_bindgen(js_name = setWaveMode)]
pub fn set_wave_mode() {
    act(Action::WaveMode);
}

#[wasm_bindgen(js_name = add10k)]
pub fn add_10k() {
    act(Action::Grow);
}

#[wasm_bindgen(js_name = remove10k)]
pub fn remove_10k() {
    act(Action::Shrink);
}

#[wasm_bindgen(js_name = startAnimation)]
pub fn start_animation() {
    with_app(|l| l.start());
}

#[wasm_bindgen(js_name = stopAnimation)]
pub fn stop_animation() {
    with_app(|l| l.stop());
}

#[wasm_bindgen(js_name = toggleAnimation)]
pub fn toggle_animation() -> bool {
    with_app(|l| {
        l.toggle();
        l.is_running()
    })
    .unwrap_or(false)
}

#[wasm_bindgen(js_name = particleCount)]
pub fn particle_count() -> usize {
    with_app(|l| l.ctx.borrow().sim.particle_count()).unwrap_or(0)
}

/// Returns `{ rows, cols }` as actually applied.
#[wasm_bindgen(js_name = setMouseGrid)]
pub fn set_mouse_grid(rows: i32, cols: i32) -> JsValue {
    let applied = with_app(|l| {
        let rows = rows.max(1) as usize;
        let cols = cols.max(1) as usize;
        l.ctx.borrow_mut().sim.set_pointer_grid(rows, cols)
    });
    let Some((rows, cols)) = applied else {
        return JsValue::NULL;
    };
    let out = js_sys::Object::new();
    _ = js_sys::Reflect::set(&out, &"rows".into(), &JsValue::from(rows as u32));
    _ = js_sys::Reflect::set(&out, &"cols".into(), &JsValue::from(cols as u32));
    out.into()
}

#[wasm_bindgen(js_name = setUseCelledMouse)]
pub fn set_use_celled_mouse(enabled: bool) {
    let pass = if enabled {
        PointerPass::Bucketed
    } else {
        PointerPass::BruteForce
    };
    with_app(|l| l.ctx.borrow_mut().sim.set_pointer_pass(pass));
}

#[wasm_bindgen(js_name = toggleCelledMouse)]
pub fn toggle_celled_mouse() -> bool {
    with_app(|l| l.ctx.borrow_mut().sim.toggle_pointer_pass() == PointerPass::Bucketed)
        .unwrap_or(false)
}
