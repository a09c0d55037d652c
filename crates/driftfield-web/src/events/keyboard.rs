use crate::actions;
use crate::frame::FrameLoop;
use driftfield_core::action_for_key;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, frame_loop: &FrameLoop) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || ev.repeat() {
        return;
    }
    let key = ev.key();
    let Some(action) = action_for_key(&key) else {
        return;
    };
    log::info!("[keys] {:?}", action);
    actions::apply(frame_loop, action);
    if key == " " {
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(frame_loop: &FrameLoop) {
    if let Some(window) = web::window() {
        let frame_loop = frame_loop.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &frame_loop);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
