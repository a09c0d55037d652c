use crate::dom;
use crate::frame::FrameLoop;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_resize(frame_loop: &FrameLoop) {
    let ctx = frame_loop.ctx.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        ctx.borrow_mut().resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Pause while the tab is hidden; resume on return unless stopped by the page.
pub fn wire_visibility(frame_loop: &FrameLoop) {
    let frame_loop_cb = frame_loop.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let hidden = dom::page_hidden();
        log::info!("[loop] page hidden={}", hidden);
        frame_loop_cb.set_hidden(hidden);
    }) as Box<dyn FnMut()>);
    if let Some(doc) = dom::window_document() {
        _ = doc.add_event_listener_with_callback(
            "visibilitychange",
            closure.as_ref().unchecked_ref(),
        );
    }
    closure.forget();
}
