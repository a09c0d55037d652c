use crate::frame::FrameLoop;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

// Listen on the window: the canvas usually sits under page content.
pub fn wire_pointer_handlers(frame_loop: &FrameLoop, canvas: &web::HtmlCanvasElement) {
    let ctx = frame_loop.ctx.clone();
    let canvas = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut c = ctx.borrow_mut();
        let sim_size = c.sim.canvas_size();
        if let Some(pos) = dom::pointer_sim_pos(&ev, &canvas, sim_size) {
            c.pointer_moved(pos);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
