#![cfg(target_arch = "wasm32")]
//! Browser front-end: a full-page WebGPU canvas behind the page content.

mod actions;
mod api;
mod config;
mod dom;
mod events;
mod frame;
mod input;
mod style;

use driftfield_core::Simulation;
use frame::{FrameContext, FrameLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("driftfield-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document)?;

    let [w, h] = dom::sync_canvas_backing_size(&canvas);
    let cfg = config::load(&window);
    let sim = Simulation::new(cfg, w, h);
    log::info!(
        "[init] {}x{} css px, {} particles",
        w,
        h,
        sim.particle_count()
    );

    // Keep simulating without a GPU so the API and counters still work.
    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("[init] WebGPU unavailable; running headless");
    }

    let ctx = Rc::new(RefCell::new(FrameContext::new(sim, gpu, canvas.clone())));
    let frame_loop = FrameLoop::new(ctx);

    events::wire_pointer_handlers(&frame_loop, &canvas);
    events::wire_global_keydown(&frame_loop);
    events::wire_resize(&frame_loop);
    events::wire_visibility(&frame_loop);

    dom::show_particle_count(frame_loop.ctx.borrow().sim.particle_count());
    api::install(frame_loop.clone());

    frame_loop.set_hidden(dom::page_hidden());
    frame_loop.start();
    Ok(())
}
