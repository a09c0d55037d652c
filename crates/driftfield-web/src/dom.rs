use crate::input;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CANVAS_ID: &str = "particleCanvas";
pub const COUNT_ID: &str = "particleCount";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the CSS-pixel extent used as simulation space.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> [f32; 2] {
    let rect = canvas.get_bounding_client_rect();
    let css = [rect.width(), rect.height()];
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let (w_px, h_px) = input::backing_size(css, dpr);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    input::sim_extent(css)
}

/// Push the population into `#particleCount`, if the page has one.
pub fn show_particle_count(count: usize) {
    if let Some(el) = window_document().and_then(|d| d.get_element_by_id(COUNT_ID)) {
        el.set_text_content(Some(&count.to_string()));
    }
}

pub fn set_canvas_filter(canvas: &web::HtmlCanvasElement, filter: &str) {
    _ = canvas.style().set_property("filter", filter);
}

#[inline]
pub fn page_hidden() -> bool {
    window_document().map(|d| d.hidden()).unwrap_or(false)
}

/// Pointer position in simulation space, relative to the canvas rect.
pub fn pointer_sim_pos(
    ev: &web::MouseEvent,
    canvas: &web::HtmlCanvasElement,
    sim_size: [f32; 2],
) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_sim(
        [ev.client_x() as f32, ev.client_y() as f32],
        [rect.left() as f32, rect.top() as f32],
        [rect.width() as f32, rect.height() as f32],
        sim_size,
    )
}
