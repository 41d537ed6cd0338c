use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::events::{self, ListenerGuard};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().clamp(1.0, MAX_DEVICE_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Keep the canvas backing size in step with its CSS size until the guard drops.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) -> Option<ListenerGuard> {
    sync_canvas_backing_size(canvas);
    let window = web::window()?;
    let canvas = canvas.clone();
    Some(events::listen(&window, "resize", move |_: web::Event| {
        sync_canvas_backing_size(&canvas);
    }))
}
