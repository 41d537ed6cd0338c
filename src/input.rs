use crate::core::SurfaceRect;
use web_sys as web;

// ---------------- DOM → core pointer helpers ----------------
#[inline]
pub fn surface_rect(el: &web::Element) -> SurfaceRect {
    let rect = el.get_bounding_client_rect();
    SurfaceRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

#[inline]
pub fn mouse_client(ev: &web::MouseEvent) -> (f32, f32) {
    (ev.client_x() as f32, ev.client_y() as f32)
}

/// Client position of the first active touch, if any.
#[inline]
pub fn touch_client(ev: &web::TouchEvent) -> Option<(f32, f32)> {
    let touch = ev.touches().get(0)?;
    Some((touch.client_x() as f32, touch.client_y() as f32))
}
