use super::{listen, ListenerGuard};
use crate::core::PointerTracker;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub surface: web::HtmlElement,
    pub pointer: Rc<RefCell<PointerTracker>>,
}

/// Mouse and touch move handlers writing the shared pointer state.
///
/// The frame loop only reads the tracker; handlers only write it.
pub fn wire_pointer_handlers(w: &PointerWiring) -> Vec<ListenerGuard> {
    vec![wire_mousemove(w), wire_touchmove(w)]
}

fn wire_mousemove(w: &PointerWiring) -> ListenerGuard {
    let w = w.clone();
    let target = w.surface.clone();
    listen(&target, "mousemove", move |ev: web::MouseEvent| {
        let (x, y) = input::mouse_client(&ev);
        apply(&w, x, y);
    })
}

fn wire_touchmove(w: &PointerWiring) -> ListenerGuard {
    let w = w.clone();
    let target = w.surface.clone();
    listen(&target, "touchmove", move |ev: web::TouchEvent| {
        if let Some((x, y)) = input::touch_client(&ev) {
            apply(&w, x, y);
        }
    })
}

fn apply(w: &PointerWiring, client_x: f32, client_y: f32) {
    let rect = input::surface_rect(&w.surface);
    if !w.pointer.borrow_mut().set_client(client_x, client_y, rect) {
        log::trace!("[input] ignored sample on {}x{} surface", rect.width, rect.height);
    }
}
