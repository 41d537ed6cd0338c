use crate::constants::{LOADING_DELAY_MS, LOADING_SCREEN_ID};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_SCREEN_ID) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_SCREEN_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Pending loading-screen dismissal; dropping it clears the timer.
pub struct LoadingTimer {
    handle: Option<i32>,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for LoadingTimer {
    fn drop(&mut self) {
        if let (Some(handle), Some(w)) = (self.handle, web::window()) {
            w.clear_timeout_with_handle(handle);
        }
    }
}

/// Show the loading screen now and hide it after [`LOADING_DELAY_MS`].
pub fn schedule_loading_screen(document: &web::Document) -> LoadingTimer {
    show(document);
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        hide(&doc);
        log::info!("[mount] loading screen dismissed");
    }) as Box<dyn FnMut()>);
    let handle = web::window().and_then(|w| {
        w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            LOADING_DELAY_MS,
        )
        .ok()
    });
    LoadingTimer {
        handle,
        _closure: closure,
    }
}
