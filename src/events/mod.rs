pub mod pointer;

pub use pointer::{wire_pointer_handlers, PointerWiring};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener. Dropping the guard removes the listener and
/// releases the closure, so nothing fires after its owner is torn down.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Register `handler` for `event` on `target`; events of another type are ignored.
pub fn listen<E, F>(target: &web::EventTarget, event: &'static str, mut handler: F) -> ListenerGuard
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    ListenerGuard {
        target: target.clone(),
        event,
        closure,
    }
}
