pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod input;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_app::{remount, start, unmount};

#[cfg(target_arch = "wasm32")]
mod web_app {
    use crate::constants::CANVAS_ID;
    use crate::core::{
        build_scene, AnimationConfig, AnimationState, FrameClock, PointerTracker, SceneWrites,
    };
    use crate::events::{self, ListenerGuard, PointerWiring};
    use crate::{dom, frame, overlay};
    use instant::Instant;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    /// Everything a mounted view owns. Fields drop in order: listeners
    /// first so no handler writes into state that is being torn down.
    struct Mounted {
        _listeners: Vec<ListenerGuard>,
        _frame_loop: frame::FrameLoop,
        _loading: overlay::LoadingTimer,
    }

    thread_local! {
        static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
        // Bumped on every mount request and unmount; a mount that finds it
        // changed after awaiting the GPU abandons itself.
        static GENERATION: Cell<u64> = const { Cell::new(0) };
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("[mount] robot-head starting");
        spawn_mount();
        Ok(())
    }

    /// Tear down the view: listeners, frame loop, GPU state, loading timer.
    #[wasm_bindgen]
    pub fn unmount() {
        GENERATION.with(|g| g.set(g.get() + 1));
        let was_mounted = MOUNTED.with(|m| m.borrow_mut().take()).is_some();
        if was_mounted {
            log::info!("[mount] unmounted");
        }
    }

    /// Mount again after [`unmount`]; a no-op while mounted.
    #[wasm_bindgen]
    pub fn remount() {
        if MOUNTED.with(|m| m.borrow().is_some()) {
            log::debug!("[mount] already mounted");
            return;
        }
        spawn_mount();
    }

    fn spawn_mount() {
        let generation = GENERATION.with(|g| {
            g.set(g.get() + 1);
            g.get()
        });
        spawn_local(async move {
            match mount(generation).await {
                Ok(Some(m)) => MOUNTED.with(|slot| *slot.borrow_mut() = Some(m)),
                Ok(None) => log::info!("[mount] superseded before completion"),
                Err(e) => {
                    log::error!("[mount] init error: {:?}", e);
                    // the dropped timer will never dismiss the loading screen
                    if let Some(document) = dom::window_document() {
                        overlay::hide(&document);
                    }
                }
            }
        });
    }

    async fn mount(generation: u64) -> anyhow::Result<Option<Mounted>> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let loading = overlay::schedule_loading_screen(&document);
        dom::sync_canvas_backing_size(&canvas);

        let (scene, nodes) = build_scene();
        log::info!(
            "[mount] scene: {} nodes, {} lights",
            scene.nodes().len(),
            scene.lights().len()
        );
        let mut animation = AnimationState::new(AnimationConfig::default())?;
        animation.set_viewport(canvas.width(), canvas.height());

        let gpu = frame::init_gpu(&canvas, &scene).await;
        if GENERATION.with(Cell::get) != generation {
            return Ok(None);
        }

        let pointer = Rc::new(RefCell::new(PointerTracker::default()));
        let mut listeners = events::wire_pointer_handlers(&PointerWiring {
            surface: canvas.clone().into(),
            pointer: pointer.clone(),
        });
        listeners.extend(dom::wire_canvas_resize(&canvas));

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            animation,
            scene,
            nodes,
            writes: SceneWrites::default(),
            canvas,
            pointer,
            gpu,
            clock: FrameClock::default(),
            epoch: Instant::now(),
        }));
        let frame_loop = frame::start_loop(frame_ctx);
        log::info!("[mount] frame loop running");

        Ok(Some(Mounted {
            _listeners: listeners,
            _frame_loop: frame_loop,
            _loading: loading,
        }))
    }
}
