use crate::core::{
    AnimationState, FrameClock, PointerTracker, RobotNodes, SceneGraph, SceneWrites,
};
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub animation: AnimationState,
    pub scene: SceneGraph,
    pub nodes: RobotNodes,
    pub writes: SceneWrites,

    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerTracker>>,
    pub gpu: Option<render::GpuState>,

    pub clock: FrameClock,
    pub epoch: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let time = self.clock.tick(self.epoch.elapsed().as_secs_f64());
        // Handlers only write the tracker; take one consistent copy per frame.
        let pointer = *self.pointer.borrow();

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.animation.set_viewport(w, h);
        self.animation
            .frame(time, pointer, &self.nodes, &mut self.writes);
        self.writes.apply(&mut self.scene);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            match g.render(
                &self.scene,
                self.animation.camera(),
                self.animation.particles().particles(),
            ) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[gpu] surface lost, reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("[gpu] render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &SceneGraph,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickClosure = Closure<dyn FnMut()>;

/// Running requestAnimationFrame loop. Dropping it cancels the pending
/// frame and releases the callback, which in turn releases the context.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<TickClosure>>>,
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure -> tick Rc cycle
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &RefCell<Option<TickClosure>>, raf_id: &Cell<Option<i32>>) {
    let id = match (tick.borrow().as_ref(), web::window()) {
        (Some(cb), Some(w)) => w.request_animation_frame(cb.as_ref().unchecked_ref()).ok(),
        _ => None,
    };
    raf_id.set(id);
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &raf_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &raf_id);

    FrameLoop { raf_id, tick }
}
