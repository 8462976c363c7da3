use crate::canvas::CanvasSurface;
use bitmorph_core::{render, MorphEngine};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic milliseconds since page start, the engine's only clock.
#[derive(Clone, Copy)]
pub struct FrameClock {
    origin: Instant,
}

impl FrameClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

pub struct FrameContext {
    pub engine: Rc<RefCell<MorphEngine>>,
    pub surface: CanvasSurface,
    pub clock: FrameClock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_ms = self.clock.now_ms();
        let mut engine = self.engine.borrow_mut();
        engine.update(now_ms);
        render::draw(&engine, &mut self.surface);
    }

    /// Paint the current particle layout without advancing time.
    pub fn draw_still(&mut self) {
        render::draw(&self.engine.borrow(), &mut self.surface);
    }
}

fn request_frame(closure: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

/// Run `frame()` on every animation frame for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(closure) = tick_clone.borrow().as_ref() {
            request_frame(closure);
        }
    }) as Box<dyn FnMut()>));
    if let Some(closure) = tick.borrow().as_ref() {
        request_frame(closure);
    }
}
