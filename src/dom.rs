use crate::constants::*;
use bitmorph_core::MorphParams;
use std::str::FromStr;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing store to its CSS box times devicePixelRatio and
/// scale the context so drawing stays in CSS pixels. Returns the CSS size.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> (f32, f32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    (rect.width() as f32, rect.height() as f32)
}

pub fn on_window_resize(mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn attr<T: FromStr>(el: &web::Element, name: &str) -> Option<T> {
    el.get_attribute(name).and_then(|v| v.trim().parse().ok())
}

/// Engine parameters with any `data-*` overrides from the canvas applied.
/// Unparseable values are ignored.
pub fn read_params(canvas: &web::HtmlCanvasElement) -> MorphParams {
    let el: &web::Element = canvas.as_ref();
    let mut params = MorphParams {
        seed: rand::random(),
        ..MorphParams::default()
    };
    if let Some(n) = attr::<usize>(el, ATTR_PARTICLES) {
        params.particle_count = n.clamp(MIN_PARTICLES, MAX_PARTICLES);
    }
    if let Some(ms) = attr::<f64>(el, ATTR_HOLD_MS).filter(|ms| *ms > 0.0) {
        params.base_hold_ms = ms;
    }
    if let Some(seed) = attr::<u64>(el, ATTR_SEED) {
        params.seed = seed;
    }
    params
}

pub fn image_url(canvas: &web::HtmlCanvasElement) -> String {
    canvas
        .get_attribute(ATTR_IMAGE)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string())
}
