#![cfg(target_arch = "wasm32")]
use bitmorph_core::{canvas_extent, BrightnessSlot, MorphEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod frame;
mod image;

use canvas::CanvasSurface;
use frame::{FrameClock, FrameContext};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("bitmorph-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let params = dom::read_params(&canvas);
    let (css_w, css_h) = dom::sync_canvas_backing_size(&canvas, &ctx);
    // A hidden canvas still gets an engine; the next resize lays it out properly.
    let (width, height) = canvas_extent(css_w, css_h);
    if (width, height) != (css_w, css_h) {
        log::warn!("canvas is {css_w}x{css_h}; starting at {width}x{height} until resized");
    }

    // Galaxy image arrives whenever it arrives; the engine only polls the slot.
    let brightness = BrightnessSlot::new();
    image::spawn_brightness_load(dom::image_url(&canvas), brightness.clone());

    let clock = FrameClock::start();
    let engine = Rc::new(RefCell::new(MorphEngine::new(
        params,
        width,
        height,
        brightness,
        clock.now_ms(),
    )?));

    let still = dom::prefers_reduced_motion();
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        engine: engine.clone(),
        surface: CanvasSurface::new(ctx.clone()),
        clock,
    }));

    // A resize invalidates every target, so restart from a fresh grid.
    {
        let canvas = canvas.clone();
        let frame_ctx = frame_ctx.clone();
        dom::on_window_resize(move || {
            let (w, h) = dom::sync_canvas_backing_size(&canvas, &ctx);
            let mut fc = frame_ctx.borrow_mut();
            fc.surface.restyle();
            let now_ms = fc.clock.now_ms();
            if let Err(e) = fc.engine.borrow_mut().resize(w, h, now_ms) {
                log::debug!("resize skipped: {e}");
                return;
            }
            if still {
                fc.draw_still();
            }
        });
    }

    if still {
        log::info!("reduced motion requested; drawing a static grid");
        frame_ctx.borrow_mut().draw_still();
    } else {
        frame::start_loop(frame_ctx);
    }
    Ok(())
}
