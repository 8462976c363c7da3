use anyhow::anyhow;
use bitmorph_core::{BrightnessMap, BrightnessSlot, SAMPLE_GRID};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

async fn load_image(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(js_err)?;
    img.set_cross_origin(Some("anonymous"));
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(url);
    JsFuture::from(loaded)
        .await
        .map_err(|_| anyhow!("failed to load {url}"))?;
    img.set_onload(None);
    img.set_onerror(None);
    Ok(img)
}

/// Downsample the image onto a small offscreen canvas and read it back.
fn sample_image(img: &web::HtmlImageElement) -> anyhow::Result<BrightnessMap> {
    let document = crate::dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow!("created element is not a canvas"))?;
    canvas.set_width(SAMPLE_GRID);
    canvas.set_height(SAMPLE_GRID);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow!("no 2d context for sampling"))?
        .dyn_into()
        .map_err(|_| anyhow!("unexpected context type"))?;
    let side = SAMPLE_GRID as f64;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, side, side)
        .map_err(js_err)?;
    let data = ctx.get_image_data(0.0, 0.0, side, side).map_err(js_err)?;
    let rgba = data.data();
    Ok(BrightnessMap::from_rgba(data.width(), data.height(), &rgba)?)
}

async fn load_brightness(url: &str) -> anyhow::Result<BrightnessMap> {
    let img = load_image(url).await?;
    sample_image(&img)
}

/// Fetch and sample the galaxy image in the background. On any failure the
/// slot stays empty and the galaxy keeps using its procedural spiral.
pub fn spawn_brightness_load(url: String, slot: BrightnessSlot) {
    spawn_local(async move {
        match load_brightness(&url).await {
            Ok(map) => {
                let n = map.len();
                if slot.fill(map) {
                    log::info!("[image] brightness ready: {} samples from {}", n, url);
                }
            }
            Err(e) => log::warn!("[image] {e:#}; galaxy uses the spiral fallback"),
        }
    });
}
