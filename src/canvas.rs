use crate::constants::{FONT_FAMILY, LINK_LINE_WIDTH};
use bitmorph_core::{Surface, LINK_RGB};
use glam::Vec2;
use web_sys as web;

/// `Surface` backed by a 2D canvas context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    font_px: u32,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        let mut surface = Self { ctx, font_px: 0 };
        surface.restyle();
        surface
    }

    /// Reapply text and stroke state; resizing the canvas resets the context.
    pub fn restyle(&mut self) {
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_line_width(LINK_LINE_WIDTH);
        self.font_px = 0;
    }

    // Font strings are parsed by the browser on every set; only change on size.
    fn use_font(&mut self, size: f32) {
        let px = size.round().max(1.0) as u32;
        if px != self.font_px {
            self.ctx.set_font(&format!("{px}px {FONT_FAMILY}"));
            self.font_px = px;
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn line(&mut self, from: Vec2, to: Vec2, alpha: f32) {
        let [r, g, b] = LINK_RGB;
        self.ctx
            .set_stroke_style_str(&format!("rgba({r}, {g}, {b}, {alpha:.3})"));
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn glyph(&mut self, text: &str, at: Vec2, color: &str, size: f32) {
        self.use_font(size);
        self.ctx.set_fill_style_str(color);
        _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }
}
