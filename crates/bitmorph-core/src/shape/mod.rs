//! Target layouts that particles morph between.
//!
//! Every generator returns exactly `count` points in particle order. Templates
//! with fewer anchors than particles wrap around, so several particles share an
//! anchor and only their jitter tells them apart.

use crate::brightness::BrightnessMap;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

mod galaxy;
mod glucose;
mod neuron;
mod text;

pub use galaxy::{galaxy_from_image, galaxy_spiral};
pub use glucose::{glucose_level, GLUCOSE_T_STEP};
pub use neuron::{neuron_dendrite_tips, neuron_outline};
pub use text::{text_pixels, TEXT_FONT_HEIGHT, TEXT_FONT_WIDTH};

use crate::constants::{SCATTERED_RADIUS_MAX, SCATTERED_RADIUS_MIN};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Grid,
    Neuron,
    Glucose,
    Galaxy,
    Text,
    Scattered,
}

/// Order the transition machine walks through.
pub const SEQUENCE: [Shape; 4] = [Shape::Grid, Shape::Neuron, Shape::Glucose, Shape::Galaxy];

impl Shape {
    pub fn name(self) -> &'static str {
        match self {
            Shape::Grid => "grid",
            Shape::Neuron => "neuron",
            Shape::Glucose => "glucose",
            Shape::Galaxy => "galaxy",
            Shape::Text => "text",
            Shape::Scattered => "scattered",
        }
    }

    pub fn generate(self, count: usize, ctx: &ShapeContext, rng: &mut impl Rng) -> Vec<ShapePoint> {
        if count == 0 {
            return Vec::new();
        }
        match self {
            Shape::Grid => grid(count, ctx),
            Shape::Neuron => neuron::neuron(count, ctx, rng),
            Shape::Glucose => glucose::glucose(count, ctx, rng),
            Shape::Galaxy => match ctx.brightness {
                Some(map) => galaxy_from_image(count, ctx, map, rng)
                    .unwrap_or_else(|| galaxy_spiral(count, ctx, rng)),
                None => galaxy_spiral(count, ctx, rng),
            },
            Shape::Text => text::text(count, ctx, rng),
            Shape::Scattered => scattered(count, ctx, rng),
        }
    }
}

/// Where and how large a shape is drawn, plus optional image data.
#[derive(Clone, Copy, Debug)]
pub struct ShapeContext<'a> {
    pub center: Vec2,
    pub scale: f32,
    pub brightness: Option<&'a BrightnessMap>,
}

impl<'a> ShapeContext<'a> {
    pub fn new(center: Vec2, scale: f32) -> Self {
        Self {
            center,
            scale,
            brightness: None,
        }
    }

    pub fn with_brightness(mut self, brightness: Option<&'a BrightnessMap>) -> Self {
        self.brightness = brightness;
        self
    }

    /// Map a scale-relative offset to canvas coordinates.
    #[inline]
    pub fn place(&self, rel: Vec2) -> Vec2 {
        self.center + rel * self.scale
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapePoint {
    pub pos: Vec2,
    pub t: Option<f32>,
    pub brightness: Option<u8>,
}

impl ShapePoint {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            t: None,
            brightness: None,
        }
    }
}

/// Anchor for particle `i` on a template of `len` anchors.
#[inline]
pub(crate) fn anchor_index(i: usize, len: usize) -> usize {
    i % len
}

#[inline]
pub(crate) fn jitter(rng: &mut impl Rng, amount: f32) -> Vec2 {
    if amount <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        rng.gen_range(-amount..=amount),
        rng.gen_range(-amount..=amount),
    )
}

/// Standard normal deviate (Box–Muller).
#[inline]
pub(crate) fn gaussian(rng: &mut impl Rng) -> f32 {
    let u1 = rng.gen::<f32>().max(f32::MIN_POSITIVE);
    let u2 = rng.gen::<f32>();
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Lattice filling the square `[center - scale, center + scale]`.
pub fn grid_dims(count: usize) -> (usize, usize) {
    let cols = (count as f64).sqrt().ceil().max(1.0) as usize;
    let rows = count.div_ceil(cols).max(1);
    (cols, rows)
}

fn grid(count: usize, ctx: &ShapeContext) -> Vec<ShapePoint> {
    let (cols, rows) = grid_dims(count);
    let side = 2.0 * ctx.scale;
    let spacing = Vec2::new(side / cols as f32, side / rows as f32);
    let origin = ctx.center - Vec2::splat(ctx.scale) + spacing * 0.5;
    (0..count)
        .map(|i| {
            let cell = Vec2::new((i % cols) as f32, (i / cols) as f32);
            ShapePoint::at(origin + cell * spacing)
        })
        .collect()
}

fn scattered(count: usize, ctx: &ShapeContext, rng: &mut impl Rng) -> Vec<ShapePoint> {
    (0..count)
        .map(|_| {
            let angle = rng.gen::<f32>() * TAU;
            let radius = rng.gen_range(SCATTERED_RADIUS_MIN..SCATTERED_RADIUS_MAX) * ctx.scale;
            ShapePoint::at(ctx.center + Vec2::from_angle(angle) * radius)
        })
        .collect()
}
