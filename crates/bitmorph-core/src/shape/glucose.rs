use super::{anchor_index, jitter, ShapeContext, ShapePoint};
use crate::constants::{
    GLUCOSE_BASELINE, GLUCOSE_CENTER_LEVEL, GLUCOSE_HEIGHT, GLUCOSE_JITTER, GLUCOSE_SAMPLES,
    GLUCOSE_SPAN, GLUCOSE_SPIKES,
};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Distance in `t` between two adjacent waveform samples.
pub const GLUCOSE_T_STEP: f32 = 1.0 / (GLUCOSE_SAMPLES - 1) as f32;

/// Glucose level over one day, `t` in [0, 1]: baseline drift plus three meal
/// spikes and a little sensor ripple.
pub fn glucose_level(t: f32) -> f32 {
    let drift = 0.06 * (TAU * 2.0 * t).sin();
    let spikes: f32 = GLUCOSE_SPIKES
        .iter()
        .map(|&(center, amp, k)| amp * (-(k * (t - center)).powi(2)).exp())
        .sum();
    let ripple = 0.015 * (TAU * 19.0 * t).sin() + 0.01 * (TAU * 31.0 * t).sin();
    GLUCOSE_BASELINE + drift + spikes + ripple
}

/// Scale-relative position of the waveform at `t` (higher level plots upward).
#[inline]
fn glucose_offset(t: f32) -> Vec2 {
    Vec2::new(
        (t - 0.5) * GLUCOSE_SPAN,
        -(glucose_level(t) - GLUCOSE_CENTER_LEVEL) * GLUCOSE_HEIGHT,
    )
}

pub(super) fn glucose(count: usize, ctx: &ShapeContext, rng: &mut impl Rng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            let t = anchor_index(i, GLUCOSE_SAMPLES) as f32 * GLUCOSE_T_STEP;
            ShapePoint {
                pos: ctx.place(glucose_offset(t)) + jitter(rng, GLUCOSE_JITTER),
                t: Some(t),
                brightness: None,
            }
        })
        .collect()
}
