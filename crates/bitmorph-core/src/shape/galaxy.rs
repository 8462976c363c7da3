use super::{gaussian, jitter, ShapeContext, ShapePoint};
use crate::brightness::{BrightnessMap, BrightnessSample};
use crate::constants::{
    GALAXY_ARM_RADIUS, GALAXY_ARM_SHARE, GALAXY_ARM_TURNS, GALAXY_CORE_SIGMA,
    GALAXY_IMAGE_SPREAD, GALAXY_JITTER, GALAXY_MIN_BRIGHTNESS, SAMPLE_GRID,
};
use glam::Vec2;
use rand::Rng;
use std::cmp::Reverse;
use std::f32::consts::{PI, TAU};

/// Place particles on the brightest pixels of the sampled image.
///
/// Returns `None` when no pixel clears the brightness floor, in which case the
/// caller falls back to the procedural spiral.
pub fn galaxy_from_image(
    count: usize,
    ctx: &ShapeContext,
    map: &BrightnessMap,
    rng: &mut impl Rng,
) -> Option<Vec<ShapePoint>> {
    let mut bright: Vec<BrightnessSample> = map
        .samples()
        .iter()
        .copied()
        .filter(|s| s.brightness > GALAXY_MIN_BRIGHTNESS)
        .collect();
    if bright.is_empty() {
        return None;
    }
    bright.sort_by_key(|s| Reverse(s.brightness));

    let total = bright.len();
    let step = (total / count).max(1);
    let mut chosen: Vec<BrightnessSample> =
        bright.iter().step_by(step).take(count).copied().collect();
    while chosen.len() < count {
        chosen.push(bright[rng.gen_range(0..total)]);
    }

    let half = SAMPLE_GRID as f32 / 2.0;
    let points = chosen
        .into_iter()
        .map(|s| {
            let rel = (Vec2::new(s.x as f32, s.y as f32) - Vec2::splat(half)) / half
                * GALAXY_IMAGE_SPREAD;
            ShapePoint {
                pos: ctx.place(rel) + jitter(rng, GALAXY_JITTER),
                t: None,
                brightness: Some(s.brightness),
            }
        })
        .collect();
    Some(points)
}

/// Two-arm spiral with a dense, flattened core.
pub fn galaxy_spiral(count: usize, ctx: &ShapeContext, rng: &mut impl Rng) -> Vec<ShapePoint> {
    let arm_count = ((count as f32 * GALAXY_ARM_SHARE).round() as usize).min(count);
    let mut points = Vec::with_capacity(count);

    for j in 0..arm_count {
        let arm = (j % 2) as f32;
        let progress = j as f32 / arm_count as f32;
        let radius = progress * GALAXY_ARM_RADIUS;
        let theta = progress * GALAXY_ARM_TURNS * TAU + arm * PI;
        let spread = 0.015 + 0.12 * progress;
        let lateral = Vec2::new(gaussian(rng), gaussian(rng)) * spread;
        let rel = Vec2::from_angle(theta) * radius + lateral;
        points.push(ShapePoint::at(ctx.place(rel)));
    }
    for _ in arm_count..count {
        let radius = gaussian(rng).abs() * GALAXY_CORE_SIGMA;
        let angle = rng.gen::<f32>() * TAU;
        let rel = Vec2::new(angle.cos() * radius, angle.sin() * radius * 0.5);
        points.push(ShapePoint::at(ctx.place(rel)));
    }
    points
}
