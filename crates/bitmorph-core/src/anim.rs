//! Secondary motion applied while a shape is held.
//!
//! Grid and neuron only change glyphs; glucose bobs vertically and galaxy
//! spins about the canvas center. Every animator writes `position` from
//! `target`, so holding never drifts.

use crate::constants::*;
use crate::particle::{Glyph, Particle};
use crate::shape::{neuron_dendrite_tips, Shape};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Accumulators that persist across holds and canvas resizes.
#[derive(Clone, Debug, Default)]
pub struct HoldPhases {
    /// Neuron signal cycle position, in cycles.
    pub signal: f64,
    /// Glucose wave clock.
    pub time: f64,
    /// Galaxy rotation in radians.
    pub rotation: f64,
    pub flip_elapsed_ms: f64,
}

/// Per-frame inputs shared by all animators.
#[derive(Clone, Copy, Debug)]
pub struct HoldFrame {
    pub dt_ms: f64,
    pub center: Vec2,
    pub scale: f32,
}

impl Shape {
    pub fn animate_hold(
        self,
        particles: &mut [Particle],
        phases: &mut HoldPhases,
        frame: &HoldFrame,
        rng: &mut impl Rng,
    ) {
        match self {
            Shape::Grid => flip_digits(particles, phases, frame, rng),
            Shape::Neuron => neuron_signal(particles, phases, frame, rng),
            Shape::Glucose => glucose_wave(particles, phases, frame),
            Shape::Galaxy => galaxy_spin(particles, phases, frame),
            Shape::Text | Shape::Scattered => particles.iter_mut().for_each(Particle::snap_to_target),
        }
    }
}

fn flip_digits(
    particles: &mut [Particle],
    phases: &mut HoldPhases,
    frame: &HoldFrame,
    rng: &mut impl Rng,
) {
    particles.iter_mut().for_each(Particle::snap_to_target);
    if particles.is_empty() {
        return;
    }
    phases.flip_elapsed_ms += frame.dt_ms;
    while phases.flip_elapsed_ms >= GRID_FLIP_INTERVAL_MS {
        phases.flip_elapsed_ms -= GRID_FLIP_INTERVAL_MS;
        for _ in 0..GRID_FLIPS_PER_TICK {
            let p = &mut particles[rng.gen_range(0..particles.len())];
            p.glyph = p.glyph.flipped();
        }
    }
}

/// Which particles are lit at `phase` (0..1) of the neuron signal cycle.
///
/// `nx` is the particle's horizontal position normalised over the shape and
/// `soma_nx` the soma's. `at_tip` marks particles near a dendrite tip. The
/// cycle runs: band travels from the axon tips to the soma, band spreads on
/// into the dendrites, dendrite tips twinkle, then the twinkling fades out.
pub fn neuron_lit(phase: f32, nx: f32, soma_nx: f32, at_tip: bool, roll: f32) -> bool {
    let half_band = NEURON_BAND_WIDTH * 0.5;
    if phase < NEURON_TRAVEL_END {
        let k = phase / NEURON_TRAVEL_END;
        let band = 1.0 - (1.0 - soma_nx) * k;
        (nx - band).abs() < half_band
    } else if phase < NEURON_SPREAD_END {
        let k = (phase - NEURON_TRAVEL_END) / (NEURON_SPREAD_END - NEURON_TRAVEL_END);
        let band = soma_nx * (1.0 - k);
        (nx - band).abs() < half_band
    } else if phase < NEURON_TWINKLE_END {
        at_tip && roll < NEURON_TWINKLE_CHANCE
    } else {
        let fade = 1.0 - (phase - NEURON_TWINKLE_END) / (1.0 - NEURON_TWINKLE_END);
        at_tip && roll < NEURON_TWINKLE_CHANCE * fade
    }
}

fn neuron_signal(
    particles: &mut [Particle],
    phases: &mut HoldPhases,
    frame: &HoldFrame,
    rng: &mut impl Rng,
) {
    phases.signal = (phases.signal + frame.dt_ms * NEURON_SIGNAL_SPEED).fract();
    let phase = phases.signal as f32;

    let (min_x, max_x) = particles
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.target.x), hi.max(p.target.x)));
    let span = (max_x - min_x).max(f32::EPSILON);
    let soma_x = frame.center.x + NEURON_SOMA_CENTER[0] * frame.scale;
    let soma_nx = ((soma_x - min_x) / span).clamp(0.0, 1.0);

    let tips: Vec<Vec2> = neuron_dendrite_tips()
        .into_iter()
        .map(|t| frame.center + t * frame.scale)
        .collect();
    let reach = NEURON_TIP_RADIUS * frame.scale;

    for p in particles.iter_mut() {
        p.snap_to_target();
        let nx = (p.target.x - min_x) / span;
        let at_tip = tips.iter().any(|t| t.distance(p.target) < reach);
        p.glyph = Glyph::from_lit(neuron_lit(phase, nx, soma_nx, at_tip, rng.gen::<f32>()));
    }
}

/// Vertical displacement of a glucose particle at waveform position `t`.
///
/// Returns the offset and whether the travelling wave is in its positive half.
pub fn glucose_displacement(t: f32, time: f32, scale: f32) -> (f32, bool) {
    let wave_phase = t * TAU * 3.0 - time * 2.5;
    let wave = wave_phase.sin();
    let breath = (time * 0.8).sin() * GLUCOSE_BREATH_AMPLITUDE;
    let pulse = 0.5 + 0.5 * (time * 1.3).sin();
    let peak: f32 = GLUCOSE_SPIKES
        .iter()
        .map(|&(center, _, _)| {
            let d = (t - center).abs();
            if d < GLUCOSE_PEAK_HALF_WIDTH {
                let w = 1.0 - d / GLUCOSE_PEAK_HALF_WIDTH;
                -w * w * GLUCOSE_PEAK_LIFT * pulse
            } else {
                0.0
            }
        })
        .sum();
    let dy = (wave * GLUCOSE_WAVE_AMPLITUDE + breath + peak) * scale;
    (dy, wave >= 0.0)
}

fn glucose_wave(particles: &mut [Particle], phases: &mut HoldPhases, frame: &HoldFrame) {
    phases.time += frame.dt_ms * GLUCOSE_TIME_SPEED;
    let time = phases.time as f32;
    for p in particles.iter_mut() {
        let (dy, positive) = glucose_displacement(p.phase.unwrap_or(0.0), time, frame.scale);
        p.position = Vec2::new(p.target.x, p.target.y + dy);
        p.glyph = Glyph::from_lit(positive);
    }
}

fn galaxy_spin(particles: &mut [Particle], phases: &mut HoldPhases, frame: &HoldFrame) {
    phases.rotation = (phases.rotation + frame.dt_ms * GALAXY_SPIN_SPEED) % std::f64::consts::TAU;
    let rot = Vec2::from_angle(phases.rotation as f32);
    for p in particles.iter_mut() {
        p.position = frame.center + (p.target - frame.center).rotate(rot);
    }
}
