use crate::anim::{HoldFrame, HoldPhases};
use crate::brightness::BrightnessSlot;
use crate::constants::*;
use crate::error::MorphError;
use crate::particle::{build_particles, Glyph, Particle};
use crate::shape::{Shape, ShapeContext, SEQUENCE};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphState {
    Holding,
    Scattering,
    Forming,
}

impl MorphState {
    pub fn name(self) -> &'static str {
        match self {
            MorphState::Holding => "holding",
            MorphState::Scattering => "scattering",
            MorphState::Forming => "forming",
        }
    }
}

#[derive(Clone, Debug)]
pub struct MorphParams {
    pub particle_count: usize,
    pub base_hold_ms: f64,
    pub scatter_ms: f64,
    pub form_ms: f64,
    pub seed: u64,
}

impl Default for MorphParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            base_hold_ms: DEFAULT_BASE_HOLD_MS,
            scatter_ms: DEFAULT_SCATTER_MS,
            form_ms: DEFAULT_FORM_MS,
            seed: 42,
        }
    }
}

#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Canvas center and shape scale for a canvas of the given size.
pub fn layout(width: f32, height: f32) -> Result<(Vec2, f32), MorphError> {
    if !(width > 0.0 && height > 0.0) {
        return Err(MorphError::EmptyCanvas { width, height });
    }
    Ok((
        Vec2::new(width / 2.0, height / 2.0),
        width.min(height) * SCALE_FRACTION,
    ))
}

/// Canvas size the engine can always lay out on. A collapsed or not yet laid
/// out canvas (zero, negative or NaN extent) counts as `MIN_CANVAS_EXTENT`.
pub fn canvas_extent(width: f32, height: f32) -> (f32, f32) {
    let usable = |v: f32| {
        if v.is_finite() && v >= MIN_CANVAS_EXTENT {
            v
        } else {
            MIN_CANVAS_EXTENT
        }
    };
    (usable(width), usable(height))
}

/// Drives particles through grid → neuron → glucose → galaxy.
///
/// Time is supplied by the caller as monotonic milliseconds; the engine never
/// reads a clock itself.
pub struct MorphEngine {
    pub params: MorphParams,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    center: Vec2,
    scale: f32,
    shape_index: usize,
    state: MorphState,
    state_start_ms: f64,
    progress: f32,
    finished: bool,
    phases: HoldPhases,
    last_frame_ms: Option<f64>,
    brightness: BrightnessSlot,
    rng: StdRng,
}

impl MorphEngine {
    pub fn new(
        params: MorphParams,
        width: f32,
        height: f32,
        brightness: BrightnessSlot,
        now_ms: f64,
    ) -> Result<Self, MorphError> {
        let (center, scale) = layout(width, height)?;
        let rng = StdRng::seed_from_u64(params.seed);
        let mut engine = Self {
            params,
            particles: Vec::new(),
            width,
            height,
            center,
            scale,
            shape_index: 0,
            state: MorphState::Holding,
            state_start_ms: now_ms,
            progress: 0.0,
            finished: false,
            phases: HoldPhases::default(),
            last_frame_ms: None,
            brightness,
            rng,
        };
        engine.reset_to_grid(now_ms);
        log::info!(
            "[morph] particles={} canvas={}x{} scale={:.1}",
            engine.particles.len(),
            width,
            height,
            scale
        );
        Ok(engine)
    }

    /// Rebuild the particle set for a new canvas size and restart the
    /// sequence. Phase accumulators carry over.
    pub fn resize(&mut self, width: f32, height: f32, now_ms: f64) -> Result<(), MorphError> {
        let (center, scale) = layout(width, height)?;
        self.width = width;
        self.height = height;
        self.center = center;
        self.scale = scale;
        self.reset_to_grid(now_ms);
        log::debug!("[morph] resized to {}x{}, restarting on grid", width, height);
        Ok(())
    }

    fn reset_to_grid(&mut self, now_ms: f64) {
        let ctx = ShapeContext::new(self.center, self.scale);
        let points = Shape::Grid.generate(self.params.particle_count, &ctx, &mut self.rng);
        self.particles = build_particles(&points, &mut self.rng);
        self.shape_index = 0;
        self.state = MorphState::Holding;
        self.state_start_ms = now_ms;
        self.progress = 0.0;
        self.finished = false;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn state(&self) -> MorphState {
        self.state
    }

    pub fn shape_index(&self) -> usize {
        self.shape_index
    }

    pub fn shape(&self) -> Shape {
        SEQUENCE[self.shape_index]
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn phases(&self) -> &HoldPhases {
        &self.phases
    }

    /// True once the terminal shape's hold has expired.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn hold_duration_ms(&self) -> f64 {
        let base = self.params.base_hold_ms;
        match self.shape() {
            Shape::Grid => base / 2.0,
            Shape::Neuron => base + NEURON_EXTRA_HOLD_MS,
            _ => base,
        }
    }

    /// Whether leaving the current shape goes through a scatter first.
    /// Grid hands over to neuron directly.
    pub fn should_scatter(&self) -> bool {
        let next = SEQUENCE[(self.shape_index + 1) % SEQUENCE.len()];
        !(self.shape() == Shape::Grid && next == Shape::Neuron)
    }

    pub fn update(&mut self, now_ms: f64) {
        let dt_ms = match self.last_frame_ms {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_DT_MS),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);
        let elapsed = (now_ms - self.state_start_ms).max(0.0);

        match self.state {
            MorphState::Holding => {
                let frame = HoldFrame {
                    dt_ms,
                    center: self.center,
                    scale: self.scale,
                };
                self.shape()
                    .animate_hold(&mut self.particles, &mut self.phases, &frame, &mut self.rng);
                if !self.finished && elapsed >= self.hold_duration_ms() {
                    self.end_hold(now_ms);
                }
            }
            MorphState::Scattering => {
                self.progress = (elapsed / self.params.scatter_ms).clamp(0.0, 1.0) as f32;
                let amount = self.progress;
                self.particles.iter_mut().for_each(|p| p.lerp_to_target(amount));
                if elapsed >= self.params.scatter_ms {
                    self.particles.iter_mut().for_each(Particle::snap_to_target);
                    self.shape_index = (self.shape_index + 1) % SEQUENCE.len();
                    self.begin_forming(now_ms);
                }
            }
            MorphState::Forming => {
                self.progress = (elapsed / self.params.form_ms).clamp(0.0, 1.0) as f32;
                let amount = ease_in_out_cubic(self.progress);
                self.particles.iter_mut().for_each(|p| p.lerp_to_target(amount));
                if elapsed >= self.params.form_ms {
                    self.particles.iter_mut().for_each(Particle::snap_to_target);
                    self.enter(MorphState::Holding, now_ms);
                }
            }
        }
    }

    fn end_hold(&mut self, now_ms: f64) {
        if self.shape_index == SEQUENCE.len() - 1 {
            self.finished = true;
            log::debug!("[morph] {} is terminal, holding", self.shape().name());
        } else if self.should_scatter() {
            self.begin_scattering(now_ms);
        } else {
            self.shape_index += 1;
            self.begin_forming(now_ms);
        }
    }

    fn enter(&mut self, state: MorphState, now_ms: f64) {
        log::debug!(
            "[morph] {} -> {} ({})",
            self.state.name(),
            state.name(),
            self.shape().name()
        );
        self.state = state;
        self.state_start_ms = now_ms;
        self.progress = 0.0;
    }

    fn begin_scattering(&mut self, now_ms: f64) {
        for p in self.particles.iter_mut() {
            let angle = self.rng.gen::<f32>() * TAU;
            let radius = self.rng.gen::<f32>() * SCATTER_RADIUS;
            p.start = p.position;
            p.target = p.position + Vec2::from_angle(angle) * radius;
        }
        self.enter(MorphState::Scattering, now_ms);
    }

    fn begin_forming(&mut self, now_ms: f64) {
        if self.shape() == Shape::Galaxy {
            let source = if self.brightness.is_ready() { "image" } else { "spiral" };
            log::debug!("[morph] galaxy forming from {source}");
        }
        let ctx = ShapeContext::new(self.center, self.scale).with_brightness(self.brightness.get());
        let points = self
            .shape()
            .generate(self.particles.len(), &ctx, &mut self.rng);
        for (p, point) in self.particles.iter_mut().zip(&points) {
            p.retarget(point);
            if let Some(b) = point.brightness {
                p.glyph = Glyph::from_lit(b > GALAXY_ONE_THRESHOLD);
            }
        }
        self.enter(MorphState::Forming, now_ms);
    }
}
