use crate::constants::{COLOR_ONE, COLOR_ZERO, GLYPH_SIZE_MAX, GLYPH_SIZE_MIN};
use crate::shape::ShapePoint;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Zero,
    One,
}

impl Glyph {
    pub fn from_lit(lit: bool) -> Self {
        if lit {
            Glyph::One
        } else {
            Glyph::Zero
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Glyph::Zero => Glyph::One,
            Glyph::One => Glyph::Zero,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Glyph::Zero => "0",
            Glyph::One => "1",
        }
    }

    /// CSS fill color; the only source of a particle's color.
    pub fn color(self) -> &'static str {
        match self {
            Glyph::Zero => COLOR_ZERO,
            Glyph::One => COLOR_ONE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub start: Vec2,
    pub target: Vec2,
    pub glyph: Glyph,
    pub size: f32,
    /// Position along the glucose waveform, set while targeting that shape.
    pub phase: Option<f32>,
    /// Source pixel brightness, set while targeting an image-backed galaxy.
    pub brightness: Option<u8>,
}

impl Particle {
    pub fn color(&self) -> &'static str {
        self.glyph.color()
    }

    /// Aim at a freshly generated shape point, starting from where the
    /// particle currently is.
    pub fn retarget(&mut self, point: &ShapePoint) {
        self.start = self.position;
        self.target = point.pos;
        self.phase = point.t;
        self.brightness = point.brightness;
    }

    #[inline]
    pub fn lerp_to_target(&mut self, amount: f32) {
        self.position = self.start + (self.target - self.start) * amount;
    }

    #[inline]
    pub fn snap_to_target(&mut self) {
        self.position = self.target;
    }
}

/// Build the fixed-size store with every particle resting on its seed point.
pub fn build_particles(points: &[ShapePoint], rng: &mut impl Rng) -> Vec<Particle> {
    points
        .iter()
        .map(|p| Particle {
            position: p.pos,
            start: p.pos,
            target: p.pos,
            glyph: Glyph::from_lit(rng.gen::<bool>()),
            size: rng.gen_range(GLYPH_SIZE_MIN..GLYPH_SIZE_MAX),
            phase: p.t,
            brightness: p.brightness,
        })
        .collect()
}
