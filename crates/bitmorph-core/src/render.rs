use crate::constants::{LINK_DISTANCE, LINK_MAX_ALPHA};
use crate::engine::{MorphEngine, MorphState};
use crate::particle::Particle;
use glam::Vec2;

/// Drawing primitives the renderer needs from a 2D canvas.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    /// Faint connector between two particles.
    fn line(&mut self, from: Vec2, to: Vec2, alpha: f32);
    /// Glyph centred on `at`.
    fn glyph(&mut self, text: &str, at: Vec2, color: &str, size: f32);
}

/// Opacity of the link between two particles `distance` apart, if any.
#[inline]
pub fn link_alpha(distance: f32) -> Option<f32> {
    (distance < LINK_DISTANCE).then(|| LINK_MAX_ALPHA * (1.0 - distance / LINK_DISTANCE))
}

pub fn draw_links(particles: &[Particle], surface: &mut impl Surface) {
    let max_sq = LINK_DISTANCE * LINK_DISTANCE;
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let d_sq = a.position.distance_squared(b.position);
            if d_sq >= max_sq {
                continue;
            }
            if let Some(alpha) = link_alpha(d_sq.sqrt()) {
                surface.line(a.position, b.position, alpha);
            }
        }
    }
}

pub fn draw(engine: &MorphEngine, surface: &mut impl Surface) {
    let (width, height) = engine.size();
    surface.clear(width, height);
    // Pairwise links are quadratic; only drawn while particles are moving.
    if engine.state() != MorphState::Holding {
        draw_links(engine.particles(), surface);
    }
    for p in engine.particles() {
        surface.glyph(p.glyph.as_str(), p.position, p.color(), p.size);
    }
}
