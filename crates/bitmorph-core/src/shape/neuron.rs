use super::{anchor_index, jitter, ShapeContext, ShapePoint};
use crate::constants::{
    NEURON_FILL_RADIUS, NEURON_NUCLEUS_RADIUS, NEURON_OUTLINE_JITTER, NEURON_OUTLINE_SHARE,
    NEURON_POINT_STEP, NEURON_SOMA_CENTER, NEURON_SOMA_RADII,
};
use glam::Vec2;
use rand::Rng;
use smallvec::{smallvec, SmallVec};
use std::f32::consts::TAU;

struct Dendrite {
    angle_deg: f32,
    length: f32,
    // (fraction along the parent, angle offset, length)
    forks: SmallVec<[(f32, f32, f32); 3]>,
}

fn dendrites() -> [Dendrite; 5] {
    [
        Dendrite {
            angle_deg: 200.0,
            length: 0.42,
            forks: smallvec![(0.55, -35.0, 0.18), (0.8, 30.0, 0.14)],
        },
        Dendrite {
            angle_deg: 150.0,
            length: 0.38,
            forks: smallvec![(0.5, 40.0, 0.16), (0.75, -30.0, 0.13)],
        },
        Dendrite {
            angle_deg: 245.0,
            length: 0.36,
            forks: smallvec![(0.6, -30.0, 0.15)],
        },
        Dendrite {
            angle_deg: 110.0,
            length: 0.32,
            forks: smallvec![(0.55, 35.0, 0.14)],
        },
        Dendrite {
            angle_deg: 285.0,
            length: 0.3,
            forks: smallvec![(0.5, 30.0, 0.12), (0.7, -40.0, 0.1)],
        },
    ]
}

impl Dendrite {
    /// Trunk root on the soma rim and trunk tip.
    fn trunk(&self) -> (Vec2, Vec2) {
        let dir = Vec2::from_angle(self.angle_deg.to_radians());
        let root = Vec2::from(NEURON_SOMA_CENTER) + dir * Vec2::from(NEURON_SOMA_RADII);
        (root, root + dir * self.length)
    }
}

const AXON_CONTROL: [f32; 2] = [0.1, -0.24];
const AXON_END: [f32; 2] = [0.72, 0.04];
const TERMINAL_SPREAD_DEG: f32 = 110.0;
const TERMINAL_COUNT: usize = 6;
const TERMINAL_LENGTH: f32 = 0.16;
const BULB_RADIUS: f32 = 0.025;

fn push_segment(out: &mut Vec<Vec2>, a: Vec2, b: Vec2) {
    let steps = (a.distance(b) / NEURON_POINT_STEP).ceil().max(1.0) as usize;
    out.extend((0..=steps).map(|i| a.lerp(b, i as f32 / steps as f32)));
}

fn push_ellipse(out: &mut Vec<Vec2>, center: Vec2, radii: Vec2) {
    let perimeter = TAU * ((radii.x * radii.x + radii.y * radii.y) * 0.5).sqrt();
    let steps = (perimeter / NEURON_POINT_STEP).ceil().max(6.0) as usize;
    out.extend((0..steps).map(|i| {
        let a = TAU * i as f32 / steps as f32;
        center + Vec2::new(a.cos(), a.sin()) * radii
    }));
}

fn push_branch(out: &mut Vec<Vec2>, from: Vec2, angle_deg: f32, length: f32) -> Vec2 {
    let to = from + Vec2::from_angle(angle_deg.to_radians()) * length;
    push_segment(out, from, to);
    to
}

/// Anatomical outline in scale-relative coordinates around the canvas center.
///
/// Order: soma, nucleus, dendrites (each trunk followed by its forks), axon,
/// then axon terminals each followed by its bulb.
pub fn neuron_outline() -> Vec<Vec2> {
    let soma = Vec2::from(NEURON_SOMA_CENTER);
    let radii = Vec2::from(NEURON_SOMA_RADII);
    let mut out = Vec::with_capacity(512);

    push_ellipse(&mut out, soma, radii);
    push_ellipse(&mut out, soma, Vec2::splat(NEURON_NUCLEUS_RADIUS));

    for d in dendrites() {
        let (root, tip) = d.trunk();
        push_segment(&mut out, root, tip);
        for &(along, offset, length) in &d.forks {
            let fork_root = root.lerp(tip, along);
            push_branch(&mut out, fork_root, d.angle_deg + offset, length);
        }
    }

    // Axon: quadratic curve leaving the soma on its right.
    let a0 = soma + Vec2::new(radii.x, 0.0);
    let ctrl = Vec2::from(AXON_CONTROL);
    let a1 = Vec2::from(AXON_END);
    let approx_len = a0.distance(ctrl) + ctrl.distance(a1);
    let steps = (approx_len / NEURON_POINT_STEP).ceil() as usize;
    out.extend((0..=steps).map(|i| {
        let t = i as f32 / steps as f32;
        let u = 1.0 - t;
        a0 * (u * u) + ctrl * (2.0 * u * t) + a1 * (t * t)
    }));

    let tangent = a1 - ctrl;
    let heading = tangent.y.atan2(tangent.x).to_degrees();
    for k in 0..TERMINAL_COUNT {
        let frac = k as f32 / (TERMINAL_COUNT - 1) as f32;
        let angle_deg = heading - TERMINAL_SPREAD_DEG * 0.5 + TERMINAL_SPREAD_DEG * frac;
        let end = push_branch(&mut out, a1, angle_deg, TERMINAL_LENGTH);
        push_ellipse(&mut out, end, Vec2::splat(BULB_RADIUS));
    }
    out
}

/// Free ends of every dendrite trunk and fork, in the outline's coordinates.
pub fn neuron_dendrite_tips() -> Vec<Vec2> {
    let mut tips = Vec::with_capacity(16);
    for d in dendrites() {
        let (root, tip) = d.trunk();
        tips.push(tip);
        for &(along, offset, length) in &d.forks {
            let fork_root = root.lerp(tip, along);
            tips.push(fork_root + Vec2::from_angle((d.angle_deg + offset).to_radians()) * length);
        }
    }
    tips
}

pub(super) fn neuron(count: usize, ctx: &ShapeContext, rng: &mut impl Rng) -> Vec<ShapePoint> {
    let outline = neuron_outline();
    let outline_count = ((count as f32 * NEURON_OUTLINE_SHARE).round() as usize).min(count);
    let soma = Vec2::from(NEURON_SOMA_CENTER);
    let radii = Vec2::from(NEURON_SOMA_RADII) * NEURON_FILL_RADIUS;
    let mut points = Vec::with_capacity(count);

    for i in 0..outline_count {
        let anchor = outline[anchor_index(i, outline.len())];
        let rel = anchor + jitter(rng, NEURON_OUTLINE_JITTER);
        points.push(ShapePoint::at(ctx.place(rel)));
    }
    // Soma interior: uniform angle, linear radius (denser toward the middle).
    for _ in outline_count..count {
        let angle = rng.gen::<f32>() * TAU;
        let r = rng.gen::<f32>();
        let rel = soma + Vec2::new(angle.cos(), angle.sin()) * radii * r;
        points.push(ShapePoint::at(ctx.place(rel)));
    }
    points
}
