// Host-side tests for shape generation.

use bitmorph_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const ALL_SHAPES: [Shape; 6] = [
    Shape::Grid,
    Shape::Neuron,
    Shape::Glucose,
    Shape::Galaxy,
    Shape::Text,
    Shape::Scattered,
];

fn ctx() -> ShapeContext<'static> {
    ShapeContext::new(Vec2::new(200.0, 200.0), 100.0)
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn gradient_map() -> BrightnessMap {
    let samples = (0..SAMPLE_GRID * SAMPLE_GRID)
        .map(|i| BrightnessSample {
            x: i % SAMPLE_GRID,
            y: i / SAMPLE_GRID,
            brightness: (i % 256) as u8,
        })
        .collect();
    BrightnessMap::from_samples(samples)
}

#[test]
fn every_shape_returns_exactly_count_points() {
    let mut rng = rng();
    let map = gradient_map();
    for count in [1usize, 7, 50, 201, 700, 5000] {
        for shape in ALL_SHAPES {
            let pts = shape.generate(count, &ctx(), &mut rng);
            assert_eq!(pts.len(), count, "{} with count {count}", shape.name());
            let with_image = shape.generate(count, &ctx().with_brightness(Some(&map)), &mut rng);
            assert_eq!(with_image.len(), count);
            assert!(pts.iter().all(|p| p.pos.is_finite()));
        }
    }
}

#[test]
fn zero_count_yields_no_points() {
    let mut rng = rng();
    for shape in ALL_SHAPES {
        assert!(shape.generate(0, &ctx(), &mut rng).is_empty());
    }
}

#[test]
fn grid_first_point_and_lattice_for_700() {
    let pts = Shape::Grid.generate(700, &ctx(), &mut rng());
    let (cols, rows) = grid_dims(700);
    assert_eq!(cols, 27);
    assert_eq!(rows, 26);

    let sx = 200.0 / cols as f32;
    let sy = 200.0 / rows as f32;
    let first = pts[0].pos;
    assert!((first.x - (100.0 + sx / 2.0)).abs() < 1e-3);
    assert!((first.y - (100.0 + sy / 2.0)).abs() < 1e-3);
    assert!((first.x - (100.0 + sx / 2.0)).abs() <= sx && (first.y - (100.0 + sx / 2.0)).abs() <= sx);

    // second row starts back at the left edge
    assert!((pts[cols].pos.x - first.x).abs() < 1e-3);
    assert!(pts[cols].pos.y > first.y);
}

#[test]
fn grid_bounding_box_matches_scale_within_half_spacing() {
    for count in [9usize, 100, 700, 1000] {
        let pts = Shape::Grid.generate(count, &ctx(), &mut rng());
        let (cols, rows) = grid_dims(count);
        let half_x = 100.0 / cols as f32;
        let half_y = 100.0 / rows as f32;
        let min_x = pts.iter().map(|p| p.pos.x).fold(f32::MAX, f32::min);
        let max_x = pts.iter().map(|p| p.pos.x).fold(f32::MIN, f32::max);
        let min_y = pts.iter().map(|p| p.pos.y).fold(f32::MAX, f32::min);
        let max_y = pts.iter().map(|p| p.pos.y).fold(f32::MIN, f32::max);
        assert!((min_x - (100.0 + half_x)).abs() < 1e-3);
        assert!((max_x - (300.0 - half_x)).abs() < 1e-3);
        assert!((min_y - (100.0 + half_y)).abs() < 1e-3);
        assert!(max_y <= 300.0 - half_y + 1e-3);
        assert_eq!(cols, (count as f64).sqrt().ceil() as usize);
    }
}

#[test]
fn galaxy_without_image_uses_spiral() {
    let pts = Shape::Galaxy.generate(700, &ctx(), &mut rng());
    assert_eq!(pts.len(), 700);
    assert!(pts.iter().all(|p| p.brightness.is_none() && p.t.is_none()));
    assert!(pts.iter().all(|p| p.pos.is_finite()));
}

#[test]
fn galaxy_with_dark_image_falls_back_to_spiral() {
    let dark = BrightnessMap::from_samples(vec![
        BrightnessSample {
            x: 3,
            y: 4,
            brightness: GALAXY_MIN_BRIGHTNESS,
        };
        64
    ]);
    assert!(galaxy_from_image(10, &ctx(), &dark, &mut rng()).is_none());
    let pts = Shape::Galaxy.generate(50, &ctx().with_brightness(Some(&dark)), &mut rng());
    assert_eq!(pts.len(), 50);
    assert!(pts.iter().all(|p| p.brightness.is_none()));
}

#[test]
fn galaxy_with_image_uses_sample_brightness() {
    let map = gradient_map();
    let pts = Shape::Galaxy.generate(700, &ctx().with_brightness(Some(&map)), &mut rng());
    for p in &pts {
        let b = p.brightness.expect("image-backed points carry brightness");
        assert!(b > GALAXY_MIN_BRIGHTNESS);
        assert!(map.samples().iter().any(|s| s.brightness == b));
    }
    // brightest first thanks to the descending sort and stride selection
    assert_eq!(pts[0].brightness, Some(255));
}

#[test]
fn galaxy_oversamples_when_few_bright_pixels() {
    let few: Vec<BrightnessSample> = (0..5)
        .map(|i| BrightnessSample {
            x: i * 10,
            y: 32,
            brightness: 200 + i as u8,
        })
        .collect();
    let map = BrightnessMap::from_samples(few.clone());
    let pts = galaxy_from_image(40, &ctx(), &map, &mut rng()).expect("bright pixels exist");
    assert_eq!(pts.len(), 40);
    for p in &pts {
        assert!(few.iter().any(|s| Some(s.brightness) == p.brightness));
    }
}

#[test]
fn galaxy_image_points_are_centred_on_canvas() {
    let map = BrightnessMap::from_samples(vec![BrightnessSample {
        x: SAMPLE_GRID / 2,
        y: SAMPLE_GRID / 2,
        brightness: 250,
    }]);
    let pts = galaxy_from_image(3, &ctx(), &map, &mut rng()).expect("one bright pixel");
    for p in pts {
        assert!(p.pos.distance(Vec2::new(200.0, 200.0)) <= GALAXY_JITTER * 2.0_f32.sqrt() + 1e-3);
    }
}

#[test]
fn glucose_points_carry_waveform_phase() {
    let pts = Shape::Glucose.generate(700, &ctx(), &mut rng());
    for (i, p) in pts.iter().enumerate() {
        let t = p.t.expect("glucose points carry t");
        let expected = (i % GLUCOSE_SAMPLES) as f32 * GLUCOSE_T_STEP;
        assert!((t - expected).abs() < 1e-6);
        assert!((0.0..=1.0).contains(&t));
    }
}

#[test]
fn glucose_spikes_rise_above_surroundings() {
    for &(center, _, _) in GLUCOSE_SPIKES.iter() {
        assert!(glucose_level(center) > glucose_level(center - 0.12));
        assert!(glucose_level(center) > glucose_level(center + 0.12));
    }
}

#[test]
fn few_glucose_particles_take_the_leading_samples() {
    let pts = Shape::Glucose.generate(20, &ctx(), &mut rng());
    for (i, p) in pts.iter().enumerate() {
        let t = p.t.expect("glucose points carry t");
        let expected = (i % GLUCOSE_SAMPLES) as f32 * GLUCOSE_T_STEP;
        assert!((t - expected).abs() < 1e-6, "particle {i}: t was {t}");
    }
    let last_t = pts.last().and_then(|p| p.t).unwrap_or(1.0);
    assert!((last_t - 0.095).abs() < 1e-6);
}

#[test]
fn few_neuron_particles_follow_the_outline_in_order() {
    let count = 40;
    let scale = 100.0;
    let pts = Shape::Neuron.generate(count, &ctx(), &mut rng());
    let outline = neuron_outline();
    let outline_count = (count as f32 * NEURON_OUTLINE_SHARE).round() as usize;
    let tolerance = NEURON_OUTLINE_JITTER * scale * 2.0_f32.sqrt() + 1e-3;
    for (i, p) in pts[..outline_count].iter().enumerate() {
        let anchor = Vec2::new(200.0, 200.0) + outline[i % outline.len()] * scale;
        assert!(anchor.distance(p.pos) <= tolerance, "particle {i}");
    }
}

#[test]
fn neuron_splits_outline_and_soma_fill() {
    let count = 1000;
    let scale = 100.0;
    let pts = Shape::Neuron.generate(count, &ctx(), &mut rng());
    let outline: Vec<Vec2> = neuron_outline()
        .into_iter()
        .map(|p| Vec2::new(200.0, 200.0) + p * scale)
        .collect();
    let outline_count = (count as f32 * NEURON_OUTLINE_SHARE).round() as usize;
    let tolerance = NEURON_OUTLINE_JITTER * scale * 2.0_f32.sqrt() + 1e-3;

    for p in &pts[..outline_count] {
        assert!(outline.iter().any(|a| a.distance(p.pos) <= tolerance));
    }
    let soma = Vec2::new(200.0, 200.0) + Vec2::from(NEURON_SOMA_CENTER) * scale;
    let radii = Vec2::from(NEURON_SOMA_RADII) * scale * NEURON_FILL_RADIUS;
    for p in &pts[outline_count..] {
        let d = (p.pos - soma) / radii;
        assert!(d.length() <= 1.0 + 1e-4);
    }
}

#[test]
fn neuron_template_is_fixed_and_has_axon_to_the_right() {
    let a = neuron_outline();
    let b = neuron_outline();
    assert_eq!(a, b);
    let max_x = a.iter().map(|p| p.x).fold(f32::MIN, f32::max);
    assert!(max_x > NEURON_SOMA_CENTER[0] + 1.0);
}

#[test]
fn same_seed_gives_same_points() {
    let a = Shape::Neuron.generate(300, &ctx(), &mut StdRng::seed_from_u64(99));
    let b = Shape::Neuron.generate(300, &ctx(), &mut StdRng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn text_pixels_count_lit_bits() {
    // R=18, E=18, A=18, L=11, I=15
    assert_eq!(text_pixels(&TEXT_LINES).len(), 98);
    assert!(text_pixels(&["?"]).is_empty());
    let single = text_pixels(&["I"]);
    let cx: f32 = single.iter().map(|p| p.x).sum::<f32>() / single.len() as f32;
    assert!(cx.abs() < 1e-4, "single glyph is centred");
}

#[test]
fn text_points_stay_near_lit_pixels() {
    let scale = 100.0;
    let cell = TEXT_CELL * scale;
    let pixels = text_pixels(&TEXT_LINES);
    let pts = Shape::Text.generate(300, &ctx(), &mut rng());
    for p in pts {
        let near = pixels
            .iter()
            .any(|px| (Vec2::new(200.0, 200.0) + *px * cell).distance(p.pos) <= cell * 0.5);
        assert!(near);
    }
}

#[test]
fn scattered_points_sit_in_annulus() {
    let pts = Shape::Scattered.generate(500, &ctx(), &mut rng());
    for p in pts {
        let r = p.pos.distance(Vec2::new(200.0, 200.0));
        assert!(r >= SCATTERED_RADIUS_MIN * 100.0 - 1e-3);
        assert!(r < SCATTERED_RADIUS_MAX * 100.0 + 1e-3);
    }
}

#[test]
fn shape_names_are_distinct() {
    for (i, a) in ALL_SHAPES.iter().enumerate() {
        assert!(!a.name().is_empty());
        assert!(ALL_SHAPES[i + 1..].iter().all(|b| b.name() != a.name()));
    }
}
