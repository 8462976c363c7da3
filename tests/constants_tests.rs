// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use bitmorph_core::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn web_constants_are_sane() {
    assert!(MIN_PARTICLES < MAX_PARTICLES);
    assert!(MIN_PARTICLES <= DEFAULT_PARTICLE_COUNT && DEFAULT_PARTICLE_COUNT <= MAX_PARTICLES);
    assert!(!CANVAS_ID.is_empty());
    assert!(!DEFAULT_IMAGE_URL.is_empty());
    assert!(ATTR_PARTICLES.starts_with("data-"));
    assert!(ATTR_HOLD_MS.starts_with("data-"));
    assert!(ATTR_IMAGE.starts_with("data-"));
    assert!(ATTR_SEED.starts_with("data-"));
    assert!(LINK_LINE_WIDTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn neuron_cycle_is_ordered() {
    assert!(0.0 < NEURON_TRAVEL_END);
    assert!(NEURON_TRAVEL_END < NEURON_SPREAD_END);
    assert!(NEURON_SPREAD_END < NEURON_TWINKLE_END);
    assert!(NEURON_TWINKLE_END < 1.0);
    assert!(NEURON_OUTLINE_SHARE > 0.0 && NEURON_OUTLINE_SHARE < 1.0);
    assert!(NEURON_SIGNAL_SPEED > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_and_ranges_are_consistent() {
    assert!(GALAXY_MIN_BRIGHTNESS < GALAXY_ONE_THRESHOLD);
    assert!(GLYPH_SIZE_MIN < GLYPH_SIZE_MAX);
    assert!(SCATTERED_RADIUS_MIN < SCATTERED_RADIUS_MAX);
    assert!(LINK_MAX_ALPHA > 0.0 && LINK_MAX_ALPHA <= 1.0);
    assert!(GRID_FLIP_INTERVAL_MS > 0.0);
    assert!(MAX_FRAME_DT_MS > GRID_FLIP_INTERVAL_MS);
    assert_eq!(GLUCOSE_SAMPLES, 201);
    assert_eq!(SAMPLE_GRID, 64);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_params_match_timing_constants() {
    let p = MorphParams::default();
    assert_eq!(p.particle_count, DEFAULT_PARTICLE_COUNT);
    assert_eq!(p.base_hold_ms, DEFAULT_BASE_HOLD_MS);
    assert!(p.scatter_ms < p.form_ms);
    assert!(p.form_ms < p.base_hold_ms);
}
