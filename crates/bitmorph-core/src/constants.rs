// Shared tuning constants for shape generation, transitions and rendering.
// Lengths are canvas units unless noted; "scale-relative" values multiply the
// engine scale (half the side of the grid's bounding square).

// Canvas layout
pub const SCALE_FRACTION: f32 = 0.38; // scale = fraction * min(width, height)
pub const MIN_CANVAS_EXTENT: f32 = 1.0; // css px, stand-in for a collapsed canvas

// Particle store
pub const DEFAULT_PARTICLE_COUNT: usize = 700;
pub const GLYPH_SIZE_MIN: f32 = 9.0;
pub const GLYPH_SIZE_MAX: f32 = 14.0;
pub const COLOR_ONE: &str = "rgba(0, 229, 255, 0.95)";
pub const COLOR_ZERO: &str = "rgba(90, 120, 170, 0.55)";

// Transition timing (milliseconds)
pub const DEFAULT_BASE_HOLD_MS: f64 = 5000.0;
pub const NEURON_EXTRA_HOLD_MS: f64 = 500.0;
pub const DEFAULT_SCATTER_MS: f64 = 600.0;
pub const DEFAULT_FORM_MS: f64 = 1800.0;
pub const MAX_FRAME_DT_MS: f64 = 100.0; // cap for phase accumulators

// Scattering
pub const SCATTER_RADIUS: f32 = 30.0;

// Grid holding
pub const GRID_FLIP_INTERVAL_MS: f64 = 30.0;
pub const GRID_FLIPS_PER_TICK: usize = 8;

// Neuron template (scale-relative)
pub const NEURON_OUTLINE_SHARE: f32 = 0.7;
pub const NEURON_OUTLINE_JITTER: f32 = 0.012;
pub const NEURON_SOMA_CENTER: [f32; 2] = [-0.42, 0.0];
pub const NEURON_SOMA_RADII: [f32; 2] = [0.2, 0.15];
pub const NEURON_NUCLEUS_RADIUS: f32 = 0.06;
pub const NEURON_FILL_RADIUS: f32 = 0.85; // fraction of soma radii used for interior fill
pub const NEURON_POINT_STEP: f32 = 0.018;

// Neuron signal cycle (phase units are cycles; speed is cycles per ms)
pub const NEURON_SIGNAL_SPEED: f64 = 1.0 / 3200.0;
pub const NEURON_TRAVEL_END: f32 = 0.35;
pub const NEURON_SPREAD_END: f32 = 0.55;
pub const NEURON_TWINKLE_END: f32 = 0.8;
pub const NEURON_BAND_WIDTH: f32 = 0.07; // normalized horizontal width of the lit band
pub const NEURON_TIP_RADIUS: f32 = 0.06; // scale-relative reach of a twinkling dendrite tip
pub const NEURON_TWINKLE_CHANCE: f32 = 0.35;

// Glucose waveform
pub const GLUCOSE_SAMPLES: usize = 201;
pub const GLUCOSE_SPAN: f32 = 2.6; // scale-relative horizontal extent
pub const GLUCOSE_HEIGHT: f32 = 1.1; // scale-relative vertical gain
pub const GLUCOSE_BASELINE: f32 = 0.12; // resting level before drift and spikes
pub const GLUCOSE_CENTER_LEVEL: f32 = 0.45; // level drawn at the canvas center
pub const GLUCOSE_SPIKES: [(f32, f32, f32); 3] = [
    // (center t, amplitude, exponent scale)
    (0.15, 0.55, 8.0),
    (0.45, 0.7, 7.0),
    (0.75, 0.6, 6.0),
];
pub const GLUCOSE_JITTER: f32 = 2.0;
pub const GLUCOSE_TIME_SPEED: f64 = 0.001; // time offset units per ms
pub const GLUCOSE_WAVE_AMPLITUDE: f32 = 0.035; // scale-relative
pub const GLUCOSE_BREATH_AMPLITUDE: f32 = 0.02; // scale-relative
pub const GLUCOSE_PEAK_LIFT: f32 = 0.04; // scale-relative
pub const GLUCOSE_PEAK_HALF_WIDTH: f32 = 0.05; // in t

// Galaxy
pub const GALAXY_MIN_BRIGHTNESS: u8 = 45;
pub const GALAXY_ONE_THRESHOLD: u8 = 120;
pub const GALAXY_IMAGE_SPREAD: f32 = 1.2; // scale-relative half extent of the image
pub const GALAXY_JITTER: f32 = 1.5;
pub const GALAXY_ARM_SHARE: f32 = 0.7;
pub const GALAXY_ARM_TURNS: f32 = 1.5;
pub const GALAXY_ARM_RADIUS: f32 = 1.1; // scale-relative
pub const GALAXY_CORE_SIGMA: f32 = 0.16; // scale-relative
pub const GALAXY_SPIN_SPEED: f64 = 0.00006; // radians per ms

// Image sampler
pub const SAMPLE_GRID: u32 = 64;

// Text
pub const TEXT_LINES: [&str; 2] = ["REAL", "AI"];
pub const TEXT_CELL: f32 = 0.075; // scale-relative size of one glyph pixel

// Scattered shape (scale-relative)
pub const SCATTERED_RADIUS_MIN: f32 = 0.5;
pub const SCATTERED_RADIUS_MAX: f32 = 1.7;

// Renderer
pub const LINK_DISTANCE: f32 = 50.0;
pub const LINK_MAX_ALPHA: f32 = 0.12;
pub const LINK_RGB: [u8; 3] = [0, 229, 255];
