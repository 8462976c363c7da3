/// DOM hooks and canvas styling for the web front-end.
///
/// Animation tuning lives in the core crate; these values only describe how
/// the page is wired and how glyphs are painted.
// Element and asset lookup
pub const CANVAS_ID: &str = "binary-canvas";
pub const DEFAULT_IMAGE_URL: &str = "assets/galaxy.jpg";

// Canvas attributes that override engine defaults
pub const ATTR_PARTICLES: &str = "data-particles";
pub const ATTR_HOLD_MS: &str = "data-hold-ms";
pub const ATTR_IMAGE: &str = "data-image";
pub const ATTR_SEED: &str = "data-seed";

// Sanity range for the particle override
pub const MIN_PARTICLES: usize = 16;
pub const MAX_PARTICLES: usize = 4000;

// Glyph and link styling
pub const FONT_FAMILY: &str = "'JetBrains Mono', monospace";
pub const LINK_LINE_WIDTH: f64 = 0.5;

// Accessibility
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
