// Front-end constants for DOM wiring and the canvas renderer.

// Canvases matching this selector are mounted at start-up
pub const AUTO_MOUNT_SELECTOR: &str = "canvas.liquid-button";
pub const DATA_ATTR_PREFIX: &str = "data-";

// Label
pub const FONT_FAMILY: &str = "sans-serif";

// Debug overlay
pub const DEBUG_DOT_RADIUS: f64 = 1.5; // CSS px
pub const DEBUG_DOT_COLOR: &str = "rgba(255, 255, 255, 0.75)";
pub const FRAME_STATS_INTERVAL: u32 = 120; // frames between timing logs

// A gradient radius of 1.0 spans the drawable's normalized diagonal,
// sqrt((w^2 + h^2) / 2), matching SVG bounding-box units.
pub const GRADIENT_RADIUS_DIAGONAL_DIVISOR: f64 = 2.0;

// Touch points report a force of 0 when the device has no pressure sensor
pub const MIN_TOUCH_FORCE: f32 = 0.0;
