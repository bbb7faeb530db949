// Default tuning for the liquid button. Every option in `ButtonConfig` falls
// back to one of these when it is missing or rejected.

// Outline geometry (CSS pixels)
pub const DEFAULT_WIDTH: f32 = 200.0; // content box, excludes margin
pub const DEFAULT_HEIGHT: f32 = 50.0;
pub const DEFAULT_MARGIN: f32 = 40.0; // room for the outline to bulge into
pub const DEFAULT_GAP: f32 = 5.0; // spacing between rest points

// Accepted option ranges. Larger sizes or finer gaps would build rings of
// millions of points, or stop advancing once the step drops below f32 precision.
pub const MAX_DIMENSION: f32 = 10_000.0; // width, height and margin
pub const MIN_GAP: f32 = 0.5;

// Shape and force tuning
pub const DEFAULT_TENSION: f32 = 0.4; // handle length relative to neighbour distance
pub const DEFAULT_FORCE_FACTOR: f32 = 0.2; // restoring spring scale
pub const DEFAULT_HOVER_FACTOR: f32 = 0.1; // pointer force multiplier inside the button
pub const DEFAULT_NOISE: f32 = 0.0; // positional jitter amplitude

// Cap stepping: angle per unit of gap is PI / trunc(height * CAP_ARC_SCALE)
pub const CAP_ARC_SCALE: f32 = 1.25;

// Smallest ring the smoother can work with
pub const MIN_RING_POINTS: usize = 3;
// Hard cap on ring length for outlines built outside `ButtonConfig`
pub const MAX_RING_POINTS: usize = 100_000;

/// Per-layer base settings as `(viscosity, mouse_force, force_limit)`,
/// bottom layer first. The last entry is the highlight layer.
pub const DEFAULT_LAYERS: [(f32, f32, f32); 2] = [
    (0.5, 100.0, 2.0), // body
    (0.8, 150.0, 3.0), // highlight
];

// Palette
pub const DEFAULT_BODY_COLOR: &str = "#ff4800";
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#ff4800";
pub const DEFAULT_ACCENT_COLOR: &str = "#ff4800";
pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";
pub const DEFAULT_LABEL: &str = "LiquidButton";

// Touch pressure used for mouse input and for touches without a usable force
pub const DEFAULT_CONTACT_FORCE: f32 = 1.0;
