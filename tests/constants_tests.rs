// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(DEBUG_DOT_RADIUS > 0.0);
    assert!(FRAME_STATS_INTERVAL > 0);
    assert!(GRADIENT_RADIUS_DIAGONAL_DIVISOR > 0.0);
    assert!(MIN_TOUCH_FORCE >= 0.0);
}

#[test]
fn auto_mount_selector_targets_canvases() {
    assert!(AUTO_MOUNT_SELECTOR.starts_with("canvas."));
}

#[test]
fn data_prefix_strips_to_option_key() {
    let attr = "data-force-factor";
    assert_eq!(attr.strip_prefix(DATA_ATTR_PREFIX), Some("force-factor"));
    assert_eq!(
        liquid_core::config::normalize_key("force-factor"),
        liquid_core::config::normalize_key("forceFactor")
    );
}

#[test]
fn unit_gradient_radius_spans_normalized_diagonal() {
    let (w, h) = (280.0_f64, 130.0_f64);
    let r = ((w * w + h * h) / GRADIENT_RADIUS_DIAGONAL_DIVISOR).sqrt();
    assert!(r > h && r < w);
}
