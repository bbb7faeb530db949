// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;
use liquid_core::Surface;

const SURFACE: Surface = Surface {
    width: 280.0,
    height: 130.0,
};

#[test]
fn client_to_surface_subtracts_element_origin() {
    let p = client_to_surface(
        Vec2::new(110.0, 70.0),
        Vec2::new(10.0, 20.0),
        Vec2::new(280.0, 130.0),
        SURFACE,
    );
    assert_eq!(p, Vec2::new(100.0, 50.0));
}

#[test]
fn client_to_surface_rescales_stretched_canvas() {
    // canvas shown at twice its surface size
    let p = client_to_surface(
        Vec2::new(280.0, 130.0),
        Vec2::ZERO,
        Vec2::new(560.0, 260.0),
        SURFACE,
    );
    assert!((p - Vec2::new(140.0, 65.0)).length() < 1e-4);
}

#[test]
fn client_to_surface_handles_collapsed_rect() {
    let p = client_to_surface(Vec2::new(15.0, 25.0), Vec2::new(5.0, 5.0), Vec2::ZERO, SURFACE);
    assert_eq!(p, Vec2::new(10.0, 20.0));
    assert!(p.is_finite());
}

#[test]
fn touch_force_keeps_reported_pressure() {
    assert_eq!(touch_force(0.6, 0.0), Some(0.6));
}

#[test]
fn touch_force_drops_missing_pressure() {
    assert_eq!(touch_force(0.0, 0.0), None);
    assert_eq!(touch_force(-1.0, 0.0), None);
    assert_eq!(touch_force(f32::NAN, 0.0), None);
    assert_eq!(touch_force(f32::INFINITY, 0.0), None);
}
