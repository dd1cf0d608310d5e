// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn element_center_maps_to_ndc_origin() {
    let ndc = client_to_ndc(150.0, 100.0, 50.0, 20.0, 200.0, 160.0);
    assert!(approx(ndc.x, 0.0));
    assert!(approx(ndc.y, 0.0));
}

#[test]
fn element_offset_is_subtracted() {
    // top-left corner of an element placed at (10, 30)
    let ndc = client_to_ndc(10.0, 30.0, 10.0, 30.0, 400.0, 300.0);
    assert!(approx(ndc.x, -1.0));
    assert!(approx(ndc.y, 1.0));

    let ndc = client_to_ndc(410.0, 330.0, 10.0, 30.0, 400.0, 300.0);
    assert!(approx(ndc.x, 1.0));
    assert!(approx(ndc.y, -1.0));
}

#[test]
fn y_axis_points_up() {
    let upper = client_to_ndc(100.0, 25.0, 0.0, 0.0, 200.0, 100.0);
    let lower = client_to_ndc(100.0, 75.0, 0.0, 0.0, 200.0, 100.0);
    assert!(upper.y > 0.0);
    assert!(lower.y < 0.0);
}

#[test]
fn zero_sized_element_yields_origin() {
    let ndc = client_to_ndc(12.0, 34.0, 0.0, 0.0, 0.0, 0.0);
    assert_eq!(ndc, glam::Vec2::ZERO);
}
