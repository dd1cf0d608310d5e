// Host-side tests for background layout math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod layout {
    include!("../src/layout.rs");
}

use layout::*;

fn approx(a: [f32; 2], b: [f32; 2]) -> bool {
    (a[0] - b[0]).abs() < 1e-5 && (a[1] - b[1]).abs() < 1e-5
}

#[test]
fn matching_aspect_uses_whole_frame() {
    let (scale, offset) = cover_fit(1280, 720, 1920, 1080);
    assert!(approx(scale, [1.0, 1.0]));
    assert!(approx(offset, [0.0, 0.0]));
}

#[test]
fn portrait_screen_crops_video_sides() {
    // 16:9 video on a 9:16 phone screen
    let (scale, offset) = cover_fit(1600, 900, 900, 1600);
    let expected = (900.0 / 1600.0) / (1600.0 / 900.0);
    assert!(approx(scale, [expected, 1.0]));
    assert!(approx(offset, [(1.0 - expected) * 0.5, 0.0]));
}

#[test]
fn wide_screen_crops_video_top_and_bottom() {
    let (scale, offset) = cover_fit(640, 480, 1600, 600);
    let expected = (640.0 / 480.0) / (1600.0 / 600.0);
    assert!(approx(scale, [1.0, expected]));
    assert!(approx(offset, [0.0, (1.0 - expected) * 0.5]));
}

#[test]
fn cropped_window_stays_centered_inside_the_frame() {
    let (scale, offset) = cover_fit(1920, 1080, 500, 900);
    for axis in 0..2 {
        assert!(scale[axis] > 0.0 && scale[axis] <= 1.0);
        assert!((offset[axis] * 2.0 + scale[axis] - 1.0).abs() < 1e-5);
    }
}

#[test]
fn unknown_sizes_fall_back_to_identity() {
    assert!(approx(cover_fit(0, 0, 800, 600).0, [1.0, 1.0]));
    assert!(approx(cover_fit(640, 480, 0, 600).1, [0.0, 0.0]));
}
