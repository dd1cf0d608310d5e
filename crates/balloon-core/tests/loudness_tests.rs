// Host-side tests for the loudness reduction.

use balloon_core::loudness::{is_loud, mean_volume};
use balloon_core::WorldParams;

#[test]
fn silence_is_zero() {
    assert_eq!(mean_volume(&[0u8; 128]), 0.0);
    assert_eq!(mean_volume(&[]), 0.0);
}

#[test]
fn uniform_buffer_returns_its_value() {
    for v in [1u8, 60, 80, 255] {
        assert_eq!(mean_volume(&vec![v; 256]), v as f32);
    }
}

#[test]
fn eighty_across_256_bins_crosses_default_threshold() {
    let bins = vec![80u8; 256];
    let volume = mean_volume(&bins);
    assert_eq!(volume, 80.0);
    assert!(is_loud(volume, WorldParams::default().volume_threshold));
}
