/// Arithmetic mean of a byte-frequency snapshot.
///
/// An empty snapshot reads as silence rather than NaN.
#[inline]
pub fn mean_volume(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let sum: u64 = bins.iter().map(|&b| b as u64).sum();
    (sum as f64 / bins.len() as f64) as f32
}

#[inline]
pub fn is_loud(volume: f32, threshold: f32) -> bool {
    volume > threshold
}
