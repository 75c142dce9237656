//! Tonal variability from the full-buffer intensity distribution
//!
//! Uniformity is `clamp(1 - stdev/128, 0, 1)` and variability is its
//! complement. The standard deviation comes from a full statistical pass
//! over every pixel, never a sample.

use crate::io::pixel_buffer::PixelBuffer;

/// Intensity spread that maps to zero uniformity
const UNIFORMITY_STDEV_SCALE: f32 = 128.0;

/// Mean and standard deviation of buffer intensities
///
/// # Returns
///
/// `(mean, stdev)` on the 0-255 intensity scale, or `None` for an empty
/// buffer.
pub fn intensity_stats(buffer: &PixelBuffer) -> Option<(f32, f32)> {
    if buffer.is_empty() {
        log::warn!("Intensity statistics unavailable: empty pixel buffer");
        return None;
    }

    let n = buffer.len() as f64;
    let mut sum = 0.0f64;
    for &p in buffer.pixels() {
        sum += p as f64;
    }
    let mean = sum / n;

    let mut sum_sq = 0.0f64;
    for &p in buffer.pixels() {
        let d = p as f64 - mean;
        sum_sq += d * d;
    }
    let stdev = (sum_sq / n).sqrt();

    log::debug!("Intensity stats: mean={:.2}, stdev={:.2}", mean, stdev);

    Some((mean as f32, stdev as f32))
}

/// Map an intensity standard deviation to variability in [0, 1]
///
/// `variability = 1 - clamp(1 - stdev/128, 0, 1)`. A constant-intensity
/// buffer scores 0; a widely spread tonal distribution approaches 1.
pub fn variability_from_stdev(stdev: f32) -> f32 {
    let uniformity = (1.0 - stdev / UNIFORMITY_STDEV_SCALE).clamp(0.0, 1.0);
    1.0 - uniformity
}

/// Compute tonal variability in [0, 1]
///
/// # Returns
///
/// Variability in [0, 1], or `None` when the statistical pass is impossible
/// (empty buffer). Failure here must not abort the caller's analysis; the
/// combining step substitutes its documented neutral default instead.
pub fn tonal_variability(buffer: &PixelBuffer) -> Option<f32> {
    let (_, stdev) = intensity_stats(buffer)?;
    Some(variability_from_stdev(stdev))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_from(width: u32, height: u32, data: Vec<u8>) -> PixelBuffer {
        PixelBuffer::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn test_stats_constant_buffer() {
        let buf = buffer_from(4, 4, vec![42; 16]);
        let (mean, stdev) = intensity_stats(&buf).unwrap();
        assert!((mean - 42.0).abs() < 1e-6);
        assert_eq!(stdev, 0.0);
    }

    #[test]
    fn test_stats_empty_buffer_unavailable() {
        let buf = buffer_from(0, 0, vec![]);
        assert_eq!(intensity_stats(&buf), None);
        assert_eq!(tonal_variability(&buf), None);
    }

    #[test]
    fn test_variability_constant_is_zero() {
        let buf = buffer_from(8, 8, vec![200; 64]);
        assert_eq!(tonal_variability(&buf), Some(0.0));
    }

    #[test]
    fn test_variability_extreme_split() {
        // Half black, half white: stdev = 127.5, variability just under 1
        let mut data = vec![0u8; 32];
        data.extend(vec![255u8; 32]);
        let buf = buffer_from(8, 8, data);

        let variability = tonal_variability(&buf).unwrap();
        assert!(variability > 0.99, "got {}", variability);
        assert!(variability <= 1.0);
    }

    #[test]
    fn test_variability_increases_with_spread() {
        let narrow: Vec<u8> = (0..64).map(|i| 120 + (i % 8) as u8).collect();
        let wide: Vec<u8> = (0..64).map(|i| (i * 4) as u8).collect();

        let narrow_v = tonal_variability(&buffer_from(8, 8, narrow)).unwrap();
        let wide_v = tonal_variability(&buffer_from(8, 8, wide)).unwrap();

        assert!(narrow_v < wide_v);
    }
}
