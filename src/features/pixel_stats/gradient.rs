//! Vertical gradient roughness
//!
//! Measures sharpness as the mean absolute intensity difference between
//! vertically adjacent pixels. Natural captures sit in a moderate band;
//! heavy smoothing pushes the value down and digital over-sharpening pushes
//! it up.

use crate::io::pixel_buffer::PixelBuffer;

/// Compute mean absolute vertical intensity difference
///
/// Averages `|row[y+1][x] - row[y][x]|` over every adjacent-row pixel pair.
///
/// # Arguments
///
/// * `buffer` - Grayscale pixel buffer (width >= 1, height >= 2)
///
/// # Returns
///
/// Mean absolute difference in intensity levels (0-255 scale), or `None`
/// when the buffer has fewer than two rows. A single-row image reports
/// "indeterminable" rather than a spurious zero.
pub fn gradient_roughness(buffer: &PixelBuffer) -> Option<f32> {
    if buffer.height() < 2 || buffer.width() == 0 {
        log::warn!(
            "Gradient roughness indeterminable: buffer is {}x{}, need height >= 2",
            buffer.width(),
            buffer.height()
        );
        return None;
    }

    let mut sum = 0.0f64;
    for y in 0..buffer.height() - 1 {
        let upper = buffer.row(y);
        let lower = buffer.row(y + 1);
        for (&a, &b) in upper.iter().zip(lower.iter()) {
            sum += (a as i16 - b as i16).abs() as f64;
        }
    }

    let pairs = (buffer.height() as u64 - 1) * buffer.width() as u64;
    let mean = (sum / pairs as f64) as f32;

    log::debug!(
        "Gradient roughness: {:.4} over {} pixel pairs",
        mean,
        pairs
    );

    Some(mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_from(width: u32, height: u32, data: Vec<u8>) -> PixelBuffer {
        PixelBuffer::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn test_gradient_flat_buffer_is_zero() {
        let buf = buffer_from(4, 4, vec![100; 16]);
        assert_eq!(gradient_roughness(&buf), Some(0.0));
    }

    #[test]
    fn test_gradient_single_row_is_indeterminable() {
        let buf = buffer_from(8, 1, vec![10; 8]);
        assert_eq!(gradient_roughness(&buf), None);
    }

    #[test]
    fn test_gradient_known_step() {
        // Two rows differing by exactly 10 everywhere
        let mut data = vec![100u8; 4];
        data.extend(vec![110u8; 4]);
        let buf = buffer_from(4, 2, data);

        let roughness = gradient_roughness(&buf).unwrap();
        assert!((roughness - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_gradient_monotonic_in_row_delta() {
        // Larger row-to-row deltas must produce larger roughness
        let make = |delta: u8| {
            let mut data = Vec::new();
            for y in 0..4u8 {
                data.extend(vec![(y * delta).min(255); 8]);
            }
            buffer_from(8, 4, data)
        };

        let small = gradient_roughness(&make(5)).unwrap();
        let medium = gradient_roughness(&make(20)).unwrap();
        let large = gradient_roughness(&make(60)).unwrap();

        assert!(small < medium);
        assert!(medium < large);
    }
}
