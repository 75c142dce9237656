//! Shannon entropy of the intensity histogram
//!
//! Algorithm:
//! 1. Build the 256-level intensity histogram
//! 2. Compute Shannon entropy H = -Σ p·log2(p) over non-empty bins
//! 3. Normalize by 8 (maximum entropy for 8-bit data), yielding [0, 1]

use crate::io::pixel_buffer::PixelBuffer;

/// Bits of entropy in a fully random 8-bit source
const MAX_ENTROPY_BITS: f64 = 8.0;

/// Compute normalized Shannon entropy of a grayscale buffer
///
/// # Arguments
///
/// * `buffer` - Grayscale pixel buffer (any size)
///
/// # Returns
///
/// Normalized entropy in [0, 1], or `None` for an empty buffer. Callers must
/// distinguish "no signal" (`None`) from genuine zero entropy (a buffer with
/// a single repeated intensity).
///
/// # Example
///
/// ```
/// use pixelproof::io::pixel_buffer::PixelBuffer;
/// use pixelproof::features::pixel_stats::normalized_entropy;
///
/// let flat = PixelBuffer::from_raw(4, 4, vec![200; 16]).unwrap();
/// assert_eq!(normalized_entropy(&flat), Some(0.0));
/// ```
pub fn normalized_entropy(buffer: &PixelBuffer) -> Option<f32> {
    if buffer.is_empty() {
        log::warn!("Entropy unavailable: empty pixel buffer");
        return None;
    }

    let mut histogram = [0u64; 256];
    for &intensity in buffer.pixels() {
        histogram[intensity as usize] += 1;
    }

    let total = buffer.len() as f64;
    let mut entropy_bits = 0.0f64;
    for &count in histogram.iter() {
        if count == 0 {
            continue;
        }
        let p = count as f64 / total;
        entropy_bits -= p * p.log2();
    }

    let normalized = (entropy_bits / MAX_ENTROPY_BITS) as f32;

    log::debug!(
        "Entropy: {:.4} bits over {} pixels (normalized {:.4})",
        entropy_bits,
        buffer.len(),
        normalized
    );

    Some(normalized)
}
