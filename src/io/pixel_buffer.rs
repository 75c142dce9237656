//! Grayscale pixel buffer

use crate::error::AnalysisError;

/// Immutable 2-D grid of 8-bit grayscale intensities, row-major
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Intensity data, row-major, `width * height` bytes
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from raw row-major grayscale bytes
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if `data.len() != width * height`
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, AnalysisError> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(AnalysisError::InvalidInput(format!(
                "Pixel data length mismatch: got {}, expected {} ({}x{})",
                data.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Buffer width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the buffer holds no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All intensities, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    /// One row of intensities
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` (callers iterate within bounds)
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_valid() {
        let buf = PixelBuffer::from_raw(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.len(), 6);
        assert_eq!(buf.row(0), &[0, 1, 2]);
        assert_eq!(buf.row(1), &[3, 4, 5]);
    }

    #[test]
    fn test_from_raw_length_mismatch() {
        let result = PixelBuffer::from_raw(3, 2, vec![0, 1, 2]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_buffer() {
        let buf = PixelBuffer::from_raw(0, 0, vec![]).unwrap();
        assert!(buf.is_empty());
    }
}
