//! Image decoding using the `image` crate

use std::path::Path;

use crate::error::AnalysisError;
use crate::io::pixel_buffer::PixelBuffer;

/// Basic technical metadata of a decoded image
#[derive(Debug, Clone)]
pub struct ImageInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Source color type as reported by the decoder (e.g. "Rgb8")
    pub color_type: String,
}

/// Decode an image file to a grayscale pixel buffer
///
/// Color images are converted to 8-bit luma; grayscale sources pass through.
///
/// # Arguments
///
/// * `path` - Path to the image file
///
/// # Returns
///
/// Tuple of (grayscale pixel buffer, basic image metadata)
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the file does not exist and
/// `AnalysisError::DecodingError` if the file cannot be decoded. Decode
/// failures propagate as a single typed error, never as partial data.
pub fn decode_grayscale(path: &Path) -> Result<(PixelBuffer, ImageInfo), AnalysisError> {
    if !path.exists() {
        return Err(AnalysisError::InvalidInput(format!(
            "Image file not found: {}",
            path.display()
        )));
    }

    log::debug!("Decoding image file: {}", path.display());

    let dynamic = image::open(path).map_err(|e| {
        AnalysisError::DecodingError(format!("Failed to decode {}: {}", path.display(), e))
    })?;

    let color_type = format!("{:?}", dynamic.color());
    let luma = dynamic.to_luma8();
    let (width, height) = (luma.width(), luma.height());

    let info = ImageInfo {
        width,
        height,
        color_type,
    };
    let buffer = PixelBuffer::from_raw(width, height, luma.into_raw())?;

    log::debug!(
        "Decoded {}x{} image ({} source)",
        info.width,
        info.height,
        info.color_type
    );

    Ok((buffer, info))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_missing_file() {
        let result = decode_grayscale(Path::new("/nonexistent/image.png"));
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_decode_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_an_image.png");
        std::fs::write(&path, b"this is not image data").unwrap();

        let result = decode_grayscale(&path);
        assert!(matches!(result, Err(AnalysisError::DecodingError(_))));
    }

    #[test]
    fn test_decode_synthetic_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradient.png");

        let img = image::GrayImage::from_fn(16, 8, |x, _y| image::Luma([(x * 16) as u8]));
        img.save(&path).unwrap();

        let (buffer, info) = decode_grayscale(&path).unwrap();
        assert_eq!(buffer.width(), 16);
        assert_eq!(buffer.height(), 8);
        assert_eq!(info.width, 16);
        assert_eq!(buffer.row(0)[0], 0);
        assert_eq!(buffer.row(0)[15], 240);
    }
}
