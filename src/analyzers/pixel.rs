//! Pixel statistics analyzer
//!
//! Decodes an image to grayscale, computes the three pixel statistics,
//! maps them to humanness indicators and combines them into a score on the
//! public [0, 10] range.
//!
//! Failure semantics: unrecoverable input errors (missing file, corrupt
//! image) produce the documented low sentinel score with an explanatory
//! message; a panic mid-computation produces `score = None`. A single
//! unavailable statistic degrades to the neutral default in the combination
//! step and analysis continues.

use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use serde_json::{json, Value};

use crate::analysis::ensemble::combine_pixel_indicators;
use crate::analysis::interpretation::Interpretation;
use crate::analysis::result::AnalysisResult;
use crate::analyzers::panic_message;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::features::indicators::{complexity_indicator, sharpness_indicator};
use crate::features::pixel_stats::{
    gradient_roughness, intensity_stats, normalized_entropy, variability_from_stdev,
};
use crate::io::decoder::decode_grayscale;

/// Stable analyzer identifier
pub const ANALYZER_ID: &str = "pixel-statistics";

/// Human-readable analyzer name
pub const ANALYZER_NAME: &str = "Pixel Statistics Analyzer";

/// Factor rescaling the [0, 1] composite to the public range
const SCORE_SCALE: f32 = 10.0;

struct PixelOutcome {
    score: f32,
    message: String,
    details: BTreeMap<String, Value>,
    metadata: BTreeMap<String, Value>,
}

/// Analyze an image file from its pixel statistics
///
/// # Arguments
///
/// * `path` - Path to the image file
/// * `config` - Analysis configuration
/// * `correlation_id` - Caller identifier echoed back in the envelope
///
/// # Returns
///
/// A fully-populated [`AnalysisResult`] with a score in [0, 10] on success,
/// the configured sentinel score on unrecoverable input errors, or
/// `score = None` after a catastrophic failure. Never panics or returns an
/// error to the caller.
pub fn analyze_pixels(
    path: &Path,
    config: &AnalysisConfig,
    correlation_id: Option<&str>,
) -> AnalysisResult {
    let start = Instant::now();
    let mut trail = Vec::new();
    trail.push(format!("Pixel analysis started for {}", path.display()));

    let outcome = catch_unwind(AssertUnwindSafe(|| run(path, config, &mut trail)));

    let (score, message, details, metadata) = match outcome {
        Ok(Ok(ok)) => (Some(ok.score), ok.message, ok.details, ok.metadata),
        Ok(Err(e)) => {
            let message = e.to_string();
            trail.push(message.clone());
            log::warn!("Pixel analysis failed: {}", message);
            (
                Some(config.pixel_failure_score),
                message,
                BTreeMap::new(),
                BTreeMap::new(),
            )
        }
        Err(payload) => {
            let message = format!("Unexpected failure: {}", panic_message(payload));
            trail.push(message.clone());
            log::warn!("Pixel analysis panicked: {}", message);
            (None, message, BTreeMap::new(), BTreeMap::new())
        }
    };

    AnalysisResult {
        analyzer_id: ANALYZER_ID.to_string(),
        analyzer_name: ANALYZER_NAME.to_string(),
        analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
        score,
        message,
        details,
        metadata,
        processing_time_ms: start.elapsed().as_secs_f32() * 1000.0,
        log_trail: trail,
        timestamp: Utc::now(),
        correlation_id: correlation_id.map(|id| id.to_string()),
    }
}

fn run(
    path: &Path,
    config: &AnalysisConfig,
    trail: &mut Vec<String>,
) -> Result<PixelOutcome, AnalysisError> {
    let (buffer, info) = decode_grayscale(path)?;
    trail.push(format!(
        "Decoded {}x{} image ({} source)",
        info.width, info.height, info.color_type
    ));

    // Each statistic degrades independently; None never aborts the others.
    let entropy = normalized_entropy(&buffer);
    if entropy.is_none() {
        trail.push("Entropy unavailable: empty buffer".to_string());
    }

    let gradient = gradient_roughness(&buffer);
    if gradient.is_none() {
        trail.push("Gradient roughness indeterminable: need at least 2 rows".to_string());
    }

    let stats = intensity_stats(&buffer);
    let variability = stats.map(|(_, stdev)| variability_from_stdev(stdev));
    if variability.is_none() {
        trail.push("Tonal variability unavailable: statistics pass failed".to_string());
    }

    let sharpness_ind = gradient.map(|g| sharpness_indicator(g, config));
    let complexity_ind = entropy.map(|e| complexity_indicator(e, config));

    let composite = combine_pixel_indicators(sharpness_ind, variability, complexity_ind, config);
    for name in &composite.substituted {
        trail.push(format!("Neutral default substituted for {} indicator", name));
    }

    let score = (composite.composite * SCORE_SCALE).clamp(0.0, SCORE_SCALE);
    let interpretation = Interpretation::from_score(score, config);
    trail.push(format!(
        "Composite {:.4} scaled to {:.2}: {}",
        composite.composite,
        score,
        interpretation.label()
    ));

    let mut details = BTreeMap::new();
    details.insert("sharpness_indicator".to_string(), json!(sharpness_ind));
    details.insert("variability_indicator".to_string(), json!(variability));
    details.insert("complexity_indicator".to_string(), json!(complexity_ind));
    details.insert("composite".to_string(), json!(composite.composite));
    details.insert(
        "interpretation".to_string(),
        json!(interpretation.label()),
    );

    let mut metadata = BTreeMap::new();
    metadata.insert("width".to_string(), json!(info.width));
    metadata.insert("height".to_string(), json!(info.height));
    metadata.insert("color_type".to_string(), json!(info.color_type));
    metadata.insert("entropy".to_string(), json!(entropy));
    metadata.insert("gradient_roughness".to_string(), json!(gradient));
    metadata.insert(
        "mean_intensity".to_string(),
        json!(stats.map(|(mean, _)| mean)),
    );
    metadata.insert(
        "intensity_stdev".to_string(),
        json!(stats.map(|(_, stdev)| stdev)),
    );

    Ok(PixelOutcome {
        score,
        message: interpretation.message().to_string(),
        details,
        metadata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn save_image(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.png");
        let img = image::GrayImage::from_fn(width, height, |x, y| image::Luma([f(x, y)]));
        img.save(&path).unwrap();
        (dir, path)
    }

    #[test]
    fn test_analyze_textured_image_scores_in_range() {
        // Pseudo-random texture: moderate entropy and gradients
        let (_dir, path) = save_image(64, 64, |x, y| ((x * 31 + y * 17) % 256) as u8);

        let result = analyze_pixels(&path, &AnalysisConfig::default(), Some("req-42"));

        let score = result.score.unwrap();
        assert!((0.0..=10.0).contains(&score));
        assert_eq!(result.correlation_id.as_deref(), Some("req-42"));
        assert!(result.processing_time_ms > 0.0);
        assert!(!result.log_trail.is_empty());
        assert!(result.details.contains_key("interpretation"));
        assert_eq!(result.metadata["width"], serde_json::json!(64));
    }

    #[test]
    fn test_analyze_missing_file_returns_sentinel() {
        let config = AnalysisConfig::default();
        let result = analyze_pixels(
            std::path::Path::new("/nonexistent/image.png"),
            &config,
            None,
        );

        assert_eq!(result.score, Some(config.pixel_failure_score));
        assert!(result.message.contains("not found"));
        assert!(result.processing_time_ms >= 0.0);
        assert!(result.correlation_id.is_none());
    }

    #[test]
    fn test_analyze_corrupt_file_returns_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let config = AnalysisConfig::default();
        let result = analyze_pixels(&path, &config, None);
        assert_eq!(result.score, Some(config.pixel_failure_score));
    }

    #[test]
    fn test_analyze_single_row_image_uses_neutral_default() {
        // Height 1: gradient indeterminable, entropy and variability still
        // available, score produced with the neutral default substituted
        let (_dir, path) = save_image(32, 1, |x, _| (x * 8) as u8);

        let result = analyze_pixels(&path, &AnalysisConfig::default(), None);

        assert!(result.is_scored());
        assert_eq!(result.details["sharpness_indicator"], serde_json::Value::Null);
        assert!(result.metadata["entropy"].is_number());
        assert!(result
            .log_trail
            .iter()
            .any(|line| line.contains("indeterminable")));
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let (_dir, path) = save_image(48, 48, |x, y| ((x * 7 + y * 13) % 256) as u8);
        let config = AnalysisConfig::default();

        let first = analyze_pixels(&path, &config, None);
        let second = analyze_pixels(&path, &config, None);

        assert_eq!(first.score, second.score);
        assert_eq!(first.details, second.details);
        assert_eq!(first.metadata, second.metadata);
    }

    #[test]
    fn test_flat_image_scores_toward_synthetic() {
        // Perfectly flat: zero entropy, zero gradient, zero variability.
        // Sharpness indicator saturates human-like (0.9) but variability and
        // complexity drag the composite down.
        let (_dir, path) = save_image(32, 32, |_, _| 128);

        let result = analyze_pixels(&path, &AnalysisConfig::default(), None);
        let score = result.score.unwrap();

        // 0.9*0.5 + 0.0*0.3 + exp(-15*0.36)*0.2 ~= 0.451 -> ~4.5
        assert!(score < 6.0, "flat image scored {}", score);
    }
}
