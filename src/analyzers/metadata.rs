//! Metadata signature analyzer
//!
//! Extracts textual EXIF metadata, assembles a search blob and classifies
//! it against the signature taxonomy, then maps the winning category to a
//! score on the public [0, 10] range.
//!
//! Failure semantics: an unopenable file produces `score = None` with an
//! explanatory message. An image without metadata is not a failure; it
//! classifies as unmatched and receives the neutral unmatched score.

use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use serde_json::{json, Value};

use crate::analysis::interpretation::Interpretation;
use crate::analysis::result::AnalysisResult;
use crate::analyzers::panic_message;
use crate::config::AnalysisConfig;
use crate::engine::Engine;
use crate::error::AnalysisError;
use crate::features::signature::SignatureCategory;
use crate::io::metadata::{extract_metadata, MetadataFields};

/// Stable analyzer identifier
pub const ANALYZER_ID: &str = "metadata-signature";

/// Human-readable analyzer name
pub const ANALYZER_NAME: &str = "Metadata Signature Analyzer";

struct MetadataOutcome {
    score: f32,
    message: String,
    details: BTreeMap<String, Value>,
    metadata: BTreeMap<String, Value>,
}

/// Score a signature category using the configured category table
fn category_score(category: Option<SignatureCategory>, config: &AnalysisConfig) -> f32 {
    match category {
        Some(SignatureCategory::ProvenanceMarker) => config.provenance_marker_score,
        Some(SignatureCategory::AiWatermark) => config.ai_watermark_score,
        Some(SignatureCategory::VerificationSeal) => config.verification_seal_score,
        Some(SignatureCategory::CameraSignature) => config.camera_signature_score,
        Some(SignatureCategory::EditingSoftware) => config.editing_software_score,
        Some(SignatureCategory::GenerativeAi) => config.generative_ai_score,
        None => config.unmatched_score,
    }
}

/// Analyze an image file from its metadata signatures
///
/// # Arguments
///
/// * `path` - Path to the image file
/// * `engine` - Shared engine holding the compiled taxonomy
/// * `config` - Analysis configuration
/// * `correlation_id` - Caller identifier echoed back in the envelope
///
/// # Returns
///
/// A fully-populated [`AnalysisResult`] with a score in [0, 10], or
/// `score = None` when the file cannot be read at all. Never panics or
/// returns an error to the caller.
pub fn analyze_metadata(
    path: &Path,
    engine: &Engine,
    config: &AnalysisConfig,
    correlation_id: Option<&str>,
) -> AnalysisResult {
    let start = Instant::now();
    let mut trail = Vec::new();
    trail.push(format!("Metadata analysis started for {}", path.display()));

    let outcome = catch_unwind(AssertUnwindSafe(|| run(path, engine, config, &mut trail)));

    let (score, message, details, metadata) = match outcome {
        Ok(Ok(ok)) => (Some(ok.score), ok.message, ok.details, ok.metadata),
        Ok(Err(e)) => {
            let message = e.to_string();
            trail.push(message.clone());
            log::warn!("Metadata analysis failed: {}", message);
            (None, message, BTreeMap::new(), BTreeMap::new())
        }
        Err(payload) => {
            let message = format!("Unexpected failure: {}", panic_message(payload));
            trail.push(message.clone());
            log::warn!("Metadata analysis panicked: {}", message);
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
    engine: &Engine,
    config: &AnalysisConfig,
    trail: &mut Vec<String>,
) -> Result<MetadataOutcome, AnalysisError> {
    let raw_map = extract_metadata(path)?;
    trail.push(format!("Extracted {} metadata fields", raw_map.len()));

    let fields = MetadataFields::from_map(&raw_map);
    let blob = fields.signature_blob();
    if blob.is_empty() {
        trail.push("No textual metadata available for signature matching".to_string());
    }

    let matched = engine.taxonomy().classify(&blob);
    match &matched {
        Some(m) => trail.push(format!(
            "Signature category: {} (pattern {:?})",
            m.category.label(),
            m.pattern
        )),
        None => trail.push("No signature category matched".to_string()),
    }

    let category = matched.as_ref().map(|m| m.category);
    let score = category_score(category, config);
    let interpretation = Interpretation::from_score(score, config);

    let message = match category {
        Some(c) => format!(
            "{} ({} signature detected)",
            interpretation.message(),
            c.label()
        ),
        None => format!("{} (no signature matched)", interpretation.message()),
    };

    let mut details = BTreeMap::new();
    details.insert(
        "category".to_string(),
        json!(category.map(|c| c.label())),
    );
    details.insert(
        "matched_pattern".to_string(),
        json!(matched.as_ref().map(|m| m.pattern.clone())),
    );
    details.insert(
        "interpretation".to_string(),
        json!(interpretation.label()),
    );

    let mut metadata = BTreeMap::new();
    metadata.insert("field_count".to_string(), json!(raw_map.len()));
    metadata.insert("blob_chars".to_string(), json!(blob.len()));
    metadata.insert(
        "taxonomy_patterns".to_string(),
        json!(engine.taxonomy().pattern_count()),
    );
    metadata.insert("fields".to_string(), json!(raw_map));

    Ok(MetadataOutcome {
        score,
        message,
        details,
        metadata,
    })
}
