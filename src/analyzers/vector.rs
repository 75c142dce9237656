//! Feature-vector analyzer
//!
//! Scores a pre-normalized 10-element feature vector by combining the
//! rule-based indicator layer with the learned inference layer. The public
//! score range of this analyzer is [0, 1].
//!
//! Failure semantics: a wrong-length vector is a hard input error producing
//! `score = None`. Out-of-range values are coerced into [0, 1], never
//! rejected. An inference failure degrades to the logical layer alone with
//! a log-trail note, never a fatal error.

use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use chrono::Utc;
use serde_json::{json, Value};

use crate::analysis::ensemble::{combine_layers, logical_score};
use crate::analysis::interpretation::Interpretation;
use crate::analysis::result::AnalysisResult;
use crate::analyzers::panic_message;
use crate::config::AnalysisConfig;
use crate::engine::Engine;
use crate::error::AnalysisError;
use crate::features::indicators::FEATURE_INDICATORS;

/// Stable analyzer identifier
pub const ANALYZER_ID: &str = "feature-ensemble";

/// Human-readable analyzer name
pub const ANALYZER_NAME: &str = "Feature Ensemble Analyzer";

/// Factor mapping the [0, 1] score onto the label cut-point range
const LABEL_SCALE: f32 = 10.0;

struct VectorOutcome {
    score: f32,
    message: String,
    details: BTreeMap<String, Value>,
    metadata: BTreeMap<String, Value>,
}

/// Analyze a pre-normalized feature vector
///
/// # Arguments
///
/// * `vector` - Feature vector of the configured length, values in [0, 1]
/// * `engine` - Shared engine holding the inference adapter
/// * `config` - Analysis configuration
/// * `correlation_id` - Caller identifier echoed back in the envelope
///
/// # Returns
///
/// A fully-populated [`AnalysisResult`] with a score in [0, 1], or
/// `score = None` for a wrong-length vector. Never panics or returns an
/// error to the caller.
pub fn analyze_features(
    vector: &[f32],
    engine: &Engine,
    config: &AnalysisConfig,
    correlation_id: Option<&str>,
) -> AnalysisResult {
    let start = Instant::now();
    let mut trail = Vec::new();
    trail.push(format!(
        "Feature ensemble analysis started ({} elements)",
        vector.len()
    ));

    let outcome = catch_unwind(AssertUnwindSafe(|| run(vector, engine, config, &mut trail)));

    let (score, message, details, metadata) = match outcome {
        Ok(Ok(ok)) => (Some(ok.score), ok.message, ok.details, ok.metadata),
        Ok(Err(e)) => {
            let message = e.to_string();
            trail.push(message.clone());
            log::warn!("Feature ensemble analysis failed: {}", message);
            (None, message, BTreeMap::new(), BTreeMap::new())
        }
        Err(payload) => {
            let message = format!("Unexpected failure: {}", panic_message(payload));
            trail.push(message.clone());
            log::warn!("Feature ensemble analysis panicked: {}", message);
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
    vector: &[f32],
    engine: &Engine,
    config: &AnalysisConfig,
    trail: &mut Vec<String>,
) -> Result<VectorOutcome, AnalysisError> {
    if vector.len() != config.feature_vector_len {
        return Err(AnalysisError::InvalidInput(format!(
            "Feature vector length mismatch: got {}, expected {}",
            vector.len(),
            config.feature_vector_len
        )));
    }

    // Out-of-range values are coerced, never rejected
    let mut clamped_count = 0usize;
    let clamped: Vec<f32> = vector
        .iter()
        .map(|&v| {
            let c = v.clamp(0.0, 1.0);
            if c != v {
                clamped_count += 1;
            }
            c
        })
        .collect();
    if clamped_count > 0 {
        trail.push(format!(
            "Coerced {} out-of-range feature values into [0, 1]",
            clamped_count
        ));
    }

    let logical = logical_score(FEATURE_INDICATORS, &clamped);
    trail.push(format!("Logical layer score: {:.4}", logical));

    let (score, inference_score) = match engine.inference().try_infer(&clamped) {
        Ok(learned) => {
            trail.push(format!(
                "Inference layer score: {:.4} (model_loaded={})",
                learned,
                engine.inference().model_loaded()
            ));
            (combine_layers(logical, learned, config), Some(learned))
        }
        Err(e) => {
            // Reduced confidence, not a fatal error: fall back to the
            // logical layer alone.
            trail.push(format!("Inference unavailable ({}), using logical layer only", e));
            (logical.clamp(0.0, 1.0), None)
        }
    };

    let interpretation = Interpretation::from_score(score * LABEL_SCALE, config);
    trail.push(format!(
        "Final score {:.4}: {}",
        score,
        interpretation.label()
    ));

    let satisfied: BTreeMap<String, Value> = FEATURE_INDICATORS
        .iter()
        .map(|ind| {
            (
                ind.name.to_string(),
                json!((ind.predicate)(clamped[ind.index])),
            )
        })
        .collect();

    let mut details = BTreeMap::new();
    details.insert("logical_score".to_string(), json!(logical));
    details.insert("inference_score".to_string(), json!(inference_score));
    details.insert("indicators".to_string(), json!(satisfied));
    details.insert(
        "interpretation".to_string(),
        json!(interpretation.label()),
    );

    let mut metadata = BTreeMap::new();
    metadata.insert(
        "model_loaded".to_string(),
        json!(engine.inference().model_loaded()),
    );
    metadata.insert("inference_used".to_string(), json!(inference_score.is_some()));
    metadata.insert("clamped_values".to_string(), json!(clamped_count));
    metadata.insert(
        "vector_len".to_string(),
        json!(config.feature_vector_len),
    );

    Ok(VectorOutcome {
        score,
        message: interpretation.message().to_string(),
        details,
        metadata,
    })
}
