//! Analysis result envelope
//!
//! Every analyzer call, success or failure, returns the same envelope
//! shape. This uniformity lets an external aggregator merge many analyzers'
//! outputs without per-analyzer adapters.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform result envelope produced by every analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Stable analyzer identifier (e.g. "pixel-statistics")
    pub analyzer_id: String,

    /// Human-readable analyzer name
    pub analyzer_name: String,

    /// Analyzer version
    pub analyzer_version: String,

    /// Authenticity score on the analyzer's documented range, or `None`
    /// when the input could not be scored at all
    pub score: Option<f32>,

    /// Human-readable interpretation or failure explanation
    pub message: String,

    /// Analyzer-specific interpreted values
    pub details: BTreeMap<String, Value>,

    /// Raw and derived technical values
    pub metadata: BTreeMap<String, Value>,

    /// Wall-clock duration of the entire call, including I/O, in
    /// fractional milliseconds (monotonic clock)
    pub processing_time_ms: f32,

    /// Ordered human-readable milestones recorded during the call
    pub log_trail: Vec<String>,

    /// UTC timestamp of result creation
    pub timestamp: DateTime<Utc>,

    /// Correlation identifier echoed back verbatim from the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

impl AnalysisResult {
    /// True when the analyzer produced a usable score
    ///
    /// A `false` here means "could not be scored", which downstream
    /// consumers must keep distinct from "scored low on evidence".
    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }
}
