//! # Pixelproof
//!
//! A multi-signal image authenticity analysis engine, scoring images on a
//! spectrum from "likely authentic capture" to "likely synthetic or
//! manipulated".
//!
//! ## Features
//!
//! - **Pixel Statistics**: entropy, gradient-based sharpness and tonal
//!   variability over grayscale pixel buffers
//! - **Signature Matching**: configurable taxonomy of editing, generative-AI,
//!   camera, watermark and provenance signatures with fixed-priority
//!   classification
//! - **Numeric Inference**: fixed-weight feed-forward scorer with an
//!   untrained fallback when persisted weights are unavailable
//! - **Ensemble Scoring**: deterministic, auditable weighted combination
//!   into one bounded score with a human-readable rationale
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use pixelproof::{analyze_pixels, AnalysisConfig};
//!
//! let config = AnalysisConfig::default();
//! let result = analyze_pixels(Path::new("photo.jpg"), &config, Some("req-1"));
//!
//! println!("Score: {:?} ({})", result.score, result.message);
//! for line in &result.log_trail {
//!     println!("  {}", line);
//! }
//! ```
//!
//! ## Architecture
//!
//! The analysis pipeline follows this flow:
//!
//! ```text
//! Image / Vector Input → Decoding & Extraction → Feature Statistics →
//! Indicators & Signatures → Ensemble Scoring → Result Envelope
//! ```
//!
//! Every analyzer entry point returns a fully-populated
//! [`AnalysisResult`] under all failure conditions; no error ever escapes
//! to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod analyzers;
pub mod config;
pub mod engine;
pub mod error;
pub mod features;
pub mod io;
pub mod ml;

// Re-export main types
pub use analysis::interpretation::Interpretation;
pub use analysis::result::AnalysisResult;
pub use analyzers::{analyze_features, analyze_metadata, analyze_pixels};
pub use config::AnalysisConfig;
pub use engine::{global_engine, init_global_engine, Engine};
pub use error::AnalysisError;
pub use features::signature::{SignatureCategory, SignatureTaxonomy};
