//! Error types for the image authenticity analysis engine

use std::fmt;

/// Errors that can occur during image authenticity analysis
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters (wrong feature-vector length, missing file)
    InvalidInput(String),

    /// Image decoding error
    DecodingError(String),

    /// A single statistic or indicator could not be computed
    PartialSignal(String),

    /// Inference weights failed to load
    ModelUnavailable(String),

    /// Processing error during analysis
    ProcessingError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
            AnalysisError::PartialSignal(msg) => write!(f, "Partial signal unavailable: {}", msg),
            AnalysisError::ModelUnavailable(msg) => write!(f, "Model unavailable: {}", msg),
            AnalysisError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
