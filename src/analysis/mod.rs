//! Scoring and result aggregation modules
//!
//! Combines feature extraction results into final scores:
//! - Ensemble scoring (logical + learned layers, pixel composite)
//! - Qualitative interpretation labels
//! - The uniform result envelope

pub mod ensemble;
pub mod interpretation;
pub mod result;
