//! Feature extraction modules
//!
//! This module contains all feature extraction and rule-mapping logic:
//! - Pixel statistics (entropy, gradient roughness, tonal variability)
//! - Humanness indicator mappings
//! - Metadata signature matching

pub mod indicators;
pub mod pixel_stats;
pub mod signature;
