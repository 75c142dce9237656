//! Pixel-level statistics
//!
//! Three independent scalar features over a grayscale buffer:
//! - Normalized Shannon entropy
//! - Vertical gradient roughness
//! - Tonal variability
//!
//! Each statistic degrades independently: an unavailable signal is reported
//! as `None`, never silently as zero.

pub mod entropy;
pub mod gradient;
pub mod tonal;

pub use entropy::normalized_entropy;
pub use gradient::gradient_roughness;
pub use tonal::{intensity_stats, tonal_variability, variability_from_stdev};
