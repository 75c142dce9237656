//! Humanness indicator mappings
//!
//! Maps raw statistics and feature-vector positions onto [0, 1] indicators
//! of "looks like a human capture". The sharpness interpolation band and the
//! entropy complexity curve are tuned production constants, exposed through
//! `AnalysisConfig` rather than re-derived.

use crate::config::AnalysisConfig;

/// Upper clamp of the sharpness indicator band
const SHARPNESS_BAND_TOP: f32 = 0.9;

/// Span of the sharpness interpolation band
const SHARPNESS_BAND_SPAN: f32 = 0.8;

/// Map mean gradient roughness to a sharpness humanness indicator
///
/// Below `sharpness_low` the image shows human-like softness and the
/// indicator saturates at 0.9; above `sharpness_high` it shows digital
/// over-sharpness and saturates at 0.1. In between the indicator is
/// `0.9 - fraction * 0.8`, spanning [0.1, 0.9] across the band. The band
/// deliberately avoids 0 and 1 so a single statistic cannot saturate the
/// ensemble at exact boundaries.
pub fn sharpness_indicator(mean_gradient: f32, config: &AnalysisConfig) -> f32 {
    if mean_gradient <= config.sharpness_low {
        return SHARPNESS_BAND_TOP;
    }
    if mean_gradient >= config.sharpness_high {
        return SHARPNESS_BAND_TOP - SHARPNESS_BAND_SPAN;
    }
    let fraction =
        (mean_gradient - config.sharpness_low) / (config.sharpness_high - config.sharpness_low);
    SHARPNESS_BAND_TOP - fraction * SHARPNESS_BAND_SPAN
}

/// Map normalized entropy to a complexity humanness indicator
///
/// Rewards entropy near the target (0.6) with a Gaussian-shaped curve
/// `exp(-falloff * (entropy - target)^2)`: neither near-blank nor maximally
/// random images are typical of human photographs.
pub fn complexity_indicator(entropy: f32, config: &AnalysisConfig) -> f32 {
    let deviation = entropy - config.entropy_target;
    (-config.entropy_falloff * deviation * deviation).exp()
}

/// A named, weighted boolean predicate over one feature-vector position
#[derive(Debug, Clone, Copy)]
pub struct WeightedIndicator {
    /// Indicator name, used in result details
    pub name: &'static str,
    /// Feature-vector position this indicator reads
    pub index: usize,
    /// Non-negative weight in the logical layer
    pub weight: f32,
    /// Satisfaction predicate over the feature value
    pub predicate: fn(f32) -> bool,
}

fn within_natural_band(value: f32) -> bool {
    (0.2..=0.8).contains(&value)
}

fn moderate_contrast(value: f32) -> bool {
    (0.35..=0.75).contains(&value)
}

fn at_least_half(value: f32) -> bool {
    value >= 0.5
}

/// Rule set for the 10-element feature vector
///
/// Position meanings are fixed: 0 red dominance, 1 green dominance,
/// 2 blue dominance, 3 contrast, 4 edge softness, 5 noise presence,
/// 6 tonal range, 7 saturation balance, 8 luminance balance,
/// 9 texture irregularity.
pub const FEATURE_INDICATORS: &[WeightedIndicator] = &[
    WeightedIndicator {
        name: "red_dominance_natural",
        index: 0,
        weight: 0.8,
        predicate: within_natural_band,
    },
    WeightedIndicator {
        name: "green_dominance_natural",
        index: 1,
        weight: 0.8,
        predicate: within_natural_band,
    },
    WeightedIndicator {
        name: "blue_dominance_natural",
        index: 2,
        weight: 0.8,
        predicate: within_natural_band,
    },
    WeightedIndicator {
        name: "contrast_moderate",
        index: 3,
        weight: 1.2,
        predicate: moderate_contrast,
    },
    WeightedIndicator {
        name: "edges_soft",
        index: 4,
        weight: 1.5,
        predicate: at_least_half,
    },
    WeightedIndicator {
        name: "noise_present",
        index: 5,
        weight: 1.2,
        predicate: at_least_half,
    },
    WeightedIndicator {
        name: "tonal_range_wide",
        index: 6,
        weight: 1.0,
        predicate: at_least_half,
    },
    WeightedIndicator {
        name: "saturation_balanced",
        index: 7,
        weight: 0.8,
        predicate: within_natural_band,
    },
    WeightedIndicator {
        name: "luminance_balanced",
        index: 8,
        weight: 0.8,
        predicate: within_natural_band,
    },
    WeightedIndicator {
        name: "texture_irregular",
        index: 9,
        weight: 1.4,
        predicate: at_least_half,
    },
];
