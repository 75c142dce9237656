//! Ensemble scoring
//!
//! Combines rule-based per-feature indicators and the learned inference
//! output into one bounded score via fixed, auditable weights.

use crate::config::AnalysisConfig;
use crate::features::indicators::WeightedIndicator;

/// Result of the pixel-only weighted combination
#[derive(Debug, Clone)]
pub struct PixelComposite {
    /// Composite humanness in [0, 1] before rescaling to the public range
    pub composite: f32,
    /// Names of signals that were unavailable and replaced by the neutral
    /// default in the combination
    pub substituted: Vec<&'static str>,
}

/// Compute the logical-layer score from weighted indicators
///
/// Returns the weighted fraction of satisfied predicates,
/// `Σ(weight_i · satisfied_i) / Σ(weight_i)`, in [0, 1] regardless of how
/// many indicators fire. A zero total weight yields 0.
pub fn logical_score(indicators: &[WeightedIndicator], vector: &[f32]) -> f32 {
    let total_weight: f32 = indicators.iter().map(|ind| ind.weight).sum();
    if total_weight <= 0.0 {
        log::warn!("Indicator weights sum to zero, logical score defaults to 0");
        return 0.0;
    }

    let satisfied_weight: f32 = indicators
        .iter()
        .filter(|ind| (ind.predicate)(vector[ind.index]))
        .map(|ind| ind.weight)
        .sum();

    satisfied_weight / total_weight
}

/// Combine the logical and learned layers into one [0, 1] score
///
/// `final = logical * logical_layer_weight + learned * learned_layer_weight`
/// with the configured weights summing to 1.0.
pub fn combine_layers(logical: f32, learned: f32, config: &AnalysisConfig) -> f32 {
    let combined =
        logical * config.logical_layer_weight + learned * config.learned_layer_weight;
    combined.clamp(0.0, 1.0)
}

/// Combine the three pixel indicators into a [0, 1] composite
///
/// Fixed weights (0.50 sharpness / 0.30 variability / 0.20 complexity) sum
/// to 1.0. An unavailable signal is replaced by the configured neutral
/// default here, in the combination step only; the raw feature report keeps
/// its explicit `None`.
pub fn combine_pixel_indicators(
    sharpness: Option<f32>,
    variability: Option<f32>,
    complexity: Option<f32>,
    config: &AnalysisConfig,
) -> PixelComposite {
    let mut substituted = Vec::new();
    let mut resolve = |value: Option<f32>, name: &'static str| match value {
        Some(v) => v,
        None => {
            substituted.push(name);
            config.neutral_indicator
        }
    };

    let sharpness = resolve(sharpness, "sharpness");
    let variability = resolve(variability, "variability");
    let complexity = resolve(complexity, "complexity");

    let composite = (sharpness * config.sharpness_weight
        + variability * config.variability_weight
        + complexity * config.complexity_weight)
        .clamp(0.0, 1.0);

    if !substituted.is_empty() {
        log::warn!(
            "Pixel composite used neutral default for: {}",
            substituted.join(", ")
        );
    }

    PixelComposite {
        composite,
        substituted,
    }
}
