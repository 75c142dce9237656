//! Qualitative interpretation of authenticity scores

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;

/// Qualitative authenticity label over the public [0, 10] range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interpretation {
    /// Score >= very_likely_human_cutoff
    VeryLikelyHuman,
    /// Score >= likely_human_cutoff
    LikelyHuman,
    /// Score >= indeterminate_cutoff
    Indeterminate,
    /// Score >= likely_synthetic_cutoff
    LikelySynthetic,
    /// Everything below
    VeryLikelySynthetic,
}

impl Interpretation {
    /// Map a [0, 10] score onto its label using the configured cut points
    pub fn from_score(score: f32, config: &AnalysisConfig) -> Self {
        if score >= config.very_likely_human_cutoff {
            Interpretation::VeryLikelyHuman
        } else if score >= config.likely_human_cutoff {
            Interpretation::LikelyHuman
        } else if score >= config.indeterminate_cutoff {
            Interpretation::Indeterminate
        } else if score >= config.likely_synthetic_cutoff {
            Interpretation::LikelySynthetic
        } else {
            Interpretation::VeryLikelySynthetic
        }
    }

    /// Short label used in result details
    pub fn label(&self) -> &'static str {
        match self {
            Interpretation::VeryLikelyHuman => "very likely human",
            Interpretation::LikelyHuman => "likely human",
            Interpretation::Indeterminate => "indeterminate",
            Interpretation::LikelySynthetic => "likely synthetic",
            Interpretation::VeryLikelySynthetic => "very likely synthetic",
        }
    }

    /// Human-readable rationale sentence
    pub fn message(&self) -> &'static str {
        match self {
            Interpretation::VeryLikelyHuman => {
                "Signal characteristics are strongly consistent with an authentic capture"
            }
            Interpretation::LikelyHuman => {
                "Signal characteristics are consistent with an authentic capture"
            }
            Interpretation::Indeterminate => {
                "Signal characteristics are mixed; authenticity could not be determined"
            }
            Interpretation::LikelySynthetic => {
                "Signal characteristics suggest synthetic or manipulated content"
            }
            Interpretation::VeryLikelySynthetic => {
                "Signal characteristics are strongly consistent with synthetic or manipulated content"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_points() {
        let config = AnalysisConfig::default();
        assert_eq!(
            Interpretation::from_score(9.0, &config),
            Interpretation::VeryLikelyHuman
        );
        assert_eq!(
            Interpretation::from_score(8.0, &config),
            Interpretation::VeryLikelyHuman
        );
        assert_eq!(
            Interpretation::from_score(7.0, &config),
            Interpretation::LikelyHuman
        );
        assert_eq!(
            Interpretation::from_score(5.0, &config),
            Interpretation::Indeterminate
        );
        assert_eq!(
            Interpretation::from_score(3.0, &config),
            Interpretation::LikelySynthetic
        );
        assert_eq!(
            Interpretation::from_score(0.5, &config),
            Interpretation::VeryLikelySynthetic
        );
    }

    #[test]
    fn test_labels_are_distinct() {
        let config = AnalysisConfig::default();
        let labels: Vec<&str> = [9.0, 7.0, 5.0, 3.0, 1.0]
            .iter()
            .map(|&s| Interpretation::from_score(s, &config).label())
            .collect();
        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }
}
