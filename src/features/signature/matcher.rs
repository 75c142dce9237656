//! Signature classification
//!
//! Compiles a taxonomy into case-insensitive regex matchers once, then
//! classifies metadata text blobs into the single best-matching category
//! using a fixed priority order. Classification is a pure function of
//! (blob, compiled taxonomy); diagnostic logging aside, it has no side
//! effects.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::taxonomy::SignatureTaxonomy;

/// Signature category, highest priority first
///
/// When a blob matches patterns in several categories, the highest-priority
/// category wins: a provenance marker outranks an AI watermark, which
/// outranks a verification seal, and so on down to generative-AI software.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignatureCategory {
    /// Content-credentials / provenance chain marker
    ProvenanceMarker,
    /// Declared or invisible AI watermark
    AiWatermark,
    /// Capture verification seal
    VerificationSeal,
    /// Camera vendor / firmware signature
    CameraSignature,
    /// Editing software signature
    EditingSoftware,
    /// Generative-AI tool signature
    GenerativeAi,
}

impl SignatureCategory {
    /// Fixed classification priority, highest first
    pub const PRIORITY: [SignatureCategory; 6] = [
        SignatureCategory::ProvenanceMarker,
        SignatureCategory::AiWatermark,
        SignatureCategory::VerificationSeal,
        SignatureCategory::CameraSignature,
        SignatureCategory::EditingSoftware,
        SignatureCategory::GenerativeAi,
    ];

    /// Category label used in result details
    pub fn label(&self) -> &'static str {
        match self {
            SignatureCategory::ProvenanceMarker => "provenance-marker",
            SignatureCategory::AiWatermark => "ai-watermark",
            SignatureCategory::VerificationSeal => "verification-seal",
            SignatureCategory::CameraSignature => "camera-signature",
            SignatureCategory::EditingSoftware => "editing-software",
            SignatureCategory::GenerativeAi => "generative-ai",
        }
    }
}

/// A successful classification
#[derive(Debug, Clone)]
pub struct SignatureMatch {
    /// Winning category
    pub category: SignatureCategory,
    /// The pattern string that matched
    pub pattern: String,
}

/// Taxonomy with patterns compiled to case-insensitive regexes
#[derive(Debug)]
pub struct CompiledTaxonomy {
    sets: Vec<(SignatureCategory, Vec<Regex>)>,
}

impl CompiledTaxonomy {
    /// Compile every pattern in the taxonomy
    ///
    /// Invalid pattern strings are logged and skipped; they never reach
    /// match time and never abort compilation.
    pub fn compile(taxonomy: &SignatureTaxonomy) -> Self {
        let sets = SignatureCategory::PRIORITY
            .iter()
            .map(|&category| {
                let patterns = match category {
                    SignatureCategory::ProvenanceMarker => &taxonomy.provenance_marker,
                    SignatureCategory::AiWatermark => &taxonomy.ai_watermark,
                    SignatureCategory::VerificationSeal => &taxonomy.verification_seal,
                    SignatureCategory::CameraSignature => &taxonomy.camera_signature,
                    SignatureCategory::EditingSoftware => &taxonomy.editing_software,
                    SignatureCategory::GenerativeAi => &taxonomy.generative_ai,
                };
                let compiled = patterns
                    .iter()
                    .filter_map(|pattern| {
                        match RegexBuilder::new(pattern).case_insensitive(true).build() {
                            Ok(regex) => Some(regex),
                            Err(e) => {
                                log::warn!(
                                    "Skipping invalid pattern {:?} in category {}: {}",
                                    pattern,
                                    category.label(),
                                    e
                                );
                                None
                            }
                        }
                    })
                    .collect();
                (category, compiled)
            })
            .collect();

        Self { sets }
    }

    /// Classify a metadata text blob into its best-matching category
    ///
    /// A category matches when any of its patterns is found anywhere in the
    /// blob (search, not full match). Categories are tried in priority
    /// order; the first match wins. An empty taxonomy or empty blob yields
    /// `None`.
    pub fn classify(&self, blob: &str) -> Option<SignatureMatch> {
        if blob.is_empty() {
            return None;
        }

        for (category, regexes) in &self.sets {
            for regex in regexes {
                if regex.is_match(blob) {
                    log::debug!(
                        "Signature match: category={}, pattern={:?}",
                        category.label(),
                        regex.as_str()
                    );
                    return Some(SignatureMatch {
                        category: *category,
                        pattern: regex.as_str().to_string(),
                    });
                }
            }
        }

        log::debug!("No signature category matched ({} chars)", blob.len());
        None
    }

    /// Total number of compiled patterns across all categories
    pub fn pattern_count(&self) -> usize {
        self.sets.iter().map(|(_, regexes)| regexes.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> CompiledTaxonomy {
        CompiledTaxonomy::compile(&SignatureTaxonomy::builtin())
    }

    #[test]
    fn test_classify_editing_software() {
        let matched = builtin().classify("Adobe Photoshop 25.1").unwrap();
        assert_eq!(matched.category, SignatureCategory::EditingSoftware);
    }

    #[test]
    fn test_classify_provenance_marker() {
        let matched = builtin().classify("C2PA manifest present").unwrap();
        assert_eq!(matched.category, SignatureCategory::ProvenanceMarker);
    }

    #[test]
    fn test_classify_generative_ai() {
        let matched = builtin().classify("Created with Stable Diffusion XL").unwrap();
        assert_eq!(matched.category, SignatureCategory::GenerativeAi);
    }

    #[test]
    fn test_classify_case_insensitive() {
        let matched = builtin().classify("MIDJOURNEY v6").unwrap();
        assert_eq!(matched.category, SignatureCategory::GenerativeAi);
    }

    #[test]
    fn test_priority_seal_beats_editing() {
        // Blob matches both an editing-software pattern and a verification
        // seal; the seal has higher priority and must win.
        let matched = builtin()
            .classify("Edited in Photoshop, Truepic verified capture")
            .unwrap();
        assert_eq!(matched.category, SignatureCategory::VerificationSeal);
    }

    #[test]
    fn test_priority_provenance_beats_everything() {
        let blob = "Photoshop, Midjourney, Truepic, SynthID, Canon, c2pa";
        let matched = builtin().classify(blob).unwrap();
        assert_eq!(matched.category, SignatureCategory::ProvenanceMarker);
    }

    #[test]
    fn test_empty_taxonomy_matches_nothing() {
        let compiled = CompiledTaxonomy::compile(&SignatureTaxonomy::empty());
        assert!(compiled.classify("Adobe Photoshop 25.1").is_none());
        assert_eq!(compiled.pattern_count(), 0);
    }

    #[test]
    fn test_empty_blob_matches_nothing() {
        assert!(builtin().classify("").is_none());
    }

    #[test]
    fn test_invalid_pattern_skipped_not_fatal() {
        let mut taxonomy = SignatureTaxonomy::empty();
        taxonomy.editing_software =
            vec!["[unclosed".to_string(), "photoshop".to_string()];

        let compiled = CompiledTaxonomy::compile(&taxonomy);
        assert_eq!(compiled.pattern_count(), 1);

        let matched = compiled.classify("photoshop").unwrap();
        assert_eq!(matched.category, SignatureCategory::EditingSoftware);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let compiled = builtin();
        let blob = "Canon EOS R5 ver 1.8, edited in Lightroom";
        let first = compiled.classify(blob).unwrap();
        let second = compiled.classify(blob).unwrap();
        assert_eq!(first.category, second.category);
        assert_eq!(first.pattern, second.pattern);
    }
}
