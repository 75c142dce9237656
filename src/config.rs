//! Configuration parameters for image authenticity analysis
//!
//! Every tuned constant in the scoring core lives here as an overridable
//! field. The pixel-feature weights and the sharpness interpolation band are
//! empirically tuned values carried over from the production scoring rules;
//! they are preserved as-is rather than re-derived.

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Feature vector
    /// Expected feature vector length (default: 10)
    pub feature_vector_len: usize,

    // Pixel statistics
    /// Mean row-gradient below this is treated as human-like softness (default: 2.0)
    pub sharpness_low: f32,

    /// Mean row-gradient above this is treated as digital over-sharpness (default: 12.0)
    pub sharpness_high: f32,

    /// Normalized entropy value most typical of human photographs (default: 0.6)
    pub entropy_target: f32,

    /// Falloff rate of the complexity indicator around the entropy target (default: 15.0)
    pub entropy_falloff: f32,

    // Pixel-only ensemble weights (must sum to 1.0)
    /// Weight of the sharpness indicator (default: 0.50)
    pub sharpness_weight: f32,

    /// Weight of the tonal variability indicator (default: 0.30)
    pub variability_weight: f32,

    /// Weight of the entropy complexity indicator (default: 0.20)
    pub complexity_weight: f32,

    /// Neutral indicator value substituted for unavailable signals in the
    /// weighted combination step (default: 0.5)
    pub neutral_indicator: f32,

    // Two-layer ensemble weights (must sum to 1.0)
    /// Weight of the rule-based logical layer (default: 0.7)
    pub logical_layer_weight: f32,

    /// Weight of the learned inference layer (default: 0.3)
    pub learned_layer_weight: f32,

    // Interpretation cut points over the public [0, 10] range
    /// Minimum score for "very likely human" (default: 8.0)
    pub very_likely_human_cutoff: f32,

    /// Minimum score for "likely human" (default: 6.0)
    pub likely_human_cutoff: f32,

    /// Minimum score for "indeterminate" (default: 4.0)
    pub indeterminate_cutoff: f32,

    /// Minimum score for "likely synthetic" (default: 2.0)
    pub likely_synthetic_cutoff: f32,

    /// Sentinel score reported by the pixel analyzer on unrecoverable input
    /// errors, kept distinct from evidence-based low scores by the
    /// accompanying message (default: 1.0)
    pub pixel_failure_score: f32,

    // Metadata signature scores over the public [0, 10] range
    /// Score when a provenance/content-credentials marker matches (default: 9.5)
    pub provenance_marker_score: f32,

    /// Score when a verification seal matches (default: 9.0)
    pub verification_seal_score: f32,

    /// Score when a camera firmware signature matches (default: 8.0)
    pub camera_signature_score: f32,

    /// Score when no signature category matches (default: 5.0)
    pub unmatched_score: f32,

    /// Score when an editing-software signature matches (default: 3.0)
    pub editing_software_score: f32,

    /// Score when an AI watermark matches (default: 1.0)
    pub ai_watermark_score: f32,

    /// Score when a generative-AI-software signature matches (default: 0.5)
    pub generative_ai_score: f32,

    // Inference
    /// Hidden-layer width of the untrained fallback network (default: 16)
    pub fallback_hidden_width: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            feature_vector_len: 10,
            sharpness_low: 2.0,
            sharpness_high: 12.0,
            entropy_target: 0.6,
            entropy_falloff: 15.0,
            sharpness_weight: 0.50,
            variability_weight: 0.30,
            complexity_weight: 0.20,
            neutral_indicator: 0.5,
            logical_layer_weight: 0.7,
            learned_layer_weight: 0.3,
            very_likely_human_cutoff: 8.0,
            likely_human_cutoff: 6.0,
            indeterminate_cutoff: 4.0,
            likely_synthetic_cutoff: 2.0,
            pixel_failure_score: 1.0,
            provenance_marker_score: 9.5,
            verification_seal_score: 9.0,
            camera_signature_score: 8.0,
            unmatched_score: 5.0,
            editing_software_score: 3.0,
            ai_watermark_score: 1.0,
            generative_ai_score: 0.5,
            fallback_hidden_width: 16,
        }
    }
}
