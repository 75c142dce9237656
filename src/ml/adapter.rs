//! Inference adapter with graceful degradation
//!
//! Wraps the feed-forward scorer behind a constructor that never fails:
//! when persisted weights cannot be read, parsed or validated, the adapter
//! falls back to a freshly initialized untrained network of the same input
//! arity and records the degraded mode via `model_loaded = false`. The
//! fallback is never silently conflated with a trained result.

use std::path::Path;

use crate::error::AnalysisError;
use crate::ml::network::Network;

/// Sentinel returned by [`InferenceAdapter::infer`] when inference fails
pub const INFERENCE_FAILURE_SENTINEL: f32 = 0.0;

/// Fixed-weight scorer with load-or-fallback construction
#[derive(Debug)]
pub struct InferenceAdapter {
    network: Network,
    model_loaded: bool,
}

fn load_network(path: &Path, input_arity: usize) -> Result<Network, AnalysisError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AnalysisError::ModelUnavailable(format!("Cannot read {}: {}", path.display(), e))
    })?;

    let network: Network = serde_json::from_str(&raw).map_err(|e| {
        AnalysisError::ModelUnavailable(format!("Cannot parse {}: {}", path.display(), e))
    })?;

    network.validate()?;

    if network.input_arity != input_arity {
        return Err(AnalysisError::ModelUnavailable(format!(
            "Weight graph arity {} does not match expected {}",
            network.input_arity, input_arity
        )));
    }

    Ok(network)
}

impl InferenceAdapter {
    /// Load persisted weights, falling back to an untrained network
    ///
    /// Construction never fails and never blocks the calling process: any
    /// read, parse, shape or arity failure logs a warning and produces the
    /// untrained fallback with `model_loaded = false`.
    pub fn from_weights_file(
        path: &Path,
        input_arity: usize,
        fallback_hidden_width: usize,
    ) -> Self {
        match load_network(path, input_arity) {
            Ok(network) => {
                log::debug!("Loaded trained weight graph from {}", path.display());
                Self {
                    network,
                    model_loaded: true,
                }
            }
            Err(e) => {
                log::warn!("{}; constructing untrained fallback network", e);
                Self::untrained(input_arity, fallback_hidden_width)
            }
        }
    }

    /// Construct the untrained fallback directly
    pub fn untrained(input_arity: usize, hidden_width: usize) -> Self {
        Self {
            network: Network::untrained(input_arity, hidden_width),
            model_loaded: false,
        }
    }

    /// True when the adapter runs a trained weight graph
    pub fn model_loaded(&self) -> bool {
        self.model_loaded
    }

    /// Expected feature vector length
    pub fn input_arity(&self) -> usize {
        self.network.input_arity
    }

    /// Run inference, reporting failures to the caller
    ///
    /// The output is clamped to [0, 1] even though the sigmoid output should
    /// already be bounded, defending against numerical drift in the weight
    /// graph.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` on an arity mismatch so the
    /// caller can record the failure in its log trail and continue with
    /// reduced confidence.
    pub fn try_infer(&self, features: &[f32]) -> Result<f32, AnalysisError> {
        let raw = self.network.forward(features)?;
        Ok(raw.clamp(0.0, 1.0))
    }

    /// Run inference, never failing
    ///
    /// Failures return [`INFERENCE_FAILURE_SENTINEL`] after logging; they
    /// never raise past the adapter.
    pub fn infer(&self, features: &[f32]) -> f32 {
        match self.try_infer(features) {
            Ok(score) => score,
            Err(e) => {
                log::warn!("Inference failed ({}), returning sentinel", e);
                INFERENCE_FAILURE_SENTINEL
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARITY: usize = 10;
    const HIDDEN: usize = 16;

    fn valid_vector() -> Vec<f32> {
        (0..ARITY).map(|i| i as f32 / ARITY as f32).collect()
    }

    #[test]
    fn test_missing_weights_file_falls_back() {
        let adapter = InferenceAdapter::from_weights_file(
            Path::new("/nonexistent/weights.json"),
            ARITY,
            HIDDEN,
        );
        assert!(!adapter.model_loaded());
        assert_eq!(adapter.input_arity(), ARITY);

        let score = adapter.infer(&valid_vector());
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_corrupt_weights_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weights.json");
        std::fs::write(&path, "{ garbage !!").unwrap();

        let adapter = InferenceAdapter::from_weights_file(&path, ARITY, HIDDEN);
        assert!(!adapter.model_loaded());
        assert!((0.0..=1.0).contains(&adapter.infer(&valid_vector())));
    }

    #[test]
    fn test_arity_mismatch_in_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weights.json");
        let wrong_arity = Network::untrained(7, HIDDEN);
        std::fs::write(&path, serde_json::to_string(&wrong_arity).unwrap()).unwrap();

        let adapter = InferenceAdapter::from_weights_file(&path, ARITY, HIDDEN);
        assert!(!adapter.model_loaded());
        assert_eq!(adapter.input_arity(), ARITY);
    }

    #[test]
    fn test_valid_weights_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weights.json");
        let network = Network::untrained(ARITY, HIDDEN);
        std::fs::write(&path, serde_json::to_string(&network).unwrap()).unwrap();

        let adapter = InferenceAdapter::from_weights_file(&path, ARITY, HIDDEN);
        assert!(adapter.model_loaded());
    }

    #[test]
    fn test_infer_wrong_arity_returns_sentinel() {
        let adapter = InferenceAdapter::untrained(ARITY, HIDDEN);
        let short = vec![0.5f32; ARITY - 1];
        assert!(adapter.try_infer(&short).is_err());
        assert_eq!(adapter.infer(&short), INFERENCE_FAILURE_SENTINEL);
    }

    #[test]
    fn test_infer_deterministic_for_same_adapter() {
        let adapter = InferenceAdapter::untrained(ARITY, HIDDEN);
        let vector = valid_vector();
        assert_eq!(adapter.infer(&vector), adapter.infer(&vector));
    }
}
