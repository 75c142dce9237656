//! Process-wide analysis engine
//!
//! Holds the one-time-loaded shared-read state: the compiled signature
//! taxonomy and the inference adapter. Both are immutable after
//! construction, so concurrent analyzer calls share an `Engine` without
//! locking. The global instance is guarded by a `OnceCell` and initialized
//! at most once per process.

use std::path::Path;

use once_cell::sync::OnceCell;

use crate::config::AnalysisConfig;
use crate::features::signature::{CompiledTaxonomy, SignatureTaxonomy};
use crate::ml::InferenceAdapter;

/// Shared-read analysis state, constructed once and never mutated
#[derive(Debug)]
pub struct Engine {
    taxonomy: CompiledTaxonomy,
    inference: InferenceAdapter,
}

static GLOBAL_ENGINE: OnceCell<Engine> = OnceCell::new();

impl Engine {
    /// Build an engine from explicit resources
    pub fn new(taxonomy: CompiledTaxonomy, inference: InferenceAdapter) -> Self {
        Self {
            taxonomy,
            inference,
        }
    }

    /// Build an engine from optional resource paths
    ///
    /// Never fails: no taxonomy path means the compiled-in default pattern
    /// set, a given-but-unloadable taxonomy degrades to empty, and a
    /// missing or corrupt weights file degrades to the untrained fallback
    /// network. All degradations are logged and visible in the constructed
    /// state (`pattern_count`, `model_loaded`).
    pub fn from_paths(
        taxonomy_path: Option<&Path>,
        weights_path: Option<&Path>,
        config: &AnalysisConfig,
    ) -> Self {
        let taxonomy = match taxonomy_path {
            Some(path) => SignatureTaxonomy::load(path),
            None => SignatureTaxonomy::builtin(),
        };

        let inference = match weights_path {
            Some(path) => InferenceAdapter::from_weights_file(
                path,
                config.feature_vector_len,
                config.fallback_hidden_width,
            ),
            None => {
                InferenceAdapter::untrained(config.feature_vector_len, config.fallback_hidden_width)
            }
        };

        Self::new(CompiledTaxonomy::compile(&taxonomy), inference)
    }

    /// Engine with the compiled-in taxonomy and an untrained network
    pub fn with_defaults(config: &AnalysisConfig) -> Self {
        Self::from_paths(None, None, config)
    }

    /// Compiled signature taxonomy
    pub fn taxonomy(&self) -> &CompiledTaxonomy {
        &self.taxonomy
    }

    /// Inference adapter
    pub fn inference(&self) -> &InferenceAdapter {
        &self.inference
    }
}

/// Initialize the process-wide engine from resource paths
///
/// Idempotent and guarded against concurrent duplicate loads: the first
/// caller wins, later calls return the already-initialized instance.
pub fn init_global_engine(
    taxonomy_path: Option<&Path>,
    weights_path: Option<&Path>,
    config: &AnalysisConfig,
) -> &'static Engine {
    GLOBAL_ENGINE.get_or_init(|| Engine::from_paths(taxonomy_path, weights_path, config))
}

/// The process-wide engine, lazily initialized with defaults
pub fn global_engine() -> &'static Engine {
    GLOBAL_ENGINE.get_or_init(|| Engine::with_defaults(&AnalysisConfig::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_defaults_builds_degraded_engine() {
        let engine = Engine::with_defaults(&AnalysisConfig::default());
        assert!(!engine.inference().model_loaded());
        assert!(engine.taxonomy().pattern_count() > 0);
    }

    #[test]
    fn test_from_paths_degrades_on_missing_files() {
        let config = AnalysisConfig::default();
        let engine = Engine::from_paths(
            Some(Path::new("/nonexistent/taxonomy.json")),
            Some(Path::new("/nonexistent/weights.json")),
            &config,
        );
        assert_eq!(engine.taxonomy().pattern_count(), 0);
        assert!(!engine.inference().model_loaded());
        assert_eq!(engine.inference().input_arity(), config.feature_vector_len);
    }

    #[test]
    fn test_global_engine_is_stable() {
        let first = global_engine() as *const Engine;
        let second = global_engine() as *const Engine;
        assert_eq!(first, second);
    }
}
