//! Numeric inference
//!
//! Feed-forward scorer plus the load-or-fallback adapter that keeps
//! analysis running in degraded mode when trained weights are unavailable.

pub mod adapter;
pub mod network;

pub use adapter::{InferenceAdapter, INFERENCE_FAILURE_SENTINEL};
pub use network::{Layer, Network};
