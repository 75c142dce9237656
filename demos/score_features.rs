//! Example: Score a pre-normalized feature vector
//!
//! Demonstrates the feature ensemble analyzer with the engine in degraded
//! mode (untrained fallback network).

use pixelproof::{analyze_features, global_engine, AnalysisConfig};

fn main() {
    env_logger::init();

    let config = AnalysisConfig::default();
    let engine = global_engine();

    let vector = [0.5, 0.5, 0.5, 0.55, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0];
    let result = analyze_features(&vector, engine, &config, Some("demo"));

    println!("Score: {:?} ({})", result.score, result.message);
    println!("Details: {}", serde_json::to_string_pretty(&result.details).unwrap());
    for line in &result.log_trail {
        println!("| {}", line);
    }
}
