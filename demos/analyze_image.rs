//! Example: Analyze a single image file
//!
//! Runs the pixel and metadata analyzers on an image and prints both
//! result envelopes.

use std::path::Path;

use pixelproof::{analyze_metadata, analyze_pixels, global_engine, AnalysisConfig};

fn main() {
    // Initialize logger
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .expect("usage: analyze_image <image-path>");
    let path = Path::new(&path);

    let config = AnalysisConfig::default();
    let engine = global_engine();

    let pixel = analyze_pixels(path, &config, Some("demo"));
    println!("Pixel analysis:");
    println!("  Score: {:?}", pixel.score);
    println!("  Message: {}", pixel.message);
    println!("  Processing time: {:.2} ms", pixel.processing_time_ms);

    let metadata = analyze_metadata(path, engine, &config, Some("demo"));
    println!("Metadata analysis:");
    println!("  Score: {:?}", metadata.score);
    println!("  Message: {}", metadata.message);
    for line in &metadata.log_trail {
        println!("  | {}", line);
    }
}
