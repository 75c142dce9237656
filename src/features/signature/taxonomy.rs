//! Signature taxonomy loading
//!
//! A taxonomy maps each signature category to an ordered list of
//! case-insensitive pattern strings. Taxonomies come from a JSON
//! configuration file; a missing or malformed file degrades to the empty
//! taxonomy (every category matches nothing) rather than failing the caller.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Pattern lists per signature category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignatureTaxonomy {
    /// Content-credentials / provenance chain markers
    #[serde(default)]
    pub provenance_marker: Vec<String>,

    /// Invisible or declared AI watermarks
    #[serde(default)]
    pub ai_watermark: Vec<String>,

    /// Capture verification seals
    #[serde(default)]
    pub verification_seal: Vec<String>,

    /// Camera vendor / firmware signatures
    #[serde(default)]
    pub camera_signature: Vec<String>,

    /// Editing software signatures
    #[serde(default)]
    pub editing_software: Vec<String>,

    /// Generative-AI tool signatures
    #[serde(default)]
    pub generative_ai: Vec<String>,
}

impl SignatureTaxonomy {
    /// The empty taxonomy: every category matches nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compiled-in default pattern set
    ///
    /// Used when no taxonomy file is configured. A file-loaded taxonomy
    /// replaces this wholesale, it is never merged.
    pub fn builtin() -> Self {
        let list = |patterns: &[&str]| patterns.iter().map(|p| p.to_string()).collect();
        Self {
            provenance_marker: list(&[
                "c2pa",
                "content\\s?credentials",
                "provenance",
                "cai\\s?manifest",
            ]),
            ai_watermark: list(&["synthid", "stegastamp", "trustmark", "ai watermark"]),
            verification_seal: list(&[
                "truepic",
                "serelay",
                "verified capture",
                "capture\\s?assure",
            ]),
            camera_signature: list(&[
                "canon",
                "nikon",
                "sony",
                "fujifilm",
                "olympus",
                "panasonic",
                "hasselblad",
                "leica",
                "apple",
                "samsung",
                "google pixel",
                "dji",
            ]),
            editing_software: list(&[
                "photoshop",
                "lightroom",
                "gimp",
                "affinity photo",
                "capture one",
                "luminar",
                "snapseed",
                "pixelmator",
                "darktable",
                "paint\\.net",
            ]),
            generative_ai: list(&[
                "midjourney",
                "dall[-\\s]?e",
                "stable diffusion",
                "firefly",
                "imagen",
                "flux",
                "leonardo",
                "runway",
                "sora",
            ]),
        }
    }

    /// Load a taxonomy from a JSON file
    ///
    /// Never fails: a missing or unparseable file yields the empty taxonomy
    /// with a warning. Malformed individual patterns survive loading and are
    /// filtered out at compile time.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!(
                    "Taxonomy file {} unreadable ({}), using empty taxonomy",
                    path.display(),
                    e
                );
                return Self::empty();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(taxonomy) => {
                log::debug!("Loaded taxonomy from {}", path.display());
                taxonomy
            }
            Err(e) => {
                log::warn!(
                    "Taxonomy file {} malformed ({}), using empty taxonomy",
                    path.display(),
                    e
                );
                Self::empty()
            }
        }
    }
}
