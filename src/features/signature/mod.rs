//! Metadata signature matching
//!
//! A configurable taxonomy of textual signatures (editing tools,
//! generative-AI tools, camera firmware, verification seals, watermarks,
//! provenance markers) compiled into case-insensitive matchers, and a
//! fixed-priority classifier over metadata text blobs.

pub mod matcher;
pub mod taxonomy;

pub use matcher::{CompiledTaxonomy, SignatureCategory, SignatureMatch};
pub use taxonomy::SignatureTaxonomy;
