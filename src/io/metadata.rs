//! EXIF metadata extraction using `kamadak-exif`
//!
//! Produces a flat key→value map of textual metadata fields. Absence of any
//! field is representable (missing map entry / `None`), never an error. Only
//! a missing file is an input error; an image without an EXIF container
//! yields an empty map.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::AnalysisError;

/// Strongly-typed view of the metadata fields used for signature matching
///
/// Populated from the generic string-keyed map at the collaborator boundary;
/// the scoring core never does dynamic key lookups past this point.
#[derive(Debug, Clone, Default)]
pub struct MetadataFields {
    /// Software / firmware name that produced the file
    pub software: Option<String>,
    /// Capture device make
    pub make: Option<String>,
    /// Capture device model
    pub model: Option<String>,
    /// Author / artist
    pub artist: Option<String>,
    /// Copyright notice
    pub copyright: Option<String>,
    /// Free-text image description
    pub description: Option<String>,
    /// Processing or provenance history, when present
    pub history: Option<String>,
}

impl MetadataFields {
    /// Populate the typed record from a flat key→value map
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| map.get(key).cloned();
        Self {
            software: get("Software"),
            make: get("Make"),
            model: get("Model"),
            artist: get("Artist"),
            copyright: get("Copyright"),
            description: get("ImageDescription"),
            history: get("ImageHistory"),
        }
    }

    /// Assemble the text blob searched by the signature matcher
    ///
    /// Joins every present field in a fixed order so classification is a
    /// pure function of the extracted metadata.
    pub fn signature_blob(&self) -> String {
        [
            &self.software,
            &self.make,
            &self.model,
            &self.artist,
            &self.copyright,
            &self.description,
            &self.history,
        ]
        .iter()
        .filter_map(|field| field.as_deref())
        .collect::<Vec<_>>()
        .join(" | ")
    }
}

/// Extract a flat key→value map of EXIF fields from an image file
///
/// # Arguments
///
/// * `path` - Path to the image file
///
/// # Returns
///
/// Map from EXIF tag name (e.g. "Software") to its display value. Duplicate
/// tags across IFDs keep the first occurrence.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` only when the file cannot be
/// opened. A file without EXIF data yields an empty map.
pub fn extract_metadata(path: &Path) -> Result<BTreeMap<String, String>, AnalysisError> {
    let file = File::open(path).map_err(|e| {
        AnalysisError::InvalidInput(format!("Cannot open {}: {}", path.display(), e))
    })?;

    log::debug!("Extracting EXIF metadata from: {}", path.display());

    let mut reader = BufReader::new(&file);
    let exif = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(e) => {
            log::warn!("No EXIF data in {}: {}", path.display(), e);
            return Ok(BTreeMap::new());
        }
    };

    let mut map = BTreeMap::new();
    for field in exif.fields() {
        let key = field.tag.to_string();
        let value = field.display_value().with_unit(&exif).to_string();
        map.entry(key).or_insert(value);
    }

    log::debug!("Extracted {} EXIF fields", map.len());

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_fields_from_map() {
        let map = map_of(&[
            ("Software", "Adobe Photoshop 25.1"),
            ("Make", "Canon"),
            ("Model", "EOS R5"),
        ]);

        let fields = MetadataFields::from_map(&map);
        assert_eq!(fields.software.as_deref(), Some("Adobe Photoshop 25.1"));
        assert_eq!(fields.make.as_deref(), Some("Canon"));
        assert_eq!(fields.model.as_deref(), Some("EOS R5"));
        assert!(fields.artist.is_none());
    }

    #[test]
    fn test_signature_blob_joins_present_fields() {
        let map = map_of(&[("Software", "GIMP 2.10"), ("Copyright", "someone")]);
        let fields = MetadataFields::from_map(&map);
        let blob = fields.signature_blob();
        assert!(blob.contains("GIMP 2.10"));
        assert!(blob.contains("someone"));
    }

    #[test]
    fn test_signature_blob_empty_metadata() {
        let fields = MetadataFields::default();
        assert!(fields.signature_blob().is_empty());
    }

    #[test]
    fn test_extract_missing_file() {
        let result = extract_metadata(Path::new("/nonexistent/photo.jpg"));
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_extract_no_exif_container() {
        // A bare PNG without EXIF must yield an empty map, not an error
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.png");
        let img = image::GrayImage::from_pixel(4, 4, image::Luma([128]));
        img.save(&path).unwrap();

        let map = extract_metadata(&path).unwrap();
        assert!(map.is_empty());
    }
}
