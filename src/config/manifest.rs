//! Release version manifest.
//!
//! The manifest is a JSON array of version strings, newest first, e.g.
//! `["1.1.2", "1.1.1", "1.1.0"]`. It is read once at startup.

use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read version manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("version manifest must be a JSON array of strings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Vec<String>, ManifestError> {
    let content = fs::read_to_string(path)?;
    parse_manifest(&content)
}

/// Parse manifest text. An empty array parses; emptiness is rejected later
/// when the version list is built.
pub fn parse_manifest(content: &str) -> Result<Vec<String>, ManifestError> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order() {
        let versions = parse_manifest(r#"["1.1.2", "1.1.1", "1.0.0"]"#).unwrap();
        assert_eq!(versions, vec!["1.1.2", "1.1.1", "1.0.0"]);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_manifest("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(matches!(
            parse_manifest(r#"{"latest": "1.0.0"}"#),
            Err(ManifestError::Parse(_))
        ));
        assert!(matches!(parse_manifest("[1, 2]"), Err(ManifestError::Parse(_))));
    }
}
