//! Parser for dataset documents.
//!
//! A dataset document is a single JSON object with the top-level keys
//! `basePackages`, `matrixApplications`, `applications`,
//! `dependencyBasePackages` and `roadmap`.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::Dataset;

/// Errors that can occur while reading a dataset document.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse JSON content.
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a dataset document from a file path.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use compatscope::dataset::parse_file;
///
/// let dataset = parse_file(Path::new("sample-data.json")).unwrap();
/// println!("{} applications", dataset.applications.len());
/// ```
pub fn parse_file(path: &Path) -> ParseResult<Dataset> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses a dataset document from a string.
///
/// # Example
///
/// ```
/// use compatscope::dataset::parse_str;
///
/// let json = r#"{
///     "applications": [
///         {"name": "App A", "version": "v1", "basePackages": [
///             {"name": "Python", "version": "3.9", "status": "compatible"}
///         ]}
///     ]
/// }"#;
/// let dataset = parse_str(json).unwrap();
/// assert_eq!(dataset.applications.len(), 1);
/// assert!(dataset.roadmap.is_none());
/// ```
pub fn parse_str(content: &str) -> ParseResult<Dataset> {
    let dataset: Dataset = serde_json::from_str(content)?;
    debug!(
        applications = dataset.applications.len(),
        matrix_rows = dataset.base_packages.len(),
        "parsed dataset document"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::types::Status;
    use std::io::Write;

    const FULL: &str = r#"{
        "basePackages": [
            {"name": "Python", "versions": {
                "App A v2.1": {"version": "3.8.x", "status": "compatible", "notes": "Legacy support"},
                "App A v2.2": {"version": "3.9.x", "status": "compatible"}
            }}
        ],
        "matrixApplications": ["App A v2.1", "App A v2.2"],
        "applications": [
            {"name": "App A", "version": "v2.1", "basePackages": [
                {"name": "Python", "version": "3.8.x", "status": "compatible"},
                {"name": "Node.js", "version": "14.x", "status": "deprecated"}
            ]}
        ],
        "dependencyBasePackages": [
            {"name": "Python", "version": "3.8.x", "applications": [
                {"name": "App A", "version": "v2.1", "status": "compatible"}
            ]}
        ],
        "roadmap": [
            {"package": "Python", "timeline": [
                {"version": "3.8.x", "status": "deprecated", "eol": "Oct 2024", "apps": ["App A v2.1"]}
            ]}
        ]
    }"#;

    #[test]
    fn test_parse_full_document() {
        let dataset = parse_str(FULL).unwrap();

        assert_eq!(dataset.base_packages.len(), 1);
        let python = &dataset.base_packages[0];
        assert_eq!(python.cell("App A v2.1").unwrap().version, "3.8.x");
        assert_eq!(
            python.cell("App A v2.1").unwrap().notes.as_deref(),
            Some("Legacy support")
        );
        assert!(python.cell("App A v2.2").unwrap().notes.is_none());
        assert!(python.cell("App Z").is_none());

        assert_eq!(dataset.matrix_applications.len(), 2);
        assert_eq!(dataset.applications[0].base_packages[1].status, Status::Deprecated);
        assert_eq!(dataset.dependency_base_packages[0].applications.len(), 1);
        assert_eq!(dataset.roadmap_entries()[0].timeline[0].eol, "Oct 2024");
    }

    #[test]
    fn test_parse_missing_optional_sections() {
        let dataset = parse_str(r#"{"applications": []}"#).unwrap();
        assert!(dataset.base_packages.is_empty());
        assert!(dataset.matrix_applications.is_empty());
        assert!(dataset.dependency_base_packages.is_empty());
        assert!(dataset.roadmap.is_none());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_str("not valid json");
        assert!(matches!(result, Err(ParseError::JsonError(_))));
    }

    #[test]
    fn test_parse_requires_applications() {
        assert!(parse_str(r#"{"basePackages": []}"#).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let json = r#"{"applications": [
            {"name": "A", "version": "1", "basePackages": [
                {"name": "Python", "version": "3.9", "status": "retired"}
            ]}
        ]}"#;
        assert!(parse_str(json).is_err());
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL.as_bytes()).unwrap();

        let dataset = parse_file(file.path()).unwrap();
        assert_eq!(dataset.applications.len(), 1);
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_file(Path::new("/nonexistent/sample-data.json"));
        assert!(matches!(result, Err(ParseError::IoError(_))));
    }
}
