//! Parser for JSON dependency mapping files.
//!
//! The expected document is a single object whose keys are package names
//! and whose values are arrays of dependency names:
//!
//! ```json
//! {"pkg1": ["pkg2", "pkg3"], "pkg2": ["pkg3"], "pkg3": []}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use super::types::{edge_count, DependencyMapping};

/// Errors that can occur while loading a dependency mapping.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input path does not point at a regular file.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Failed to read the file from disk.
    #[error("An unexpected error occurred while reading the file")]
    IoError(#[from] std::io::Error),

    /// The content is not syntactically valid JSON.
    #[error("Invalid JSON file")]
    InvalidJson(#[source] serde_json::Error),

    /// The content is valid JSON but not an object of string arrays.
    #[error("Invalid JSON file: expected an object mapping package names to arrays of names")]
    InvalidShape(#[source] serde_json::Error),

    /// The mapping is well-typed but contains unusable names.
    #[error("Invalid dependency mapping: {0}")]
    InvalidMapping(String),
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            ParseError::InvalidShape(err)
        } else {
            ParseError::InvalidJson(err)
        }
    }
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a dependency mapping file from a file path.
///
/// # Arguments
///
/// * `path` - Path to the JSON file
///
/// # Returns
///
/// A `ParseResult` containing the parsed `DependencyMapping` or an error.
/// A path that does not exist or is not a file yields `ParseError::NotFound`.
pub fn parse_file(path: &Path) -> ParseResult<DependencyMapping> {
    if !path.is_file() {
        return Err(ParseError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses a dependency mapping from a string.
///
/// # Example
///
/// ```
/// use dep_resolver::parser::mapping_json::parse_str;
///
/// let mapping = parse_str(r#"{"b": ["a"], "a": []}"#).unwrap();
/// assert_eq!(mapping.keys().next().map(String::as_str), Some("b"));
/// assert_eq!(mapping["b"], ["a"]);
/// ```
pub fn parse_str(content: &str) -> ParseResult<DependencyMapping> {
    let mapping: DependencyMapping = serde_json::from_str(content)?;
    tracing::debug!(
        packages = mapping.len(),
        edges = edge_count(&mapping),
        "loaded dependency mapping"
    );
    Ok(mapping)
}

/// Validates a parsed mapping.
///
/// Package names must be non-empty, both as keys and inside dependency
/// lists. Duplicates and self references are accepted here; detecting
/// cycles is the resolver's job.
pub fn validate(mapping: &DependencyMapping) -> ParseResult<()> {
    for (name, deps) in mapping {
        if name.is_empty() {
            return Err(ParseError::InvalidMapping(
                "package name must not be empty".to_string(),
            ));
        }
        if deps.iter().any(String::is_empty) {
            return Err(ParseError::InvalidMapping(format!(
                "package '{name}' lists an empty dependency name"
            )));
        }
    }
    Ok(())
}
