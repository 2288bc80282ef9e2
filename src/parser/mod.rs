//! Parser module for dep-resolver.
//!
//! This module loads the flat dependency mapping that the resolver
//! expands: a JSON object from package name to an array of direct
//! dependency names.
//!
//! # Example
//!
//! ```
//! use dep_resolver::parser::{parse_str, validate};
//!
//! let mapping = parse_str(r#"{"pkg1": ["pkg2"], "pkg2": []}"#).unwrap();
//! validate(&mapping).unwrap();
//!
//! assert_eq!(mapping.len(), 2);
//! assert_eq!(mapping["pkg1"], ["pkg2"]);
//! ```

pub mod mapping_json;
pub mod types;

// Re-export commonly used types for convenience
pub use mapping_json::{parse_file, parse_str, validate, ParseError, ParseResult};

pub use types::{direct_dependencies, DependencyMapping};
