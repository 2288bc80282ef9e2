//! Diagnostics over an unresolved dependency mapping.
//!
//! Resolution answers "what does each package pull in"; these helpers
//! answer questions about the input itself, for reporting alongside it.
//!
//! # Features
//!
//! - Report every circular group in the mapping, not just the first one hit
//! - List packages that are depended on but never declared
//!
//! # Example
//!
//! ```
//! use dep_resolver::analysis::{find_cycles, undeclared_packages};
//! use dep_resolver::parser::parse_str;
//!
//! let mapping = parse_str(r#"{"app": ["http", "log"], "http": ["log", "tls"]}"#).unwrap();
//!
//! assert!(find_cycles(&mapping).is_empty());
//! assert_eq!(undeclared_packages(&mapping), ["log", "tls"]);
//! ```

pub mod cycles;

use indexmap::IndexSet;

use crate::parser::types::DependencyMapping;

// Re-export main types for convenience
pub use cycles::{find_cycles, CycleInfo};

/// Returns names that appear as dependencies but never as mapping keys.
///
/// These resolve to leaves. Names are deduplicated and listed in the
/// order they are first referenced.
pub fn undeclared_packages(mapping: &DependencyMapping) -> Vec<String> {
    let undeclared: IndexSet<&str> = mapping
        .values()
        .flatten()
        .map(String::as_str)
        .filter(|dep| !mapping.contains_key(*dep))
        .collect();

    undeclared.into_iter().map(str::to_string).collect()
}
