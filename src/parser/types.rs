//! Shared types for dependency mapping input.
//!
//! This module defines the flat, unresolved form of a project's
//! dependency data as it is read from disk.

use indexmap::IndexMap;

/// A flat mapping from package name to its direct dependency names.
///
/// Keys are kept in document order so that resolution and rendering
/// follow the order the packages were declared in. Dependency lists
/// may contain duplicates, self references, and names that never
/// appear as keys; those are interpreted by the resolver, not here.
///
/// # Example
///
/// ```
/// use dep_resolver::parser::types::DependencyMapping;
///
/// let mut mapping = DependencyMapping::new();
/// mapping.insert("app".to_string(), vec!["core".to_string()]);
/// mapping.insert("core".to_string(), Vec::new());
///
/// let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["app", "core"]);
/// ```
pub type DependencyMapping = IndexMap<String, Vec<String>>;

/// Returns the direct dependencies of `name`.
///
/// Packages without an entry in the mapping have no recorded
/// dependencies and yield an empty slice.
pub fn direct_dependencies<'a>(mapping: &'a DependencyMapping, name: &str) -> &'a [String] {
    mapping.get(name).map(Vec::as_slice).unwrap_or(&[])
}

/// Returns the total number of dependency entries across all packages.
///
/// Duplicate entries in a single list are counted individually.
pub fn edge_count(mapping: &DependencyMapping) -> usize {
    mapping.values().map(Vec::len).sum()
}
