//! Expansion of a flat dependency mapping into nested trees.
//!
//! Every package key is expanded independently. Cycle detection is
//! scoped to the current root-to-node path: a package may appear on any
//! number of sibling branches (diamond dependencies) but never twice on
//! one lineage. Shared sub-dependencies are re-expanded under each
//! parent, so output size grows with the number of distinct paths.

use std::collections::HashSet;

use tracing::{debug, info};

use super::tree::{DependencyGraph, DependencyNode};
use crate::parser::types::{direct_dependencies, DependencyMapping};

/// Errors raised while resolving a dependency mapping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// A package was reached again on its own path from the root.
    #[error("circular dependency detected: {package} already visited ({})", .path.join(" -> "))]
    CircularDependency {
        /// The repeated package
        package: String,
        /// Names from the root down to and including the repeated package
        path: Vec<String>,
    },
}

impl ResolveError {
    /// Returns the package that closed the cycle.
    pub fn package(&self) -> &str {
        match self {
            ResolveError::CircularDependency { package, .. } => package,
        }
    }

    /// Returns the offending path, starting at the root being resolved.
    pub fn path(&self) -> &[String] {
        match self {
            ResolveError::CircularDependency { path, .. } => path,
        }
    }
}

/// Resolves every package in `mapping` into its full dependency tree.
///
/// The result has one top-level entry per mapping key, in the mapping's
/// order. Names that are referenced but never declared as keys resolve
/// to leaves. The first cycle found aborts the whole call; no partial
/// graph is returned.
///
/// # Example
///
/// ```rust
/// use dep_resolver::graph::resolve;
/// use dep_resolver::parser::parse_str;
///
/// let mapping = parse_str(r#"{"pkg1": ["pkg2"], "pkg2": ["pkg3"]}"#).unwrap();
/// let graph = resolve(&mapping).unwrap();
///
/// assert_eq!(graph.names(), ["pkg1", "pkg2"]);
/// assert_eq!(graph.node_count(), 5);
///
/// let cyclic = parse_str(r#"{"pkg1": ["pkg1"]}"#).unwrap();
/// assert_eq!(resolve(&cyclic).unwrap_err().package(), "pkg1");
/// ```
pub fn resolve(mapping: &DependencyMapping) -> Result<DependencyGraph, ResolveError> {
    let mut resolved = DependencyGraph::with_capacity(mapping.len());
    for package in mapping.keys() {
        info!(package = %package, "resolving dependencies");
        let dependencies = resolve_package(package, mapping)?;
        resolved.push(DependencyNode::new(package.clone(), dependencies));
    }
    Ok(resolved)
}

/// One package being expanded: the dependencies still to visit and the
/// subtrees already built for it.
struct Frame<'a> {
    name: &'a str,
    pending: std::slice::Iter<'a, String>,
    resolved: DependencyGraph,
}

impl<'a> Frame<'a> {
    fn new(name: &'a str, mapping: &'a DependencyMapping) -> Self {
        let dependencies = direct_dependencies(mapping, name);
        Self {
            name,
            pending: dependencies.iter(),
            resolved: DependencyGraph::with_capacity(dependencies.len()),
        }
    }
}

/// Expands a single root with an explicit stack of frames.
///
/// The frame stack is the current path; `on_path` mirrors it for O(1)
/// membership checks. A name is inserted when its frame is pushed and
/// removed when the frame is popped, so siblings never see each other's
/// lineage.
fn resolve_package<'a>(
    root: &'a str,
    mapping: &'a DependencyMapping,
) -> Result<DependencyGraph, ResolveError> {
    debug!(package = %root, depth = 0, "visiting package");
    let mut stack = vec![Frame::new(root, mapping)];
    let mut on_path: HashSet<&'a str> = HashSet::from([root]);

    while let Some(frame) = stack.last_mut() {
        if let Some(dep) = frame.pending.next() {
            if on_path.contains(dep.as_str()) {
                let mut path: Vec<String> = stack.iter().map(|f| f.name.to_string()).collect();
                path.push(dep.clone());
                return Err(ResolveError::CircularDependency {
                    package: dep.clone(),
                    path,
                });
            }
            debug!(package = %dep, depth = stack.len(), "visiting package");
            on_path.insert(dep);
            stack.push(Frame::new(dep, mapping));
            continue;
        }

        let name = frame.name;
        let subtree = std::mem::take(&mut frame.resolved);
        stack.pop();
        on_path.remove(name);

        match stack.last_mut() {
            Some(parent) => parent.resolved.push(DependencyNode::new(name, subtree)),
            None => return Ok(subtree),
        }
    }

    Ok(DependencyGraph::new())
}
