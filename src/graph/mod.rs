//! Graph module for dependency resolution.
//!
//! This module expands a flat [`DependencyMapping`](crate::parser::DependencyMapping)
//! into a [`DependencyGraph`]: one fully materialized tree per declared
//! package, with circular references rejected.
//!
//! # Example
//!
//! ```rust
//! use dep_resolver::graph::resolve;
//! use dep_resolver::parser::parse_str;
//!
//! let mapping = parse_str(r#"{"pkg1": ["pkg2", "pkg3"], "pkg2": ["pkg3"], "pkg3": []}"#).unwrap();
//! let graph = resolve(&mapping).unwrap();
//!
//! let pkg1 = graph.get("pkg1").unwrap();
//! assert_eq!(pkg1.dependencies.names(), ["pkg2", "pkg3"]);
//! assert_eq!(graph.node_count(), 7);
//! ```

mod resolver;
mod tree;

pub use resolver::{resolve, ResolveError};
pub use tree::{DependencyGraph, DependencyNode, FlattenedNode};
