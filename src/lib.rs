//! dep-resolver - expands flat package dependency mappings into nested trees
//!
//! This crate loads a `package -> [direct dependencies]` mapping, resolves
//! every package into its full transitive dependency tree with circular
//! references rejected, and renders the result as indented text or JSON.

pub mod analysis;
pub mod export;
pub mod graph;
pub mod parser;
