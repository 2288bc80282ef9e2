//! Whole-mapping cycle detection using petgraph.
//!
//! The resolver stops at the first repeated package on a path. This
//! module instead treats the flat mapping as a directed graph and
//! reports every circular group at once.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

use crate::parser::types::DependencyMapping;

/// Information about a detected circular dependency cycle.
///
/// Contains the list of package names that form the cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleInfo {
    /// The package names in the cycle (the last connects back to the first)
    pub nodes: Vec<String>,
}

impl CycleInfo {
    /// Returns a formatted string representation of the cycle path.
    ///
    /// For example: "a -> b -> c -> a"
    pub fn cycle_path(&self) -> String {
        match self.nodes.first() {
            Some(first) => format!("{} -> {}", self.nodes.join(" -> "), first),
            None => String::new(),
        }
    }

    /// Returns the number of packages in the cycle.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the cycle is empty (should not happen in practice).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Builds a directed graph over every name in the mapping.
///
/// Edges point from a package to each of its dependencies. Duplicate
/// entries produce parallel edges, which do not affect cycle detection.
fn build_graph<'a>(mapping: &'a DependencyMapping) -> DiGraph<&'a str, ()> {
    let mut graph: DiGraph<&'a str, ()> = DiGraph::with_capacity(mapping.len(), 0);
    let mut indices: HashMap<&'a str, NodeIndex> = HashMap::with_capacity(mapping.len());

    // Declared packages first, so node indices follow mapping order.
    for name in mapping.keys() {
        let name = name.as_str();
        indices.insert(name, graph.add_node(name));
    }

    for (name, deps) in mapping {
        let from = indices[name.as_str()];
        for dep in deps {
            let dep = dep.as_str();
            let to = *indices
                .entry(dep)
                .or_insert_with(|| graph.add_node(dep));
            graph.add_edge(from, to, ());
        }
    }

    graph
}

/// Detects and returns all cycles in the mapping.
///
/// A strongly connected component is reported when it has more than one
/// package, or when its single package depends on itself. Packages in
/// each cycle are listed in mapping order, and cycles are ordered by
/// their first package.
///
/// # Example
///
/// ```rust
/// use dep_resolver::analysis::find_cycles;
/// use dep_resolver::parser::parse_str;
///
/// let mapping = parse_str(r#"{"a": ["b"], "b": ["c"], "c": ["a"], "d": ["d"], "e": []}"#).unwrap();
/// let cycles = find_cycles(&mapping);
///
/// assert_eq!(cycles.len(), 2);
/// assert_eq!(cycles[0].cycle_path(), "a -> b -> c -> a");
/// assert_eq!(cycles[1].cycle_path(), "d -> d");
/// ```
pub fn find_cycles(mapping: &DependencyMapping) -> Vec<CycleInfo> {
    let graph = build_graph(mapping);
    let mut cycles = Vec::new();

    for mut scc in tarjan_scc(&graph) {
        let is_cycle = match scc.as_slice() {
            [single] => graph.contains_edge(*single, *single),
            _ => true,
        };
        if !is_cycle {
            continue;
        }
        scc.sort();
        cycles.push((
            scc[0],
            CycleInfo {
                nodes: scc.iter().map(|&idx| graph[idx].to_string()).collect(),
            },
        ));
    }

    cycles.sort_by_key(|(first, _)| *first);
    cycles.into_iter().map(|(_, cycle)| cycle).collect()
}
