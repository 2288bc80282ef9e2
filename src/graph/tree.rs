//! Resolved dependency tree types.
//!
//! A [`DependencyGraph`] is an ordered forest: every entry is a package
//! together with its own, independently owned, resolved sub-dependencies.
//! Entries are kept in a list rather than a keyed map so that a package
//! listed twice by the same parent shows up twice.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single package in a resolved tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyNode {
    /// Package name
    pub name: String,
    /// Resolved sub-dependencies, in declaration order
    pub dependencies: DependencyGraph,
}

impl DependencyNode {
    /// Creates a node with the given resolved sub-dependencies.
    pub fn new(name: impl Into<String>, dependencies: DependencyGraph) -> Self {
        Self {
            name: name.into(),
            dependencies,
        }
    }

    /// Creates a node with no sub-dependencies.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, DependencyGraph::new())
    }

    /// Returns true if this package has no sub-dependencies.
    pub fn is_leaf(&self) -> bool {
        self.dependencies.is_empty()
    }
}

/// An ordered collection of resolved dependency trees.
///
/// At the top level there is one entry per package key of the input
/// mapping; below that, each node's `dependencies` is itself a
/// `DependencyGraph`. A leaf is an empty graph.
///
/// # Example
///
/// ```rust
/// use dep_resolver::graph::{DependencyGraph, DependencyNode};
///
/// let graph: DependencyGraph = [
///     DependencyNode::new("pkg1", [DependencyNode::leaf("pkg2")].into_iter().collect()),
///     DependencyNode::leaf("pkg2"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.node_count(), 3);
/// assert!(graph.get("pkg1").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyGraph {
    nodes: Vec<DependencyNode>,
}

/// A node visited during a depth-first walk, with its depth (0 = root).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlattenedNode<'a> {
    /// Package name
    pub name: &'a str,
    /// Depth in the tree
    pub depth: usize,
}

impl DependencyGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an empty graph with room for `capacity` top-level entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Appends an entry, keeping any earlier entry with the same name.
    pub fn push(&mut self, node: DependencyNode) {
        self.nodes.push(node);
    }

    /// Returns the number of top-level entries.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if there are no top-level entries.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the first top-level entry named `name`.
    pub fn get(&self, name: &str) -> Option<&DependencyNode> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Iterates over the top-level entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DependencyNode> {
        self.nodes.iter()
    }

    /// Returns the top-level package names in order.
    pub fn names(&self) -> Vec<&str> {
        self.nodes.iter().map(|node| node.name.as_str()).collect()
    }

    /// Flattens every tree into a depth-first, pre-order list.
    ///
    /// The walk uses an explicit stack, so arbitrarily deep trees do not
    /// grow the call stack.
    pub fn flatten(&self) -> Vec<FlattenedNode<'_>> {
        let mut result = Vec::new();
        let mut stack: Vec<(&DependencyNode, usize)> =
            self.nodes.iter().rev().map(|node| (node, 0)).collect();

        while let Some((node, depth)) = stack.pop() {
            result.push(FlattenedNode {
                name: &node.name,
                depth,
            });
            stack.extend(
                node.dependencies
                    .nodes
                    .iter()
                    .rev()
                    .map(|child| (child, depth + 1)),
            );
        }

        result
    }

    /// Returns the total number of nodes across all trees.
    pub fn node_count(&self) -> usize {
        self.flatten().len()
    }

    /// Returns the number of levels in the deepest tree (0 when empty).
    pub fn max_depth(&self) -> usize {
        self.flatten()
            .iter()
            .map(|node| node.depth + 1)
            .max()
            .unwrap_or(0)
    }
}

// Nested graphs are torn down through a work list; the derived drop glue
// would recurse once per tree level.
impl Drop for DependencyGraph {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.nodes);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.dependencies.nodes);
        }
    }
}

impl FromIterator<DependencyNode> for DependencyGraph {
    fn from_iter<I: IntoIterator<Item = DependencyNode>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DependencyGraph {
    type Item = &'a DependencyNode;
    type IntoIter = std::slice::Iter<'a, DependencyNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl Serialize for DependencyGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.nodes.len()))?;
        for node in &self.nodes {
            map.serialize_entry(&node.name, &node.dependencies)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DependencyGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GraphVisitor;

        impl<'de> Visitor<'de> for GraphVisitor {
            type Value = DependencyGraph;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping package names to nested objects")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut graph = DependencyGraph::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, dependencies)) =
                    access.next_entry::<String, DependencyGraph>()?
                {
                    graph.push(DependencyNode::new(name, dependencies));
                }
                Ok(graph)
            }
        }

        deserializer.deserialize_map(GraphVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(nodes: Vec<DependencyNode>) -> DependencyGraph {
        nodes.into_iter().collect()
    }

    fn sample() -> DependencyGraph {
        graph(vec![
            DependencyNode::new(
                "pkg1",
                graph(vec![
                    DependencyNode::new("pkg2", graph(vec![DependencyNode::leaf("pkg3")])),
                    DependencyNode::leaf("pkg3"),
                ]),
            ),
            DependencyNode::new("pkg2", graph(vec![DependencyNode::leaf("pkg3")])),
            DependencyNode::leaf("pkg3"),
        ])
    }

    #[test]
    fn test_empty_graph() {
        let empty = DependencyGraph::new();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.node_count(), 0);
        assert_eq!(empty.max_depth(), 0);
        assert!(empty.flatten().is_empty());
    }

    #[test]
    fn test_leaf_node() {
        let node = DependencyNode::leaf("pkg");
        assert_eq!(node.name, "pkg");
        assert!(node.is_leaf());
    }

    #[test]
    fn test_get_and_names() {
        let g = sample();
        assert_eq!(g.names(), ["pkg1", "pkg2", "pkg3"]);
        assert_eq!(g.get("pkg2").map(|n| n.dependencies.len()), Some(1));
        assert!(g.get("missing").is_none());
    }

    #[test]
    fn test_flatten_pre_order() {
        let g = sample();
        let flat: Vec<(&str, usize)> = g.flatten().iter().map(|n| (n.name, n.depth)).collect();
        assert_eq!(
            flat,
            [
                ("pkg1", 0),
                ("pkg2", 1),
                ("pkg3", 2),
                ("pkg3", 1),
                ("pkg2", 0),
                ("pkg3", 1),
                ("pkg3", 0),
            ]
        );
    }

    #[test]
    fn test_node_count_and_depth() {
        let g = sample();
        assert_eq!(g.node_count(), 7);
        assert_eq!(g.max_depth(), 3);
    }

    #[test]
    fn test_push_keeps_duplicates() {
        let mut g = DependencyGraph::new();
        g.push(DependencyNode::leaf("dup"));
        g.push(DependencyNode::leaf("dup"));
        assert_eq!(g.len(), 2);
        assert_eq!(g.names(), ["dup", "dup"]);
    }

    #[test]
    fn test_serialize_nested_objects() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "pkg1": {"pkg2": {"pkg3": {}}, "pkg3": {}},
                "pkg2": {"pkg3": {}},
                "pkg3": {}
            })
        );
    }

    #[test]
    fn test_serialize_keeps_order() {
        let text = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            text,
            r#"{"pkg1":{"pkg2":{"pkg3":{}},"pkg3":{}},"pkg2":{"pkg3":{}},"pkg3":{}}"#
        );
    }

    #[test]
    fn test_deserialize_matches_built_graph() {
        let parsed: DependencyGraph = serde_json::from_str(
            r#"{"pkg1": {"pkg2": {"pkg3": {}}, "pkg3": {}}, "pkg2": {"pkg3": {}}, "pkg3": {}}"#,
        )
        .unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_deserialize_rejects_arrays() {
        let result: Result<DependencyGraph, _> = serde_json::from_str(r#"{"pkg1": ["pkg2"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_drop_deep_chain() {
        let mut node = DependencyNode::leaf("pkg-0");
        for i in 1..100_000 {
            node = DependencyNode::new(format!("pkg-{i}"), graph(vec![node]));
        }
        let deep = graph(vec![node]);
        assert_eq!(deep.max_depth(), 100_000);
        drop(deep);
    }
}
