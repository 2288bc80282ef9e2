//! JSON export implementation.
//!
//! Writes the resolved graph in its nested-object form, e.g.
//! `{"pkg1": {"pkg2": {}}, "pkg2": {}}`, followed by a newline.

use super::Exporter;
use crate::graph::DependencyGraph;
use serde::Serialize;
use serde_json::ser::{CompactFormatter, PrettyFormatter, Serializer};
use std::io::{self, Write};

/// JSON exporter implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsonExporter {
    /// Spaces per nesting level; 0 writes compact JSON on one line
    pub indent_size: usize,
}

impl JsonExporter {
    /// Create an exporter with the given indentation.
    pub fn new(indent_size: usize) -> Self {
        Self { indent_size }
    }
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()> {
        if self.indent_size == 0 {
            let mut ser = Serializer::with_formatter(&mut *writer, CompactFormatter);
            graph.serialize(&mut ser).map_err(io::Error::from)?;
        } else {
            let indent = " ".repeat(self.indent_size);
            let mut ser =
                Serializer::with_formatter(&mut *writer, PrettyFormatter::with_indent(indent.as_bytes()));
            graph.serialize(&mut ser).map_err(io::Error::from)?;
        }
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::resolve;
    use crate::parser::parse_str;

    fn export_str(graph: &DependencyGraph, indent_size: usize) -> String {
        let mut output = Vec::new();
        JsonExporter::new(indent_size).export(graph, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn create_test_graph() -> DependencyGraph {
        let mapping = parse_str(r#"{"pkg1": ["pkg2", "pkg3"], "pkg2": ["pkg3"], "pkg3": []}"#).unwrap();
        resolve(&mapping).unwrap()
    }

    #[test]
    fn test_json_export_compact() {
        assert_eq!(
            export_str(&create_test_graph(), 0),
            "{\"pkg1\":{\"pkg2\":{\"pkg3\":{}},\"pkg3\":{}},\"pkg2\":{\"pkg3\":{}},\"pkg3\":{}}\n"
        );
    }

    #[test]
    fn test_json_export_pretty_indent() {
        let graph: DependencyGraph = serde_json::from_str(r#"{"a": {"b": {}}}"#).unwrap();
        assert_eq!(export_str(&graph, 2), "{\n  \"a\": {\n    \"b\": {}\n  }\n}\n");
    }

    #[test]
    fn test_json_is_valid() {
        let json_str = export_str(&create_test_graph(), 4);
        let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();

        assert_eq!(
            parsed,
            serde_json::json!({
                "pkg1": {"pkg2": {"pkg3": {}}, "pkg3": {}},
                "pkg2": {"pkg3": {}},
                "pkg3": {}
            })
        );
    }

    #[test]
    fn test_json_export_reads_back() {
        let graph = create_test_graph();
        let parsed: DependencyGraph = serde_json::from_str(&export_str(&graph, 4)).unwrap();
        assert_eq!(parsed, graph);
    }

    #[test]
    fn test_json_export_empty() {
        assert_eq!(export_str(&DependencyGraph::new(), 4), "{}\n");
    }
}
