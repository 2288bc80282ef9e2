//! Indented text rendering.
//!
//! Each package is written on its own line as `"- name"`, preceded by
//! `indent_size * depth` spaces. Trees are walked depth-first, parents
//! before children, in the order they were resolved.

use super::Exporter;
use crate::graph::DependencyGraph;
use std::io::{self, Write};

/// Default number of spaces per nesting level.
pub const DEFAULT_INDENT_SIZE: usize = 4;

/// Marker written before every package name.
const MARKER: &str = "- ";

/// Text tree exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExporter {
    /// Spaces per nesting level; 0 puts every line at the left margin
    pub indent_size: usize,
}

impl TextExporter {
    /// Create an exporter with the given indentation unit.
    pub fn new(indent_size: usize) -> Self {
        Self { indent_size }
    }
}

impl Default for TextExporter {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_SIZE)
    }
}

impl Exporter for TextExporter {
    fn export<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()> {
        for node in graph.flatten() {
            let width = self.indent_size.checked_mul(node.depth).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!(
                        "indentation of {} spaces at depth {} is too large",
                        self.indent_size, node.depth
                    ),
                )
            })?;
            writeln!(writer, "{:width$}{}{}", "", MARKER, node.name, width = width)?;
        }
        Ok(())
    }
}

/// Renders `graph` as an indented tree into `writer`.
///
/// # Example
///
/// ```
/// use dep_resolver::export::render;
/// use dep_resolver::graph::resolve;
/// use dep_resolver::parser::parse_str;
///
/// let graph = resolve(&parse_str(r#"{"app": ["core"]}"#).unwrap()).unwrap();
/// let mut out = Vec::new();
/// render(&graph, 2, &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "- app\n  - core\n");
/// ```
pub fn render<W: Write>(
    graph: &DependencyGraph,
    indent_size: usize,
    writer: &mut W,
) -> io::Result<()> {
    TextExporter::new(indent_size).export(graph, writer)
}

/// Renders `graph` as an indented tree and returns the text.
///
/// Rendering stops at the first line whose indentation width overflows
/// `usize`; everything written before it is returned.
pub fn render_to_string(graph: &DependencyGraph, indent_size: usize) -> String {
    let mut buffer = Vec::new();
    // Only an indentation overflow can fail here, and the text before it is kept.
    let _ = render(graph, indent_size, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}
