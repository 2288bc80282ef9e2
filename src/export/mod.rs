//! Output of resolved dependency graphs.
//!
//! This module provides exporters for writing a [`DependencyGraph`] in
//! one of two formats: an indented text tree for people and a nested
//! JSON object for tools.

pub mod json;
pub mod text;

use crate::graph::DependencyGraph;
use std::io::{self, Write};

pub use text::{render, render_to_string};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Indented text tree, one package per line
    #[default]
    Text,
    /// Nested JSON object, one key per package
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the graph to the given writer.
    fn export<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()>;
}

/// Export a graph in the specified format.
///
/// `indent_size` is the number of spaces per nesting level. It applies to
/// both formats; for JSON, 0 produces compact single-line output.
pub fn export<W: Write>(
    format: ExportFormat,
    indent_size: usize,
    graph: &DependencyGraph,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Text => text::TextExporter::new(indent_size).export(graph, writer),
        ExportFormat::Json => json::JsonExporter::new(indent_size).export(graph, writer),
    }
}

/// Export a graph to a string.
pub fn export_to_string(
    format: ExportFormat,
    indent_size: usize,
    graph: &DependencyGraph,
) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, indent_size, graph, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
