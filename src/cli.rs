//! CLI argument definitions for dep-resolver.
//!
//! Uses `clap` derive macros. The parsed [`Cli`] is the only
//! configuration source besides `RUST_LOG`.

use clap::{Parser, ValueEnum};
use dep_resolver::export::text::DEFAULT_INDENT_SIZE;
use dep_resolver::export::ExportFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dep-resolver",
    version,
    about = "Dependency Resolver",
    long_about = "Expands a JSON mapping of packages to their direct dependencies into \
                  the full dependency tree of every package, failing on circular dependencies."
)]
pub struct Cli {
    /// Path to the JSON file
    pub json_file: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, ignore_case = true, default_value = "warning")]
    pub log_level: LogLevel,

    /// Set the indentation size for output
    #[arg(long, default_value_t = DEFAULT_INDENT_SIZE)]
    pub indent_size: usize,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    pub format: ExportFormat,

    /// On a circular dependency, also log every cycle in the input
    #[arg(long)]
    pub report_cycles: bool,
}

/// Logging verbosity accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Returns the equivalent `tracing` filter directive.
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
