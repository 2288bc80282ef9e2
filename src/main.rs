//! dep-resolver binary.
//!
//! Loads a dependency mapping, resolves it and prints the trees to
//! stdout. Every failure is logged as a single error line on stderr and
//! turned into exit status 1.

mod cli;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use dep_resolver::{analysis, export, graph, parser};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: cli::LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter())),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: &cli::Cli) -> Result<()> {
    let mapping = parser::parse_file(&args.json_file)?;
    debug!(?mapping, "loaded dependencies");
    parser::validate(&mapping)?;

    let undeclared = analysis::undeclared_packages(&mapping);
    if !undeclared.is_empty() {
        info!(packages = ?undeclared, "dependencies without an entry are treated as leaves");
    }

    let resolved = match graph::resolve(&mapping) {
        Ok(resolved) => resolved,
        Err(err) => {
            if args.report_cycles {
                for cycle in analysis::find_cycles(&mapping) {
                    warn!("cycle: {}", cycle.cycle_path());
                }
            }
            return Err(err).context("An error occurred while resolving dependencies");
        }
    };
    debug!(
        roots = resolved.len(),
        nodes = resolved.node_count(),
        "resolved dependency graph"
    );

    let mut out = io::BufWriter::new(io::stdout().lock());
    export::export(args.format, args.indent_size, &resolved, &mut out)
        .and_then(|()| out.flush())
        .context("An unexpected error occurred while printing the dependency graph")?;

    Ok(())
}
