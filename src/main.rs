//! `collection-checkr`: sanity-check a collection archive before publishing it.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Unpack the tarball into a temporary directory ([`archive`]).
//! 4. Probe the registry and run every analyzer ([`inspect`], [`registry`], [`analyzer`]).
//! 5. Render the requested report ([`report`]).
//! 6. Exit `0`, including when evidence is missing; `2` when `requirements.txt`
//!    holds a malformed entry; `1` for any other fatal error (e.g. a corrupt archive).

mod analyzer;
mod archive;
mod cli;
mod config;
mod error;
mod inspect;
mod license;
mod matcher;
mod models;
mod process;
mod registry;
mod report;
mod requirement;
mod scanner;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use archive::{ArchiveExtractor, TarExtractor};
use cli::{Cli, ReportFormat};
use config::load_config;
use error::Error;
use inspect::Inspector;
use models::{InspectionReport, PackageCoordinates};
use registry::galaxy::GalaxyCli;
use registry::RegistryClient;

/// Exit status when `requirements.txt` cannot be parsed.
const EXIT_INVALID_REQUIREMENT: i32 = 2;

/// Initialize the tracing subscriber; logs go to stderr.
///
/// `--verbose` forces debug level, otherwise `RUST_LOG` applies, otherwise warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("collection_checkr=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("collection_checkr=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::debug!("collection-checkr starting with args: {:?}", cli);

    let report = match inspect_archive(&cli) {
        Ok(report) => report,
        Err(e) => {
            if let Some(err @ Error::InvalidRequirement { .. }) = e.downcast_ref::<Error>() {
                eprintln!("{} {}", "error:".red().bold(), err);
                std::process::exit(EXIT_INVALID_REQUIREMENT);
            }
            return Err(e);
        }
    };

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&report, cli.quiet)?,
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Unpack the archive and inspect it. The extraction directory is removed
/// when this returns, whatever the outcome.
fn inspect_archive(cli: &Cli) -> Result<InspectionReport> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    let coords = PackageCoordinates::new(&cli.namespace, &cli.name, &cli.version);

    let workdir = tempfile::TempDir::new().context("cannot create extraction directory")?;
    TarExtractor::new().extract(&cli.tarfile, workdir.path())?;

    let registry: Option<Box<dyn RegistryClient>> = if cli.skip_registry {
        None
    } else {
        Some(Box::new(GalaxyCli::new(&config.registry)))
    };
    let inspector = Inspector::new(&config, registry, scanner::from_config(&config.scan));

    let spinner = (!cli.quiet && matches!(cli.report, ReportFormat::Terminal)).then(|| {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Inspecting {}", coords));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let result = inspector.inspect(workdir.path(), &coords);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    Ok(result?)
}
