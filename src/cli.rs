use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "collection-checkr",
    about = "Inspect a collection archive before publishing"
)]
pub struct Cli {
    /// Path to the collection tarball
    #[arg(long, value_name = "PATH")]
    pub tarfile: PathBuf,

    /// Namespace of the collection
    #[arg(long)]
    pub namespace: String,

    /// Name of the collection
    #[arg(long)]
    pub name: String,

    /// Version of the collection
    #[arg(long)]
    pub version: String,

    /// Config file [default: ./.collection-checkr/config.toml, fallback ~/.config/collection-checkr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Do not check whether the collection already exists in the registry
    #[arg(long)]
    pub skip_registry: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
