use clap::Parser;
use dependency_diff::application::dto::OutputFormat;
use std::path::PathBuf;

/// Classify dependency changes between two package manifests
#[derive(Parser, Debug)]
#[command(name = "dependency-diff")]
#[command(version)]
#[command(
    about = "Classify dependency changes between two package manifests",
    long_about = "Compares two package manifests (package.json or a TOML equivalent) and reports, \
                  per dependency group, which dependencies were added, removed, moved between \
                  groups, upgraded, downgraded, locked to an exact version or unlocked."
)]
pub struct Args {
    /// Manifest before the change
    #[arg(value_name = "OLD")]
    pub old: PathBuf,

    /// Manifest after the change
    #[arg(value_name = "NEW")]
    pub new: PathBuf,

    /// Output format: json, markdown or text [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exclude dependencies matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "@types/*" -e "eslint-*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Path to a config file (defaults to ./dependency-diff.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when any dependency change is detected
    #[arg(long)]
    pub fail_on_changes: bool,

    /// Only print errors and warnings on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
