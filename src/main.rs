mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use dependency_diff::adapters::outbound::console::StderrProgressReporter;
use dependency_diff::adapters::outbound::filesystem::FileSystemReader;
use dependency_diff::adapters::outbound::semver_range::SemverRangeParser;
use dependency_diff::application::dto::{CompareRequest, OutputFormat};
use dependency_diff::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use dependency_diff::application::use_cases::CompareManifestsUseCase;
use dependency_diff::shared::error::ExitCode;
use dependency_diff::shared::Result;
use std::io::IsTerminal;
use std::process;

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(code.as_i32());
}

fn run() -> Result<ExitCode> {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    let config = load_config(&args)?.unwrap_or_default();
    let settings = Settings::merge(args, &config)?;

    // Create adapters (Dependency Injection)
    let progress_reporter = if settings.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    let use_case = CompareManifestsUseCase::new(
        FileSystemReader::new(),
        SemverRangeParser::new(),
        progress_reporter,
    );

    let mut request = CompareRequest::new(settings.old, settings.new)
        .with_exclude_patterns(settings.exclude_patterns);
    if let Some(groups) = config.group_table()? {
        request = request.with_groups(groups);
    }

    let response = use_case.execute(request)?;

    if !settings.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }
    let colored = settings.output.is_none() && std::io::stdout().is_terminal();
    let formatter = FormatterFactory::create(settings.format, colored);
    let formatted_output = formatter.format(&response)?;

    PresenterFactory::create(PresenterType::from(settings.output)).present(&formatted_output)?;

    if settings.fail_on_changes && response.has_changes() {
        return Ok(ExitCode::ChangesDetected);
    }
    Ok(ExitCode::Success)
}

/// Loads the config given with `--config`, or the one in the current directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        let config = config::load_config_from_path(path)?;
        eprintln!("📄 Loaded config from: {}", path.display());
        return Ok(Some(config));
    }

    let config = config::discover_config(std::path::Path::new("."))?;
    if config.is_some() {
        eprintln!(
            "📄 Auto-discovered config file: {}",
            config::CONFIG_FILENAME
        );
    }
    Ok(config)
}

/// Effective options after merging CLI flags over config values
#[derive(Debug)]
struct Settings {
    old: std::path::PathBuf,
    new: std::path::PathBuf,
    format: OutputFormat,
    output: Option<std::path::PathBuf>,
    exclude_patterns: Vec<String>,
    fail_on_changes: bool,
    quiet: bool,
}

impl Settings {
    /// CLI values win; exclude patterns from both sources are combined
    fn merge(args: Args, config: &ConfigFile) -> Result<Self> {
        let format = match args.format {
            Some(format) => format,
            None => config.output_format()?.unwrap_or_default(),
        };

        let mut exclude_patterns = config.exclude_dependencies.clone().unwrap_or_default();
        for pattern in args.exclude {
            if !exclude_patterns.contains(&pattern) {
                exclude_patterns.push(pattern);
            }
        }

        Ok(Self {
            old: args.old,
            new: args.new,
            format,
            output: args.output,
            exclude_patterns,
            fail_on_changes: args.fail_on_changes || config.fail_on_changes.unwrap_or(false),
            quiet: args.quiet,
        })
    }
}
