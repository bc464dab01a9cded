//! Command-line interface entry point for `gpa`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gpa_analytics::config::Config;
use gpa_analytics::logging::{self, FileLogging, Level};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Config edits work on the file as stored; every other command sees CLI overrides
    let stored = Config::load();
    let defaults = Config::from_defaults();
    let mut config = stored.clone();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);
    if args.debug_flag {
        level = level.max(Level::Debug);
    }

    let verbose = args.verbose || config.logging.verbose;

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path =
        (!config.logging.file.is_empty()).then(|| PathBuf::from(&config.logging.file));
    let log_path = args.log_file.clone().or(config_log_path);

    match logging::init(level, log_path.as_deref()) {
        FileLogging::Disabled => {}
        FileLogging::Active(path) => {
            if verbose {
                eprintln!("✓ File logging initialized at: {}", path.display());
            } else {
                info!("File logging initialized at: {}", path.display());
            }
        }
        FileLogging::Failed(path, e) => {
            eprintln!(
                "✗ Failed to initialize file logging at {}: {e}",
                path.display()
            );
        }
    }

    let outcome = match args.command {
        Command::Config { subcommand } => {
            let mut stored = stored;
            commands::config::run(subcommand, &mut stored, &defaults)
        }
        Command::Summary { records } => commands::summary::run(&records, &config, verbose),
        Command::Simulate {
            records,
            target,
            courses,
            rescale_target,
        } => commands::simulate::run(&records, target, &courses, rescale_target, &config),
        Command::Scale { subcommand } => commands::scale::run(&subcommand, &config),
        Command::Convert { value, from, to } => commands::convert::run(&value, from, to, &config),
        Command::Report {
            records,
            output,
            format,
        } => commands::report::run(&records, output.as_deref(), &format, &config),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(commands::Failed) => ExitCode::FAILURE,
    }
}
