//! Scale command handler

use super::{load_scale, report_error, Failed, Outcome};
use crate::args::ScaleSubcommand;
use gpa_analytics::config::Config;
use gpa_analytics::core::grading::{validate_grading_system, GradingSystem};
use std::path::Path;

/// Dispatch scale subcommands
pub fn run(subcommand: &ScaleSubcommand, config: &Config) -> Outcome {
    match subcommand {
        ScaleSubcommand::Show => {
            handle_show(config);
            Ok(())
        }
        ScaleSubcommand::Validate { file } => handle_validate(file),
    }
}

/// Print the grading system that commands would use
pub fn handle_show(config: &Config) {
    let manager = load_scale(config);
    println!();
    print!("{}", manager.active());
}

/// Validate a scale file and list every problem found
pub fn handle_validate(file: &Path) -> Outcome {
    let system = GradingSystem::from_file(file)
        .map_err(|e| report_error(&format!("Failed to read {}", file.display()), &e))?;

    let errors = validate_grading_system(&system);
    if errors.is_empty() {
        println!("✓ {} is a valid grading system", system.name);
        return Ok(());
    }

    eprintln!("✗ {} has {} problem(s):", system.name, errors.len());
    for err in &errors {
        eprintln!("  - {err}");
    }
    Err(Failed)
}
