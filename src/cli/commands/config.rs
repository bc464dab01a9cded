//! Config command handler
//!
//! `get` reads the stored file; `set`, `unset` and `reset` persist immediately.

use super::{report_error, Outcome};
use crate::args::ConfigSubcommand;
use gpa_analytics::config::Config;
use gpa_analytics::core::GradeError;
use std::io::{self, Write};
use tracing::info;

/// Dispatch config subcommands
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Outcome {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            show_all(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => handle_config_get(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

fn show_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    print!("{config}");
}

/// Print one configuration value
pub fn handle_config_get(config: &Config, key: &str) -> Outcome {
    let value = config.get(key).ok_or_else(|| {
        report_error("Cannot read config", &GradeError::ConfigKey(key.to_string()))
    })?;
    println!("{value}");
    Ok(())
}

/// Validate and store one configuration value
///
/// A rejected value leaves the stored one in place and nothing is written.
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) -> Outcome {
    if let Err(e) = config.set(key, value) {
        let failed = report_error(&format!("Rejected {key} = {value}"), &e);
        if let Some(prior) = config.get(key).filter(|v| !v.is_empty()) {
            eprintln!("  Keeping {key} = {prior}");
        }
        return Err(failed);
    }
    persist(config)?;
    println!("✓ Set {key} = {value}");
    Ok(())
}

/// Restore one configuration value to its default
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) -> Outcome {
    config
        .unset(key, defaults)
        .map_err(|e| report_error("Cannot unset config", &e))?;
    persist(config)?;
    println!("✓ Reset {key} to default");
    Ok(())
}

fn persist(config: &Config) -> Outcome {
    config
        .save()
        .map_err(|e| report_error("Failed to save config", &e))?;
    info!("Saved config to {}", Config::get_config_file_path().display());
    Ok(())
}

/// Delete the config file after confirmation
pub fn handle_config_reset() -> Outcome {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Reset config to defaults? (y/n): ");
    io::stdout().flush().ok();
    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        Config::reset().map_err(|e| report_error("Failed to remove config file", &e))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("Reset cancelled");
    }
    Ok(())
}
