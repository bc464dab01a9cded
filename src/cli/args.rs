//! CLI argument definitions for `gpa`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_analytics::config::ConfigOverrides;
use gpa_analytics::core::grading::GradeFormat;
use gpa_analytics::logging::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to [`Level`] for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
    /// Trace-level logging
    Trace,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
            LogLevelArg::Trace => Self::Trace,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Grade representation accepted by `gpa convert`
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    /// Letter grade (A, B, ...)
    Letter,
    /// Percentage score
    Percentage,
    /// Grade points
    Points,
}

impl From<FormatArg> for GradeFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Letter => Self::Letter,
            FormatArg::Percentage => Self::Percentage,
            FormatArg::Points => Self::Points,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `target_cgpa`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum ScaleSubcommand {
    /// Print the active grading system.
    Show,
    /// Validate a grading system file without activating it.
    Validate {
        /// Path to a grading system TOML file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Print semester GPAs, CGPA and flagged courses for a records file.
    Summary {
        /// Path to a semester records JSON file
        #[arg(value_name = "RECORDS")]
        records: PathBuf,
    },
    /// Project the CGPA with hypothetical future courses.
    Simulate {
        /// Path to a semester records JSON file
        #[arg(value_name = "RECORDS")]
        records: PathBuf,

        /// Target CGPA on the 4.0 scale (defaults to config `target_cgpa`)
        #[arg(short, long, value_name = "CGPA")]
        target: Option<f64>,

        /// Hypothetical course as NAME:CREDITS:GRADE (repeatable)
        #[arg(short, long = "course", value_name = "NAME:CREDITS:GRADE")]
        courses: Vec<String>,

        /// Compare against the target rescaled to the active scale's maximum
        #[arg(long)]
        rescale_target: bool,
    },
    /// Inspect grading systems.
    Scale {
        #[command(subcommand)]
        subcommand: ScaleSubcommand,
    },
    /// Convert a grade between letter, percentage and points.
    Convert {
        /// Value to convert
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,

        /// Format of VALUE
        #[arg(long, value_enum)]
        from: FormatArg,

        /// Target format
        #[arg(long, value_enum)]
        to: FormatArg,
    },
    /// Generate a transcript report.
    Report {
        /// Path to a semester records JSON file
        #[arg(value_name = "RECORDS")]
        records: PathBuf,

        /// Output file path (defaults to `reports_dir`/<records name>.<ext>)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or json
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gpa",
    about = "GPA and CGPA calculator with configurable grading scales",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level. Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Grading system TOML file to use instead of the configured one
    #[arg(long = "scale", value_name = "FILE", global = true)]
    pub scale: Option<PathBuf>,

    /// Lowest grade that does not raise a low-grade issue
    #[arg(long = "passing-grade", value_name = "LETTER", global = true)]
    pub passing_grade: Option<String>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR", global = true)]
    pub reports_dir: Option<PathBuf>,

    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` fields leave the loaded configuration untouched.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            scale_file: self.scale.as_ref().map(|p| p.to_string_lossy().to_string()),
            passing_grade: self.passing_grade.clone(),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
