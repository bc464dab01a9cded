//! Logging setup
//!
//! Installs a `tracing` subscriber with a stderr layer and an optional plain-text
//! file layer. Library code only emits events; the CLI decides where they go.

use crate::core::error::GradeError;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt as layer_fmt, EnvFilter};

/// Runtime log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Progress information
    Info,
    /// Developer detail
    Debug,
    /// Everything
    Trace,
}

impl Level {
    /// Lowercase name, as stored in the config file
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Parse a config value, ignoring case; `None` for anything unrecognized
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl FromStr for Level {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(GradeError::Parse(format!("Unknown log level: '{s}'"))),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Self::ERROR,
            Level::Warn => Self::WARN,
            Level::Info => Self::INFO,
            Level::Debug => Self::DEBUG,
            Level::Trace => Self::TRACE,
        }
    }
}

/// Outcome of setting up the optional log file
#[derive(Debug)]
pub enum FileLogging {
    /// No log file requested
    Disabled,
    /// Events are also written to this file
    Active(PathBuf),
    /// The file could not be opened; logging continues on stderr only
    Failed(PathBuf, std::io::Error),
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber
///
/// Events at `level` and above go to stderr, and to `log_file` without ANSI colors
/// when one is given. Calling this more than once keeps the first subscriber.
pub fn init(level: Level, log_file: Option<&Path>) -> FileLogging {
    let filter = EnvFilter::new(level.as_str());

    let stderr_layer = layer_fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, outcome) = match log_file {
        None => (None, FileLogging::Disabled),
        Some(path) => match open_log_file(path) {
            Ok(file) => (
                Some(
                    layer_fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                ),
                FileLogging::Active(path.to_path_buf()),
            ),
            Err(e) => (None, FileLogging::Failed(path.to_path_buf(), e)),
        },
    };

    // A second init (tests, embedding) is not an error worth surfacing
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    outcome
}
