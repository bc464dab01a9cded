//! Configuration module for `gpa-analytics`

use crate::core::error::{GradeError, Result};
use crate::core::issues::DEFAULT_PASSING_GRADE;
use crate::core::simulation::TargetCgpa;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory inside config values
const DIR_VARIABLE: &str = "$GPA_ANALYTICS";

/// Target used when the config carries none
const DEFAULT_TARGET_CGPA: f64 = 3.5;

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default)]
    pub level: String,
    /// Log file path; empty disables file logging
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Grading configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradingConfig {
    /// Custom grading system file; empty uses the built-in five-point scale
    #[serde(default)]
    pub scale_file: String,
    /// Lowest grade that does not raise a low-grade issue
    #[serde(default)]
    pub passing_grade: String,
    /// Target CGPA on the 4.0 display scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_cgpa: Option<f64>,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Grading settings
    #[serde(default)]
    pub grading: GradingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override grading system file
    pub scale_file: Option<String>,
    /// Override passing grade
    pub passing_grade: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$GPA_ANALYTICS` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gpa-analytics`
    /// - macOS: `~/Library/Application Support/gpa-analytics`
    /// - Windows: `%APPDATA%\gpa-analytics`
    #[must_use]
    pub fn get_gpa_analytics_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gpa-analytics")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty in the current config and set in `defaults` are
    /// updated, so upgrading adds new settings without touching user choices.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.grading.passing_grade.is_empty() && !defaults.grading.passing_grade.is_empty() {
            self.grading
                .passing_grade
                .clone_from(&defaults.grading.passing_grade);
            changed = true;
        }
        if self.grading.target_cgpa.is_none() && defaults.grading.target_cgpa.is_some() {
            self.grading.target_cgpa = defaults.grading.target_cgpa;
            changed = true;
        }

        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values, and nothing is persisted.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(scale_file) = &overrides.scale_file {
            self.grading.scale_file.clone_from(scale_file);
        }
        if let Some(passing_grade) = &overrides.passing_grade {
            self.grading.passing_grade.clone_from(passing_grade);
        }

        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_gpa_analytics_dir`](Self::get_gpa_analytics_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gpa_analytics_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GPA_ANALYTICS` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_gpa_analytics_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Expands `$GPA_ANALYTICS` in path values. Missing fields use their serde
    /// defaults (empty strings, `false`, no target). A `target_cgpa` outside
    /// `[0, 4.0]` is dropped with a warning; the other settings are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(toml_str)?;

        if let Some(target) = config.grading.target_cgpa {
            if let Err(e) = TargetCgpa::new(target) {
                warn!("Ignoring configured target_cgpa: {e}");
                config.grading.target_cgpa = None;
            }
        }

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.grading.scale_file = Self::expand_variables(&config.grading.scale_file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the compiled-in default configuration is invalid, which the
    /// test suite rules out.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, or create it from defaults
    ///
    /// - If the file exists: loads it, merges missing fields from defaults and
    ///   saves the result when anything was added
    /// - On first run: creates the directory and writes the defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            debug!("No config at {}, writing defaults", config_file.display());
            if let Err(e) = defaults.save() {
                warn!("Could not write default config: {e}");
            }
            return defaults;
        }

        match Self::load_from(&config_file) {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    if let Err(e) = config.save() {
                        warn!("Could not save merged config: {e}");
                    }
                }
                config
            }
            Err(e) => {
                warn!(
                    "Ignoring unreadable config {}: {e}",
                    config_file.display()
                );
                defaults
            }
        }
    }

    /// Read and parse a config file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file written
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration as TOML to `path`, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Accepted target CGPA, falling back to the built-in default
    ///
    /// # Errors
    /// Returns [`GradeError::TargetOutOfRange`] if the stored value is out of range
    pub fn target(&self) -> Result<TargetCgpa> {
        TargetCgpa::new(self.grading.target_cgpa.unwrap_or(DEFAULT_TARGET_CGPA))
    }

    /// Passing grade, falling back to [`DEFAULT_PASSING_GRADE`] when unset
    #[must_use]
    pub fn passing_grade(&self) -> &str {
        if self.grading.passing_grade.trim().is_empty() {
            DEFAULT_PASSING_GRADE
        } else {
            self.grading.passing_grade.trim()
        }
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `scale_file`, `passing_grade`,
    /// `target_cgpa`, `reports_dir` (dashes accepted in place of underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "scale_file" | "scale-file" => Some(self.grading.scale_file.clone()),
            "passing_grade" | "passing-grade" => Some(self.grading.passing_grade.clone()),
            "target_cgpa" | "target-cgpa" => Some(
                self.grading
                    .target_cgpa
                    .map_or_else(String::new, |t| t.to_string()),
            ),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be parsed.
    /// A `target_cgpa` outside `[0, 4.0]` yields [`GradeError::TargetOutOfRange`]
    /// and leaves the previous target in place.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value.parse::<bool>().map_err(|_| {
                    GradeError::Parse(format!("Invalid boolean value for 'verbose': '{value}'"))
                })?;
            }
            "scale_file" | "scale-file" => self.grading.scale_file = value.to_string(),
            "passing_grade" | "passing-grade" => {
                self.grading.passing_grade = value.trim().to_string();
            }
            "target_cgpa" | "target-cgpa" => {
                let parsed = value.trim().parse::<f64>().map_err(|_| {
                    GradeError::Parse(format!("Invalid number for 'target_cgpa': '{value}'"))
                })?;
                self.grading.target_cgpa = Some(TargetCgpa::new(parsed)?.value());
            }
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(GradeError::ConfigKey(key.to_string())),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<()> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "scale_file" | "scale-file" => self
                .grading
                .scale_file
                .clone_from(&defaults.grading.scale_file),
            "passing_grade" | "passing-grade" => self
                .grading
                .passing_grade
                .clone_from(&defaults.grading.passing_grade),
            "target_cgpa" | "target-cgpa" => {
                self.grading.target_cgpa = defaults.grading.target_cgpa;
            }
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(GradeError::ConfigKey(key.to_string())),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted
    pub fn reset() -> Result<()> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[grading]")?;
        writeln!(f, "  scale_file = \"{}\"", self.grading.scale_file)?;
        writeln!(f, "  passing_grade = \"{}\"", self.grading.passing_grade)?;
        match self.grading.target_cgpa {
            Some(target) => writeln!(f, "  target_cgpa = {target}")?,
            None => writeln!(f, "  target_cgpa = (unset)")?,
        }

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
