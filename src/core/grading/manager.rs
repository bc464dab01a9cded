//! Ownership of the active grading system
//!
//! The manager is the single writer for "which scale is active". Every swap is
//! validated first, and readers take an `Arc` snapshot, so a computation always sees
//! one complete, validated scale even if another thread activates a new one midway.

use super::scale::GradingSystem;
use super::validator::validate_grading_system;
use crate::core::error::{GradeError, Result};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Holds the active grading system
#[derive(Debug)]
pub struct ScaleManager {
    active: RwLock<Arc<GradingSystem>>,
}

impl Default for ScaleManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaleManager {
    /// Start with the built-in 5-point scale active
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: RwLock::new(Arc::new(GradingSystem::standard_five_point())),
        }
    }

    /// Snapshot of the active grading system
    #[must_use]
    pub fn active(&self) -> Arc<GradingSystem> {
        self.active.read().clone()
    }

    /// Validate `system` and make it the active scale.
    ///
    /// # Errors
    /// Returns [`GradeError::InvalidScale`] with every validation message when the
    /// system is inconsistent. The previously active scale stays in force.
    pub fn activate(&self, system: GradingSystem) -> Result<()> {
        let errors = validate_grading_system(&system);
        if !errors.is_empty() {
            warn!(
                "Refusing to activate grading system '{}': {} problem(s)",
                system.name,
                errors.len()
            );
            return Err(GradeError::InvalidScale(errors));
        }

        info!("Activated grading system '{}'", system.name);
        *self.active.write() = Arc::new(system);
        Ok(())
    }

    /// Load a grading system from a TOML file and activate it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if the system
    /// fails validation. The previously active scale stays in force either way.
    pub fn activate_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!("Loading grading system from {}", path.display());
        let system = GradingSystem::from_file(path)?;
        self.activate(system)
    }

    /// Restore the built-in scale
    pub fn reset(&self) {
        *self.active.write() = Arc::new(GradingSystem::standard_five_point());
    }
}
