//! JSON report generator

use crate::core::error::Result;
use crate::core::report::{ReportContext, ReportGenerator};

/// Serializes the transcript summary as pretty-printed JSON
#[derive(Debug, Default)]
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        Ok(serde_json::to_string_pretty(&ctx.summary())?)
    }
}
