//! Report command handler
//!
//! Generates transcript reports in Markdown or JSON.

use super::{load_scale, load_transcript, report_error, Outcome};
use gpa_analytics::config::Config;
use gpa_analytics::core::report::{
    JsonReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use gpa_analytics::core::GradeError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Run the report command
pub fn run(
    records_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Outcome {
    let path = generate_report(records_file, output_file, format_str, config).map_err(|e| {
        report_error(
            &format!("Report generation failed for {}", records_file.display()),
            &e,
        )
    })?;
    println!("✓ Report generated: {}", path.display());
    info!("Report exported to: {}", path.display());
    Ok(())
}

/// Default output path: `<reports_dir>/<records stem>_report.<ext>`
fn default_output_path(records_file: &Path, format: ReportFormat, config: &Config) -> PathBuf {
    let stem = records_file
        .file_stem()
        .map_or_else(|| "transcript".into(), |s| s.to_string_lossy());
    PathBuf::from(&config.paths.reports_dir).join(format!("{stem}_report.{}", format.extension()))
}

fn generate_report(
    records_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<PathBuf, GradeError> {
    let format: ReportFormat = format_str.parse()?;
    let manager = load_scale(config);
    let system = manager.active();
    let transcript = load_transcript(records_file, &system)?;

    let output_path = output_file.map_or_else(
        || default_output_path(records_file, format, config),
        Path::to_path_buf,
    );
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let ctx = ReportContext::new(
        &transcript.records,
        &transcript.semesters,
        &system,
        config.passing_grade(),
        config.target().ok(),
    );
    match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &output_path)?,
        ReportFormat::Json => JsonReporter::new().generate(&ctx, &output_path)?,
    }

    Ok(output_path)
}
