//! Convert command handler

use super::{load_scale, report_error, Outcome};
use crate::args::FormatArg;
use gpa_analytics::config::Config;
use gpa_analytics::core::grading::{convert_grade, GradeValue};

/// Run the convert command
pub fn run(value: &str, from: FormatArg, to: FormatArg, config: &Config) -> Outcome {
    let manager = load_scale(config);
    let system = manager.active();

    let input =
        GradeValue::parse(value, from.into()).map_err(|e| report_error("Invalid grade", &e))?;

    let output = convert_grade(&input, to.into(), &system);
    println!("{input} ({}) => {output} ({})", input.format(), output.format());
    Ok(())
}
