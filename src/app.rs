//! # Application Runner
//!
//! Drives one invocation through the whole pipeline:
//!
//! ```text
//! resolve ──▶ validate ──▶ to_meters ──▶ calculate_bmi ──▶ classify ──▶ report
//! ```

use crate::cmd_args::CommandLineArgs;
use crate::config::EXIT_SUCCESS;
use crate::error::BmiError;
use crate::input;
use crate::io::PromptStream;
use crate::models::BmiReport;
use crate::report::write_report;
use crate::services::{calculate_bmi, to_meters};
use std::io::Write;

/// Run one calculation, writing the report to `out` on success.
pub fn run<P: PromptStream, W: Write>(
    args: &CommandLineArgs,
    prompts: &mut P,
    out: &mut W,
) -> Result<BmiReport, BmiError> {
    let measurement = input::resolve(args, prompts)?;

    let height_m = to_meters(measurement.height_raw);
    tracing::debug!(
        height_raw = measurement.height_raw,
        height_m,
        "normalized height"
    );

    let report = BmiReport::new(calculate_bmi(measurement.weight_kg, height_m)?);
    tracing::info!(bmi = report.bmi, category = %report.category, "computed BMI");

    write_report(out, &report)?;
    Ok(report)
}

/// Exit status for the outcome of [`run`]
pub fn exit_code(result: &Result<BmiReport, BmiError>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => e.exit_code(),
    }
}
