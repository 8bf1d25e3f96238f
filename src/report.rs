//! # Reporter
//!
//! Two lines on stdout: the BMI to one decimal place, then the category label.

use crate::models::BmiReport;
use std::io::{self, Write};

pub fn format_report(report: &BmiReport) -> String {
    format!("BMI: {:.1}\n{}\n", report.bmi, report.category)
}

pub fn write_report<W: Write>(out: &mut W, report: &BmiReport) -> io::Result<()> {
    out.write_all(format_report(report).as_bytes())?;
    out.flush()
}
