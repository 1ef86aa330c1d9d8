use std::io::Write;
use crate::score::{CategoryScore, Report};

/// Prefix Autolab looks for when scraping the driver's output
pub const AUTORESULT_PREFIX: &str = "AUTORESULT_STRING=";

/// Writes the summary table: a header, one row per category and a total row
pub fn write_summary<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Cache Lab summary:")?;
    writeln!(out, "{:<25}{:>11}{:>13}{:>15}", "", "Points", "Max pts", "Misses")?;
    for category in report.categories() {
        writeln!(out, "{}", format_row(category))?;
    }
    writeln!(out, "{:>25}{:>11.1}{:>13}", "Total points", report.total, report.max_total)
}

fn format_row(category: &CategoryScore) -> String {
    let row = format!("{:<25}{:>11.1}{:>13}", category.label, category.points, category.max_points);
    match category.misses_display() {
        Some(misses) => format!("{row}{misses:>15}"),
        None => row,
    }
}

/// The single line an autograder parses: total to one decimal, then both raw miss counts
///
/// # Examples
///
/// ```
/// use gradelib::config::GraderConfig;
/// use gradelib::report::autoresult_line;
/// use gradelib::results::ShiftResult;
/// use gradelib::score::Report;
/// let small = ShiftResult { checker_points: 1, misses: 14 };
/// let large = ShiftResult { checker_points: 1, misses: 8000 };
/// let report = Report::compute(&GraderConfig::default(), 24, small, large);
/// assert_eq!(autoresult_line(&report), "AUTORESULT_STRING=44.0:14:8000");
/// ```
pub fn autoresult_line(report: &Report) -> String {
    format!(
        "{AUTORESULT_PREFIX}{:.1}:{}:{}",
        report.total,
        report.small.misses.unwrap_or_default(),
        report.large.misses.unwrap_or_default()
    )
}
