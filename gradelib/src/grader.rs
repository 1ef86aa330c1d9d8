use std::io::Write;
use std::path::{Path, PathBuf};
use crate::checker::CheckerRunner;
use crate::config::{GraderConfig, ShiftCase};
use crate::error::GradeError;
use crate::report::{autoresult_line, write_summary};
use crate::results::{parse_csim_output, parse_shift_output, ShiftResult};
use crate::score::Report;

/// Runs the checkers in order, then scores and prints the results.
///
/// The grader owns nothing mutable: the configuration is fixed when it is built, and each call to
/// `grade` runs every checker from scratch
pub struct Grader<R: CheckerRunner> {
    config: GraderConfig,
    checker_dir: PathBuf,
    runner: R,
}

impl<R: CheckerRunner> Grader<R> {
    /// Creates a grader for a given configuration
    ///
    /// # Arguments
    ///
    /// * `config`: Score table, curves and checker names
    /// * `checker_dir`: Directory containing the checker executables
    /// * `runner`: How checkers are executed
    ///
    /// returns: Grader<R>
    pub fn new(config: GraderConfig, checker_dir: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            config,
            checker_dir: checker_dir.into(),
            runner,
        }
    }

    /// Grades the lab, writing progress, the checker's echoed output and the summary to `out`.
    ///
    /// Nothing is scored until all three checker runs succeed, so on error no summary is written.
    /// With `autograde` set, the autoresult line follows the summary
    ///
    /// returns: Result<Report, GradeError>
    pub fn grade<W: Write>(&self, out: &mut W, autograde: bool) -> Result<Report, GradeError> {
        writeln!(out, "Part A: Testing cache simulator")?;
        let csim = self.checker_dir.join(&self.config.checkers.csim);
        writeln!(out, "Running {}", command_line(&csim, &[]))?;
        let csim_output = parse_csim_output(&self.runner.run(&csim, &[])?)?;
        for line in &csim_output.echoed {
            writeln!(out, "{line}")?;
        }

        writeln!(out, "Part B: Testing matrix shift function")?;
        let small = self.run_shift(out, &self.config.small)?;
        let large = self.run_shift(out, &self.config.large)?;

        let report = Report::compute(&self.config, csim_output.score, small, large);
        tracing::debug!("Total {:.1} of {}", report.total, report.max_total);
        write_summary(out, &report)?;
        if autograde {
            writeln!(out, "{}", autoresult_line(&report))?;
        }
        Ok(report)
    }

    fn run_shift<W: Write>(&self, out: &mut W, case: &ShiftCase) -> Result<ShiftResult, GradeError> {
        let shift = self.checker_dir.join(&self.config.checkers.shift);
        let args = case.args();
        writeln!(out, "Running {}", command_line(&shift, &args))?;
        parse_shift_output(&self.runner.run(&shift, &args)?)
    }
}

fn command_line(program: &Path, args: &[String]) -> String {
    std::iter::once(program.display().to_string())
        .chain(args.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ")
}
