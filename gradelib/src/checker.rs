use std::path::Path;
use std::process::{Command, Stdio};
use crate::error::GradeError;

/// Runs a checker to completion and hands back everything it printed to stdout.
///
/// The grader only ever talks to checkers through this trait, so tests can substitute canned
/// output for the real executables
pub trait CheckerRunner {
    /// Runs `program` with `args`, blocking until it exits
    ///
    /// # Arguments
    ///
    /// * `program`: Path to the checker executable
    /// * `args`: Command line arguments, passed through without a shell
    ///
    /// returns: Result<String, GradeError>, the checker's full stdout
    fn run(&self, program: &Path, args: &[String]) -> Result<String, GradeError>;
}

/// Spawns checkers as child processes. Stderr is inherited so checker diagnostics still reach
/// the terminal
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl CheckerRunner for ProcessRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<String, GradeError> {
        tracing::debug!("Spawning {} {}", program.display(), args.join(" "));
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| GradeError::Launch { program: program.to_path_buf(), source })?;
        if !output.status.success() {
            return Err(GradeError::CheckerExit { program: program.to_path_buf(), status: output.status });
        }
        // Checkers are C programs printing ASCII, anything else is replaced rather than rejected
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl<T: CheckerRunner + ?Sized> CheckerRunner for &T {
    fn run(&self, program: &Path, args: &[String]) -> Result<String, GradeError> {
        (**self).run(program, args)
    }
}
