use std::path::PathBuf;

/// Everything that can abort a grading run. None of these are recovered from; the report is only
/// printed once every checker has produced a usable result
#[derive(thiserror::Error, Debug)]
pub enum GradeError {
    /// The checker executable couldn't be started at all
    #[error("Couldn't run {}: {source}", .program.display())]
    Launch {
        program: PathBuf,
        source: std::io::Error,
    },
    /// The checker ran but reported failure through its exit status
    #[error("{} exited unsuccessfully ({status})", .program.display())]
    CheckerExit {
        program: PathBuf,
        status: std::process::ExitStatus,
    },
    /// No line in the checker's output carried the expected marker
    #[error("No {marker} line in the output of {checker}")]
    MissingResultMarker { marker: &'static str, checker: String },
    /// The marker line was there, but not with the numbers we need
    #[error("Malformed {marker} line, expected {expected} numbers: {line:?}")]
    MalformedResultLine {
        marker: &'static str,
        expected: usize,
        line: String,
    },
    #[error("Couldn't open the config file at path {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Couldn't parse the config file: {0}")]
    ConfigParse(#[from] serde_json::Error),
    /// Writing the report to the output sink failed
    #[error("Couldn't write the report: {0}")]
    Output(#[from] std::io::Error),
}
