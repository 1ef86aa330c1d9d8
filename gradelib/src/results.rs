use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use crate::error::GradeError;

/// Marker `test-csim` puts at the start of its result line
pub const CSIM_MARKER: &str = "TEST_CSIM_RESULTS";
/// Marker `test-shift` puts on its result line
pub const SHIFT_MARKER: &str = "TEST_SHIFT_RESULTS";

/// The largest signed 32 bit value. Checkers report it as the miss count when no valid
/// measurement was taken
pub const INVALID_MISSES: u64 = i32::MAX as u64;

lazy_static! {
    static ref DIGITS: Regex = Regex::new(r"\d+").unwrap();
}

/// Output of `test-csim`, split into what gets echoed and what gets scored
#[derive(Debug, Clone, PartialEq)]
pub struct CsimOutput {
    /// Every line except result lines, in order. Output ending in a newline leaves a final empty
    /// line, which is echoed too
    pub echoed: Vec<String>,
    /// Correctness points, already scaled by the checker
    pub score: u64,
}

/// The result line of one `test-shift` run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftResult {
    /// Points the checker awards for functional correctness, multiplies the miss curve score
    pub checker_points: u64,
    pub misses: u64,
}

/// Pulls every run of digits out of a line, in order
///
/// # Arguments
///
/// * `line`: Text to scan
///
/// returns: Option<Vec<u64>>, None if a digit run doesn't fit in 64 bits
///
/// # Examples
///
/// ```
/// use gradelib::results::extract_numbers;
/// assert_eq!(extract_numbers("  1   8000 "), Some(vec![1, 8000]));
/// assert_eq!(extract_numbers("no digits"), Some(vec![]));
/// ```
pub fn extract_numbers(line: &str) -> Option<Vec<u64>> {
    DIGITS.find_iter(line).map(|m| m.as_str().parse::<u64>().ok()).collect()
}

/// Splits `test-csim` output into the lines to echo and the correctness score.
///
/// Result lines start with the marker (leading whitespace is ignored) and are never echoed. When
/// the checker prints more than one, the last one is scored
pub fn parse_csim_output(output: &str) -> Result<CsimOutput, GradeError> {
    let mut echoed = Vec::new();
    let mut result_line = None;
    for line in output.split('\n') {
        match line.trim_start().strip_prefix(CSIM_MARKER) {
            Some(rest) => result_line = Some((line, rest)),
            None => echoed.push(line.to_string()),
        }
    }
    let (line, rest) = result_line.ok_or_else(|| GradeError::MissingResultMarker {
        marker: CSIM_MARKER,
        checker: "test-csim".to_string(),
    })?;
    let numbers = numbers_or_malformed(CSIM_MARKER, line, rest, 1)?;
    Ok(CsimOutput { echoed, score: numbers[0] })
}

/// Finds the `test-shift` result line and reads the checker points and miss count from it.
///
/// Only the first line containing the marker is considered, everything else the checker prints
/// is discarded
pub fn parse_shift_output(output: &str) -> Result<ShiftResult, GradeError> {
    let (line, rest) = output
        .lines()
        .find_map(|line| line.find(SHIFT_MARKER).map(|at| (line, &line[at + SHIFT_MARKER.len()..])))
        .ok_or_else(|| GradeError::MissingResultMarker {
            marker: SHIFT_MARKER,
            checker: "test-shift".to_string(),
        })?;
    let numbers = numbers_or_malformed(SHIFT_MARKER, line, rest, 2)?;
    Ok(ShiftResult { checker_points: numbers[0], misses: numbers[1] })
}

fn numbers_or_malformed(marker: &'static str, line: &str, rest: &str, expected: usize) -> Result<Vec<u64>, GradeError> {
    let malformed = || GradeError::MalformedResultLine { marker, expected, line: line.to_string() };
    let numbers = extract_numbers(rest).ok_or_else(malformed)?;
    if numbers.len() < expected {
        return Err(malformed());
    }
    tracing::debug!("{marker}: {numbers:?}");
    Ok(numbers)
}
