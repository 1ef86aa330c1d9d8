//! # GradeLib
//!
//! Gradelib drives the cache lab checkers and turns their output into a score
//!
//! It runs `test-csim` and `test-shift` as black boxes, reads the numbers they print on their
//! result lines, scores the matrix runs against a miss curve, and formats the summary table and
//! the autograder line
//!
//! The grading rubric lives in a plain configuration value, so it can be overridden from JSON
//! without touching the scoring code

/// Contains the trait used to run checkers, and the child process implementation
pub mod checker;

/// Contains the grading configuration: score table, miss curves, and checker invocations
pub mod config;

/// Contains the error type shared by every stage of grading
pub mod error;

/// Contains the grader, which runs each stage in order
pub mod grader;

/// Contains the summary table and autograder line formatting
pub mod report;

/// Contains the parsers for checker result lines
pub mod results;

/// Contains the miss curve and the aggregation into a report
pub mod score;
