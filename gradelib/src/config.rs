use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::GradeError;

/// The full grading configuration. Every field falls back to the lab's built-in rubric, so a
/// JSON override only needs to name what it changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraderConfig {
    pub scores: ScoreTable,
    pub small: ShiftCase,
    pub large: ShiftCase,
    pub bonus: BonusRule,
    pub checkers: CheckerNames,
}

/// Maximum points per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTable {
    pub csim: u32,
    /// Listed max for the small shift row. Not the curve's full score, see `ShiftCase::full_score`
    pub shift_small: u32,
    pub shift_large: u32,
    pub bonus: u32,
}

/// One `test-shift` invocation and the miss curve it is scored against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftCase {
    pub label: String,
    pub rows: u32,
    pub cols: u32,
    pub set_bits: u32,
    pub associativity: u32,
    pub block_bits: u32,
    pub lower: u64,
    pub upper: u64,
    pub full_score: f64,
}

/// Flat award granted when the large case's misses are at or under `max_misses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusRule {
    pub max_misses: u64,
}

/// File names of the checker executables, resolved against the checker directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerNames {
    pub csim: String,
    pub shift: String,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            scores: ScoreTable::default(),
            small: ShiftCase::small(),
            large: ShiftCase::large(),
            bonus: BonusRule::default(),
            checkers: CheckerNames::default(),
        }
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            csim: 24,
            shift_small: 1,
            shift_large: 12,
            bonus: 4,
        }
    }
}

impl ScoreTable {
    /// Sum of the listed maxima, shown on the total row
    pub fn total(&self) -> u32 {
        self.csim + self.shift_small + self.shift_large + self.bonus
    }
}

impl ShiftCase {
    /// 4x4 matrix on a cache with s=1, E=2, b=3
    pub fn small() -> Self {
        Self {
            label: "Matrix Shift 4x4:".to_string(),
            rows: 4,
            cols: 4,
            set_bits: 1,
            associativity: 2,
            block_bits: 3,
            lower: 14,
            upper: 18,
            full_score: 4.0,
        }
    }

    /// 128x128 matrix on a cache with s=5, E=2, b=3
    pub fn large() -> Self {
        Self {
            label: "Matrix Shift 128x128:".to_string(),
            rows: 128,
            cols: 128,
            set_bits: 5,
            associativity: 2,
            block_bits: 3,
            lower: 8262,
            upper: 16262,
            full_score: 12.0,
        }
    }

    /// Command line flags for `test-shift`, in the order the checker documents them
    pub fn args(&self) -> Vec<String> {
        vec![
            "-M".to_string(),
            self.rows.to_string(),
            "-N".to_string(),
            self.cols.to_string(),
            "-s".to_string(),
            self.set_bits.to_string(),
            "-E".to_string(),
            self.associativity.to_string(),
            "-b".to_string(),
            self.block_bits.to_string(),
        ]
    }
}

impl Default for BonusRule {
    fn default() -> Self {
        Self { max_misses: 8198 }
    }
}

impl Default for CheckerNames {
    fn default() -> Self {
        Self {
            csim: "test-csim".to_string(),
            shift: "test-shift".to_string(),
        }
    }
}

/// Loads a configuration override from a JSON file
pub fn load_config(path: &Path) -> Result<GraderConfig, GradeError> {
    let file = File::open(path).map_err(|source| GradeError::ConfigRead { path: path.to_path_buf(), source })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
