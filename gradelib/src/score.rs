use serde::{Deserialize, Serialize};
use crate::config::GraderConfig;
use crate::results::{ShiftResult, INVALID_MISSES};

/// Scores a miss count against a linear curve.
///
/// At or under `lower` earns `full_score`, at or over `upper` earns nothing, and in between the
/// score falls linearly, rounded to one decimal place. The rounding looks at the exact value of the
/// float, so 10.9499... stays 10.9; only values exactly halfway between tenths round away from zero
///
/// # Arguments
///
/// * `misses`: Observed cache misses
/// * `lower`: Miss count for full credit
/// * `upper`: Miss count for no credit
/// * `full_score`: Points at or below `lower`
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use gradelib::score::compute_miss_score;
/// assert_eq!(compute_miss_score(10, 14, 18, 4.0), 4.0);
/// assert_eq!(compute_miss_score(16, 14, 18, 4.0), 2.0);
/// assert_eq!(compute_miss_score(20, 14, 18, 4.0), 0.0);
/// ```
pub fn compute_miss_score(misses: u64, lower: u64, upper: u64, full_score: f64) -> f64 {
    if misses <= lower {
        return full_score;
    }
    if misses >= upper {
        return 0.0;
    }
    let over = (misses - lower) as f64;
    let range = (upper - lower) as f64;
    round_tenths((1.0 - over / range) * full_score)
}

/// Rounds to one decimal place the way the lab's rubric always has.
///
/// Scaling by ten before rounding would itself round, pushing values like 10.94999 up to a tie,
/// so the exact value is formatted instead. Formatting breaks exact ties to even; the only f64
/// values sitting exactly on a tie end in .25 or .75, and those go away from zero
fn round_tenths(value: f64) -> f64 {
    let on_quarter = (value * 4.0).fract() == 0.0 && (value * 2.0).fract() != 0.0;
    if on_quarter {
        // x.25 and x.75 scale to an exact x.5, so this round is exact
        return (value * 10.0).round() / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}

/// A single row of the summary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub label: String,
    pub points: f64,
    pub max_points: u32,
    /// Only matrix categories have a miss count
    pub misses: Option<u64>,
}

impl CategoryScore {
    /// Miss count as it is displayed, the reserved invalid value shows up as `invalid`
    pub fn misses_display(&self) -> Option<String> {
        self.misses.map(|misses| {
            if misses == INVALID_MISSES {
                "invalid".to_string()
            } else {
                misses.to_string()
            }
        })
    }
}

/// Everything the driver prints once all checkers have run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub csim: CategoryScore,
    pub small: CategoryScore,
    pub large: CategoryScore,
    pub bonus: CategoryScore,
    pub total: f64,
    pub max_total: u32,
}

impl Report {
    /// Combines the checker results into per category scores
    ///
    /// # Arguments
    ///
    /// * `config`: Score table, curves and bonus threshold
    /// * `csim_score`: Correctness points reported by `test-csim`
    /// * `small`: Result of the small matrix run
    /// * `large`: Result of the large matrix run
    ///
    /// returns: Report
    pub fn compute(config: &GraderConfig, csim_score: u64, small: ShiftResult, large: ShiftResult) -> Self {
        let small_points = compute_miss_score(small.misses, config.small.lower, config.small.upper, config.small.full_score)
            * small.checker_points as f64;
        let large_points = compute_miss_score(large.misses, config.large.lower, config.large.upper, config.large.full_score)
            * large.checker_points as f64;
        // The bonus only looks at misses, it isn't gated by the checker's points
        let bonus_points = if large.misses <= config.bonus.max_misses {
            config.scores.bonus as f64
        } else {
            0.0
        };
        let csim_points = csim_score as f64;
        Self {
            csim: CategoryScore {
                label: "Csim correctness".to_string(),
                points: csim_points,
                max_points: config.scores.csim,
                misses: None,
            },
            small: CategoryScore {
                label: config.small.label.clone(),
                points: small_points,
                max_points: config.scores.shift_small,
                misses: Some(small.misses),
            },
            large: CategoryScore {
                label: config.large.label.clone(),
                points: large_points,
                max_points: config.scores.shift_large,
                misses: Some(large.misses),
            },
            bonus: CategoryScore {
                label: "Bonus 128x128:".to_string(),
                points: bonus_points,
                max_points: config.scores.bonus,
                misses: None,
            },
            total: csim_points + small_points + large_points + bonus_points,
            max_total: config.scores.total(),
        }
    }

    /// Rows in display order
    pub fn categories(&self) -> [&CategoryScore; 4] {
        [&self.csim, &self.small, &self.large, &self.bonus]
    }
}
