use crate::services::matcher::models::config::MatchConfig;
use crate::services::matcher::models::types::MatchDecision;

impl MatchDecision {
    /// Score as a percentage of the match threshold, e.g. `"95%"` or
    /// `"low 110%"` below the warning score. `"n/a"` when nothing was scored.
    pub fn score_descriptor(&self, config: &MatchConfig) -> String {
        let Some(score) = self.score else {
            return "n/a".to_string();
        };

        let percentage = score_to_percentage(score, config.min_match_score);
        if f64::from(score) < config.min_match_warning_score() {
            format!("low {percentage}%")
        } else {
            format!("{percentage}%")
        }
    }
}

/// `round(score * 100 / min_match_score)`.
pub(crate) fn score_to_percentage(score: i32, min_match_score: i32) -> i64 {
    if min_match_score == 0 {
        return 0;
    }
    (f64::from(score) * 100.0 / f64::from(min_match_score)).round() as i64
}

#[cfg(test)]
#[path = "tests/result_summary_tests.rs"]
mod tests;
