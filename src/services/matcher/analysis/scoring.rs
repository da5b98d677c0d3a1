//! Pair scorer: one candidate name record against one source name record.

use crate::services::matcher::analysis::strategies::{match_names, match_optional, NameForms};
use crate::services::matcher::models::types::{NameRecord, ScoreBreakdown};

/// Manufacturer points are divided by this; it only breaks ties.
const MANUFACTURER_DIVISOR: i32 = 10;

/// Year score by absolute year difference (index), anything beyond is `YEAR_FAR`.
const YEAR_SCORES: [i32; 4] = [50, 40, -50, -100];
const YEAR_FAR: i32 = -1000;

const LENGTH_OFFSET: i32 = 8;
const LENGTH_MAX: i32 = 15;

/// Result of scoring one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairScore {
    pub success: bool,
    pub score: i32,
    pub breakdown: ScoreBreakdown,
}

/// Score `candidate` against `source`.
///
/// Total = name + manufacturer / 10 + year + length. An empty name on either
/// side scores zero outright.
pub fn score_pair(candidate: &NameRecord, source: &NameRecord, min_match_score: i32) -> PairScore {
    if candidate.name.is_empty() || source.name.is_empty() {
        return PairScore {
            success: false,
            score: 0,
            breakdown: ScoreBreakdown::default(),
        };
    }

    let name_hit = match_names(
        NameForms::new(&candidate.name, &candidate.name_no_whitespace),
        NameForms::new(&source.name, &source.name_no_whitespace),
    );
    let manufacturer_hit = match_optional(
        (
            candidate.manufacturer.as_deref(),
            candidate.manufacturer_no_whitespace.as_deref(),
        ),
        (
            source.manufacturer.as_deref(),
            source.manufacturer_no_whitespace.as_deref(),
        ),
    );

    let breakdown = ScoreBreakdown {
        name: name_hit.map(|hit| hit.score).unwrap_or(0),
        name_strategy: name_hit,
        manufacturer: manufacturer_hit.map(|hit| hit.score).unwrap_or(0) / MANUFACTURER_DIVISOR,
        year: year_score(candidate.year, source.year),
        length: length_score(candidate),
        second_chance: 0,
    };
    let score = breakdown.total();

    PairScore {
        success: score >= min_match_score,
        score,
        breakdown,
    }
}

/// Zero unless both years are known; then rewards closeness and punishes distance.
pub fn year_score(first: Option<u16>, second: Option<u16>) -> i32 {
    let (Some(first), Some(second)) = (first, second) else {
        return 0;
    };
    YEAR_SCORES
        .get(usize::from(first.abs_diff(second)))
        .copied()
        .unwrap_or(YEAR_FAR)
}

/// Longer candidate names are more specific: `clamp(len - 8, 0, 15)`.
pub fn length_score(candidate: &NameRecord) -> i32 {
    let len = i32::try_from(candidate.name_no_whitespace.chars().count()).unwrap_or(i32::MAX);
    len.saturating_sub(LENGTH_OFFSET).clamp(0, LENGTH_MAX)
}

#[cfg(test)]
#[path = "tests/scoring_tests.rs"]
mod tests;
