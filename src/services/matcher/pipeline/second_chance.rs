//! Second-chance escalation for sources whose best candidate missed the threshold.
//!
//! Each step looks for a needle taken from the source name in the raw catalog
//! names and descriptions. A step only fires when exactly two entries contain
//! it (usually a table and its remake or "continued" edition); the shorter of
//! the two gets the step bonus on top of its best ranked score.

use std::cmp::Ordering;

use crate::services::matcher::core::normalizer::truncate_chars;
use crate::services::matcher::models::types::{Comparison, NameRecord, SecondChanceStep};
use crate::services::matcher::state::catalog::Catalog;

/// Source names are cut to this many characters for the prefix steps.
pub const SECOND_CHANCE_PREFIX_LEN: usize = 11;

/// Steps in the order they are attempted.
pub const SECOND_CHANCE_STEPS: [SecondChanceStep; 4] = [
    SecondChanceStep::NormalizedName,
    SecondChanceStep::NormalizedPrefix,
    SecondChanceStep::ActualName,
    SecondChanceStep::ActualPrefix,
];

impl SecondChanceStep {
    pub fn bonus(self) -> i32 {
        match self {
            Self::NormalizedName | Self::ActualName => 85,
            Self::NormalizedPrefix | Self::ActualPrefix => 50,
        }
    }

    /// The substring searched for in the catalog.
    pub fn needle(self, source: &NameRecord) -> &str {
        match self {
            Self::NormalizedName => &source.name,
            Self::NormalizedPrefix => truncate_chars(&source.name, SECOND_CHANCE_PREFIX_LEN),
            Self::ActualName => &source.actual_name,
            Self::ActualPrefix => truncate_chars(&source.actual_name, SECOND_CHANCE_PREFIX_LEN),
        }
    }
}

/// An entry adopted by a second-chance step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rescue {
    pub entry_id: usize,
    pub score: i32,
    pub step: SecondChanceStep,
}

/// Run the steps in order. Every step that finds a unique pair adopts its
/// pick as the preferred entry; the walk stops at the first adoption that
/// reaches `min_match_score`. `None` when no step fired, in which case the
/// ranked leader stands. `ranked` must be the sorted output of the ranker.
pub fn escalate(
    catalog: &Catalog,
    ranked: &[Comparison],
    source: &NameRecord,
    min_match_score: i32,
) -> Option<Rescue> {
    let mut adopted = None;

    for step in SECOND_CHANCE_STEPS {
        let Some(entry_id) = unique_pair_pick(catalog, step.needle(source)) else {
            continue;
        };
        let Some(base) = best_score(ranked, entry_id) else {
            continue;
        };
        let score = base.saturating_add(step.bonus());
        adopted = Some(Rescue {
            entry_id,
            score,
            step,
        });

        if score >= min_match_score {
            log::debug!(
                "Second chance '{}' adopted entry {} for '{}' ({} + {})",
                step,
                entry_id,
                source.actual_name,
                base,
                step.bonus()
            );
            break;
        }
        log::trace!(
            "Second chance '{}' adopted entry {} for '{}' but still short: {} < {}",
            step,
            entry_id,
            source.actual_name,
            score,
            min_match_score
        );
    }

    adopted
}

/// The shorter of exactly two entries containing `needle`, else `None`.
fn unique_pair_pick(catalog: &Catalog, needle: &str) -> Option<usize> {
    let mut hits = catalog
        .entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.contains(needle))
        .map(|(entry_id, _)| entry_id);

    let first = hits.next()?;
    let second = hits.next()?;
    if hits.next().is_some() {
        return None;
    }

    match shorter_name_first(catalog, first, second) {
        Ordering::Greater => Some(second),
        _ => Some(first),
    }
}

/// Canonical name length ascending, catalog order on ties.
pub(crate) fn shorter_name_first(catalog: &Catalog, a: usize, b: usize) -> Ordering {
    let name_len = |entry_id: usize| catalog.get(entry_id).map(|e| e.name_len).unwrap_or(0);
    name_len(a).cmp(&name_len(b)).then(a.cmp(&b))
}

fn best_score(ranked: &[Comparison], entry_id: usize) -> Option<i32> {
    ranked
        .iter()
        .find(|comparison| comparison.entry_id == entry_id)
        .map(|comparison| comparison.score)
}

#[cfg(test)]
#[path = "tests/second_chance_tests.rs"]
mod tests;
