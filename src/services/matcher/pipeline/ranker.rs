//! Candidate ranking and match selection.
//!
//! Every catalog entry is scored twice (table name and description), the
//! comparisons are ordered, and the best one is taken. When it misses the
//! threshold the second-chance rules get a go.

use rayon::prelude::*;

use crate::services::matcher::analysis::scoring::score_pair;
use crate::services::matcher::models::types::{
    Comparison, MatchDecision, NameRecord, RecordField, ScoreBreakdown, SecondChanceStep,
};
use crate::services::matcher::pipeline::second_chance;
use crate::services::matcher::state::catalog::Catalog;

#[cfg(feature = "debug_matcher")]
use log::debug;

#[cfg(feature = "debug_matcher")]
const CALIBRATION_TOP_K: usize = 5;

/// Score `source` against both name records of every entry, best first.
pub fn rank(catalog: &Catalog, source: &NameRecord, min_match_score: i32) -> Vec<Comparison> {
    let per_entry: Vec<[Comparison; 2]> = catalog
        .entries
        .par_iter()
        .enumerate()
        .map(|(entry_id, entry)| {
            [RecordField::Table, RecordField::Description].map(|field| {
                let scored = score_pair(entry.name_record(field), source, min_match_score);
                Comparison {
                    entry_id,
                    field,
                    success: scored.success,
                    score: scored.score,
                    breakdown: scored.breakdown,
                }
            })
        })
        .collect();

    let mut comparisons: Vec<Comparison> = per_entry.into_iter().flatten().collect();
    sort_comparisons(catalog, &mut comparisons);
    comparisons
}

/// success desc → score desc → canonical name length desc → entry_id asc → field.
pub fn sort_comparisons(catalog: &Catalog, comparisons: &mut [Comparison]) {
    let name_len = |entry_id: usize| catalog.get(entry_id).map(|e| e.name_len).unwrap_or(0);
    comparisons.sort_by(|a, b| {
        b.success
            .cmp(&a.success)
            .then_with(|| b.score.cmp(&a.score))
            .then_with(|| name_len(b.entry_id).cmp(&name_len(a.entry_id)))
            .then_with(|| a.entry_id.cmp(&b.entry_id))
            .then_with(|| a.field.cmp(&b.field))
    });
}

/// Pick the best catalog entry for `source`.
pub fn select(catalog: &Catalog, source: &NameRecord, min_match_score: i32) -> MatchDecision {
    let ranked = rank(catalog, source, min_match_score);
    let Some(preferred) = ranked.first() else {
        log::debug!("No candidates for '{}'", source.actual_name);
        return MatchDecision::no_match(source.is_original);
    };

    #[cfg(feature = "debug_matcher")]
    log_ranking(catalog, source, &ranked);

    let (entry_id, score, step) = if preferred.score < min_match_score {
        match second_chance::escalate(catalog, &ranked, source, min_match_score) {
            Some(rescue) => (rescue.entry_id, rescue.score, Some(rescue.step)),
            None => (preferred.entry_id, preferred.score, None),
        }
    } else {
        (preferred.entry_id, preferred.score, None)
    };

    let entry = catalog.get(entry_id);
    let breakdown = ranked
        .iter()
        .find(|comparison| comparison.entry_id == entry_id)
        .map(|comparison| ScoreBreakdown {
            second_chance: step.map(SecondChanceStep::bonus).unwrap_or(0),
            ..comparison.breakdown
        });

    let decision = MatchDecision {
        entry_id: Some(entry_id),
        name: entry.map(|e| e.record.name.clone()),
        score: Some(score),
        is_match: score >= min_match_score,
        is_original: source.is_original || entry.is_some_and(|e| e.is_original),
        breakdown,
        second_chance: step,
    };

    log::debug!(
        "Selected '{}' for '{}' | score={} matched={} second_chance={:?}",
        decision.name.as_deref().unwrap_or_default(),
        source.actual_name,
        score,
        decision.is_match,
        step
    );

    decision
}

#[cfg(feature = "debug_matcher")]
fn log_ranking(catalog: &Catalog, source: &NameRecord, ranked: &[Comparison]) {
    for (position, comparison) in ranked.iter().take(CALIBRATION_TOP_K).enumerate() {
        let name = catalog
            .get(comparison.entry_id)
            .map(|e| e.record.name.as_str())
            .unwrap_or_default();
        debug!(
            "[MATCHER_CALIBRATION] rank: source='{}' #{} '{}' ({:?}) score={} name={} strategy={:?} manufacturer={} year={} length={}",
            source.actual_name,
            position,
            name,
            comparison.field,
            comparison.score,
            comparison.breakdown.name,
            comparison.breakdown.name_strategy.map(|hit| hit.strategy),
            comparison.breakdown.manufacturer,
            comparison.breakdown.year,
            comparison.breakdown.length
        );
    }
}

#[cfg(test)]
#[path = "tests/ranker_tests.rs"]
mod tests;
