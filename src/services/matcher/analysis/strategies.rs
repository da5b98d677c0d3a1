//! Ordered name-comparison strategies.
//!
//! Each strategy is tried first on the whitespace-preserving forms (earning a
//! precision bonus) and then on the whitespace-free forms. The first strategy
//! that matches decides the score; later strategies are skipped.

use crate::services::matcher::core::edit_distance::edit_distance;
use crate::services::matcher::core::normalizer::{last_chars, truncate_chars};
use crate::services::matcher::models::types::{NameStrategy, StrategyHit};

/// Bonus when the whitespace-preserving forms matched.
pub const PRECISION_BONUS: i32 = 5;

const EDIT_DISTANCE_MAX: usize = 2;
const EDIT_DISTANCE_MIN_LEN: usize = 14;
const PREFIX_SUFFIX_HEAD: usize = 7;
const PREFIX_SUFFIX_TAIL: usize = 8;

/// A name in both comparison forms.
#[derive(Debug, Clone, Copy)]
pub struct NameForms<'a> {
    pub full: &'a str,
    pub compact: &'a str,
}

impl<'a> NameForms<'a> {
    pub fn new(full: &'a str, compact: &'a str) -> Self {
        Self { full, compact }
    }

    fn is_empty(&self) -> bool {
        self.full.is_empty() || self.compact.is_empty()
    }
}

/// One entry of the strategy chain.
#[derive(Debug, Clone, Copy)]
pub struct Strategy {
    pub kind: NameStrategy,
    pub points: i32,
    check: fn(&str, &str) -> bool,
}

impl Strategy {
    /// Score this strategy alone, `None` if it does not apply.
    pub fn evaluate(&self, first: NameForms<'_>, second: NameForms<'_>) -> Option<StrategyHit> {
        if (self.check)(first.full, second.full) {
            return Some(StrategyHit {
                strategy: self.kind,
                score: self.points + PRECISION_BONUS,
                precise: true,
            });
        }
        if (self.check)(first.compact, second.compact) {
            return Some(StrategyHit {
                strategy: self.kind,
                score: self.points,
                precise: false,
            });
        }
        None
    }
}

/// The strategy chain in priority order.
pub const STRATEGIES: [Strategy; 8] = [
    Strategy {
        kind: NameStrategy::Exact,
        points: 150,
        check: is_exact_match,
    },
    Strategy {
        kind: NameStrategy::EditDistance,
        points: 120,
        check: is_edit_distance_match,
    },
    Strategy {
        kind: NameStrategy::Prefix(14),
        points: 100,
        check: |a, b| is_prefix_match(a, b, 14),
    },
    Strategy {
        kind: NameStrategy::Prefix(10),
        points: 60,
        check: |a, b| is_prefix_match(a, b, 10),
    },
    Strategy {
        kind: NameStrategy::Prefix(8),
        points: 50,
        check: |a, b| is_prefix_match(a, b, 8),
    },
    Strategy {
        kind: NameStrategy::Contains(17),
        points: 100,
        check: |a, b| is_contains_match(a, b, 17),
    },
    Strategy {
        kind: NameStrategy::Contains(13),
        points: 60,
        check: |a, b| is_contains_match(a, b, 13),
    },
    Strategy {
        kind: NameStrategy::PrefixSuffix,
        points: 60,
        check: is_prefix_suffix_match,
    },
];

/// Run the chain; the first hit wins. Empty names never match.
pub fn match_names(first: NameForms<'_>, second: NameForms<'_>) -> Option<StrategyHit> {
    if first.is_empty() || second.is_empty() {
        return None;
    }
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy.evaluate(first, second))
}

/// Same chain over optional fields (manufacturer); absent on either side is no match.
pub fn match_optional(
    first: (Option<&str>, Option<&str>),
    second: (Option<&str>, Option<&str>),
) -> Option<StrategyHit> {
    match (first, second) {
        ((Some(a_full), Some(a_compact)), (Some(b_full), Some(b_compact))) => match_names(
            NameForms::new(a_full, a_compact),
            NameForms::new(b_full, b_compact),
        ),
        _ => None,
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

pub fn is_exact_match(a: &str, b: &str) -> bool {
    a == b
}

pub fn is_edit_distance_match(a: &str, b: &str) -> bool {
    char_len(a) >= EDIT_DISTANCE_MIN_LEN
        && char_len(b) >= EDIT_DISTANCE_MIN_LEN
        && edit_distance(a, b) <= EDIT_DISTANCE_MAX
}

/// Either string starts with the other truncated to `len`; both must be at least `len` long.
pub fn is_prefix_match(a: &str, b: &str, len: usize) -> bool {
    char_len(a) >= len
        && char_len(b) >= len
        && (a.starts_with(truncate_chars(b, len)) || b.starts_with(truncate_chars(a, len)))
}

/// Either string contains the other truncated to `len`; both must be at least `len` long.
pub fn is_contains_match(a: &str, b: &str, len: usize) -> bool {
    char_len(a) >= len
        && char_len(b) >= len
        && (a.contains(truncate_chars(b, len)) || b.contains(truncate_chars(a, len)))
}

/// Both share their first 7 and last 8 characters.
pub fn is_prefix_suffix_match(a: &str, b: &str) -> bool {
    char_len(a) >= PREFIX_SUFFIX_TAIL
        && char_len(b) >= PREFIX_SUFFIX_TAIL
        && a.starts_with(truncate_chars(b, PREFIX_SUFFIX_HEAD))
        && b.starts_with(truncate_chars(a, PREFIX_SUFFIX_HEAD))
        && a.ends_with(last_chars(b, PREFIX_SUFFIX_TAIL))
        && b.ends_with(last_chars(a, PREFIX_SUFFIX_TAIL))
}

#[cfg(test)]
#[path = "tests/strategies_tests.rs"]
mod tests;
