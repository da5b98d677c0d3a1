//! Domain types for the name matcher.
//!
//! Contains: NameRecord, NameStrategy, StrategyHit, ScoreBreakdown, RecordField,
//! Comparison, SecondChanceStep, MatchDecision, CatalogRecord.

use serde::{Deserialize, Serialize};

// ==================== NAME RECORD ====================

/// Canonical forms derived from one raw name.
///
/// Normalized fields are lowercase and trimmed. The `*_no_whitespace`
/// variants contain no spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// Raw name capture, lowercased. Used for literal containment checks.
    pub actual_name: String,
    pub name: String,
    pub name_no_whitespace: String,
    pub manufacturer: Option<String>,
    pub manufacturer_no_whitespace: Option<String>,
    /// Four digit year from the parenthesized suffix.
    pub year: Option<u16>,
    /// Homebrew/original table, see `MatchConfig::original_manufacturers`.
    pub is_original: bool,
}

// ==================== SCORING ====================

/// Name comparison strategy, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "length")]
pub enum NameStrategy {
    Exact,
    EditDistance,
    /// Mutual prefix at the given truncation length.
    Prefix(usize),
    /// Mutual containment at the given truncation length.
    Contains(usize),
    /// Shared leading and trailing characters.
    PrefixSuffix,
}

impl std::fmt::Display for NameStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameStrategy::Exact => write!(f, "Exact"),
            NameStrategy::EditDistance => write!(f, "EditDistance"),
            NameStrategy::Prefix(len) => write!(f, "Prefix({len})"),
            NameStrategy::Contains(len) => write!(f, "Contains({len})"),
            NameStrategy::PrefixSuffix => write!(f, "PrefixSuffix"),
        }
    }
}

/// The first strategy that matched, with the points it awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyHit {
    pub strategy: NameStrategy,
    pub score: i32,
    /// True when the whitespace-preserving forms matched (bonus applied).
    pub precise: bool,
}

/// Per-component scores of one comparison. `total()` is the comparison score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub name: i32,
    pub name_strategy: Option<StrategyHit>,
    pub manufacturer: i32,
    pub year: i32,
    pub length: i32,
    /// Bonus from the adopted second-chance step, zero otherwise.
    #[serde(default)]
    pub second_chance: i32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i32 {
        self.name + self.manufacturer + self.year + self.length + self.second_chance
    }
}

// ==================== RANKING ====================

/// Which of a catalog entry's two name records was compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordField {
    Table,
    Description,
}

/// One source-vs-record comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub entry_id: usize,
    pub field: RecordField,
    pub success: bool,
    pub score: i32,
    pub breakdown: ScoreBreakdown,
}

/// Fallback rules tried when the best comparison misses the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecondChanceStep {
    /// Full normalized name, +85.
    NormalizedName,
    /// Normalized name truncated to 11 characters, +50.
    NormalizedPrefix,
    /// Full raw name, +85.
    ActualName,
    /// Raw name truncated to 11 characters, +50.
    ActualPrefix,
}

impl std::fmt::Display for SecondChanceStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecondChanceStep::NormalizedName => write!(f, "NormalizedName"),
            SecondChanceStep::NormalizedPrefix => write!(f, "NormalizedPrefix"),
            SecondChanceStep::ActualName => write!(f, "ActualName"),
            SecondChanceStep::ActualPrefix => write!(f, "ActualPrefix"),
        }
    }
}

/// Final decision for one source name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDecision {
    /// Index of the preferred catalog entry.
    pub entry_id: Option<usize>,
    /// Canonical name of the preferred catalog entry.
    pub name: Option<String>,
    pub score: Option<i32>,
    pub is_match: bool,
    /// Either side is an original table. Not folded into `is_match`.
    pub is_original: bool,
    pub breakdown: Option<ScoreBreakdown>,
    pub second_chance: Option<SecondChanceStep>,
}

impl MatchDecision {
    pub fn no_match(source_is_original: bool) -> Self {
        Self {
            entry_id: None,
            name: None,
            score: None,
            is_match: false,
            is_original: source_is_original,
            breakdown: None,
            second_chance: None,
        }
    }
}

// ==================== CATALOG INPUT ====================

/// A raw catalog record as supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Canonical table/file name, e.g. "Cactus Canyon (Bally 1998)".
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Used when neither name carries a manufacturer in parentheses.
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// Used when neither name carries a year; must be four digits.
    #[serde(default)]
    pub year: Option<String>,
}

impl CatalogRecord {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            manufacturer: None,
            year: None,
        }
    }
}
