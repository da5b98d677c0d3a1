use serde::{Deserialize, Serialize};

use crate::types::errors::{MatcherError, MatcherResult};

/// Content-author handles that show up in table file names.
const DEFAULT_AUTHORS: &[&str] = &[
    "jps",
    "jp's",
    "sg1bsoft",
    "apc",
    "tldr",
    "gorgatron",
    "vpw",
    "bord",
    "rothbauerw",
];

/// Filler words that carry no identity.
const DEFAULT_FILLER: &[&str] = &["a", "and", "n'", "'n", "the", "premium", "en"];

/// Release and format tags.
const DEFAULT_RELEASE_TAGS: &[&str] = &[
    "vpx", "mod", "vp10", "4k", "b2s", "4player", "2021", "2022", "2023", "2024",
];

const DEFAULT_TITLE_CASE_EXCEPTIONS: &[&str] = &["ac/dc", "mcdonald's", "spongebob", "macgyver"];

const DEFAULT_ORIGINAL_MANUFACTURERS: &[&str] =
    &["original", "homebrew", "zen studios", "professional pinball"];

const DEFAULT_ORIGINAL_TITLES: &[&str] = &["original"];

/// Tunables for the name matcher.
///
/// Every field is optional when deserializing; missing keys take the
/// defaults below.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum total score for a comparison to count as a match.
    pub min_match_score: i32,
    /// Scores below `min_match_score * multiplier` are flagged as low confidence.
    pub min_match_warning_multiplier: f64,
    /// Whole words stripped during normalization, tried in list order.
    pub stopwords: Vec<String>,
    /// Words that are never split on camel-case boundaries.
    pub title_case_exceptions: Vec<String>,
    /// Manufacturer prefixes that identify original (homebrew) tables.
    pub original_manufacturers: Vec<String>,
    /// Exact table names that identify original tables.
    pub original_titles: Vec<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_match_score: 100,
            min_match_warning_multiplier: 1.2,
            stopwords: DEFAULT_AUTHORS
                .iter()
                .chain(DEFAULT_FILLER)
                .chain(DEFAULT_RELEASE_TAGS)
                .map(|word| word.to_string())
                .collect(),
            title_case_exceptions: to_owned_list(DEFAULT_TITLE_CASE_EXCEPTIONS),
            original_manufacturers: to_owned_list(DEFAULT_ORIGINAL_MANUFACTURERS),
            original_titles: to_owned_list(DEFAULT_ORIGINAL_TITLES),
        }
    }
}

impl MatchConfig {
    /// Parse a JSON object into a validated config.
    pub fn from_json(json: &str) -> MatcherResult<Self> {
        let config: MatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MatcherResult<()> {
        if self.min_match_score <= 0 {
            return Err(MatcherError::InvalidConfig(format!(
                "min_match_score must be positive, got {}",
                self.min_match_score
            )));
        }
        if !self.min_match_warning_multiplier.is_finite() || self.min_match_warning_multiplier < 1.0
        {
            return Err(MatcherError::InvalidConfig(format!(
                "min_match_warning_multiplier must be >= 1.0, got {}",
                self.min_match_warning_multiplier
            )));
        }
        Ok(())
    }

    /// Scores below this are reported as "low" confidence.
    pub fn min_match_warning_score(&self) -> f64 {
        f64::from(self.min_match_score) * self.min_match_warning_multiplier
    }
}

fn to_owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

/// Lowercase and trim a configured word list, dropping blanks.
pub(crate) fn prepare_word_list(words: &[String], list_name: &str) -> Vec<String> {
    words
        .iter()
        .filter_map(|word| {
            let prepared = word.trim().to_lowercase();
            if prepared.is_empty() {
                log::warn!("Ignoring empty entry in {list_name}");
                None
            } else {
                Some(prepared)
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
