//! Splits a raw table name into name / manufacturer / year and normalizes
//! each part into a [`NameRecord`].
//!
//! `Medieval Madness (Williams 1997) v1.2.vpx` → name `medieval madness`,
//! manufacturer `williams`, year `1997`.

use regex::Regex;
use std::path::Path;

use crate::services::matcher::core::normalizer::Normalizer;
use crate::services::matcher::models::config::{prepare_word_list, MatchConfig};
use crate::services::matcher::models::types::NameRecord;
use crate::types::errors::MatcherResult;

/// Everything before the first `(` is the name; inside the first group a
/// leading non-digit run is the manufacturer, followed by a digit run.
const NAME_INFO_PATTERN: &str =
    r"(?s)^(?P<name>[^(]*)(?:\((?P<manufacturer>[^\d)]*)(?P<year>\d+)?.*)?$";

const YEAR_DIGITS: usize = 4;

/// Raw name components before normalization. Empty parts are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub year: Option<u16>,
}

/// Allow-lists that mark a table as original (not a real-world machine).
#[derive(Debug, Clone, Default)]
pub struct OriginalTables {
    manufacturers: Vec<String>,
    titles: Vec<String>,
}

impl OriginalTables {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            manufacturers: prepare_word_list(
                &config.original_manufacturers,
                "original_manufacturers",
            ),
            titles: prepare_word_list(&config.original_titles, "original_titles"),
        }
    }

    /// Manufacturer prefix match or exact title match, case-insensitive.
    pub fn is_original(&self, name: Option<&str>, manufacturer: Option<&str>) -> bool {
        let manufacturer_hit = manufacturer
            .map(|m| m.trim().to_lowercase())
            .is_some_and(|m| {
                !m.is_empty()
                    && self
                        .manufacturers
                        .iter()
                        .any(|prefix| m.starts_with(prefix.as_str()))
            });
        let title_hit = name
            .map(|n| n.trim().to_lowercase())
            .is_some_and(|n| self.titles.iter().any(|title| *title == n));
        manufacturer_hit || title_hit
    }
}

#[derive(Debug, Clone)]
pub struct NameParser {
    normalizer: Normalizer,
    originals: OriginalTables,
    re_name_info: Regex,
}

impl NameParser {
    pub fn new(config: &MatchConfig) -> MatcherResult<Self> {
        Ok(Self {
            normalizer: Normalizer::new(config)?,
            originals: OriginalTables::new(config),
            re_name_info: Regex::new(NAME_INFO_PATTERN)?,
        })
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn originals(&self) -> &OriginalTables {
        &self.originals
    }

    /// Split a raw name into its parts without normalizing them.
    pub fn split(&self, raw: &str) -> NameParts {
        let Some(caps) = self.re_name_info.captures(raw) else {
            return NameParts {
                name: non_empty(raw),
                ..Default::default()
            };
        };

        let name = caps.name("name").and_then(|m| non_empty(m.as_str()));
        let manufacturer = caps
            .name("manufacturer")
            .and_then(|m| non_empty(m.as_str()));
        let year = caps.name("year").and_then(|m| parse_year(m.as_str()));

        NameParts {
            name,
            manufacturer,
            year,
        }
    }

    /// Parse a name as it appears in a database or online feed.
    pub fn parse_name(&self, raw: &str) -> NameRecord {
        let parts = self.split(raw);
        self.build_record(&parts)
    }

    /// Parse a file path: the directory and extension are dropped first.
    pub fn parse_path(&self, path: impl AsRef<Path>) -> NameRecord {
        let stem = path
            .as_ref()
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        self.parse_name(&stem)
    }

    fn build_record(&self, parts: &NameParts) -> NameRecord {
        let raw_name = parts.name.as_deref().unwrap_or_default();
        let manufacturer = parts
            .manufacturer
            .as_deref()
            .map(|m| self.normalizer.normalize(m, false))
            .filter(|m| !m.is_empty());
        let manufacturer_no_whitespace = parts
            .manufacturer
            .as_deref()
            .map(|m| self.normalizer.normalize(m, true))
            .filter(|m| !m.is_empty());

        NameRecord {
            actual_name: raw_name.to_lowercase(),
            name: self.normalizer.normalize(raw_name, false),
            name_no_whitespace: self.normalizer.normalize(raw_name, true),
            manufacturer,
            manufacturer_no_whitespace,
            year: parts.year,
            is_original: self
                .originals
                .is_original(parts.name.as_deref(), parts.manufacturer.as_deref()),
        }
    }
}

/// Exactly four ASCII digits, surrounding whitespace ignored.
pub fn parse_year(raw: &str) -> Option<u16> {
    let digits = raw.trim();
    if digits.len() == YEAR_DIGITS && digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
#[path = "tests/name_parser_tests.rs"]
mod tests;
