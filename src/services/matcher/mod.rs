//! Fuzzy name matcher for pinball tables and their media.
//!
//! A raw file or feed name is normalized and parsed into a [`NameRecord`],
//! scored against both name records of every catalog entry, ranked, and
//! escalated through second-chance rules when nothing clears the threshold.
// Module structure
pub mod analysis;
pub mod core;
pub mod models;
pub mod pipeline;
pub mod state;

// Public types used by hosts
pub use models::config::MatchConfig;
pub use models::types::{
    CatalogRecord, Comparison, MatchDecision, NameRecord, NameStrategy, RecordField,
    ScoreBreakdown, SecondChanceStep, StrategyHit,
};
pub use pipeline::ranker::rank;
pub use state::catalog::{Catalog, CatalogEntry};

use std::path::Path;

use rayon::prelude::*;

use crate::types::errors::MatcherResult;
use self::core::name_parser::NameParser;

/// Compiled matcher: validated config plus the parser built from it.
///
/// Immutable after construction; share it across threads freely.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    config: MatchConfig,
    parser: NameParser,
}

impl NameMatcher {
    pub fn new(config: MatchConfig) -> MatcherResult<Self> {
        config.validate()?;
        let parser = NameParser::new(&config)?;
        log::debug!(
            "NameMatcher ready | min_match_score={} warning_score={:.1} stopwords={}",
            config.min_match_score,
            config.min_match_warning_score(),
            config.stopwords.len()
        );
        Ok(Self { config, parser })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Parse a feed or catalog name.
    pub fn parse_name(&self, raw: &str) -> NameRecord {
        self.parser.parse_name(raw)
    }

    /// Parse a file name; the directory and extension are ignored.
    pub fn parse_path(&self, path: impl AsRef<Path>) -> NameRecord {
        self.parser.parse_path(path)
    }

    pub fn build_catalog(&self, records: Vec<CatalogRecord>) -> Catalog {
        Catalog::new(records, &self.parser)
    }

    pub fn match_record(&self, catalog: &Catalog, source: &NameRecord) -> MatchDecision {
        pipeline::ranker::select(catalog, source, self.config.min_match_score)
    }

    pub fn match_name(&self, catalog: &Catalog, raw: &str) -> MatchDecision {
        self.match_record(catalog, &self.parse_name(raw))
    }

    pub fn match_path(&self, catalog: &Catalog, path: impl AsRef<Path>) -> MatchDecision {
        self.match_record(catalog, &self.parse_path(path))
    }

    /// Match many source names at once. Output order follows `names`.
    pub fn match_many(&self, catalog: &Catalog, names: &[String]) -> Vec<MatchDecision> {
        let decisions: Vec<MatchDecision> = names
            .par_iter()
            .map(|name| self.match_name(catalog, name))
            .collect();
        log::debug!(
            "Matched {} names against {} entries ({} hits)",
            decisions.len(),
            catalog.len(),
            decisions.iter().filter(|d| d.is_match).count()
        );
        decisions
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new(MatchConfig::default()).expect("default matcher config is valid")
    }
}

#[cfg(test)]
#[path = "tests/name_matcher_tests.rs"]
mod tests;
