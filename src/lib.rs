//! Fuzzy name matching for pinball tables, backglasses and media files.
//!
//! The host hands over a catalog of known tables and a name to identify; the
//! matcher answers with the best entry, a score and whether it clears the
//! configured threshold. No I/O happens here.

pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::matcher::{
    rank, Catalog, CatalogEntry, CatalogRecord, Comparison, MatchConfig, MatchDecision,
    NameMatcher, NameRecord, NameStrategy, RecordField, ScoreBreakdown, SecondChanceStep,
    StrategyHit,
};
pub use types::errors::{MatcherError, MatcherResult};
