use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatcherError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Pattern error: {0}")]
    Pattern(String),
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<regex::Error> for MatcherError {
    fn from(error: regex::Error) -> Self {
        MatcherError::Pattern(error.to_string())
    }
}

impl From<serde_json::Error> for MatcherError {
    fn from(error: serde_json::Error) -> Self {
        MatcherError::Json(error.to_string())
    }
}

impl Serialize for MatcherError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type MatcherResult<T> = Result<T, MatcherError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
