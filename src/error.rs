use thiserror::Error;

/// Errors surfaced by the matcher
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("Invalid limit: {0} (must be a positive integer)")]
    InvalidLimit(usize),

    #[error("Invalid criteria table: {0}")]
    InvalidCriteriaTable(String),
}
