//! ICP Match - Ideal Customer Profile matching for the developer evaluation marketplace
//!
//! This library scores developer profiles against a project's target criteria.
//! Each criterion carries a static weight; only the criteria a target configures
//! take part in a scoring pass, and their weights are rescaled to sum to 100.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use self::core::{Matcher, score_and_rank, CRITERIA};
pub use error::MatchError;
pub use models::{TargetCriteria, CandidateProfile, FieldValue, MatchResult, BreakdownEntry, NumericProximity};
