// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{TargetCriteria, CandidateProfile, FieldValue, SetValue, SingleValue, NumericValue, MatchResult, BreakdownEntry, NumericProximity};
pub use requests::ScoreMatchesRequest;
pub use responses::{ScoreMatchesResponse, CriteriaResponse, HealthResponse, ErrorResponse};
