use serde::{Deserialize, Serialize};
use crate::core::criteria::CriterionDef;
use crate::models::domain::MatchResult;

/// Response for the score matches endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreMatchesResponse {
    pub request_id: uuid::Uuid,
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
    pub excluded_count: usize,
    /// Target fields of the criteria that constrained this pass
    pub active_criteria: Vec<&'static str>,
    pub scored_at: chrono::DateTime<chrono::Utc>,
}

/// Criterion table listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaResponse {
    pub criteria: &'static [CriterionDef],
    pub total_weight: u32,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
