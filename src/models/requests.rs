use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CandidateProfile, TargetCriteria};

/// Request to score a candidate pool against a target
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreMatchesRequest {
    pub target: TargetCriteria,
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
    #[serde(default)]
    #[serde(alias = "exclude_ids", rename = "excludeIds")]
    pub exclude_ids: Vec<String>,
    #[validate(range(min = 1, max = 1000))]
    #[serde(default)]
    pub limit: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: ScoreMatchesRequest =
            serde_json::from_str(r#"{"target": {"languages": ["Rust"]}}"#).unwrap();

        assert!(req.candidates.is_empty());
        assert!(req.exclude_ids.is_empty());
        assert_eq!(req.limit, None);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_zero_limit_fails_validation() {
        let req: ScoreMatchesRequest =
            serde_json::from_str(r#"{"target": {}, "limit": 0}"#).unwrap();

        assert!(req.validate().is_err());
    }
}
