use actix_web::{web, HttpResponse, Responder};
use std::collections::HashSet;
use validator::Validate;
use crate::core::{active_criteria, Matcher, CRITERIA, TOTAL_WEIGHT};
use crate::models::{CriteriaResponse, ErrorResponse, HealthResponse, ScoreMatchesRequest, ScoreMatchesResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/criteria", web::get().to(list_criteria))
        .route("/matches/score", web::post().to(score_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Criterion table endpoint
///
/// GET /api/v1/criteria
async fn list_criteria() -> impl Responder {
    HttpResponse::Ok().json(CriteriaResponse {
        criteria: &CRITERIA,
        total_weight: TOTAL_WEIGHT,
    })
}

/// Score matches endpoint
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "target": { "languages": ["TypeScript"], "min_experience": 5 },
///   "candidates": [{ "id": "string", "languages": ["TypeScript"], "years_experience": 7 }],
///   "excludeIds": ["string"],
///   "limit": 20
/// }
/// ```
async fn score_matches(
    state: web::Data<AppState>,
    req: web::Json<ScoreMatchesRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score_matches request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = uuid::Uuid::new_v4();
    let req = req.into_inner();

    let total_candidates = req.candidates.len();
    let exclude_ids: HashSet<String> = req.exclude_ids.into_iter().collect();
    let excluded_count = req
        .candidates
        .iter()
        .filter(|c| exclude_ids.contains(&c.id))
        .count();
    let active: Vec<&'static str> = active_criteria(&req.target)
        .iter()
        .map(|c| c.def.target_field)
        .collect();

    tracing::info!(
        "Scoring {} candidates ({} excluded) against {} active criteria [request {}]",
        total_candidates,
        excluded_count,
        active.len(),
        request_id
    );

    let matcher = state.matcher.clone();
    let limit = req.limit.map(usize::from);
    let target = req.target;
    let candidates = req.candidates;

    // Scoring is CPU-bound; keep it off the async workers
    let result = web::block(move || {
        matcher.score_and_rank(&target, candidates, &exclude_ids, limit)
    })
    .await;

    match result {
        Ok(Ok(matches)) => {
            tracing::info!(
                "Returning {} matches (from {} candidates) [request {}]",
                matches.len(),
                total_candidates,
                request_id
            );

            HttpResponse::Ok().json(ScoreMatchesResponse {
                request_id,
                matches,
                total_candidates,
                excluded_count,
                active_criteria: active,
                scored_at: chrono::Utc::now(),
            })
        }
        Ok(Err(e)) => {
            tracing::info!("Rejected scoring request {}: {}", request_id, e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid request".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
        Err(e) => {
            tracing::error!("Scoring task failed for request {}: {}", request_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Scoring failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
