// HTTP route tests for ICP Match

use actix_web::{test, web, App};
use icp_match::core::Matcher;
use icp_match::routes::{self, matches::AppState};
use serde_json::{json, Value};

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState { matcher: Matcher::default() }))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_criteria_endpoint() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/criteria").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalWeight"], 100);
    let criteria = body["criteria"].as_array().unwrap();
    assert_eq!(criteria.len(), 16);
    assert_eq!(criteria[0]["field"], "languages");
    assert_eq!(criteria[0]["kind"], "set");
    assert_eq!(criteria[4]["candidateField"], "years_experience");
    assert_eq!(criteria[4]["kind"], "numeric-threshold");
}

#[actix_web::test]
async fn test_score_matches_endpoint() {
    let app = init_app!();

    let payload = json!({
        "target": { "languages": ["TypeScript"], "frameworks": ["React"] },
        "candidates": [
            { "id": "a", "name": "Ada", "languages": ["typescript"], "frameworks": "React" },
            { "id": "b", "languages": ["TypeScript"] },
            { "id": "c", "languages": ["Python"] },
            { "id": "d", "languages": ["TypeScript"], "frameworks": ["React"] }
        ],
        "excludeIds": ["d"],
        "limit": 10
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(&payload)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalCandidates"], 4);
    assert_eq!(body["excludedCount"], 1);
    assert_eq!(body["activeCriteria"], json!(["languages", "frameworks"]));

    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["candidate"]["id"], "a");
    assert_eq!(matches[0]["candidate"]["name"], "Ada");
    assert_eq!(matches[0]["score"], 100);
    assert_eq!(matches[0]["breakdown"][0]["label"], "Languages");
    assert_eq!(matches[1]["candidate"]["id"], "b");
    assert_eq!(matches[1]["score"], 65);
    assert_eq!(matches[1]["breakdown"][0]["earned"], 65.2);
}

#[actix_web::test]
async fn test_score_matches_rejects_zero_limit() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({ "target": { "languages": ["Rust"] }, "candidates": [], "limit": 0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status_code"], 400);
}

#[actix_web::test]
async fn test_score_matches_without_active_criteria() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({ "target": {}, "candidates": [{ "id": "a", "languages": ["Rust"] }] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["matches"], json!([]));
    assert_eq!(body["activeCriteria"], json!([]));
}
