//! Integration tests for the interview HTTP API.
//!
//! Drives the full router through `tower::ServiceExt::oneshot` with a
//! scripted engine, covering happy paths, the error contract, and the
//! interview lifecycle across requests. Each test is independent with its
//! own session state.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use excel_interviewer::http::{AskResponse, HealthResponse};
use excel_interviewer::prompts;
use excel_interviewer::{
    create_router, AppState, InterviewSession, PerformanceReport, ReasoningEngine, Recommendation,
    ScriptedEngine,
};

// =============================================================================
// Helpers
// =============================================================================

/// Create a fresh AppState over a session driven by the given script.
fn make_state(engine: ScriptedEngine) -> AppState {
    let engine = Arc::new(engine);
    let session = Arc::new(InterviewSession::new(engine as Arc<dyn ReasoningEngine>));
    AppState::new(session)
}

/// Create a fresh router from a scripted state.
fn make_app(engine: ScriptedEngine) -> axum::Router {
    create_router(make_state(engine))
}

/// Build a GET request.
fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

/// Build a POST request with a JSON body.
fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

/// Read full response body bytes.
async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}

/// POST a candidate message and return the interviewer's reply.
async fn ask(app: &axum::Router, message: &str) -> AskResponse {
    let body = json!({ "question": message }).to_string();
    let resp = app
        .clone()
        .oneshot(post_json("/ask", &body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

/// A structured payload the report schema accepts.
fn valid_summary_payload() -> Value {
    json!({
        "candidate_id": "c-1",
        "overall_score": 75,
        "topic_breakdown": {
            "formulas": 8, "pivot_tables": 6, "charts": 5, "data_cleaning": 7
        },
        "key_themes": ["formulas"],
        "summary": "Competent overall.",
        "strengths": ["formulas"],
        "weaknesses": ["charts"],
        "recommendation": "Proceed"
    })
}

// =============================================================================
// POST /ask
// =============================================================================

#[tokio::test]
async fn test_ask_first_message_returns_greeting() {
    let app = make_app(ScriptedEngine::new());

    let reply = ask(&app, "hi, ready when you are").await;
    assert_eq!(reply.response, prompts::GREETING);
}

#[tokio::test]
async fn test_ask_second_message_goes_through_engine() {
    let app = make_app(ScriptedEngine::new().with_text("Good. Now explain VLOOKUP."));

    ask(&app, "hi").await;
    let reply = ask(&app, "=SUMIF(H:H,\"Jan\",G:G)").await;
    assert_eq!(reply.response, "Good. Now explain VLOOKUP.");
}

#[tokio::test]
async fn test_ask_engine_failure_still_returns_200_apology() {
    let app = make_app(ScriptedEngine::new().with_failure("engine offline"));

    ask(&app, "hi").await;
    // Engine failures degrade to the apology turn, never to an HTTP error.
    let reply = ask(&app, "my answer").await;
    assert_eq!(reply.response, prompts::ENGINE_APOLOGY);
}

#[tokio::test]
async fn test_ask_missing_question_field_returns_500_error_body() {
    let app = make_app(ScriptedEngine::new());

    let resp = app.oneshot(post_json("/ask", "{}")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(json["error"].as_str().unwrap().contains("question"));
}

#[tokio::test]
async fn test_ask_malformed_json_returns_500_error_body() {
    let app = make_app(ScriptedEngine::new());

    let resp = app
        .oneshot(post_json("/ask", "this is not json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_ask_empty_question_is_accepted() {
    let app = make_app(ScriptedEngine::new());

    let reply = ask(&app, "").await;
    assert_eq!(reply.response, prompts::GREETING);
}

// =============================================================================
// GET /summary
// =============================================================================

#[tokio::test]
async fn test_summary_fresh_session_returns_sentinel() {
    let app = make_app(ScriptedEngine::new());

    let resp = app.oneshot(get("/summary")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let report: PerformanceReport = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(report.candidate_id, "N");
    assert_eq!(report.summary, "failed_message");
    assert_eq!(report.recommendation, Recommendation::DoNotProceed);
}

#[tokio::test]
async fn test_summary_after_exchanges_returns_engine_report() {
    let app = make_app(
        ScriptedEngine::new()
            .with_text("Good. Harder one next.")
            .with_structured(valid_summary_payload()),
    );

    ask(&app, "hi").await;
    ask(&app, "=SUM(C:C)").await;

    let resp = app.clone().oneshot(get("/summary")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let report: PerformanceReport = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(report.overall_score, 75);
    assert_eq!(report.questions_asked, Some(2));
    assert_eq!(report.questions_answered, Some(1));

    // A second summary without new turns replays the cached report.
    let resp = app.oneshot(get("/summary")).await.unwrap();
    let cached: PerformanceReport = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(cached, report);
}

#[tokio::test]
async fn test_summary_engine_failure_returns_fallback_report() {
    let app = make_app(
        ScriptedEngine::new()
            .with_text("Good. Harder one next.")
            .with_failure("engine offline"),
    );

    ask(&app, "hi").await;
    ask(&app, "=SUM(C:C)").await;

    let resp = app.oneshot(get("/summary")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let report: PerformanceReport = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(report.overall_score, 60);
    assert_eq!(report.recommendation, Recommendation::FollowUp);
    assert_eq!(report.questions_asked, Some(2));
    assert_eq!(report.questions_answered, Some(1));
}

#[tokio::test]
async fn test_summary_resets_the_interview() {
    let app = make_app(ScriptedEngine::new().with_structured(valid_summary_payload()));

    ask(&app, "hi").await;
    let resp = app.clone().oneshot(get("/summary")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // Next message starts a fresh interview with a fresh greeting.
    let reply = ask(&app, "hello again").await;
    assert_eq!(reply.response, prompts::GREETING);
}

// =============================================================================
// GET /health
// =============================================================================

#[tokio::test]
async fn test_health_happy_path() {
    let app = make_app(ScriptedEngine::new());

    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let health: HealthResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// GET /home
// =============================================================================

#[tokio::test]
async fn test_home_serves_landing_page() {
    let app = make_app(ScriptedEngine::new());

    let resp = app.oneshot(get("/home")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let html = String::from_utf8_lossy(&body_bytes(resp).await).to_string();
    assert!(html.contains("Excel Mock Interviewer"));
    assert!(html.contains("/ask"));
    assert!(html.contains("/summary"));
}

// =============================================================================
// GET /data
// =============================================================================

#[tokio::test]
async fn test_data_serves_sales_csv() {
    let app = make_app(ScriptedEngine::new());

    let resp = app.oneshot(get("/data")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv"
    );

    let csv = String::from_utf8_lossy(&body_bytes(resp).await).to_string();
    assert!(csv.starts_with("OrderDate,Region,Rep,Item"));
    assert_eq!(csv, prompts::SALES_DATA_CSV);
}

// =============================================================================
// Cross-cutting
// =============================================================================

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = make_app(ScriptedEngine::new());

    let resp = app.oneshot(get("/nonexistent")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let app = make_app(ScriptedEngine::new());

    let resp = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/ask")
                .header("origin", "http://127.0.0.1:5173")
                .header("access-control-request-method", "POST")
                .header("access-control-request-headers", "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_full_interview_lifecycle() {
    // Greeting, two scored exchanges, summary, then a fresh greeting.
    let app = make_app(
        ScriptedEngine::new()
            .with_text("Good. Question 2: how would you dedupe a column?")
            .with_text("Solid. Question 3: build a pivot over Region.")
            .with_structured(valid_summary_payload()),
    );

    assert_eq!(ask(&app, "hi").await.response, prompts::GREETING);
    ask(&app, "=SUMIF(B:B,\"East\",G:G)").await;
    ask(&app, "Remove Duplicates on the Data tab").await;

    let resp = app.clone().oneshot(get("/summary")).await.unwrap();
    let report: PerformanceReport = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(report.questions_asked, Some(3));
    assert_eq!(report.questions_answered, Some(2));

    assert_eq!(ask(&app, "round two?").await.response, prompts::GREETING);
}
