//! HTTP handlers for the interview API.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::state::AppState;
use crate::prompts;
use crate::report::PerformanceReport;

/// Request body for `POST /ask`.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: Option<String>,
}

/// Response body for `POST /ask`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// `POST /ask`: submit a candidate message and get the interviewer's reply.
///
/// The first message of a session is answered with the fixed greeting; every
/// later message goes through the reasoning engine. Engine failures never
/// surface here, only malformed request bodies do.
pub async fn ask(
    State(state): State<AppState>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Json(request) =
        body.map_err(|err| ApiError::BadRequest(format!("invalid request body: {err}")))?;
    let question = request
        .question
        .ok_or_else(|| ApiError::BadRequest("missing 'question' field".to_string()))?;

    let response = state.session.respond(question).await;
    Ok(Json(AskResponse { response }))
}

/// `GET /summary`: close out the current interview and return its report.
///
/// Always returns a well-formed report. A failed or invalid engine reply is
/// replaced by the fallback report inside the session layer.
pub async fn summary(State(state): State<AppState>) -> Json<PerformanceReport> {
    Json(state.session.summarize().await)
}

/// `GET /health`: liveness probe with version and uptime.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// `GET /home`: landing page describing the service.
pub async fn home() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html>\
         <html>\
         <head><title>Excel Mock Interviewer</title></head>\
         <body>\
         <h1>Excel Mock Interviewer</h1>\
         <p>Conversational mock interview for Excel skills.</p>\
         <ul>\
         <li><code>POST /ask</code> with <code>{\"question\": \"...\"}</code> to talk to the interviewer</li>\
         <li><code>GET /summary</code> to end the interview and receive a performance report</li>\
         <li><code>GET /data</code> to download the sample workbook data (sales_data.csv)</li>\
         <li><code>GET /health</code> for liveness</li>\
         </ul>\
         </body>\
         </html>",
    )
}

/// `GET /data`: the sample sales dataset candidates load into Excel.
pub async fn data() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"sales_data.csv\"",
            ),
        ],
        prompts::SALES_DATA_CSV,
    )
}
