//! Interview service binary - composition root.
//!
//! Ties the library together into a single executable:
//! 1. Read engine configuration from the environment
//! 2. Build the Gemini reasoning engine
//! 3. Create the shared interview session
//! 4. Start the axum REST API server

use std::sync::Arc;

use excel_interviewer::http::{start_server, AppState};
use excel_interviewer::{EngineConfig, GeminiEngine, InterviewSession};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting excel-interviewer v{}", env!("CARGO_PKG_VERSION"));

    // Engine configuration from the environment.
    let config = match EngineConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Engine configuration failed");
            tracing::error!("Set GEMINI_API_KEY to a Google AI Studio key");
            return Err(e.into());
        }
    };
    tracing::info!(
        model = %config.model,
        timeout_secs = config.timeout_secs,
        "Engine configured"
    );

    let engine = Arc::new(GeminiEngine::new(config)?);
    let session = Arc::new(InterviewSession::new(engine));
    tracing::info!(candidate_id = %session.candidate_id(), "Interview session ready");

    let state = AppState::new(session);

    let port = std::env::var("INTERVIEWER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);

    if let Err(e) = start_server(port, state).await {
        tracing::error!(error = %e, "Server exited with error, is another instance running?");
        tracing::error!("Try: INTERVIEWER_PORT={} cargo run", port + 1);
        return Err(e.into());
    }

    Ok(())
}
