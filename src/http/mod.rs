//! HTTP surface for the interview service.
//!
//! A thin axum layer over [`crate::session::InterviewSession`]: one POST
//! endpoint to talk to the interviewer, one GET endpoint to close out the
//! interview, plus health, landing page, and dataset download.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::{ApiError, ErrorBody};
pub use handlers::{AskRequest, AskResponse, HealthResponse};
pub use routes::{create_router, start_server};
pub use state::AppState;
