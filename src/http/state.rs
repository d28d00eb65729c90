//! Shared state for HTTP handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::session::InterviewSession;

/// State shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The interview session served by this process.
    pub session: Arc<InterviewSession>,
    /// Server start time, used for uptime reporting.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(session: Arc<InterviewSession>) -> Self {
        Self {
            session,
            start_time: Instant::now(),
        }
    }
}
