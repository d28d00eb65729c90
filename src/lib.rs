//! # excel-interviewer
//!
//! A conversational mock-interview service for Excel skills, driven by a
//! hosted reasoning engine behind a small HTTP API.
//!
//! ## Core Components
//!
//! - **Transcript**: Ordered candidate/interviewer turns with deterministic rendering
//! - **Session**: Interview lifecycle, question/answer counters, and failure apologies
//! - **Engine**: Provider-agnostic reasoning engine trait with a Gemini client
//! - **Extractor**: Structured performance reports with schema validation and fallback
//! - **Http**: axum API surface (`/ask`, `/summary`, `/health`, `/home`, `/data`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use excel_interviewer::{InterviewSession, ScriptedEngine};
//!
//! let engine = Arc::new(ScriptedEngine::new());
//! let session = InterviewSession::new(engine);
//!
//! // First message returns the fixed greeting and the first question.
//! let greeting = session.respond("Hello!").await;
//! println!("{}", greeting);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod http;
pub mod policy;
pub mod prompts;
pub mod report;
pub mod schema;
pub mod session;
pub mod transcript;

mod proptests;

// Re-exports for convenience
pub use config::EngineConfig;
pub use engine::{
    EngineReply, EngineRequest, GeminiEngine, ReasoningEngine, ScriptedEngine, ScriptedReply,
};
pub use error::{Error, Result};
pub use extractor::SummaryExtractor;
pub use http::{create_router, start_server, AppState};
pub use policy::{AnswerCounting, Difficulty};
pub use report::{PerformanceReport, Recommendation, TopicBreakdown};
pub use schema::{report_schema, validate_report, ValidationError};
pub use session::{InterviewSession, SessionCounters};
pub use transcript::{Speaker, Transcript, Turn};
