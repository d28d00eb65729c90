//! Deterministic scripted engine for tests and offline runs.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{Error, Result};

use super::{EngineReply, EngineRequest, ReasoningEngine};

/// Reply returned when the script is exhausted in free-text mode.
pub const DEFAULT_REPLY: &str =
    "Good. Next question: using the sample data, how would you total January \
     sales with a single formula?";

/// One scripted outcome for a [`ScriptedEngine`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedReply {
    /// Return this free text.
    Text(String),
    /// Return this structured payload.
    Structured(Value),
    /// Fail the call with this message.
    Failure(String),
}

#[derive(Debug, Default)]
struct ScriptedState {
    script: VecDeque<ScriptedReply>,
    requests: Vec<EngineRequest>,
}

/// Reasoning engine that replays a fixed script.
///
/// Replies are consumed in order; every request is recorded so tests can
/// assert on the prompts the session composed. When the script runs dry,
/// free-text calls get [`DEFAULT_REPLY`] and structured calls fail, so an
/// unscripted summary exercises the fallback path.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    state: Mutex<ScriptedState>,
}

impl ScriptedEngine {
    /// Create an engine with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a free-text reply.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.push(ScriptedReply::Text(text.into()));
        self
    }

    /// Queue a structured reply.
    pub fn with_structured(self, value: Value) -> Self {
        self.push(ScriptedReply::Structured(value));
        self
    }

    /// Queue a failing call.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.push(ScriptedReply::Failure(message.into()));
        self
    }

    /// Append a reply to the script.
    pub fn push(&self, reply: ScriptedReply) {
        self.lock().script.push_back(reply);
    }

    /// All requests seen so far, in call order.
    pub fn requests(&self) -> Vec<EngineRequest> {
        self.lock().requests.clone()
    }

    /// Number of calls made.
    pub fn calls(&self) -> usize {
        self.lock().requests.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScriptedState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ReasoningEngine for ScriptedEngine {
    async fn generate(&self, request: EngineRequest) -> Result<EngineReply> {
        let structured = request.wants_structured();

        let mut state = self.lock();
        state.requests.push(request);

        match state.script.pop_front() {
            Some(ScriptedReply::Text(text)) => Ok(EngineReply::Text(text)),
            Some(ScriptedReply::Structured(value)) => Ok(EngineReply::Structured(value)),
            Some(ScriptedReply::Failure(message)) => Err(Error::Engine(message)),
            None if structured => Err(Error::Engine("script exhausted".to_string())),
            None => Ok(EngineReply::Text(DEFAULT_REPLY.to_string())),
        }
    }

    fn provider(&self) -> &'static str {
        "scripted"
    }
}
