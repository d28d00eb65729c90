//! Reasoning engine abstraction.
//!
//! One seam to the hosted LLM with two invocation modes against the same
//! capability: free text for the interview dialogue, schema-constrained
//! structured output for the final report. Failures surface as `Result`
//! values; there are no retries at this seam. Recovery belongs to the
//! callers (apology turn in the session, fallback report in the extractor).

mod gemini;
mod scripted;

pub use gemini::GeminiEngine;
pub use scripted::{ScriptedEngine, ScriptedReply};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Error, Result};

/// One composed request to the reasoning engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineRequest {
    /// System instructions, sent out of band from the prompt
    pub system: Option<String>,
    /// The composed prompt (transcript plus task directive)
    pub prompt: String,
    /// When present, constrains the reply to this JSON schema
    pub response_schema: Option<Value>,
    /// Sampling temperature override
    pub temperature: Option<f64>,
}

impl EngineRequest {
    /// Create a free-text request.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            response_schema: None,
            temperature: None,
        }
    }

    /// Set the system instructions.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Constrain the reply to a JSON schema (structured mode).
    pub fn with_response_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// True when this request asks for structured output.
    pub fn wants_structured(&self) -> bool {
        self.response_schema.is_some()
    }
}

/// A normalized engine reply: exactly one of free text or structured JSON.
///
/// Adapters normalize into the right variant immediately after the call,
/// so no caller ever inspects a raw provider payload.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineReply {
    /// Free-text mode result
    Text(String),
    /// Schema-constrained mode result
    Structured(Value),
}

impl EngineReply {
    /// Variant name for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Structured(_) => "structured",
        }
    }

    /// Unwrap the free-text variant.
    pub fn into_text(self) -> Result<String> {
        match self {
            Self::Text(text) => Ok(text),
            other => Err(Error::UnexpectedReply {
                expected: "text",
                actual: other.kind(),
            }),
        }
    }

    /// Unwrap the structured variant.
    pub fn into_structured(self) -> Result<Value> {
        match self {
            Self::Structured(value) => Ok(value),
            other => Err(Error::UnexpectedReply {
                expected: "structured",
                actual: other.kind(),
            }),
        }
    }
}

/// The seam to the hosted reasoning engine.
#[async_trait]
pub trait ReasoningEngine: Send + Sync {
    /// Submit one request and return the normalized reply.
    ///
    /// Implementations make exactly one attempt; the only hardening is a
    /// bounded per-call timeout.
    async fn generate(&self, request: EngineRequest) -> Result<EngineReply>;

    /// Short provider name for logs and error messages.
    fn provider(&self) -> &'static str;
}

/// Extract JSON from a reply that may wrap it in markdown fences.
pub(crate) fn extract_json_block(response: &str) -> &str {
    // Try json code block
    if let Some(start) = response.find("```json") {
        let content_start = start + 7;
        if let Some(end) = response[content_start..].find("```") {
            return response[content_start..content_start + end].trim();
        }
    }

    // Try generic code block
    if let Some(start) = response.find("```") {
        let content_start = start + 3;
        let content_start = response[content_start..]
            .find('\n')
            .map(|i| content_start + i + 1)
            .unwrap_or(content_start);
        if let Some(end) = response[content_start..].find("```") {
            return response[content_start..content_start + end].trim();
        }
    }

    // Try raw JSON
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end > start {
                return &response[start..=end];
            }
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_builder_sets_all_fields() {
        let request = EngineRequest::new("transcript here")
            .with_system("you are an interviewer")
            .with_response_schema(json!({"type": "object"}))
            .with_temperature(0.0);

        assert_eq!(request.prompt, "transcript here");
        assert_eq!(request.system.as_deref(), Some("you are an interviewer"));
        assert!(request.wants_structured());
        assert_eq!(request.temperature, Some(0.0));
    }

    #[test]
    fn free_text_request_is_not_structured() {
        assert!(!EngineRequest::new("hello").wants_structured());
    }

    #[test]
    fn into_text_rejects_structured_reply() {
        let reply = EngineReply::Structured(json!({"overall_score": 70}));
        let err = reply.into_text().unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedReply {
                expected: "text",
                actual: "structured"
            }
        ));
    }

    #[test]
    fn into_structured_rejects_text_reply() {
        let reply = EngineReply::Text("just words".into());
        assert!(reply.into_structured().is_err());
    }

    #[test]
    fn extract_json_block_handles_json_fence() {
        let response = "Here you go:\n```json\n{\"a\": 1}\n```\nDone.";
        assert_eq!(extract_json_block(response), "{\"a\": 1}");
    }

    #[test]
    fn extract_json_block_handles_generic_fence() {
        let response = "```\n{\"b\": 2}\n```";
        assert_eq!(extract_json_block(response), "{\"b\": 2}");
    }

    #[test]
    fn extract_json_block_handles_raw_braces() {
        let response = "noise before {\"c\": 3} noise after";
        assert_eq!(extract_json_block(response), "{\"c\": 3}");
    }

    #[test]
    fn extract_json_block_passes_through_plain_text() {
        assert_eq!(extract_json_block("no json here"), "no json here");
    }
}
