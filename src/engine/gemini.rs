//! Google Gemini adapter for the reasoning engine seam.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::config::EngineConfig;
use crate::error::{Error, Result};

use super::{extract_json_block, EngineReply, EngineRequest, ReasoningEngine};

/// Reasoning engine backed by the Gemini REST API.
pub struct GeminiEngine {
    config: EngineConfig,
    http: Client,
}

impl GeminiEngine {
    const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";

    /// Create a client from configuration.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    fn base_url(&self) -> &str {
        self.config
            .base_url
            .as_deref()
            .unwrap_or(Self::DEFAULT_BASE_URL)
    }
}

/// Gemini's responseSchema is an OpenAPI-style subset; the draft-07
/// `$schema` marker is not a recognized field and the API rejects it.
fn sanitize_response_schema(mut schema: Value) -> Value {
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
    }
    schema
}

// Gemini API types
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: GeminiContent,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

#[async_trait]
impl ReasoningEngine for GeminiEngine {
    async fn generate(&self, request: EngineRequest) -> Result<EngineReply> {
        let structured = request.wants_structured();

        let contents = vec![GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiPart {
                text: request.prompt,
            }],
        }];

        // System instruction (Gemini's equivalent of a system prompt)
        let system_instruction = request.system.map(|s| GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiPart { text: s }],
        });

        let generation_config = Some(GeminiGenerationConfig {
            temperature: request.temperature.or(Some(self.config.temperature)),
            response_mime_type: structured.then(|| "application/json".to_string()),
            response_schema: request.response_schema.map(sanitize_response_schema),
        });

        let api_request = GeminiRequest {
            contents,
            system_instruction,
            generation_config,
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url(),
            self.config.model,
            self.config.api_key
        );

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .json(&api_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::timeout(self.config.timeout_secs * 1000)
                } else {
                    Error::engine_api("gemini", format!("HTTP request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::engine_api("gemini", format!("failed to read response: {e}")))?;

        if !status.is_success() {
            if let Ok(error) = serde_json::from_str::<GeminiError>(&body) {
                return Err(Error::engine_api("gemini", error.error.message));
            }
            return Err(Error::engine_api("gemini", format!("{status}: {body}")));
        }

        let api_response: GeminiResponse = serde_json::from_str(&body)
            .map_err(|e| Error::engine_api("gemini", format!("failed to parse response: {e}")))?;

        let candidate = api_response
            .candidates
            .first()
            .ok_or_else(|| Error::engine_api("gemini", "no candidates in response"))?;

        let content = candidate
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("");

        tracing::debug!(
            chars = content.len(),
            finish_reason = ?candidate.finish_reason,
            structured,
            "Engine reply received"
        );

        if structured {
            let value: Value = serde_json::from_str(extract_json_block(&content))
                .map_err(|e| {
                    Error::engine_api("gemini", format!("structured reply is not valid JSON: {e}"))
                })?;
            Ok(EngineReply::Structured(value))
        } else {
            Ok(EngineReply::Text(content))
        }
    }

    fn provider(&self) -> &'static str {
        "gemini"
    }
}
