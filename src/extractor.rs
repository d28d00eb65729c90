//! Summary extraction: structured engine call with a deterministic fallback.

use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::engine::{EngineRequest, ReasoningEngine};
use crate::error::{Error, Result};
use crate::prompts;
use crate::report::PerformanceReport;
use crate::schema::{report_schema, validate_report};
use crate::session::SessionCounters;
use crate::transcript::Transcript;

/// Turns a finished transcript into a [`PerformanceReport`].
///
/// The contract is total: whatever the engine does (errors, wrong reply
/// mode, payloads that flunk validation), the caller gets a schema-valid
/// report. Fidelity degrades to the fixed fallback during outages; the
/// session never sees an error from here.
pub struct SummaryExtractor {
    engine: Arc<dyn ReasoningEngine>,
}

impl SummaryExtractor {
    /// Create an extractor over the given engine.
    pub fn new(engine: Arc<dyn ReasoningEngine>) -> Self {
        Self { engine }
    }

    /// Produce the report for a transcript snapshot.
    ///
    /// `counters` are the snapshot-time session counters; they fill
    /// `questions_asked`/`questions_answered` when the engine omits them
    /// and are carried verbatim into the fallback report.
    pub async fn extract(
        &self,
        candidate_id: &str,
        snapshot: &Transcript,
        counters: SessionCounters,
    ) -> PerformanceReport {
        match self.structured_report(snapshot, counters).await {
            Ok(report) => {
                debug!(
                    candidate_id,
                    overall_score = report.overall_score,
                    "Structured summary extracted"
                );
                report
            }
            Err(e) => {
                warn!(
                    candidate_id,
                    error = %e,
                    "Structured summary failed, substituting fallback report"
                );
                PerformanceReport::fallback(
                    candidate_id,
                    counters.questions_asked,
                    counters.questions_answered,
                )
            }
        }
    }

    async fn structured_report(
        &self,
        snapshot: &Transcript,
        counters: SessionCounters,
    ) -> Result<PerformanceReport> {
        let request = EngineRequest::new(build_summary_prompt(snapshot))
            .with_system(prompts::system_prompt())
            .with_response_schema(report_schema());

        let reply = self.engine.generate(request).await?;
        let mut value = reply.into_structured()?;

        if let Err(violations) = validate_report(&value) {
            let joined = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(Error::report_validation(joined));
        }

        apply_counter_defaults(&mut value, counters);
        Ok(serde_json::from_value(value)?)
    }
}

/// Compose the structured-mode prompt from a transcript snapshot.
fn build_summary_prompt(snapshot: &Transcript) -> String {
    format!("{}\n\n{}", snapshot.render(), prompts::SUMMARY_TASK)
}

/// Fill missing counters from the snapshot without touching engine-provided
/// values.
fn apply_counter_defaults(value: &mut Value, counters: SessionCounters) {
    if let Some(obj) = value.as_object_mut() {
        obj.entry("questions_asked")
            .or_insert_with(|| json!(counters.questions_asked));
        obj.entry("questions_answered")
            .or_insert_with(|| json!(counters.questions_answered));
    }
}
