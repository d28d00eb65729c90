//! Interview session: transcript, counters, and the cached last report.
//!
//! One session runs one interview at a time. `respond` and `summarize`
//! never fail outward; every engine problem degrades to a canned turn or
//! the fallback report.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::engine::{EngineReply, EngineRequest, ReasoningEngine};
use crate::extractor::SummaryExtractor;
use crate::policy::{self, AnswerCounting};
use crate::prompts;
use crate::report::PerformanceReport;
use crate::transcript::Transcript;

/// Questions asked and answered in the current interview.
///
/// Reset to zero together with the transcript when a summary is finalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCounters {
    pub questions_asked: u32,
    pub questions_answered: u32,
}

#[derive(Debug, Default)]
struct SessionState {
    transcript: Transcript,
    counters: SessionCounters,
    last_report: Option<PerformanceReport>,
}

/// One interview session over a reasoning engine.
///
/// The session is an explicit value: construct as many as needed and share
/// each behind an `Arc`. Mutable state lives behind one async mutex;
/// `respond` holds it across the engine call so turns of a shared session
/// cannot interleave, while `summarize` releases it during extraction so a
/// slow summary never blocks the next interview from starting.
pub struct InterviewSession {
    candidate_id: String,
    engine: Arc<dyn ReasoningEngine>,
    extractor: SummaryExtractor,
    counting: AnswerCounting,
    state: Mutex<SessionState>,
}

impl InterviewSession {
    /// Create a session with a fresh candidate id.
    pub fn new(engine: Arc<dyn ReasoningEngine>) -> Self {
        Self {
            candidate_id: Uuid::new_v4().to_string(),
            extractor: SummaryExtractor::new(Arc::clone(&engine)),
            engine,
            counting: AnswerCounting::default(),
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Select how `questions_answered` treats failed engine calls.
    pub fn with_counting(mut self, counting: AnswerCounting) -> Self {
        self.counting = counting;
        self
    }

    /// The id attached to fallback reports for this session.
    pub fn candidate_id(&self) -> &str {
        &self.candidate_id
    }

    /// Current counters.
    pub async fn counters(&self) -> SessionCounters {
        self.state.lock().await.counters
    }

    /// Number of recorded turns.
    pub async fn transcript_len(&self) -> usize {
        self.state.lock().await.transcript.len()
    }

    /// The cached report from the last finalized summary, if any.
    pub async fn last_report(&self) -> Option<PerformanceReport> {
        self.state.lock().await.last_report.clone()
    }

    /// Advance the interview by one candidate message.
    ///
    /// A fresh session records the message and replies with the fixed
    /// greeting without consulting the engine. Afterwards each call brings
    /// a full exchange: candidate turn, engine reply (or the apology line
    /// on failure), both recorded, counters advanced.
    pub async fn respond(&self, message: impl Into<String>) -> String {
        let message = message.into();
        let mut state = self.state.lock().await;

        if state.transcript.is_empty() {
            state.transcript.append_candidate(&message);
            state.transcript.append_interviewer(prompts::GREETING);
            state.counters.questions_asked += 1;
            info!(candidate_id = %self.candidate_id, "Interview started");
            return prompts::GREETING.to_string();
        }

        state.transcript.append_candidate(&message);

        let prompt = format!(
            "{}\n\n{}",
            state.transcript.render(),
            policy::directive(state.counters.questions_asked)
        );
        debug!(
            candidate_id = %self.candidate_id,
            prompt_chars = prompt.len(),
            "Requesting interviewer turn"
        );
        let request = EngineRequest::new(prompt).with_system(prompts::system_prompt());

        // Lock is held across the call: turns of one session must not
        // interleave.
        let outcome = self
            .engine
            .generate(request)
            .await
            .and_then(EngineReply::into_text);

        let (reply, succeeded) = match outcome {
            Ok(text) => (text, true),
            Err(e) => {
                warn!(
                    candidate_id = %self.candidate_id,
                    provider = self.engine.provider(),
                    error = %e,
                    "Engine call failed, substituting apology turn"
                );
                (prompts::ENGINE_APOLOGY.to_string(), false)
            }
        };

        state.transcript.append_interviewer(&reply);
        state.counters.questions_asked += 1;
        if self.counting.counts(succeeded) {
            state.counters.questions_answered += 1;
        }

        reply
    }

    /// Finalize the interview and produce the performance report.
    ///
    /// With nothing recorded this returns the cached last report, or the
    /// degenerate sentinel report if no summary was ever produced. With a
    /// live transcript it snapshots transcript and counters, clears both
    /// before the slow engine call, then extracts and caches the report.
    pub async fn summarize(&self) -> PerformanceReport {
        let (snapshot, counters) = {
            let mut state = self.state.lock().await;

            if state.transcript.is_empty() {
                return match &state.last_report {
                    Some(report) => report.clone(),
                    None => PerformanceReport::sentinel(),
                };
            }

            let snapshot = state.transcript.snapshot();
            let counters = state.counters;
            state.transcript.clear();
            state.counters = SessionCounters::default();
            (snapshot, counters)
        };

        info!(
            candidate_id = %self.candidate_id,
            turns = snapshot.len(),
            questions_asked = counters.questions_asked,
            "Finalizing interview summary"
        );

        let report = self
            .extractor
            .extract(&self.candidate_id, &snapshot, counters)
            .await;

        let mut state = self.state.lock().await;
        state.last_report = Some(report.clone());
        report
    }
}
