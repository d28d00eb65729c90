//! Typed performance report returned by `summarize`.

use serde::{Deserialize, Serialize};

/// Per-topic scores, each in 0..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicBreakdown {
    pub formulas: u8,
    pub pivot_tables: u8,
    pub charts: u8,
    pub data_cleaning: u8,
}

/// Hiring recommendation, serialized with the exact contract strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Proceed")]
    Proceed,
    #[serde(rename = "Follow-up")]
    FollowUp,
    #[serde(rename = "Do not proceed")]
    DoNotProceed,
}

/// Structured summary of one interview.
///
/// The counters are optional so an engine payload that omits them can be
/// represented; the extractor always fills them before a report leaves the
/// library, so callers can rely on their presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub candidate_id: String,
    pub overall_score: u8,
    pub topic_breakdown: TopicBreakdown,
    pub key_themes: Vec<String>,
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendation: Recommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions_asked: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions_answered: Option<u32>,
}

impl PerformanceReport {
    /// Degenerate report returned when `summarize` is called on a session
    /// that has no transcript and no cached report.
    pub fn sentinel() -> Self {
        Self {
            candidate_id: "N".to_string(),
            overall_score: 0,
            topic_breakdown: TopicBreakdown {
                formulas: 0,
                pivot_tables: 0,
                charts: 0,
                data_cleaning: 0,
            },
            key_themes: Vec::new(),
            summary: "failed_message".to_string(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            recommendation: Recommendation::DoNotProceed,
            questions_asked: Some(0),
            questions_answered: Some(0),
        }
    }

    /// Deterministic substitute used when structured extraction fails.
    ///
    /// Scores are fixed conservative values; only the candidate id and the
    /// snapshot counters vary.
    pub fn fallback(candidate_id: impl Into<String>, asked: u32, answered: u32) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            overall_score: 60,
            topic_breakdown: TopicBreakdown {
                formulas: 5,
                pivot_tables: 2,
                charts: 2,
                data_cleaning: 3,
            },
            key_themes: vec![
                "Interview recorded".to_string(),
                "Automated evaluation unavailable".to_string(),
            ],
            summary: "The interview was recorded, but the automatic evaluation could \
                      not be completed. The scores shown are conservative defaults."
                .to_string(),
            strengths: vec!["Engaged with the interview questions".to_string()],
            weaknesses: vec!["Detailed evaluation unavailable for this session".to_string()],
            recommendation: Recommendation::FollowUp,
            questions_asked: Some(asked),
            questions_answered: Some(answered),
        }
    }
}
