//! Interview transcript: labeled turns, append-only until summarized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The person being interviewed
    Candidate,
    /// The reasoning engine playing interviewer
    Interviewer,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Speaker::Candidate => write!(f, "Candidate"),
            Speaker::Interviewer => write!(f, "Interviewer"),
        }
    }
}

/// One utterance in the interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Who spoke
    pub speaker: Speaker,
    /// What they said
    pub text: String,
    /// When the turn was recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Turn {
    /// Create a new turn.
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            timestamp: Some(Utc::now()),
        }
    }

    /// Create a candidate turn.
    pub fn candidate(text: impl Into<String>) -> Self {
        Self::new(Speaker::Candidate, text)
    }

    /// Create an interviewer turn.
    pub fn interviewer(text: impl Into<String>) -> Self {
        Self::new(Speaker::Interviewer, text)
    }

    /// The turn as a labeled line, e.g. `Candidate: =SUM(A1:A10)`.
    pub fn as_line(&self) -> String {
        format!("{}: {}", self.speaker, self.text)
    }
}

/// Ordered record of one interview session.
///
/// Turns are only ever appended; the sole removal is [`Transcript::clear`],
/// which the session invokes when a summary is produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one turn.
    pub fn append(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.turns.push(Turn::new(speaker, text));
    }

    /// Append a candidate turn.
    pub fn append_candidate(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::candidate(text));
    }

    /// Append an interviewer turn.
    pub fn append_interviewer(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::interviewer(text));
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns recorded.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True if no turns have been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render the transcript as the engine's conversational context:
    /// one `{speaker}: {text}` line per turn, oldest first, joined with `\n`.
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(Turn::as_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Cheap copy for summarization, taken before the transcript is cleared.
    pub fn snapshot(&self) -> Transcript {
        self.clone()
    }

    /// Drop all turns.
    pub fn clear(&mut self) {
        self.turns.clear();
    }
}
