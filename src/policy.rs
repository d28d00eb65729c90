//! Question progression and counting policies.
//!
//! The progression directive is advisory: it asks the engine to ramp
//! difficulty as the interview advances, but nothing checks that the
//! engine obeys. Callers should only rely on the directive being present
//! in every post-greeting prompt.

use serde::{Deserialize, Serialize};

/// Target difficulty for the next interview question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Difficulty band for the next question, given how many questions
    /// have been asked so far (the greeting counts as the first).
    pub fn for_asked(questions_asked: u32) -> Self {
        match questions_asked {
            0..=1 => Self::Easy,
            2..=3 => Self::Medium,
            4..=5 => Self::Hard,
            _ => Self::Expert,
        }
    }

    /// Lowercase name used in prompt text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build the task directive appended to every post-greeting prompt.
///
/// The directive tells the engine how to treat the candidate's last turn
/// (evaluate an answer, or just produce a question on request) and names
/// the target difficulty for whatever it asks next.
pub fn directive(questions_asked: u32) -> String {
    let difficulty = Difficulty::for_asked(questions_asked);
    format!(
        "Task: if the candidate's last turn is an answer, evaluate it in detail \
         and then ask one harder question. If it is a request for a question, \
         reply with only a new question. Target difficulty for the next \
         question: {difficulty}. Reply with the interviewer's words only, \
         with no role label prefix."
    )
}

/// When `questions_answered` is incremented for a post-greeting exchange.
///
/// The observable behavior to reproduce counts an exchange even when the
/// engine call fails and the candidate gets the apology line; whether that
/// was intentional is unknowable, so both readings are selectable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerCounting {
    /// Count every candidate attempt, engine failure included.
    #[default]
    Attempted,
    /// Count only exchanges where the engine produced a real reply.
    Successful,
}

impl AnswerCounting {
    /// Whether this exchange increments `questions_answered`.
    pub fn counts(&self, engine_succeeded: bool) -> bool {
        match self {
            Self::Attempted => true,
            Self::Successful => engine_succeeded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_bands_cover_all_counts() {
        assert_eq!(Difficulty::for_asked(0), Difficulty::Easy);
        assert_eq!(Difficulty::for_asked(1), Difficulty::Easy);
        assert_eq!(Difficulty::for_asked(2), Difficulty::Medium);
        assert_eq!(Difficulty::for_asked(3), Difficulty::Medium);
        assert_eq!(Difficulty::for_asked(4), Difficulty::Hard);
        assert_eq!(Difficulty::for_asked(5), Difficulty::Hard);
        assert_eq!(Difficulty::for_asked(6), Difficulty::Expert);
        assert_eq!(Difficulty::for_asked(1000), Difficulty::Expert);
    }

    #[test]
    fn directive_names_the_target_difficulty() {
        assert!(directive(1).contains("difficulty for the next question: easy"));
        assert!(directive(3).contains("difficulty for the next question: medium"));
        assert!(directive(5).contains("difficulty for the next question: hard"));
        assert!(directive(9).contains("difficulty for the next question: expert"));
    }

    #[test]
    fn directive_covers_both_turn_interpretations() {
        let text = directive(2);
        assert!(text.contains("evaluate it in detail"));
        assert!(text.contains("reply with only a new question"));
        assert!(text.contains("no role label prefix"));
    }

    #[test]
    fn attempted_counting_includes_failures() {
        assert!(AnswerCounting::Attempted.counts(true));
        assert!(AnswerCounting::Attempted.counts(false));
    }

    #[test]
    fn successful_counting_excludes_failures() {
        assert!(AnswerCounting::Successful.counts(true));
        assert!(!AnswerCounting::Successful.counts(false));
    }

    #[test]
    fn default_policy_is_attempted() {
        assert_eq!(AnswerCounting::default(), AnswerCounting::Attempted);
    }
}
