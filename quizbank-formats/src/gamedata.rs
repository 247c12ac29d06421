//! The "game data" envelope shape.

use serde::{Deserialize, Serialize};

use quizbank_catalog::ProfiledQuestion;

/// Top-level game-data envelope: id, generation timestamp, challenge list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDataFile {
    pub id: String,
    /// Epoch timestamp recorded when the envelope was generated.
    pub generated: i64,
    pub challenges: Vec<Challenge>,
}

/// A single challenge entry inside a game-data envelope.
///
/// The correct answer is identified by text, not index: `correct` must equal
/// one of `answers` to resolve a position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pic: Option<String>,
    pub question: String,
    pub answers: Vec<String>,
    pub correct: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aisource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Challenge {
    /// Convert to the unified record.
    ///
    /// The correct position is located by finding the correct-answer text in
    /// the answer list; a miss defaults to index 0 (defined fallback, not an
    /// error). Difficulty is always unset — this shape cannot express it.
    pub fn to_profiled(&self) -> ProfiledQuestion {
        let correct_index = self
            .answers
            .iter()
            .position(|a| a == &self.correct)
            .unwrap_or(0);

        ProfiledQuestion {
            text: self.question.clone(),
            answers: self.answers.clone(),
            correct_index,
            category: self.topic.clone(),
            difficulty: None,
            explanation: self.explanation.clone(),
            hint: self.hint.clone(),
            source: self
                .aisource
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}
