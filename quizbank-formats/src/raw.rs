//! The "raw" flat-array shape.

use serde::{Deserialize, Serialize};

use quizbank_catalog::ProfiledQuestion;

/// A question record in the raw shape (camelCase on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    pub text: String,
    pub choices: Vec<RawChoice>,
    pub correct_choice_index: i64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// One answer choice with an explicit correctness flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChoice {
    pub text: String,
    pub is_correct: bool,
}

impl RawQuestion {
    /// Convert to the unified record.
    ///
    /// The explicit index wins when in bounds; otherwise fall back to the
    /// first choice flagged correct, then to index 0.
    pub fn to_profiled(&self) -> ProfiledQuestion {
        let correct_index = if self.correct_choice_index >= 0
            && (self.correct_choice_index as usize) < self.choices.len()
        {
            self.correct_choice_index as usize
        } else {
            self.choices
                .iter()
                .position(|c| c.is_correct)
                .unwrap_or(0)
        };

        ProfiledQuestion {
            text: self.text.clone(),
            answers: self.choices.iter().map(|c| c.text.clone()).collect(),
            correct_index,
            category: self.category.clone(),
            difficulty: self.difficulty.clone().filter(|d| !d.is_empty()),
            explanation: self.explanation.clone(),
            hint: self.hint.clone(),
            source: self
                .source
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}
