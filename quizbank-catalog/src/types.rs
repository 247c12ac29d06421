//! Data model types for the trivia question store.

use serde::{Deserialize, Serialize};

/// Question difficulty, constrained to three values at the storage boundary.
///
/// Transient records carry difficulty as free text (input files may say
/// anything); this enum is what survives an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a free-text difficulty label, case-insensitively.
    ///
    /// Anything outside the three known values maps to `None` (stored as
    /// unset rather than rejected).
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Canonical lowercase form, as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// One answer option with its correctness flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    pub is_correct: bool,
}

/// The unified in-memory question record.
///
/// Both input shapes (game-data envelope and raw array) and the database
/// read path convert into this shape before aggregation, so the report
/// builder never sees a storage or wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfiledQuestion {
    pub text: String,
    /// Ordered answer texts; `correct_index` points into this list.
    pub answers: Vec<String>,
    pub correct_index: usize,
    pub category: String,
    /// Free-text difficulty label; normalized to [`Difficulty`] at insert.
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default = "default_source")]
    pub source: String,
}

impl ProfiledQuestion {
    /// Text of the correct answer, or "" when the answer list is empty.
    pub fn correct_text(&self) -> &str {
        self.answers
            .get(self.correct_index)
            .map(String::as_str)
            .unwrap_or("")
    }
}

pub(crate) fn default_source() -> String {
    "unknown".to_string()
}
