//! Re-serialization of unified records back to either input shape.

use chrono::Utc;

use quizbank_catalog::ProfiledQuestion;

use crate::gamedata::{Challenge, GameDataFile};
use crate::raw::{RawChoice, RawQuestion};

/// Build a fresh game-data envelope from unified records.
///
/// The envelope id and generation timestamp are synthesized at call time;
/// per-challenge ids are derived from the content fingerprint so repeated
/// exports of the same data agree.
pub fn to_gamedata(questions: &[ProfiledQuestion]) -> GameDataFile {
    let now = Utc::now();
    let challenges = questions
        .iter()
        .map(|q| Challenge {
            topic: q.category.clone(),
            pic: None,
            question: q.text.clone(),
            answers: q.answers.clone(),
            correct: q.correct_text().to_string(),
            explanation: q.explanation.clone(),
            hint: q.hint.clone(),
            aisource: Some(q.source.clone()),
            date: None,
            id: Some(quizbank_catalog::fingerprint(&q.text)[..12].to_string()),
        })
        .collect();

    GameDataFile {
        id: format!("export-{}", now.format("%Y%m%d%H%M%S")),
        generated: now.timestamp(),
        challenges,
    }
}

/// Rebuild raw records, deriving correctness flags from the stored index.
pub fn to_raw(questions: &[ProfiledQuestion]) -> Vec<RawQuestion> {
    questions
        .iter()
        .map(|q| RawQuestion {
            text: q.text.clone(),
            choices: q
                .answers
                .iter()
                .enumerate()
                .map(|(i, text)| RawChoice {
                    text: text.clone(),
                    is_correct: i == q.correct_index,
                })
                .collect(),
            correct_choice_index: q.correct_index as i64,
            category: q.category.clone(),
            difficulty: q.difficulty.clone(),
            explanation: q.explanation.clone(),
            hint: q.hint.clone(),
            source: Some(q.source.clone()),
        })
        .collect()
}
