//! Report building: grouping, percentages, extremes, position histogram.

use std::collections::BTreeMap;

use serde::Serialize;

use quizbank_catalog::ProfiledQuestion;

/// Exemplar texts are truncated to this many characters for display.
const EXEMPLAR_MAX: usize = 80;

/// Number of sample hints carried in the hint-coverage section.
const HINT_SAMPLES: usize = 3;

/// Metadata about one input (a file, typically) feeding the report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputMeta {
    pub label: String,
    pub byte_len: u64,
    pub question_count: usize,
    /// Envelope generation timestamp; only game-data inputs carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_questions: usize,
    pub total_bytes: u64,
    pub input_count: usize,
    /// Per-input breakdown; omitted when no input metadata was supplied
    /// (e.g., reporting straight from the database).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<InputMeta>>,
    /// Most recent generation timestamp across game-data inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_generated: Option<i64>,
}

/// One group in a count/percentage breakdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountEntry {
    pub name: String,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintCoverage {
    pub with_hint: usize,
    pub without_hint: usize,
    /// Up to three hint texts, first encountered in input order.
    pub samples: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionLength {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub shortest: String,
    pub longest: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerStats {
    pub avg_choices: f64,
    /// Histogram of "the correct answer lives at position N" (1-indexed).
    /// String keys in lexicographic order for stable rendering.
    pub positions: BTreeMap<String, usize>,
}

/// The full statistical report over a question collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub summary: Summary,
    pub categories: Vec<CountEntry>,
    pub sources: Vec<CountEntry>,
    /// Only present when at least one question carries a difficulty.
    pub difficulty: Option<Vec<CountEntry>>,
    pub hints: HintCoverage,
    pub question_length: QuestionLength,
    pub answer_stats: AnswerStats,
}

/// Aggregate a question collection into a report. Pure; an empty collection
/// yields zeroed counts rather than failing.
pub fn build_report(questions: &[ProfiledQuestion], inputs: &[InputMeta]) -> Report {
    let total = questions.len();

    let summary = Summary {
        total_questions: total,
        total_bytes: inputs.iter().map(|i| i.byte_len).sum(),
        input_count: inputs.len(),
        inputs: if inputs.is_empty() {
            None
        } else {
            Some(inputs.to_vec())
        },
        latest_generated: inputs.iter().filter_map(|i| i.generated).max(),
    };

    Report {
        summary,
        categories: breakdown(questions, total, |q| q.category.clone()),
        sources: breakdown(questions, total, |q| {
            if q.source.is_empty() {
                "unknown".to_string()
            } else {
                q.source.clone()
            }
        }),
        difficulty: difficulty_breakdown(questions),
        hints: hint_coverage(questions),
        question_length: question_length(questions),
        answer_stats: answer_stats(questions),
    }
}

/// Group by a key, count, percentage of `total`, ordered count descending
/// with a name tie-break.
fn breakdown(
    questions: &[ProfiledQuestion],
    total: usize,
    key: impl Fn(&ProfiledQuestion) -> String,
) -> Vec<CountEntry> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for q in questions {
        *counts.entry(key(q)).or_default() += 1;
    }

    let mut entries: Vec<CountEntry> = counts
        .into_iter()
        .map(|(name, count)| CountEntry {
            name,
            count,
            percent: percent_of(count, total),
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    entries
}

/// Difficulty breakdown over the subset that has a difficulty at all.
///
/// Percentages are of that subset, not of the whole collection. Order is
/// easy → medium → hard, then any other label alphabetically.
fn difficulty_breakdown(questions: &[ProfiledQuestion]) -> Option<Vec<CountEntry>> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for q in questions {
        if let Some(d) = &q.difficulty {
            let label = d.trim().to_lowercase();
            if !label.is_empty() {
                *counts.entry(label).or_default() += 1;
            }
        }
    }
    if counts.is_empty() {
        return None;
    }

    let subset: usize = counts.values().sum();
    let mut entries: Vec<CountEntry> = counts
        .into_iter()
        .map(|(name, count)| CountEntry {
            name,
            count,
            percent: percent_of(count, subset),
        })
        .collect();
    entries.sort_by_key(|e| difficulty_rank(&e.name));
    Some(entries)
}

fn difficulty_rank(label: &str) -> (u8, String) {
    match label {
        "easy" => (0, String::new()),
        "medium" => (1, String::new()),
        "hard" => (2, String::new()),
        other => (3, other.to_string()),
    }
}

fn hint_coverage(questions: &[ProfiledQuestion]) -> HintCoverage {
    let mut with_hint = 0;
    let mut samples = Vec::new();
    for q in questions {
        if let Some(h) = &q.hint {
            if !h.is_empty() {
                with_hint += 1;
                if samples.len() < HINT_SAMPLES {
                    samples.push(h.clone());
                }
            }
        }
    }
    HintCoverage {
        with_hint,
        without_hint: questions.len() - with_hint,
        samples,
    }
}

fn question_length(questions: &[ProfiledQuestion]) -> QuestionLength {
    let mut shortest: Option<&ProfiledQuestion> = None;
    let mut longest: Option<&ProfiledQuestion> = None;
    let mut total_chars = 0usize;

    for q in questions {
        let len = q.text.chars().count();
        total_chars += len;
        if shortest.is_none_or(|s| len < s.text.chars().count()) {
            shortest = Some(q);
        }
        if longest.is_none_or(|l| len > l.text.chars().count()) {
            longest = Some(q);
        }
    }

    QuestionLength {
        min: shortest.map_or(0, |q| q.text.chars().count()),
        max: longest.map_or(0, |q| q.text.chars().count()),
        mean: if questions.is_empty() {
            0.0
        } else {
            total_chars as f64 / questions.len() as f64
        },
        shortest: shortest.map_or(String::new(), |q| truncate_chars(&q.text, EXEMPLAR_MAX)),
        longest: longest.map_or(String::new(), |q| truncate_chars(&q.text, EXEMPLAR_MAX)),
    }
}

fn answer_stats(questions: &[ProfiledQuestion]) -> AnswerStats {
    let mut positions: BTreeMap<String, usize> = BTreeMap::new();
    let mut total_choices = 0usize;
    for q in questions {
        total_choices += q.answers.len();
        *positions
            .entry((q.correct_index + 1).to_string())
            .or_default() += 1;
    }
    AnswerStats {
        avg_choices: if questions.is_empty() {
            0.0
        } else {
            total_choices as f64 / questions.len() as f64
        },
        positions,
    }
}

fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Truncate on a character boundary, appending "..." when shortened.
fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
