//! Text and JSON rendering of a report, whole or one section at a time.

use std::fmt::Write as _;

use crate::report::{CountEntry, Report};

/// A selectable report section.
///
/// Selection is a closed enum rather than a string-keyed dispatch; an
/// unrecognized section name parses to `None`, which renderers treat as
/// "the full report".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Categories,
    Sources,
    Difficulty,
    Hints,
    QuestionLength,
    AnswerStats,
}

impl Section {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "summary" => Some(Self::Summary),
            "categories" => Some(Self::Categories),
            "sources" => Some(Self::Sources),
            "difficulty" => Some(Self::Difficulty),
            "hints" => Some(Self::Hints),
            "question-length" | "length" => Some(Self::QuestionLength),
            "answer-stats" | "answers" => Some(Self::AnswerStats),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Categories => "categories",
            Self::Sources => "sources",
            Self::Difficulty => "difficulty",
            Self::Hints => "hints",
            Self::QuestionLength => "question-length",
            Self::AnswerStats => "answer-stats",
        }
    }
}

/// Serialize the full report, or a single section's value.
pub fn render_json(report: &Report, section: Option<Section>) -> serde_json::Result<String> {
    match section {
        None => serde_json::to_string_pretty(report),
        Some(Section::Summary) => serde_json::to_string_pretty(&report.summary),
        Some(Section::Categories) => serde_json::to_string_pretty(&report.categories),
        Some(Section::Sources) => serde_json::to_string_pretty(&report.sources),
        Some(Section::Difficulty) => serde_json::to_string_pretty(&report.difficulty),
        Some(Section::Hints) => serde_json::to_string_pretty(&report.hints),
        Some(Section::QuestionLength) => serde_json::to_string_pretty(&report.question_length),
        Some(Section::AnswerStats) => serde_json::to_string_pretty(&report.answer_stats),
    }
}

/// Render fixed-width text tables for the full report or one section.
pub fn render_text(report: &Report, section: Option<Section>) -> String {
    let mut out = String::new();
    let sections: &[Section] = match section {
        Some(s) => &[s],
        None => &[
            Section::Summary,
            Section::Categories,
            Section::Sources,
            Section::Difficulty,
            Section::Hints,
            Section::QuestionLength,
            Section::AnswerStats,
        ],
    };

    for (i, s) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match s {
            Section::Summary => write_summary(&mut out, report),
            Section::Categories => write_breakdown(&mut out, "Categories", &report.categories),
            Section::Sources => write_breakdown(&mut out, "Sources", &report.sources),
            Section::Difficulty => write_difficulty(&mut out, report),
            Section::Hints => write_hints(&mut out, report),
            Section::QuestionLength => write_length(&mut out, report),
            Section::AnswerStats => write_answers(&mut out, report),
        }
    }
    out
}

fn write_summary(out: &mut String, report: &Report) {
    let s = &report.summary;
    let _ = writeln!(out, "Summary");
    let _ = writeln!(out, "  Questions: {:>8}", s.total_questions);
    let _ = writeln!(
        out,
        "  Inputs:    {:>8} ({})",
        s.input_count,
        format_bytes_approx(s.total_bytes),
    );
    if let Some(inputs) = &s.inputs {
        for input in inputs {
            let _ = writeln!(
                out,
                "    {:<32} {:>6} questions  {:>10}",
                input.label,
                input.question_count,
                format_bytes_approx(input.byte_len),
            );
        }
    }
    if let Some(generated) = s.latest_generated {
        let _ = writeln!(out, "  Latest generated: {generated}");
    }
}

fn write_breakdown(out: &mut String, title: &str, entries: &[CountEntry]) {
    let _ = writeln!(out, "{title}");
    if entries.is_empty() {
        let _ = writeln!(out, "  (none)");
        return;
    }
    for e in entries {
        let _ = writeln!(out, "  {:<32} {:>6}  {:>5.1}%", e.name, e.count, e.percent);
    }
}

fn write_difficulty(out: &mut String, report: &Report) {
    match &report.difficulty {
        Some(entries) => write_breakdown(out, "Difficulty", entries),
        None => {
            let _ = writeln!(out, "Difficulty");
            let _ = writeln!(
                out,
                "  No difficulty data (game-data inputs do not carry difficulty)",
            );
        }
    }
}

fn write_hints(out: &mut String, report: &Report) {
    let h = &report.hints;
    let _ = writeln!(out, "Hints");
    let _ = writeln!(out, "  With hint:    {:>6}", h.with_hint);
    let _ = writeln!(out, "  Without hint: {:>6}", h.without_hint);
    for sample in &h.samples {
        let _ = writeln!(out, "    e.g. {sample}");
    }
}

fn write_length(out: &mut String, report: &Report) {
    let l = &report.question_length;
    let _ = writeln!(out, "Question length");
    if report.summary.total_questions == 0 {
        let _ = writeln!(out, "  (no questions)");
        return;
    }
    let _ = writeln!(out, "  Min:  {:>6} chars  {}", l.min, l.shortest);
    let _ = writeln!(out, "  Max:  {:>6} chars  {}", l.max, l.longest);
    let _ = writeln!(out, "  Mean: {:>8.1} chars", l.mean);
}

fn write_answers(out: &mut String, report: &Report) {
    let a = &report.answer_stats;
    let _ = writeln!(out, "Answer positions");
    let _ = writeln!(out, "  Avg choices: {:>6.2}", a.avg_choices);
    for (position, count) in &a.positions {
        let _ = writeln!(out, "  Position {:<4} {:>6}", position, count);
    }
}

/// Format a byte count with fractional KB/MB (e.g., "1.5 KB", "2.3 MB").
fn format_bytes_approx(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}
