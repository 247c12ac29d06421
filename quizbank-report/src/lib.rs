//! Aggregation of unified question records into distributional reports,
//! plus text and JSON renderers with per-section selection.
//!
//! `build_report` is a pure function of an in-memory question collection;
//! it works identically whether the questions came from input files or from
//! the database.

pub mod render;
pub mod report;

pub use render::{Section, render_json, render_text};
pub use report::{
    AnswerStats, CountEntry, HintCoverage, InputMeta, QuestionLength, Report, Summary,
    build_report,
};
