use std::path::PathBuf;

use quizbank_catalog::Taxonomy;
use quizbank_db::{QuestionFilter, list_questions};
use quizbank_formats::load_file;
use quizbank_report::{InputMeta, Section, build_report, render_json, render_text};

use super::{default_db_path, open_existing_db};
use crate::CliError;

/// Build and print a report, from the store or directly from input files.
///
/// Report data goes to stdout (logs go to stderr), so JSON output can be
/// piped cleanly.
pub(crate) fn run_report(
    files: Vec<PathBuf>,
    section: Option<String>,
    json: bool,
    db_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let section = section.as_deref().and_then(|name| {
        let parsed = Section::parse(name);
        if parsed.is_none() {
            log::warn!("Unknown section '{name}'; rendering the full report");
        }
        parsed
    });

    let (questions, inputs) = if files.is_empty() {
        let db_path = db_path.unwrap_or_else(default_db_path);
        let conn = open_existing_db(&db_path)?;
        let taxonomy = Taxonomy::default_set();
        let questions = list_questions(&conn, &taxonomy, &QuestionFilter::default())
            .map_err(|e| CliError::database(format!("Failed to list questions: {e}")))?;
        (questions, Vec::new())
    } else {
        let mut questions = Vec::new();
        let mut inputs = Vec::new();
        for path in &files {
            let set = load_file(path)?;
            inputs.push(InputMeta {
                label: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
                byte_len: set.byte_len as u64,
                question_count: set.questions.len(),
                generated: set.generated,
            });
            questions.extend(set.questions);
        }
        (questions, inputs)
    };

    let report = build_report(&questions, &inputs);
    if json {
        let rendered =
            render_json(&report, section).map_err(|e| CliError::other(e.to_string()))?;
        println!("{rendered}");
    } else {
        print!("{}", render_text(&report, section));
    }

    Ok(())
}
