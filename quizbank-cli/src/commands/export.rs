use std::path::PathBuf;

use quizbank_catalog::{Difficulty, Taxonomy};
use quizbank_db::{QuestionFilter, list_questions};
use quizbank_formats::{to_gamedata, to_raw};

use super::{default_db_path, open_existing_db};
use crate::{CliError, FilterArgs};

/// Export stored questions to one of the two input shapes.
///
/// The serialized payload goes to stdout (or `--output`); an empty match is
/// a notice, not an error.
pub(crate) fn run_export(
    format: String,
    output: Option<PathBuf>,
    filters: FilterArgs,
    db_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let db_path = db_path.unwrap_or_else(default_db_path);
    let conn = open_existing_db(&db_path)?;
    let taxonomy = Taxonomy::default_set();

    let difficulty = match filters.difficulty.as_deref() {
        None => None,
        Some(label) => match Difficulty::parse(label) {
            Some(d) => Some(d),
            None => {
                return Err(CliError::other(format!(
                    "Unknown difficulty '{label}' (expected easy, medium, or hard)"
                )));
            }
        },
    };

    let filter = QuestionFilter {
        category: filters.category.as_deref(),
        difficulty,
        source: filters.source.as_deref(),
        limit: filters.limit,
    };
    let questions = list_questions(&conn, &taxonomy, &filter)
        .map_err(|e| CliError::database(format!("Failed to list questions: {e}")))?;

    if questions.is_empty() {
        log::info!("No questions matched the given filters; nothing to export.");
        return Ok(());
    }

    let payload = match format.to_lowercase().as_str() {
        "gamedata" => serde_json::to_string_pretty(&to_gamedata(&questions)),
        "raw" => serde_json::to_string_pretty(&to_raw(&questions)),
        other => {
            return Err(CliError::other(format!(
                "Unknown export format '{other}' (expected gamedata or raw)"
            )));
        }
    }
    .map_err(|e| CliError::other(format!("Failed to serialize export: {e}")))?;

    match output {
        Some(path) => {
            std::fs::write(&path, &payload)?;
            log::info!(
                "Exported {} question(s) to {}",
                questions.len(),
                path.display(),
            );
        }
        None => println!("{payload}"),
    }

    Ok(())
}
