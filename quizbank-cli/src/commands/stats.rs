use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use quizbank_db::store_stats;

use super::{default_db_path, open_existing_db};
use crate::CliError;

/// Print aggregate statistics about the question store.
pub(crate) fn run_stats(db_path: Option<PathBuf>) -> Result<(), CliError> {
    let db_path = db_path.unwrap_or_else(default_db_path);
    let conn = open_existing_db(&db_path)?;

    let stats = store_stats(&conn)
        .map_err(|e| CliError::database(format!("Failed to query store statistics: {e}")))?;

    log::info!(
        "{}",
        "Question Store Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    crate::log_blank();
    log::info!("  Questions:        {:>8}", stats.total_questions);
    log::info!("  Categories:       {:>8}", stats.total_categories);
    log::info!("  Sources:          {:>8}", stats.total_sources);
    crate::log_blank();
    log::info!("  Easy:             {:>8}", stats.easy);
    log::info!("  Medium:           {:>8}", stats.medium);
    log::info!("  Hard:             {:>8}", stats.hard);
    log::info!("  Unrated:          {:>8}", stats.unset_difficulty);
    crate::log_blank();
    log::info!("  With hints:       {:>8}", stats.with_hints);
    log::info!("  With explanations:{:>8}", stats.with_explanations);

    Ok(())
}
