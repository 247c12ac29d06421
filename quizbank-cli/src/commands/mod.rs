pub(crate) mod categories;
pub(crate) mod export;
pub(crate) mod import;
pub(crate) mod report;
pub(crate) mod stats;

use std::path::{Path, PathBuf};

use crate::CliError;

/// Default path for the question database.
pub(crate) fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quizbank")
        .join("quizbank.db")
}

/// Open an existing database for a read-side command.
///
/// A missing store is a user-visible failure (exit non-zero), distinct from
/// a successful empty-result run.
pub(crate) fn open_existing_db(db_path: &Path) -> Result<quizbank_db::Connection, CliError> {
    if !db_path.exists() {
        log::warn!("No question database found at {}", db_path.display());
        log::info!("Run 'quizbank import <files>' to create one.");
        return Err(CliError::database("database does not exist"));
    }
    quizbank_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open question database: {e}")))
}

/// Truncate a string to a maximum width, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{cut}...")
    } else {
        s.chars().take(max).collect()
    }
}
