use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use quizbank_db::{list_aliases, list_categories};

use super::{default_db_path, open_existing_db, truncate_str};
use crate::CliError;

/// List categories with question counts, or the alias table.
pub(crate) fn run_categories(aliases: bool, db_path: Option<PathBuf>) -> Result<(), CliError> {
    let db_path = db_path.unwrap_or_else(default_db_path);
    let conn = open_existing_db(&db_path)?;

    if aliases {
        let rows = list_aliases(&conn)
            .map_err(|e| CliError::database(format!("Failed to list aliases: {e}")))?;
        if rows.is_empty() {
            log::info!("No aliases registered.");
            return Ok(());
        }
        log::info!(
            "{}",
            "Registered Aliases".if_supports_color(Stdout, |t| t.bold()),
        );
        crate::log_blank();
        for row in rows {
            log::info!("  {:<24} {}", row.alias, row.category_name);
        }
        return Ok(());
    }

    let rows = list_categories(&conn)
        .map_err(|e| CliError::database(format!("Failed to list categories: {e}")))?;
    if rows.is_empty() {
        log::info!("No categories in the store.");
        return Ok(());
    }

    log::info!("{}", "Categories".if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();
    log::info!("  {:<32} {:>9}", "Name", "Questions");
    log::info!("  {:<32} {:>9}", "-".repeat(32), "-".repeat(9));
    let mut total = 0;
    for row in rows {
        total += row.question_count;
        log::info!(
            "  {} {:<29} {:>9}",
            row.icon,
            truncate_str(&row.name, 29),
            row.question_count,
        );
    }
    crate::log_blank();
    log::info!("  {:<32} {:>9}", "Total", total);

    Ok(())
}
