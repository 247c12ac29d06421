use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use quizbank_catalog::Taxonomy;
use quizbank_import::{ImportProgress, import_files};

use super::default_db_path;
use crate::CliError;

/// Progress reporter backed by an indicatif bar over the file loop.
struct BarProgress {
    bar: ProgressBar,
}

impl ImportProgress for BarProgress {
    fn on_file(&self, current: usize, _total: usize, label: &str) {
        self.bar.set_position(current as u64);
        self.bar.set_message(label.to_string());
    }

    fn on_complete(&self, _message: &str) {
        self.bar.finish_and_clear();
    }
}

/// Batch-import question files into the store.
pub(crate) fn run_import(
    files: Vec<PathBuf>,
    dry_run: bool,
    db_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let db_path = db_path.unwrap_or_else(default_db_path);

    // A dry run against a store that doesn't exist yet must not create one
    let conn = if dry_run && !db_path.exists() {
        quizbank_db::open_memory()
            .map_err(|e| CliError::database(format!("Failed to open scratch database: {e}")))?
    } else {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        quizbank_db::open_database(&db_path)
            .map_err(|e| CliError::database(format!("Failed to open question database: {e}")))?
    };

    let taxonomy = Taxonomy::default_set();

    log::info!(
        "{}",
        format!(
            "{} {} file(s) against {}",
            if dry_run { "Checking" } else { "Importing" },
            files.len(),
            db_path.display(),
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );

    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("  {bar:30.cyan} {pos}/{len} {msg}").expect("static pattern"),
    );
    let progress = BarProgress { bar };

    let stats = import_files(&conn, &taxonomy, &files, dry_run, Some(&progress))?;

    crate::log_blank();
    if dry_run {
        log::info!(
            "Dry run: {} would be imported, {} duplicate(s), {} new categorie(s)",
            stats.imported,
            stats.duplicates,
            stats.categories_created,
        );
    } else {
        log::info!(
            "Imported {} question(s), {} duplicate(s) skipped, {} new categorie(s)",
            stats.imported,
            stats.duplicates,
            stats.categories_created,
        );
    }
    if stats.files_skipped > 0 {
        log::warn!("{} file(s) skipped (missing or undecodable)", stats.files_skipped);
    }

    Ok(())
}
