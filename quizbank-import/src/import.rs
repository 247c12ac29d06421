//! Batch import of question files, live and dry-run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use thiserror::Error;

use quizbank_catalog::{Choice, Taxonomy, fingerprint};
use quizbank_db::operations::{
    self, InsertOutcome, NewQuestion, OperationError, find_category_by_alias,
};
use quizbank_formats::{FormatError, LoadedSet, load_file};

use crate::progress::ImportProgress;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

/// Outcome of importing a single file.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileOutcome {
    pub imported: u64,
    pub duplicates: u64,
    pub categories_created: u64,
}

/// Accumulated statistics across a batch import.
#[derive(Debug, Default)]
pub struct ImportStats {
    pub files_processed: u64,
    /// Files skipped because they were missing or undecodable.
    pub files_skipped: u64,
    pub imported: u64,
    pub duplicates: u64,
    pub categories_created: u64,
}

impl ImportStats {
    fn absorb(&mut self, outcome: FileOutcome) {
        self.imported += outcome.imported;
        self.duplicates += outcome.duplicates;
        self.categories_created += outcome.categories_created;
    }
}

/// Import one decoded file into the store, inside a single transaction.
///
/// `imported_from` is the provenance label recorded on each new question.
pub fn import_set(
    conn: &Connection,
    taxonomy: &Taxonomy,
    set: &LoadedSet,
    imported_from: &str,
) -> Result<FileOutcome, ImportError> {
    let tx = conn.unchecked_transaction()?;
    let categories_before = category_count(&tx)?;

    let mut outcome = FileOutcome::default();
    for q in &set.questions {
        let category_id = operations::resolve_category_id(&tx, taxonomy, &q.category)?;
        let choices: Vec<Choice> = q
            .answers
            .iter()
            .enumerate()
            .map(|(i, text)| Choice {
                text: text.clone(),
                is_correct: i == q.correct_index,
            })
            .collect();
        let record = NewQuestion {
            text: &q.text,
            choices: &choices,
            correct_index: q.correct_index,
            category_id,
            difficulty: q.difficulty.as_deref(),
            explanation: q.explanation.as_deref(),
            hint: q.hint.as_deref(),
            source: &q.source,
            imported_from: Some(imported_from),
        };
        match operations::insert_question(&tx, &record)? {
            InsertOutcome::Inserted(_) => outcome.imported += 1,
            InsertOutcome::Duplicate => outcome.duplicates += 1,
        }
    }

    outcome.categories_created = (category_count(&tx)? - categories_before) as u64;
    tx.commit()?;
    Ok(outcome)
}

/// Import a batch of files.
///
/// Missing and undecodable files are logged and skipped; the rest of the
/// batch proceeds (partial-success policy, uniform across live and dry-run).
/// In live mode the taxonomy is seeded first and each file commits
/// separately, so a failure partway leaves earlier files' data in place.
///
/// The optional `progress` callback is invoked after each file.
pub fn import_files(
    conn: &Connection,
    taxonomy: &Taxonomy,
    paths: &[PathBuf],
    dry_run: bool,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    let mut stats = ImportStats::default();

    if !dry_run {
        let seeded = operations::seed_taxonomy(conn, taxonomy)?;
        if seeded.categories > 0 || seeded.aliases > 0 {
            log::info!(
                "Seeded {} categories, {} aliases",
                seeded.categories,
                seeded.aliases,
            );
        }
    }

    // Dry-run state: fingerprints and categories "created" so far in this
    // batch, so cross-file duplicates are counted like the live path would.
    let mut seen_fingerprints: HashSet<String> = HashSet::new();
    let mut pending_categories: HashSet<String> = HashSet::new();

    for (i, path) in paths.iter().enumerate() {
        if let Some(p) = progress {
            p.on_file(i + 1, paths.len(), &file_label(path));
        }
        let set = match load_file(path) {
            Ok(set) => set,
            Err(FormatError::FileNotFound { path }) => {
                log::warn!("Skipping missing file: {}", path.display());
                stats.files_skipped += 1;
                continue;
            }
            Err(e) => {
                log::error!("Skipping {}: {}", path.display(), e);
                stats.files_skipped += 1;
                continue;
            }
        };

        let label = file_label(path);
        let outcome = if dry_run {
            dry_run_set(
                conn,
                taxonomy,
                &set,
                &mut seen_fingerprints,
                &mut pending_categories,
            )?
        } else {
            import_set(conn, taxonomy, &set, &label)?
        };

        log::info!(
            "  {}: {} imported, {} duplicates ({} questions, {} format)",
            label,
            outcome.imported,
            outcome.duplicates,
            set.questions.len(),
            set.format.as_str(),
        );
        stats.absorb(outcome);
        stats.files_processed += 1;
    }

    if let Some(p) = progress {
        p.on_complete(&format!(
            "{} imported, {} duplicates across {} file(s)",
            stats.imported, stats.duplicates, stats.files_processed,
        ));
    }

    Ok(stats)
}

/// Count would-be outcomes for one file without writing anything.
fn dry_run_set(
    conn: &Connection,
    taxonomy: &Taxonomy,
    set: &LoadedSet,
    seen_fingerprints: &mut HashSet<String>,
    pending_categories: &mut HashSet<String>,
) -> Result<FileOutcome, ImportError> {
    let mut outcome = FileOutcome::default();

    for q in &set.questions {
        let fp = fingerprint(&q.text);
        let stored: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM questions WHERE fingerprint = ?1)",
            [&fp],
            |row| row.get(0),
        )?;
        if stored || !seen_fingerprints.insert(fp) {
            outcome.duplicates += 1;
        } else {
            outcome.imported += 1;
        }

        // Alias registrations in the db still count as existing categories
        if find_category_by_alias(conn, &q.category)?.is_some() {
            continue;
        }
        let canonical = taxonomy.normalize(&q.category);
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE name = ?1)",
            [&canonical],
            |row| row.get(0),
        )?;
        if !exists && pending_categories.insert(canonical) {
            outcome.categories_created += 1;
        }
    }

    Ok(outcome)
}

fn category_count(conn: &Connection) -> Result<i64, rusqlite::Error> {
    conn.query_row("SELECT COUNT(*) FROM categories", [], |r| r.get(0))
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
