//! Write operations for categories, aliases, and questions.

use quizbank_catalog::{Choice, Difficulty, Taxonomy, fingerprint};
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ── Category Operations ─────────────────────────────────────────────────────

/// Return the id of the category with this exact name, creating it if
/// missing. The icon falls back to the taxonomy's lookup for the name.
pub fn get_or_create_category(
    conn: &Connection,
    name: &str,
    icon: Option<&str>,
    taxonomy: &Taxonomy,
) -> Result<i64, OperationError> {
    let existing: Option<i64> = conn
        .query_row("SELECT id FROM categories WHERE name = ?1", [name], |row| {
            row.get(0)
        })
        .optional()?;
    if let Some(id) = existing {
        return Ok(id);
    }

    let icon = icon.unwrap_or_else(|| taxonomy.icon_for(name));
    conn.execute(
        "INSERT INTO categories (name, icon) VALUES (?1, ?2)",
        params![name, icon],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Register an alias for a canonical category.
///
/// Named no-op policy: when the canonical category does not exist, or the
/// alias is already taken, nothing happens and `false` is returned. The
/// alias is stored lowercased so resolution is an exact match.
pub fn add_alias(
    conn: &Connection,
    alias: &str,
    canonical_name: &str,
) -> Result<bool, OperationError> {
    let category_id: Option<i64> = conn
        .query_row(
            "SELECT id FROM categories WHERE name = ?1",
            [canonical_name],
            |row| row.get(0),
        )
        .optional()?;
    let Some(category_id) = category_id else {
        return Ok(false);
    };

    let changed = conn.execute(
        "INSERT OR IGNORE INTO category_aliases (alias, category_id) VALUES (?1, ?2)",
        params![alias.trim().to_lowercase(), category_id],
    )?;
    Ok(changed > 0)
}

/// Find the category an alias maps to, if registered.
pub fn find_category_by_alias(
    conn: &Connection,
    alias: &str,
) -> Result<Option<i64>, OperationError> {
    let result = conn
        .query_row(
            "SELECT category_id FROM category_aliases WHERE alias = ?1",
            [alias.trim().to_lowercase()],
            |row| row.get(0),
        )
        .optional()?;
    Ok(result)
}

/// Resolve a raw free-text label to a category id.
///
/// The alias table is checked first and takes precedence over a
/// canonical-name match, so a label registered as an alias of a different
/// category resolves to the alias's target. A miss normalizes the label via
/// the taxonomy and gets-or-creates the canonical category.
pub fn resolve_category_id(
    conn: &Connection,
    taxonomy: &Taxonomy,
    raw_label: &str,
) -> Result<i64, OperationError> {
    if let Some(id) = find_category_by_alias(conn, raw_label)? {
        return Ok(id);
    }

    let canonical = taxonomy.normalize(raw_label);
    get_or_create_category(conn, &canonical, None, taxonomy)
}

// ── Question Operations ─────────────────────────────────────────────────────

/// Outcome of a question insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(i64),
    /// A question with the same content fingerprint already exists.
    Duplicate,
}

/// Fields for a question insert.
#[derive(Debug)]
pub struct NewQuestion<'a> {
    pub text: &'a str,
    pub choices: &'a [Choice],
    pub correct_index: usize,
    pub category_id: i64,
    /// Free-text difficulty; normalized to easy/medium/hard or stored unset.
    pub difficulty: Option<&'a str>,
    pub explanation: Option<&'a str>,
    pub hint: Option<&'a str>,
    pub source: &'a str,
    pub imported_from: Option<&'a str>,
}

/// Insert a question unless its content fingerprint is already stored.
///
/// Duplicates are a normal, counted outcome, not an error. Difficulty labels
/// outside {easy, medium, hard} (case-insensitive) are stored as unset.
pub fn insert_question(
    conn: &Connection,
    question: &NewQuestion<'_>,
) -> Result<InsertOutcome, OperationError> {
    let fp = fingerprint(question.text);

    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM questions WHERE fingerprint = ?1)",
        [&fp],
        |row| row.get(0),
    )?;
    if exists {
        return Ok(InsertOutcome::Duplicate);
    }

    let difficulty = question
        .difficulty
        .and_then(Difficulty::parse)
        .map(|d| d.as_str());
    let source = if question.source.is_empty() {
        "unknown"
    } else {
        question.source
    };
    let choices_json = serde_json::to_string(question.choices)?;

    conn.execute(
        "INSERT INTO questions
             (text, fingerprint, choices, correct_index, category_id,
              difficulty, explanation, hint, source, imported_from)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            question.text,
            fp,
            choices_json,
            question.correct_index as i64,
            question.category_id,
            difficulty,
            question.explanation,
            question.hint,
            source,
            question.imported_from,
        ],
    )?;
    Ok(InsertOutcome::Inserted(conn.last_insert_rowid()))
}

// ── Seeding ─────────────────────────────────────────────────────────────────

/// Statistics from seeding the database.
#[derive(Debug, Default)]
pub struct SeedStats {
    pub categories: usize,
    pub aliases: usize,
}

/// Ensure every canonical category and alias in the taxonomy exists.
///
/// Idempotent; counts only what was actually created.
pub fn seed_taxonomy(conn: &Connection, taxonomy: &Taxonomy) -> Result<SeedStats, OperationError> {
    let mut stats = SeedStats::default();
    let tx = conn.unchecked_transaction()?;

    for (name, icon) in taxonomy.categories() {
        let existed: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE name = ?1)",
            [name],
            |row| row.get(0),
        )?;
        get_or_create_category(&tx, name, Some(icon), taxonomy)?;
        if !existed {
            stats.categories += 1;
        }
    }

    for (alias, canonical) in taxonomy.aliases() {
        if add_alias(&tx, alias, canonical)? {
            stats.aliases += 1;
        }
    }

    tx.commit()?;
    Ok(stats)
}
