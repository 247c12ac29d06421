//! Read queries for the question database.
//!
//! Provides category and alias listings, filtered question listing, and
//! summary statistics.

use quizbank_catalog::{Choice, Difficulty, ProfiledQuestion, Taxonomy};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, ToSql};

use crate::operations::{OperationError, find_category_by_alias};

// ── Category Queries ────────────────────────────────────────────────────────

/// A category with its question count.
#[derive(Debug)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub question_count: i64,
}

/// List all categories with question counts, busiest first.
///
/// Equal counts tie-break on name so output is stable across runs.
pub fn list_categories(conn: &Connection) -> Result<Vec<CategoryRow>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT c.id, c.name, c.icon, COUNT(q.id) AS question_count
         FROM categories c
         LEFT JOIN questions q ON q.category_id = c.id
         GROUP BY c.id
         ORDER BY question_count DESC, c.name ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(CategoryRow {
            id: row.get(0)?,
            name: row.get(1)?,
            icon: row.get(2)?,
            question_count: row.get(3)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// An alias → canonical mapping row.
#[derive(Debug)]
pub struct AliasRow {
    pub alias: String,
    pub category_name: String,
}

/// List all registered aliases, ordered by canonical name then alias.
pub fn list_aliases(conn: &Connection) -> Result<Vec<AliasRow>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT a.alias, c.name
         FROM category_aliases a
         JOIN categories c ON c.id = a.category_id
         ORDER BY c.name ASC, a.alias ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(AliasRow {
            alias: row.get(0)?,
            category_name: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Question Queries ────────────────────────────────────────────────────────

/// Optional filters for a question listing, combined with AND.
#[derive(Debug, Default)]
pub struct QuestionFilter<'a> {
    /// Raw category label; resolved through the alias table and the
    /// normalizer, without creating anything.
    pub category: Option<&'a str>,
    pub difficulty: Option<Difficulty>,
    pub source: Option<&'a str>,
    pub limit: Option<u32>,
}

/// List questions as unified records, ordered by insertion id.
///
/// A category filter that matches no known category yields an empty list
/// rather than an error.
pub fn list_questions(
    conn: &Connection,
    taxonomy: &Taxonomy,
    filter: &QuestionFilter<'_>,
) -> Result<Vec<ProfiledQuestion>, OperationError> {
    let mut sql = String::from(
        "SELECT q.text, q.choices, q.correct_index, c.name,
                q.difficulty, q.explanation, q.hint, q.source
         FROM questions q
         JOIN categories c ON c.id = q.category_id",
    );
    let mut clauses: Vec<&str> = Vec::new();
    let mut params: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(label) = filter.category {
        let category_id = match resolve_filter_category(conn, taxonomy, label)? {
            Some(id) => id,
            None => return Ok(Vec::new()),
        };
        clauses.push("q.category_id = ?");
        params.push(Box::new(category_id));
    }
    if let Some(difficulty) = filter.difficulty {
        clauses.push("q.difficulty = ?");
        params.push(Box::new(difficulty.as_str()));
    }
    if let Some(source) = filter.source {
        clauses.push("q.source = ?");
        params.push(Box::new(source.to_string()));
    }

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY q.id ASC");
    if let Some(limit) = filter.limit {
        sql.push_str(" LIMIT ?");
        params.push(Box::new(limit as i64));
    }

    let mut stmt = conn.prepare(&sql)?;
    let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();
    let rows = stmt.query_map(&param_refs[..], row_to_profiled)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Resolve a filter label to an existing category id, creating nothing.
fn resolve_filter_category(
    conn: &Connection,
    taxonomy: &Taxonomy,
    label: &str,
) -> Result<Option<i64>, OperationError> {
    if let Some(id) = find_category_by_alias(conn, label)? {
        return Ok(Some(id));
    }
    let canonical = taxonomy.normalize(label);
    let id = conn
        .query_row(
            "SELECT id FROM categories WHERE name = ?1",
            [canonical],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

fn row_to_profiled(row: &Row<'_>) -> rusqlite::Result<ProfiledQuestion> {
    let choices_json: String = row.get(1)?;
    let choices: Vec<Choice> = serde_json::from_str(&choices_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;
    let correct_index: i64 = row.get(2)?;
    let source: String = row.get(7)?;

    Ok(ProfiledQuestion {
        text: row.get(0)?,
        answers: choices.into_iter().map(|c| c.text).collect(),
        correct_index: correct_index as usize,
        category: row.get(3)?,
        difficulty: row.get(4)?,
        explanation: row.get(5)?,
        hint: row.get(6)?,
        source,
    })
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Summary statistics for the question store.
#[derive(Debug)]
pub struct StoreStats {
    pub total_questions: i64,
    pub total_categories: i64,
    pub total_sources: i64,
    pub easy: i64,
    pub medium: i64,
    pub hard: i64,
    pub unset_difficulty: i64,
    pub with_hints: i64,
    pub with_explanations: i64,
}

/// Get overall store statistics.
pub fn store_stats(conn: &Connection) -> Result<StoreStats, OperationError> {
    let total_questions: i64 =
        conn.query_row("SELECT COUNT(*) FROM questions", [], |r| r.get(0))?;
    let total_categories: i64 =
        conn.query_row("SELECT COUNT(*) FROM categories", [], |r| r.get(0))?;
    let total_sources: i64 = conn.query_row(
        "SELECT COUNT(DISTINCT source) FROM questions",
        [],
        |r| r.get(0),
    )?;
    let count_difficulty = |value: &str| -> Result<i64, rusqlite::Error> {
        conn.query_row(
            "SELECT COUNT(*) FROM questions WHERE difficulty = ?1",
            [value],
            |r| r.get(0),
        )
    };
    let easy = count_difficulty("easy")?;
    let medium = count_difficulty("medium")?;
    let hard = count_difficulty("hard")?;
    let unset_difficulty: i64 = conn.query_row(
        "SELECT COUNT(*) FROM questions WHERE difficulty IS NULL",
        [],
        |r| r.get(0),
    )?;
    let with_hints: i64 = conn.query_row(
        "SELECT COUNT(*) FROM questions WHERE hint IS NOT NULL AND hint != ''",
        [],
        |r| r.get(0),
    )?;
    let with_explanations: i64 = conn.query_row(
        "SELECT COUNT(*) FROM questions WHERE explanation IS NOT NULL AND explanation != ''",
        [],
        |r| r.get(0),
    )?;

    Ok(StoreStats {
        total_questions,
        total_categories,
        total_sources,
        easy,
        medium,
        hard,
        unset_difficulty,
        with_hints,
        with_explanations,
    })
}
