//! SQLite persistence layer for the trivia question store.
//!
//! Provides schema creation, CRUD operations, and query APIs
//! backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use rusqlite::Connection;

pub use operations::{
    InsertOutcome, NewQuestion, OperationError, SeedStats, add_alias, find_category_by_alias,
    get_or_create_category, insert_question, resolve_category_id, seed_taxonomy,
};
pub use queries::{
    AliasRow, CategoryRow, QuestionFilter, StoreStats, list_aliases, list_categories,
    list_questions, store_stats,
};
pub use schema::{open_database, open_memory};
