use quizbank_db::open_memory;

#[test]
fn creates_all_tables() {
    let conn = open_memory().unwrap();
    for table in ["schema_version", "categories", "category_aliases", "questions"] {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "missing table {table}");
    }
}

#[test]
fn open_database_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.db");

    {
        let conn = quizbank_db::open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO categories (name, icon) VALUES ('History', '📜')",
            [],
        )
        .unwrap();
    }

    // Re-opening keeps existing data and does not re-run creation destructively
    let conn = quizbank_db::open_database(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM categories", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn foreign_keys_are_enforced() {
    let conn = open_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO category_aliases (alias, category_id) VALUES ('ghost', 999)",
        [],
    );
    assert!(result.is_err());
}
