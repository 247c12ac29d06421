use quizbank_catalog::{Choice, Taxonomy};
use quizbank_db::{
    InsertOutcome, NewQuestion, add_alias, get_or_create_category, insert_question, open_memory,
    resolve_category_id, seed_taxonomy,
};

fn choices(correct: usize, texts: &[&str]) -> Vec<Choice> {
    texts
        .iter()
        .enumerate()
        .map(|(i, t)| Choice {
            text: t.to_string(),
            is_correct: i == correct,
        })
        .collect()
}

fn sample_question<'a>(text: &'a str, choices: &'a [Choice], category_id: i64) -> NewQuestion<'a> {
    NewQuestion {
        text,
        choices,
        correct_index: 0,
        category_id,
        difficulty: None,
        explanation: None,
        hint: None,
        source: "test",
        imported_from: None,
    }
}

#[test]
fn get_or_create_category_is_idempotent() {
    let conn = open_memory().unwrap();
    let tax = Taxonomy::default_set();

    let a = get_or_create_category(&conn, "Science & Nature", None, &tax).unwrap();
    let b = get_or_create_category(&conn, "Science & Nature", None, &tax).unwrap();
    assert_eq!(a, b);

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM categories", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);

    // Icon came from the taxonomy table
    let icon: String = conn
        .query_row("SELECT icon FROM categories WHERE id = ?1", [a], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(icon, "🔬");
}

#[test]
fn unknown_category_gets_unknown_icon() {
    let conn = open_memory().unwrap();
    let tax = Taxonomy::default_set();
    let id = get_or_create_category(&conn, "Cryptozoology", None, &tax).unwrap();
    let icon: String = conn
        .query_row("SELECT icon FROM categories WHERE id = ?1", [id], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(icon, "❓");
}

#[test]
fn add_alias_skips_missing_category() {
    let conn = open_memory().unwrap();
    assert!(!add_alias(&conn, "sci", "Science & Nature").unwrap());
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM category_aliases", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn add_alias_skips_existing_alias() {
    let conn = open_memory().unwrap();
    let tax = Taxonomy::default_set();
    get_or_create_category(&conn, "Science & Nature", None, &tax).unwrap();
    get_or_create_category(&conn, "History", None, &tax).unwrap();

    assert!(add_alias(&conn, "sci", "Science & Nature").unwrap());
    // Second registration against a different category is a silent no-op
    assert!(!add_alias(&conn, "sci", "History").unwrap());
}

#[test]
fn resolve_is_idempotent_and_creates_once() {
    let conn = open_memory().unwrap();
    let tax = Taxonomy::default_set();

    let a = resolve_category_id(&conn, &tax, "science").unwrap();
    let b = resolve_category_id(&conn, &tax, "  Science ").unwrap();
    assert_eq!(a, b);

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM categories", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
    let name: String = conn
        .query_row("SELECT name FROM categories WHERE id = ?1", [a], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(name, "Science & Nature");
}

#[test]
fn alias_takes_precedence_over_canonical_name() {
    let conn = open_memory().unwrap();
    let tax = Taxonomy::default_set();

    let science = get_or_create_category(&conn, "Science & Nature", None, &tax).unwrap();
    assert!(add_alias(&conn, "sci", "Science & Nature").unwrap());

    // A category literally named "sci" created afterwards does not shadow
    // the alias registration.
    let literal = get_or_create_category(&conn, "sci", None, &tax).unwrap();
    assert_ne!(science, literal);
    assert_eq!(resolve_category_id(&conn, &tax, "sci").unwrap(), science);
}

#[test]
fn insert_question_deduplicates_by_fingerprint() {
    let conn = open_memory().unwrap();
    let tax = Taxonomy::default_set();
    let cat = resolve_category_id(&conn, &tax, "science").unwrap();
    let ch = choices(0, &["Mars", "Venus"]);

    let first = insert_question(&conn, &sample_question("What planet is red?", &ch, cat)).unwrap();
    assert!(matches!(first, InsertOutcome::Inserted(_)));

    // Same content, different punctuation/case and metadata: still a duplicate
    let mut dup = sample_question("what planet IS red", &ch, cat);
    dup.source = "other-file";
    dup.hint = Some("look up");
    assert_eq!(insert_question(&conn, &dup).unwrap(), InsertOutcome::Duplicate);

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM questions", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn difficulty_normalizes_or_goes_unset() {
    let conn = open_memory().unwrap();
    let tax = Taxonomy::default_set();
    let cat = resolve_category_id(&conn, &tax, "science").unwrap();
    let ch = choices(0, &["a", "b"]);

    let mut q = sample_question("An easy one?", &ch, cat);
    q.difficulty = Some("EASY");
    insert_question(&conn, &q).unwrap();

    let mut q = sample_question("A weird one?", &ch, cat);
    q.difficulty = Some("ludicrous");
    insert_question(&conn, &q).unwrap();

    let easy: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM questions WHERE difficulty = 'easy'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    let unset: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM questions WHERE difficulty IS NULL",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(easy, 1);
    assert_eq!(unset, 1);
}

#[test]
fn seed_taxonomy_is_idempotent() {
    let conn = open_memory().unwrap();
    let tax = Taxonomy::default_set();

    let first = seed_taxonomy(&conn, &tax).unwrap();
    assert_eq!(first.categories, tax.categories().count());
    assert_eq!(first.aliases, tax.aliases().count());

    let second = seed_taxonomy(&conn, &tax).unwrap();
    assert_eq!(second.categories, 0);
    assert_eq!(second.aliases, 0);
}

#[test]
fn deleting_referenced_category_is_restricted() {
    let conn = open_memory().unwrap();
    let tax = Taxonomy::default_set();
    let cat = resolve_category_id(&conn, &tax, "science").unwrap();
    let ch = choices(0, &["a"]);
    insert_question(&conn, &sample_question("Keep me", &ch, cat)).unwrap();

    let result = conn.execute("DELETE FROM categories WHERE id = ?1", [cat]);
    assert!(result.is_err());
}

#[test]
fn deleting_category_cascades_aliases() {
    let conn = open_memory().unwrap();
    let tax = Taxonomy::default_set();
    get_or_create_category(&conn, "Science & Nature", None, &tax).unwrap();
    add_alias(&conn, "sci", "Science & Nature").unwrap();

    conn.execute("DELETE FROM categories WHERE name = 'Science & Nature'", [])
        .unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM category_aliases", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}
