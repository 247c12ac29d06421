use quizbank_catalog::ProfiledQuestion;
use quizbank_report::{InputMeta, build_report};

fn q(text: &str, category: &str, difficulty: Option<&str>, hint: Option<&str>) -> ProfiledQuestion {
    ProfiledQuestion {
        text: text.to_string(),
        answers: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        correct_index: 1,
        category: category.to_string(),
        difficulty: difficulty.map(str::to_string),
        explanation: None,
        hint: hint.map(str::to_string),
        source: "pack".to_string(),
    }
}

#[test]
fn empty_collection_yields_zeroed_report() {
    let report = build_report(&[], &[]);
    assert_eq!(report.summary.total_questions, 0);
    assert_eq!(report.summary.input_count, 0);
    assert!(report.summary.inputs.is_none());
    assert!(report.categories.is_empty());
    assert!(report.difficulty.is_none());
    assert_eq!(report.hints.without_hint, 0);
    assert_eq!(report.question_length.min, 0);
    assert_eq!(report.question_length.shortest, "");
    assert_eq!(report.answer_stats.avg_choices, 0.0);
}

#[test]
fn category_percentages_sum_to_100() {
    let questions = vec![
        q("one?", "Science & Nature", None, None),
        q("two?", "Science & Nature", None, None),
        q("three?", "History", None, None),
    ];
    let report = build_report(&questions, &[]);
    let sum: f64 = report.categories.iter().map(|e| e.percent).sum();
    assert!((sum - 100.0).abs() < 1e-9);
    assert_eq!(report.categories[0].name, "Science & Nature");
    assert_eq!(report.categories[0].count, 2);
}

#[test]
fn equal_counts_tie_break_on_name() {
    let questions = vec![
        q("one?", "Zoology", None, None),
        q("two?", "Astronomy", None, None),
    ];
    let report = build_report(&questions, &[]);
    let names: Vec<&str> = report.categories.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Astronomy", "Zoology"]);
}

#[test]
fn difficulty_percentages_cover_only_the_subset() {
    let questions = vec![
        q("one?", "c", Some("Easy"), None),
        q("two?", "c", Some("easy"), None),
        q("three?", "c", Some("hard"), None),
        q("four?", "c", None, None),
    ];
    let report = build_report(&questions, &[]);
    let entries = report.difficulty.expect("subset is non-empty");

    // Case-insensitive grouping; only 3 of 4 questions carry a difficulty
    assert_eq!(entries[0].name, "easy");
    assert_eq!(entries[0].count, 2);
    assert!((entries[0].percent - 200.0 / 3.0).abs() < 1e-9);
    let sum: f64 = entries.iter().map(|e| e.percent).sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn difficulty_orders_fixed_three_then_alphabetical() {
    let questions = vec![
        q("a?", "c", Some("zany"), None),
        q("b?", "c", Some("hard"), None),
        q("c?", "c", Some("medium"), None),
        q("d?", "c", Some("easy"), None),
        q("e?", "c", Some("absurd"), None),
    ];
    let report = build_report(&questions, &[]);
    let names: Vec<String> = report
        .difficulty
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["easy", "medium", "hard", "absurd", "zany"]);
}

#[test]
fn hint_samples_cap_at_three_in_input_order() {
    let questions: Vec<ProfiledQuestion> = (0..5)
        .map(|i| q(&format!("q{i}?"), "c", None, Some(&format!("hint {i}"))))
        .collect();
    let report = build_report(&questions, &[]);
    assert_eq!(report.hints.with_hint, 5);
    assert_eq!(report.hints.samples, vec!["hint 0", "hint 1", "hint 2"]);
}

#[test]
fn question_length_extremes_and_mean() {
    let questions = vec![
        q("ab", "c", None, None),
        q("abcdef", "c", None, None),
        q("abcd", "c", None, None),
    ];
    let report = build_report(&questions, &[]);
    let l = &report.question_length;
    assert_eq!(l.min, 2);
    assert_eq!(l.max, 6);
    assert!((l.mean - 4.0).abs() < 1e-9);
    assert_eq!(l.shortest, "ab");
    assert_eq!(l.longest, "abcdef");
}

#[test]
fn long_exemplars_truncate_to_80_chars() {
    let long_text = "x".repeat(200);
    let questions = vec![q(&long_text, "c", None, None)];
    let report = build_report(&questions, &[]);
    assert_eq!(report.question_length.longest.chars().count(), 80);
    assert!(report.question_length.longest.ends_with("..."));
    // The stored min/max still reflect the full text
    assert_eq!(report.question_length.max, 200);
}

#[test]
fn answer_position_histogram_is_one_indexed() {
    let mut questions = vec![q("a?", "c", None, None), q("b?", "c", None, None)];
    questions[1].correct_index = 0;
    let report = build_report(&questions, &[]);
    assert_eq!(report.answer_stats.positions.get("1"), Some(&1));
    assert_eq!(report.answer_stats.positions.get("2"), Some(&1));
    assert!((report.answer_stats.avg_choices - 4.0).abs() < 1e-9);
}

#[test]
fn summary_tracks_inputs_and_latest_generation() {
    let questions = vec![q("a?", "c", None, None)];
    let inputs = vec![
        InputMeta {
            label: "old.json".to_string(),
            byte_len: 100,
            question_count: 1,
            generated: Some(1000),
        },
        InputMeta {
            label: "new.json".to_string(),
            byte_len: 200,
            question_count: 0,
            generated: Some(2000),
        },
        InputMeta {
            label: "raw.json".to_string(),
            byte_len: 50,
            question_count: 0,
            generated: None,
        },
    ];
    let report = build_report(&questions, &inputs);
    assert_eq!(report.summary.total_bytes, 350);
    assert_eq!(report.summary.input_count, 3);
    assert_eq!(report.summary.latest_generated, Some(2000));
    assert_eq!(report.summary.inputs.as_ref().unwrap().len(), 3);
}
