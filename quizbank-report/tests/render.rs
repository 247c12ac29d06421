use quizbank_catalog::ProfiledQuestion;
use quizbank_report::{Section, build_report, render_json, render_text};

fn sample() -> Vec<ProfiledQuestion> {
    vec![
        ProfiledQuestion {
            text: "What is the tallest mountain?".to_string(),
            answers: vec!["K2".into(), "Everest".into()],
            correct_index: 1,
            category: "Geography".to_string(),
            difficulty: Some("easy".to_string()),
            explanation: None,
            hint: Some("It's in the Himalayas".to_string()),
            source: "pack".to_string(),
        },
        ProfiledQuestion {
            text: "Who painted the Mona Lisa?".to_string(),
            answers: vec!["Da Vinci".into(), "Monet".into()],
            correct_index: 0,
            category: "Art & Literature".to_string(),
            difficulty: None,
            explanation: None,
            hint: None,
            source: "pack".to_string(),
        },
    ]
}

#[test]
fn section_parse_known_and_unknown() {
    assert_eq!(Section::parse("summary"), Some(Section::Summary));
    assert_eq!(Section::parse(" Categories "), Some(Section::Categories));
    assert_eq!(Section::parse("question-length"), Some(Section::QuestionLength));
    assert_eq!(Section::parse("answers"), Some(Section::AnswerStats));
    // Unknown names fall back to the full report at the call site
    assert_eq!(Section::parse("bogus"), None);
}

#[test]
fn full_json_has_all_top_level_keys() {
    let report = build_report(&sample(), &[]);
    let json = render_json(&report, None).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    for key in [
        "summary",
        "categories",
        "sources",
        "difficulty",
        "hints",
        "questionLength",
        "answerStats",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn single_section_json_is_just_that_value() {
    let report = build_report(&sample(), &[]);
    let json = render_json(&report, Some(Section::Categories)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.is_array());
    assert_eq!(value.as_array().unwrap().len(), 2);
}

#[test]
fn difficulty_section_serializes_null_when_absent() {
    let mut questions = sample();
    questions[0].difficulty = None;
    let report = build_report(&questions, &[]);
    let json = render_json(&report, Some(Section::Difficulty)).unwrap();
    assert_eq!(json.trim(), "null");
}

#[test]
fn text_render_includes_every_section_header() {
    let report = build_report(&sample(), &[]);
    let text = render_text(&report, None);
    for header in [
        "Summary",
        "Categories",
        "Sources",
        "Difficulty",
        "Hints",
        "Question length",
        "Answer positions",
    ] {
        assert!(text.contains(header), "missing header {header}");
    }
}

#[test]
fn text_render_single_section_only() {
    let report = build_report(&sample(), &[]);
    let text = render_text(&report, Some(Section::Hints));
    assert!(text.contains("With hint:"));
    assert!(!text.contains("Categories"));
}

#[test]
fn missing_difficulty_renders_placeholder_not_omission() {
    let questions = vec![ProfiledQuestion {
        text: "No difficulty here?".to_string(),
        answers: vec!["a".into()],
        correct_index: 0,
        category: "c".to_string(),
        difficulty: None,
        explanation: None,
        hint: None,
        source: "unknown".to_string(),
    }];
    let report = build_report(&questions, &[]);
    let text = render_text(&report, None);
    assert!(text.contains("No difficulty data"));
}
