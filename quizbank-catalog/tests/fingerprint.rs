use quizbank_catalog::fingerprint;

#[test]
fn deterministic() {
    let a = fingerprint("What is the capital of France?");
    let b = fingerprint("What is the capital of France?");
    assert_eq!(a, b);
}

#[test]
fn case_space_and_punctuation_insensitive() {
    assert_eq!(fingerprint("Hello, World!"), fingerprint("helloworld"));
    assert_eq!(
        fingerprint("What  is   2+2?"),
        fingerprint("what is 2 + 2"),
    );
}

#[test]
fn distinct_content_yields_distinct_digests() {
    assert_ne!(fingerprint("question one"), fingerprint("question two"));
}

#[test]
fn digest_is_sha256_hex() {
    let fp = fingerprint("anything");
    assert_eq!(fp.len(), 64);
    assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn empty_and_symbol_only_texts_collide() {
    // Everything non-alphanumeric is stripped before hashing
    assert_eq!(fingerprint(""), fingerprint("?!... "));
}
