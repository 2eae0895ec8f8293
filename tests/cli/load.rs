//! Tests for `k8sec load`.

use crate::support::*;

#[test]
fn test_load_from_file_merges() {
    let t = Test::seeded();
    std::fs::write(t.path(".env"), "rails-env=staging\nfoo=\"bar\\tbaz\"\n").unwrap();

    let output = t.run(&["load", "-f", ".env", "rails"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "rails\n");

    assert_dump(
        &t,
        "rails",
        "database-url=\"postgres://example.com:5432/dbname\"\n\
         foo=\"bar\\tbaz\"\n\
         rails-env=\"staging\"\n",
    );
}

#[test]
fn test_load_from_stdin() {
    let t = Test::seeded();

    let output = t.load_stdin("rails", "\nsecret-key-base=abc\n\n");
    assert_success(&output);

    let output = t.dump(&["rails"]);
    assert_stdout_contains(&output, "secret-key-base=\"abc\"\n");
}

#[test]
fn test_dump_then_load_roundtrip() {
    let t = Test::seeded();
    assert_success(&t.set(&["rails", "multi=line one\nline two", "tab=a\tb"]));
    let before = stdout(&t.dump(&["rails"]));

    assert_success(&t.unset(&["rails", "multi", "tab"]));
    let output = t.load_stdin("rails", &before);
    assert_success(&output);

    assert_eq!(stdout(&t.dump(&["rails"])), before);
}

#[test]
fn test_load_missing_secret_fails() {
    let t = Test::seeded();
    let store_before = t.store_contents();

    let output = t.load_stdin("nope", "a=1\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "get secret \"nope\"");
    assert_eq!(t.store_contents(), store_before);
}

#[test]
fn test_load_malformed_line_fails() {
    let t = Test::seeded();
    let store_before = t.store_contents();

    let output = t.load_stdin("rails", "a=1\nnot-a-pair\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "line must be key=value format");
    assert_eq!(t.store_contents(), store_before);
}
