//! Tests for `k8sec unset`.

use crate::support::*;

#[test]
fn test_unset_removes_keys() {
    let t = Test::seeded();

    let output = t.unset(&["rails", "database-url"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "rails\n");

    assert_dump(&t, "rails", "rails-env=\"production\"\n");
}

#[test]
fn test_unset_missing_key_changes_nothing() {
    let t = Test::seeded();
    let store_before = t.store_contents();

    let output = t.unset(&["rails", "database-url", "nope"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "\"nope\"");
    assert_eq!(t.store_contents(), store_before);
}

#[test]
fn test_unset_missing_secret() {
    let t = Test::seeded();

    let output = t.unset(&["nope", "a"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "get current secret \"nope\"");
}
