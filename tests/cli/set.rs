//! Tests for `k8sec set`.

use crate::support::*;

#[test]
fn test_set_creates_secret() {
    let t = Test::new();

    let output = t.set(&["rails", "rails-env=production"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "rails\n");

    let output = t.list(&["rails"]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "NAME\tTYPE\tKEY\t\tVALUE\nrails\tOpaque\trails-env\t\"production\"\n"
    );
}

#[test]
fn test_set_overwrites_and_keeps_other_keys() {
    let t = Test::seeded();

    assert_success(&t.set(&["rails", "rails-env=staging", "new=1"]));

    assert_dump(
        &t,
        "rails",
        "database-url=\"postgres://example.com:5432/dbname\"\n\
         new=\"1\"\n\
         rails-env=\"staging\"\n",
    );
}

#[test]
fn test_set_keeps_equals_in_value() {
    let t = Test::new();

    assert_success(&t.set(&["app", "query=a=b=c"]));

    assert_dump(&t, "app", "query=\"a=b=c\"\n");
}

#[test]
fn test_set_base64() {
    let t = Test::new();

    assert_success(&t.set(&["--base64", "app", "foo=ZHRhbjQ="]));

    assert_dump(&t, "app", "foo=\"dtan4\"\n");
}

#[test]
fn test_set_invalid_base64_writes_nothing() {
    let t = Test::new();

    let output = t.set(&["--base64", "app", "foo=dtan4!"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "base64");
    assert!(!t.store_path().exists());
}

#[test]
fn test_set_invalid_argument() {
    let t = Test::seeded();

    let output = t.set(&["rails", "novalue"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "argument should be in key=value format");
}

#[test]
fn test_set_requires_pairs() {
    let t = Test::seeded();

    let output = t.set(&["rails"]);
    assert_failure(&output);
}

#[cfg(unix)]
#[test]
fn test_set_writes_owner_only_store() {
    let t = Test::new();

    assert_success(&t.set(&["rails", "password=hunter2"]));

    assert_store_owner_only(&t);
}

#[cfg(unix)]
#[test]
fn test_set_tightens_existing_store() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::seeded();
    std::fs::set_permissions(t.store_path(), std::fs::Permissions::from_mode(0o644)).unwrap();

    assert_success(&t.set(&["rails", "rails-env=staging"]));

    assert_store_owner_only(&t);
}
