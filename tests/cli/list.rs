//! Tests for `k8sec list`.

use crate::support::*;

#[test]
fn test_list_namespace_table() {
    let t = Test::seeded();

    let output = t.list(&[]);
    assert_success(&output);
    assert_eq!(stdout(&output), NAMESPACE_TABLE);
}

#[test]
fn test_list_one_secret_base64() {
    let t = Test::seeded();

    let output = t.list(&["--base64", "rails"]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "NAME\tTYPE\tKEY\t\tVALUE\n\
         rails\tOpaque\tdatabase-url\tcG9zdGdyZXM6Ly9leGFtcGxlLmNvbTo1NDMyL2RibmFtZQ==\n\
         rails\tOpaque\trails-env\tcHJvZHVjdGlvbg==\n"
    );
}

#[test]
fn test_list_empty_namespace_prints_header() {
    let t = Test::new();

    let output = t.list(&[]);
    assert_success(&output);
    assert_eq!(stdout(&output), "NAME\tTYPE\tKEY\tVALUE\n");
}

#[test]
fn test_list_missing_secret_fails() {
    let t = Test::seeded();

    let output = t.list(&["nope"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "get secret \"nope\"");
    assert!(stdout(&output).is_empty());
}
