//! Tests for `k8sec dump`.

use crate::support::*;

#[test]
fn test_dump_one_secret() {
    let t = Test::seeded();

    assert_dump(
        &t,
        "rails",
        "database-url=\"postgres://example.com:5432/dbname\"\nrails-env=\"production\"\n",
    );
}

#[test]
fn test_dump_namespace_merges_and_sorts() {
    let t = Test::seeded();

    let output = t.dump(&[]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "ca.crt=\"thisiscrt\"\n\
         database-url=\"postgres://example.com:5432/dbname\"\n\
         namespace=\"test\"\n\
         rails-env=\"production\"\n\
         token=\"thisistoken\"\n"
    );
}

#[test]
fn test_dump_noquotes() {
    let t = Test::seeded();

    let output = t.dump(&["--noquotes", "rails"]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "database-url=postgres://example.com:5432/dbname\nrails-env=production\n"
    );
}

#[test]
fn test_dump_to_file() {
    let t = Test::seeded();

    let output = t.dump(&["-f", ".env", "rails"]);
    assert_success(&output);
    assert!(stdout(&output).is_empty());

    let written = std::fs::read_to_string(t.path(".env")).unwrap();
    assert_eq!(
        written,
        "database-url=\"postgres://example.com:5432/dbname\"\nrails-env=\"production\"\n"
    );
}

#[cfg(unix)]
#[test]
fn test_dump_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::seeded();
    assert_success(&t.dump(&["-f", ".env", "rails"]));

    let mode = std::fs::metadata(t.path(".env")).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_dump_other_namespace() {
    let t = Test::seeded();

    let output = t
        .cmd()
        .args(["dump", "--namespace", "other", "rails"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "rails-env=\"staging\"\n");
}

#[test]
fn test_dump_uses_store_default_namespace() {
    let t = Test::with_store(DEFAULT_NAMESPACE_STORE);

    let output = t.cmd().args(["dump", "web"]).output().unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "port=\"8080\"\n");
}
