//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    for command in ["dump", "list", "load", "set", "unset", "version"] {
        assert_stdout_contains(&output, command);
    }
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_command() {
    let t = Test::new();

    let output = t.cmd().arg("version").output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).starts_with(&format!(
        "k8sec version {}, build ",
        env!("CARGO_PKG_VERSION")
    )));
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "k8sec");
}

#[test]
fn test_not_found_prints_hint() {
    let t = Test::seeded();

    let output = t.dump(&["nope"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "✗ get secret \"nope\"");
    assert_stderr_contains(&output, "→ check the namespace with --namespace");
}

#[test]
fn test_corrupt_store_fails() {
    let t = Test::with_store("[[secrets]]\nnamespace = \"test\"\nname = \"x\"\n[secrets.data]\nk = \"!!\"\n");

    let output = t.dump(&["x"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "corrupt");
}

#[test]
fn test_debug_prints_error_detail() {
    let t = Test::seeded();

    let output = t.dump(&["--debug", "nope"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "NotFound");
}
