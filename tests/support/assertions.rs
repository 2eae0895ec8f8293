//! Assertions over k8sec process output.

use std::process::Output;

/// Lossy stdout of a finished k8sec run.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lossy stderr of a finished k8sec run.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// The run exited 0; otherwise fail with its stderr.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "k8sec exited with {}:\n{}",
        output.status,
        stderr(output)
    );
}

/// The run exited non-zero.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "k8sec unexpectedly succeeded, stdout:\n{}",
        stdout(output)
    );
}

pub fn assert_stdout_contains(output: &Output, needle: &str) {
    let out = stdout(output);
    assert!(out.contains(needle), "{needle:?} not in stdout:\n{out}");
}

pub fn assert_stderr_contains(output: &Output, needle: &str) {
    let err = stderr(output);
    assert!(err.contains(needle), "{needle:?} not in stderr:\n{err}");
}

/// `k8sec dump NAME` prints exactly `expected`.
pub fn assert_dump(t: &super::Test, name: &str, expected: &str) {
    let output = t.dump(&[name]);
    assert_success(&output);
    assert_eq!(stdout(&output), expected);
}

/// The store file exists and only its owner can read or write it.
#[cfg(unix)]
pub fn assert_store_owner_only(t: &super::Test) {
    use std::os::unix::fs::PermissionsExt;

    let mode = std::fs::metadata(t.store_path())
        .expect("store file missing")
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600, "store file mode {:o}", mode & 0o777);
}
