//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a k8sec command bound to this environment's store file.
    ///
    /// Logging and color are pinned so stderr assertions stay stable.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("k8sec").expect("failed to find k8sec binary");
        cmd.env("K8SEC_STORE_FILE", self.store_path());
        cmd.env_remove("K8SEC_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run k8sec with `args` in the test namespace.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(["--namespace", "test"])
            .args(args)
            .output()
            .expect("failed to run k8sec")
    }

    /// Shortcut for `k8sec dump`.
    pub fn dump(&self, args: &[&str]) -> Output {
        let mut all = vec!["dump"];
        all.extend_from_slice(args);
        self.run(&all)
    }

    /// Shortcut for `k8sec list`.
    pub fn list(&self, args: &[&str]) -> Output {
        let mut all = vec!["list"];
        all.extend_from_slice(args);
        self.run(&all)
    }

    /// Shortcut for `k8sec set`.
    pub fn set(&self, args: &[&str]) -> Output {
        let mut all = vec!["set"];
        all.extend_from_slice(args);
        self.run(&all)
    }

    /// Shortcut for `k8sec unset`.
    pub fn unset(&self, args: &[&str]) -> Output {
        let mut all = vec!["unset"];
        all.extend_from_slice(args);
        self.run(&all)
    }

    /// Shortcut for `k8sec load NAME` reading `input` from stdin.
    pub fn load_stdin(&self, name: &str, input: &str) -> Output {
        self.cmd()
            .args(["--namespace", "test", "load", name])
            .write_stdin(input)
            .output()
            .expect("failed to run k8sec load")
    }
}
