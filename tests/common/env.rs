//! Isolated environment for running the permtree binary.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Result of running a permtree CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse every stdout line as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {line:?}: {e}"))
            })
            .collect()
    }
}

/// Temp working directory plus an empty HOME, so no user config leaks in
pub struct TestEnv {
    pub dir: TempDir,
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            home: tempfile::tempdir().unwrap(),
        }
    }

    /// Write a file into the working directory
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a user config into the isolated HOME
    pub fn write_user_config(&self, content: &str) {
        let roots = [
            self.home.path().join(".config"),
            self.home.path().join("Library").join("Application Support"),
        ];
        for root in roots {
            let dir = root.join("permtree");
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("config.toml"), content).unwrap();
        }
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_permtree"));
        cmd.current_dir(self.dir.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("TERM", "dumb")
            .env("NO_COLOR", "1")
            .env("LC_ALL", "C")
            .env_remove("RUST_LOG")
            .env_remove("PERMTREE_LINKAGE")
            .env_remove("PERMTREE_VERBOSITY")
            .env_remove("PERMTREE_UNICODE");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_command(self.command().args(args))
    }

    pub fn run_command(&self, cmd: &mut Command) -> TestResult {
        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
