//! Common test utilities for debtbook CLI tests.
//!
//! `TestEnv` gives each test its own config directory and ledger file so
//! nothing touches the real user data.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Result of running a debtbook CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as a single JSON object.
    pub fn json(&self) -> Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({e}):\nstdout:\n{}\nstderr:\n{}",
                self.stdout, self.stderr
            )
        })
    }
}

pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn data_path(&self) -> PathBuf {
        self.dir.path().join("data/debts.json")
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_data(&self, content: impl AsRef<[u8]>) {
        let path = self.data_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn read_data(&self) -> Value {
        let content = fs::read_to_string(self.data_path()).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_debtbook"));
        cmd.current_dir(self.dir.path())
            .env("DEBTBOOK_CONFIG_HOME", self.config_home())
            .env("DEBTBOOK_DATA_PATH", self.data_path())
            .env("NO_COLOR", "1")
            .env_remove("DEBTBOOK_COLOR")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self.command().args(args).output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Run with `--json` and assert success.
    pub fn json(&self, args: &[&str]) -> Value {
        let mut full = args.to_vec();
        full.push("--json");
        let result = self.run(&full);
        assert!(
            result.success,
            "command {:?} failed:\nstdout:\n{}\nstderr:\n{}",
            args, result.stdout, result.stderr
        );
        result.json()
    }
}
