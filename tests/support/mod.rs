#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use todo::Task;

/// Isolated config dir + database for one test
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("todo.json")
    }

    /// `todo` binary pointed at this environment's config dir
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("todo").expect("binary");
        cmd.env("TODO_CONFIG_DIR", self.config_dir())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .current_dir(self.dir.path());
        cmd
    }

    /// Run `todo init` against this environment's database
    pub fn init(&self) -> &Self {
        self.cmd()
            .arg("init")
            .arg("--db-path")
            .arg(self.db_path())
            .assert()
            .success();
        self
    }

    pub fn add(&self, words: &[&str], priority: i64) -> &Self {
        self.cmd()
            .arg("add")
            .args(words)
            .args(["--priority", &priority.to_string()])
            .assert()
            .success();
        self
    }

    pub fn write_db(&self, contents: &str) -> std::io::Result<()> {
        fs::write(self.db_path(), contents)
    }

    pub fn read_tasks(&self) -> Result<Vec<Task>, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(self.db_path())?;
        Ok(serde_json::from_str(&contents)?)
    }
}
