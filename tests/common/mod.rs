//! Shared testing utilities for carta CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `carta` binary within the
    /// working directory. `CARTA_FILE` is cleared so tests that opt into it
    /// set it explicitly per command.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("carta").expect("Failed to locate carta binary");
        cmd.current_dir(&self.work_dir).env_remove("CARTA_FILE");
        cmd
    }

    /// Path to the default menu file in the working directory.
    pub fn menu_path(&self) -> PathBuf {
        self.work_dir.join("menu.json")
    }

    pub fn write_menu(&self, content: &str) {
        fs::write(self.menu_path(), content).expect("Failed to write menu file");
    }

    pub fn read_menu(&self) -> String {
        fs::read_to_string(self.menu_path()).expect("Failed to read menu file")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("carta.toml"), content).expect("Failed to write carta.toml");
    }

    /// Assert the default menu file exists.
    pub fn assert_menu_exists(&self) {
        assert!(
            self.menu_path().exists(),
            "menu file should exist at {}",
            self.menu_path().display()
        );
    }
}
