//! Test support utilities for ladle integration tests.
//!
//! Provides an isolated environment per test and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working dir and home dir. Child processes get
/// `.current_dir()` and env overrides, so tests can run in parallel.
pub struct Test {
    /// Working directory; recipe files live here
    pub dir: TempDir,
    /// Temporary home directory, also holding the config file
    pub home: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        Self { dir, home }
    }

    /// Create a test environment with a recipe file already written.
    pub fn with_recipe(name: &str, json: &str) -> Self {
        let t = Self::new();
        t.write(name, json);
        t
    }

    /// Path of a file inside the working dir.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file into the working dir.
    pub fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.path(name), contents).expect("failed to write fixture");
    }

    /// Read a file from the working dir.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("failed to read file")
    }

    /// Path the binary reads its config from.
    pub fn config_path(&self) -> PathBuf {
        self.home.path().join("config.toml")
    }

    /// Write the config file.
    pub fn write_config(&self, toml: &str) {
        std::fs::write(self.config_path(), toml).expect("failed to write config");
    }
}
