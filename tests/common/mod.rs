//! Common test utilities for cssfirst integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Stylesheet location relative to the project root
pub const DESTINATION: &str = "nbconvert/resources/style.min.css";

/// Path the binary requests below the CDN base
pub const ASSET_PATH: &str = "/notebook/4.0.0-dev/style/style.min.css";

/// A throwaway project directory for integration tests
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create an empty project (looks like an unpacked distribution)
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a project that is a git working copy
    pub fn checkout() -> Self {
        let project = Self::new();
        git2::Repository::init(&project.path).expect("Failed to init git repository");
        project
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write cssfirst.yaml
    pub fn write_config(&self, yaml: &str) {
        self.write_file("cssfirst.yaml", yaml);
    }

    /// Command for the binary, pointed at this project and `cdn_base`
    pub fn cmd(&self, cdn_base: &str) -> Command {
        let mut cmd = cssfirst_cmd();
        cmd.arg("--project")
            .arg(&self.path)
            .arg("--quiet")
            .env("CSSFIRST_CDN_BASE", cdn_base);
        cmd
    }

    pub fn root(&self) -> &Path {
        &self.path
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Base URL nothing listens on
pub fn unreachable_base() -> String {
    "http://127.0.0.1:9/notebook".to_string()
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn cssfirst_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cssfirst").expect("cssfirst binary should be built");
    cmd.env_remove("CSSFIRST_PROJECT")
        .env_remove("CSSFIRST_CDN_BASE")
        .env_remove("RUST_LOG");
    cmd
}
