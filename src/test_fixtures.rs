//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Helpers create temp directories, git checkouts and projects with a single
//! call, plus scripted transports so fetch logic can be exercised without a
//! network.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_project, create_source_checkout, ScriptedTransport};
//!
//! #[test]
//! fn my_test() {
//!     // Unpacked distribution: no .git at the root
//!     let (temp, project) = create_project();
//!
//!     // Source checkout: git repository at the root
//!     let (temp, project) = create_source_checkout();
//!
//!     // Transport that always answers with the given body
//!     let transport = ScriptedTransport::body(b"CSS-V1");
//! }
//! ```

#![allow(clippy::expect_used)]

use std::cell::Cell;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::{Result, transport};
use crate::project::{Project, ProjectConfig};
use crate::transport::Transport;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create a temp directory with a git repository initialized.
///
/// # Panics
///
/// Panics if the temp directory or git repository cannot be created.
#[must_use]
pub fn create_git_repo() -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let path = temp.path().to_path_buf();
    git2::Repository::init(&path).expect("Failed to init git repository");
    (temp, path)
}

/// Create a project that looks like an unpacked distribution (no `.git`).
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_project() -> (TempDir, Project) {
    let temp = create_temp_dir();
    let project = Project::with_config(temp.path().to_path_buf(), ProjectConfig::default());
    (temp, project)
}

/// Create a project rooted at a fresh git repository.
///
/// # Panics
///
/// Panics if any step fails.
#[must_use]
pub fn create_source_checkout() -> (TempDir, Project) {
    let (temp, path) = create_git_repo();
    let project = Project::with_config(path, ProjectConfig::default());
    (temp, project)
}

/// Create a nested directory structure inside a temp dir.
///
/// # Panics
///
/// Panics if the directory cannot be created.
#[must_use]
pub fn create_nested_dir(temp: &TempDir, path: &str) -> PathBuf {
    let nested = temp.path().join(path);
    std::fs::create_dir_all(&nested).expect("Failed to create nested directory");
    nested
}

/// Write `content` to the project's stylesheet destination.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_destination(project: &Project, content: &[u8]) {
    let destination = project.destination();
    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(destination, content).expect("Failed to write destination");
}

/// Read the project's stylesheet destination.
///
/// # Panics
///
/// Panics if the file cannot be read.
#[must_use]
pub fn read_destination(project: &Project) -> Vec<u8> {
    std::fs::read(project.destination()).expect("Failed to read destination")
}

/// What a [`ScriptedTransport`] answers with
#[derive(Debug, Clone)]
pub enum Script {
    Body(Vec<u8>),
    TransportFailure(String),
    SecurityFailure(String),
}

/// Transport returning a fixed answer and counting calls
#[derive(Debug)]
pub struct ScriptedTransport {
    name: &'static str,
    script: Script,
    calls: Cell<usize>,
}

impl ScriptedTransport {
    pub fn body(body: &[u8]) -> Self {
        Self::new("scripted", Script::Body(body.to_vec()))
    }

    pub fn transport_failure(reason: &str) -> Self {
        Self::new("scripted", Script::TransportFailure(reason.to_string()))
    }

    pub fn security_failure(reason: &str) -> Self {
        Self::new("scripted", Script::SecurityFailure(reason.to_string()))
    }

    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    fn new(name: &'static str, script: Script) -> Self {
        Self {
            name,
            script,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Transport for ScriptedTransport {
    fn name(&self) -> &'static str {
        self.name
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.set(self.calls.get() + 1);
        match &self.script {
            Script::Body(body) => Ok(body.clone()),
            Script::TransportFailure(reason) => Err(transport::failed(url, reason.as_str())),
            Script::SecurityFailure(reason) => {
                Err(transport::security_negotiation(url, reason.as_str()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_git_repo() {
        let (temp, path) = create_git_repo();
        assert!(path.join(".git").exists());
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_source_checkout() {
        let (_temp, project) = create_source_checkout();
        assert!(project.is_source_checkout());
    }

    #[test]
    fn test_write_and_read_destination() {
        let (_temp, project) = create_project();
        write_destination(&project, b"body{}");
        assert_eq!(read_destination(&project), b"body{}");
    }

    #[test]
    fn test_scripted_transport_counts_calls() {
        let transport = ScriptedTransport::transport_failure("offline");
        assert!(transport.fetch("http://x").is_err());
        assert!(transport.fetch("http://x").is_err());
        assert_eq!(transport.calls(), 2);
    }
}
