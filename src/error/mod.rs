//! Error types and handling for cssfirst
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`transport`]: Network retrieval errors
//! - [`asset`]: Asset provisioning errors
//! - [`command`]: Command registry and lifecycle errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod asset;
pub mod command;
pub mod config;
pub mod fs;
pub mod transport;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for cssfirst operations
#[derive(Error, Diagnostic, Debug)]
pub enum CssfirstError {
    // Transport errors
    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(
        code(cssfirst::transport::failed),
        help("Check your network connection or set CSSFIRST_CDN_BASE to a reachable mirror")
    )]
    TransportError { url: String, reason: String },

    #[error("Secure connection to {url} could not be negotiated: {reason}")]
    #[diagnostic(code(cssfirst::transport::security_negotiation))]
    SecurityNegotiationError { url: String, reason: String },

    #[error("{cause}; fallback transport '{transport}' is not available in this build")]
    #[diagnostic(
        code(cssfirst::transport::dependency_unavailable),
        help("Rebuild with `--features native-tls` to retry with the platform TLS stack")
    )]
    DependencyUnavailable { transport: String, cause: String },

    // Asset errors
    #[error("Need notebook CSS to proceed: {path} ({reason})")]
    #[diagnostic(
        code(cssfirst::asset::missing),
        help("No cached copy exists; run `cssfirst css` once with network access")
    )]
    MissingRequiredAsset { path: String, reason: String },

    // Command errors
    #[error("Unknown command: {name}")]
    #[diagnostic(
        code(cssfirst::command::unknown),
        help("Declare the command under `commands:` in cssfirst.yaml")
    )]
    UnknownCommand { name: String },

    #[error("Command '{name}' is already registered")]
    #[diagnostic(code(cssfirst::command::duplicate))]
    DuplicateCommand { name: String },

    #[error("Command '{name}' requires itself while it is running")]
    #[diagnostic(code(cssfirst::command::cycle))]
    CommandCycle { name: String },

    #[error("Command '{name}' failed with {status}")]
    #[diagnostic(code(cssfirst::command::failed))]
    LifecycleCommandFailed { name: String, status: String },

    #[error("Failed to start '{program}' for command '{name}': {reason}")]
    #[diagnostic(
        code(cssfirst::command::spawn_failed),
        help("Check that the program is installed and on PATH")
    )]
    LifecycleSpawnFailed {
        name: String,
        program: String,
        reason: String,
    },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(cssfirst::command::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // Project errors
    #[error("Project directory not found: {path}")]
    #[diagnostic(
        code(cssfirst::project::not_found),
        help("Pass an existing directory with --project or CSSFIRST_PROJECT")
    )]
    ProjectNotFound { path: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(cssfirst::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(cssfirst::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(cssfirst::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(cssfirst::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(cssfirst::fs::io_error))]
    IoError { message: String },
}

impl CssfirstError {
    /// Whether the failure came from the TLS layer rather than the network itself
    pub fn is_security_negotiation(&self) -> bool {
        matches!(self, CssfirstError::SecurityNegotiationError { .. })
    }
}

impl From<std::io::Error> for CssfirstError {
    fn from(err: std::io::Error) -> Self {
        CssfirstError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CssfirstError {
    fn from(err: serde_yaml::Error) -> Self {
        CssfirstError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CssfirstError {
    fn from(err: serde_json::Error) -> Self {
        CssfirstError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CssfirstError>;
