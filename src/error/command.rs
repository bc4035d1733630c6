//! Command registry and lifecycle errors

use super::CssfirstError;

/// Creates an unknown command error
pub fn unknown(name: impl Into<String>) -> CssfirstError {
    CssfirstError::UnknownCommand { name: name.into() }
}

/// Creates a duplicate registration error
pub fn duplicate(name: impl Into<String>) -> CssfirstError {
    CssfirstError::DuplicateCommand { name: name.into() }
}

/// Creates an error for a lifecycle program that exited unsuccessfully
pub fn failed(name: impl Into<String>, status: impl Into<String>) -> CssfirstError {
    CssfirstError::LifecycleCommandFailed {
        name: name.into(),
        status: status.into(),
    }
}

/// Creates an error for a lifecycle program that could not be started
pub fn spawn_failed(
    name: impl Into<String>,
    program: impl Into<String>,
    reason: impl Into<String>,
) -> CssfirstError {
    CssfirstError::LifecycleSpawnFailed {
        name: name.into(),
        program: program.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a command that requires itself while running
pub fn cycle(name: impl Into<String>) -> CssfirstError {
    CssfirstError::CommandCycle { name: name.into() }
}

/// Creates an error for a shell clap_complete cannot generate for
pub fn unsupported_shell(shell: impl Into<String>) -> CssfirstError {
    CssfirstError::UnsupportedShell {
        shell: shell.into(),
    }
}
