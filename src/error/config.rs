//! Configuration errors

use super::CssfirstError;

/// Creates a configuration parse error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> CssfirstError {
    CssfirstError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid configuration error
pub fn invalid(message: impl Into<String>) -> CssfirstError {
    CssfirstError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a project not found error
pub fn project_not_found(path: impl Into<String>) -> CssfirstError {
    CssfirstError::ProjectNotFound { path: path.into() }
}
