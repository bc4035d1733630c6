//! Asset provisioning errors

use super::CssfirstError;

/// Creates the fatal error raised when no copy of the asset is available
pub fn missing(path: impl Into<String>, reason: impl Into<String>) -> CssfirstError {
    CssfirstError::MissingRequiredAsset {
        path: path.into(),
        reason: reason.into(),
    }
}
