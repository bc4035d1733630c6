//! Transport errors

use super::CssfirstError;

/// Creates a generic transport failure
pub fn failed(url: impl Into<String>, reason: impl Into<String>) -> CssfirstError {
    CssfirstError::TransportError {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates a TLS negotiation failure
pub fn security_negotiation(url: impl Into<String>, reason: impl Into<String>) -> CssfirstError {
    CssfirstError::SecurityNegotiationError {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a fallback transport that was not compiled in
///
/// `cause` is the primary transport's failure that called for the fallback.
pub fn dependency_unavailable(
    transport: impl Into<String>,
    cause: impl Into<String>,
) -> CssfirstError {
    CssfirstError::DependencyUnavailable {
        transport: transport.into(),
        cause: cause.into(),
    }
}
