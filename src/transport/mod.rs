//! Transports that retrieve the stylesheet
//!
//! The primary transport speaks TLS through rustls. When it cannot negotiate
//! with the server, the fetcher retries once through the platform TLS stack,
//! which only exists when the crate is built with the `native-tls` feature.
//! Availability of that fallback is resolved once, when [`Transports`] is
//! built, and carried as an `Option` from then on.

pub mod http;

pub use http::HttpTransport;

use std::time::Duration;

use crate::error::Result;

/// Name reported for the fallback transport, also used in diagnostics
pub const FALLBACK_NAME: &str = "native-tls";

/// A way of performing a single unauthenticated GET
pub trait Transport {
    /// Short name used in logs and outcome reports
    fn name(&self) -> &'static str;

    /// Fetch the full body at `url`
    ///
    /// Failures are reported as `TransportError` or, when the TLS layer was
    /// the cause, `SecurityNegotiationError`.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Primary transport plus the optional fallback
pub struct Transports {
    primary: Box<dyn Transport>,
    fallback: Option<Box<dyn Transport>>,
}

impl Transports {
    pub fn new(primary: Box<dyn Transport>, fallback: Option<Box<dyn Transport>>) -> Self {
        Self { primary, fallback }
    }

    /// Build the HTTP transports available in this binary
    pub fn resolve(timeout: Duration) -> Result<Self> {
        let primary = Box::new(HttpTransport::rustls(timeout)?);
        let fallback = fallback_transport(timeout)?;

        if fallback.is_none() {
            log::debug!("Built without {FALLBACK_NAME}; no fallback transport");
        }

        Ok(Self::new(primary, fallback))
    }

    pub fn primary(&self) -> &dyn Transport {
        self.primary.as_ref()
    }

    pub fn fallback(&self) -> Option<&dyn Transport> {
        self.fallback.as_deref()
    }
}

#[cfg(feature = "native-tls")]
fn fallback_transport(timeout: Duration) -> Result<Option<Box<dyn Transport>>> {
    Ok(Some(Box::new(HttpTransport::native(timeout)?)))
}

#[cfg(not(feature = "native-tls"))]
fn fallback_transport(_timeout: Duration) -> Result<Option<Box<dyn Transport>>> {
    Ok(None)
}

/// Whether an error description points at TLS negotiation rather than the network
pub fn looks_like_security_failure(description: &str) -> bool {
    const MARKERS: &[&str] = &["ssl", "tls", "certificate", "handshake"];

    let lower = description.to_lowercase();
    MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Join an error and all of its sources into one line
pub fn describe_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !parts.iter().any(|p| p.contains(&text)) {
            parts.push(text);
        }
        source = cause.source();
    }
    parts.join(": ")
}
