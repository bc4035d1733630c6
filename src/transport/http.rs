//! Blocking HTTP transport built on reqwest

use std::time::Duration;

use reqwest::blocking::{Client, ClientBuilder};

use super::{Transport, describe_chain, looks_like_security_failure};
use crate::error::{CssfirstError, Result, fs::io_error, transport};

/// TLS implementation backing an [`HttpTransport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsBackend {
    Rustls,
    #[cfg(feature = "native-tls")]
    Native,
}

impl TlsBackend {
    fn name(self) -> &'static str {
        match self {
            TlsBackend::Rustls => "rustls",
            #[cfg(feature = "native-tls")]
            TlsBackend::Native => super::FALLBACK_NAME,
        }
    }
}

/// GET-only client with a bounded timeout
pub struct HttpTransport {
    client: Client,
    backend: TlsBackend,
}

impl HttpTransport {
    /// Transport on the rustls stack
    pub fn rustls(timeout: Duration) -> Result<Self> {
        let builder = Client::builder().use_rustls_tls();
        Self::build(builder, timeout, TlsBackend::Rustls)
    }

    /// Transport on the platform TLS stack (OpenSSL, SChannel or Security.framework)
    #[cfg(feature = "native-tls")]
    pub fn native(timeout: Duration) -> Result<Self> {
        let builder = Client::builder().use_native_tls();
        Self::build(builder, timeout, TlsBackend::Native)
    }

    fn build(builder: ClientBuilder, timeout: Duration, backend: TlsBackend) -> Result<Self> {
        let client = builder
            .user_agent(format!("cssfirst/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| {
                io_error(format!(
                    "failed to create {} HTTP client: {}",
                    backend.name(),
                    describe_chain(&e)
                ))
            })?;

        Ok(Self { client, backend })
    }
}

impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        self.backend.name()
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| classify(url, e))?;

        let body = response.bytes().map_err(|e| classify(url, e))?;
        Ok(body.to_vec())
    }
}

/// Map a reqwest failure onto the transport taxonomy
fn classify(url: &str, err: reqwest::Error) -> CssfirstError {
    // The URL is reported separately and must not feed the TLS heuristics
    let err = err.without_url();
    let description = describe_chain(&err);

    if err.status().is_none() && looks_like_security_failure(&description) {
        transport::security_negotiation(url, description)
    } else {
        transport::failed(url, description)
    }
}
