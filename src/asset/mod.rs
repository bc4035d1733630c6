//! The pinned notebook stylesheet and the signals that decide whether to fetch it
//!
//! The version is compiled in. Only the CDN base can be redirected, through
//! `CSSFIRST_CDN_BASE`, so mirrors and local test servers receive the same
//! `<version>/<path>` suffix as the real CDN.

pub mod presence;

pub use presence::PresenceSignal;

use std::fmt;

/// Default CDN serving the notebook static files
pub const CDN_BASE: &str = "https://cdn.jupyter.org/notebook";

/// Pinned notebook release the stylesheet is taken from
pub const CSS_VERSION: &str = "4.0.0-dev";

/// Path of the stylesheet below the version directory
pub const ASSET_PATH: &str = "style/style.min.css";

/// Environment variable overriding [`CDN_BASE`]
pub const CDN_BASE_ENV: &str = "CSSFIRST_CDN_BASE";

/// Immutable reference to the remote stylesheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAsset {
    url: String,
}

impl RemoteAsset {
    /// Build the reference against an explicit CDN base
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            url: format!("{base}/{CSS_VERSION}/{ASSET_PATH}"),
        }
    }

    /// Build the reference against the default CDN or the environment override
    pub fn from_env() -> Self {
        match std::env::var(CDN_BASE_ENV) {
            Ok(base) if !base.trim().is_empty() => Self::with_base(base.trim()),
            _ => Self::default(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn version(&self) -> &'static str {
        CSS_VERSION
    }
}

impl Default for RemoteAsset {
    fn default() -> Self {
        Self::with_base(CDN_BASE)
    }
}

impl fmt::Display for RemoteAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
