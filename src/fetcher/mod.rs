//! Stylesheet fetcher
//!
//! Guarantees that the project's destination holds the stylesheet before
//! dependent commands run:
//!
//! 1. Unpacked distributions that already ship the file are left alone and no
//!    network access happens.
//! 2. Otherwise the primary transport is tried. A TLS negotiation failure is
//!    retried once on the fallback transport, if this build has one.
//! 3. When nothing could be downloaded, an existing copy is kept with a
//!    warning. Without a copy the build cannot continue.

pub mod writer;

use std::fmt;

use serde::Serialize;

use crate::asset::{PresenceSignal, RemoteAsset};
use crate::error::{CssfirstError, Result, asset::missing, transport::dependency_unavailable};
use crate::hash;
use crate::project::Project;
use crate::transport::{FALLBACK_NAME, Transport, Transports};

/// How the destination was satisfied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// Not a source checkout and the file is already there
    Packaged,

    /// A transport returned the body and it was written
    Downloaded {
        transport: &'static str,
        bytes: usize,
        changed: bool,
    },

    /// Download failed; the previous copy was kept
    Stale { reason: String },
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchOutcome::Packaged => write!(f, "already packaged"),
            FetchOutcome::Downloaded {
                transport,
                bytes,
                changed,
            } => write!(
                f,
                "downloaded {} bytes via {}{}",
                bytes,
                transport,
                if *changed { "" } else { " (unchanged)" }
            ),
            FetchOutcome::Stale { .. } => write!(f, "kept existing copy"),
        }
    }
}

/// Fetches the remote asset into a project
pub struct Fetcher<'a> {
    asset: &'a RemoteAsset,
    project: &'a Project,
    primary: &'a dyn Transport,
    fallback: Option<&'a dyn Transport>,
}

impl<'a> Fetcher<'a> {
    pub fn new(asset: &'a RemoteAsset, project: &'a Project, transports: &'a Transports) -> Self {
        Self::with_transports(asset, project, transports.primary(), transports.fallback())
    }

    pub fn with_transports(
        asset: &'a RemoteAsset,
        project: &'a Project,
        primary: &'a dyn Transport,
        fallback: Option<&'a dyn Transport>,
    ) -> Self {
        Self {
            asset,
            project,
            primary,
            fallback,
        }
    }

    /// Make sure the destination holds the stylesheet
    pub fn ensure_present(&self) -> Result<FetchOutcome> {
        let signal = PresenceSignal::detect(self.project);
        if !signal.needs_fetch() {
            log::debug!(
                "Not running from a source checkout and {} exists, nothing to do",
                self.project.destination().display()
            );
            return Ok(FetchOutcome::Packaged);
        }

        log::info!("Downloading CSS: {}", self.asset);
        match self.download() {
            Ok((transport, body)) => self.store(transport, &body),
            Err(err) => self.keep_existing(err),
        }
    }

    fn download(&self) -> Result<(&'static str, Vec<u8>)> {
        let url = self.asset.url();

        match self.primary.fetch(url) {
            Ok(body) => Ok((self.primary.name(), body)),
            Err(err) if err.is_security_negotiation() => {
                let Some(fallback) = self.fallback else {
                    log::warn!("{err}; rebuild with --features {FALLBACK_NAME} to retry");
                    return Err(dependency_unavailable(FALLBACK_NAME, err.to_string()));
                };
                log::warn!("{err}; trying again with {}", fallback.name());
                fallback.fetch(url).map(|body| (fallback.name(), body))
            }
            Err(err) => Err(err),
        }
    }

    fn store(&self, transport: &'static str, body: &[u8]) -> Result<FetchOutcome> {
        let destination = self.project.destination();
        let previous = hash::hash_file(destination).ok();

        writer::replace_file(destination, body)?;
        log::info!("Downloaded notebook CSS to {}", destination.display());

        Ok(FetchOutcome::Downloaded {
            transport,
            bytes: body.len(),
            changed: previous.as_deref() != Some(hash::hash_bytes(body).as_str()),
        })
    }

    fn keep_existing(&self, err: CssfirstError) -> Result<FetchOutcome> {
        let destination = self.project.destination();

        if destination.exists() {
            log::warn!("Failed to download CSS from {}: {}", self.asset, err);
            log::warn!("Already have CSS: {}, moving on", destination.display());
            Ok(FetchOutcome::Stale {
                reason: err.to_string(),
            })
        } else {
            Err(missing(destination.display().to_string(), err.to_string()))
        }
    }
}
