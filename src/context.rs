//! Build context shared by the commands of one invocation

use std::path::PathBuf;
use std::time::Duration;

use crate::asset::RemoteAsset;
use crate::error::Result;
use crate::project::Project;
use crate::transport::Transports;

/// Everything the registered commands need, resolved once at startup
pub struct BuildContext {
    pub project: Project,
    pub asset: RemoteAsset,
    pub transports: Transports,

    /// Suppress the download spinner
    pub quiet: bool,
}

impl BuildContext {
    pub fn new(project: Project, asset: RemoteAsset, transports: Transports, quiet: bool) -> Self {
        Self {
            project,
            asset,
            transports,
            quiet,
        }
    }

    /// Resolve the project, asset URL and HTTP transports from CLI options
    pub fn resolve(project: Option<PathBuf>, quiet: bool) -> Result<Self> {
        let project = Project::resolve(project)?;
        let timeout = Duration::from_secs(project.config().timeout_secs);
        let transports = Transports::resolve(timeout)?;

        log::debug!(
            "Project root: {}, timeout: {}s",
            project.root().display(),
            timeout.as_secs()
        );

        Ok(Self::new(project, RemoteAsset::from_env(), transports, quiet))
    }
}
