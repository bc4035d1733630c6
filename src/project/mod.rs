//! Project management for cssfirst
//!
//! A project is the source tree the stylesheet is provisioned into:
//!
//! ```text
//! <root>/
//! ├── .git/                              # present in source checkouts only
//! ├── cssfirst.yaml                      # optional lifecycle configuration
//! └── nbconvert/resources/style.min.css  # fetched stylesheet
//! ```

pub mod config;

pub use config::ProjectConfig;

use std::path::{Path, PathBuf};

use normpath::PathExt;

use crate::error::{Result, config::project_not_found};

/// Stylesheet location relative to the project root
pub const DESTINATION: &str = "nbconvert/resources/style.min.css";

/// Entry at the project root that marks a source checkout
const GIT_MARKER: &str = ".git";

/// Represents the project a command runs against
#[derive(Debug, Clone)]
pub struct Project {
    /// Root directory of the project
    root: PathBuf,

    /// Absolute path of the stylesheet
    destination: PathBuf,

    /// Configuration (cssfirst.yaml or defaults)
    config: ProjectConfig,
}

impl Project {
    /// Open the project rooted at `root`, loading its configuration
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(project_not_found(root.display().to_string()));
        }

        // Normalize for symlinked temp dirs (macOS /var -> /private/var)
        let root = root
            .normalize()
            .map(|np| np.into_path_buf())
            .unwrap_or_else(|_| root.to_path_buf());

        let config = ProjectConfig::load(&root)?;
        Ok(Self::with_config(root, config))
    }

    /// Open the explicitly selected project, or the current directory
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        let root = match explicit {
            Some(path) => path,
            None => std::env::current_dir()?,
        };
        Self::open(&root)
    }

    /// Build a project from already-loaded configuration
    pub fn with_config(root: PathBuf, config: ProjectConfig) -> Self {
        let destination = root.join(DESTINATION);
        Self {
            root,
            destination,
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Whether the root carries a `.git` marker
    ///
    /// The marker may be a directory or a worktree's `.git` file; its contents
    /// and owner are not inspected. Only the root itself is checked, so an
    /// unpacked archive nested inside some other repository is still a
    /// packaged distribution.
    pub fn is_source_checkout(&self) -> bool {
        self.root.join(GIT_MARKER).exists()
    }
}
