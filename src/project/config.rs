//! Project configuration (cssfirst.yaml)
//!
//! Declares which external programs sit behind the lifecycle commands and how
//! long a transport may block. The stylesheet version and destination are not
//! configurable here.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};

/// Configuration filename looked up at the project root
pub const CONFIG_FILE: &str = "cssfirst.yaml";

/// Lifecycle commands that may be declared under `commands:`
pub const LIFECYCLE_COMMANDS: &[&str] = &["build", "sdist", "develop"];

/// Default network timeout for each transport attempt
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Project configuration (cssfirst.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Per-attempt timeout in seconds for both transports
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Lifecycle command name to program argv
    /// Key: lifecycle command (e.g., "build")
    /// Value: program and arguments (e.g., ["python", "-m", "build", "--wheel"])
    #[serde(default = "default_commands")]
    pub commands: BTreeMap<String, Vec<String>>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_commands() -> BTreeMap<String, Vec<String>> {
    let argv = |parts: &[&str]| parts.iter().map(|s| (*s).to_string()).collect::<Vec<_>>();

    BTreeMap::from([
        (
            "build".to_string(),
            argv(&["python", "-m", "build", "--wheel"]),
        ),
        (
            "sdist".to_string(),
            argv(&["python", "-m", "build", "--sdist"]),
        ),
        (
            "develop".to_string(),
            argv(&["python", "-m", "pip", "install", "-e", "."]),
        ),
    ])
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            commands: default_commands(),
        }
    }
}

impl ProjectConfig {
    /// Parse and validate configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `cssfirst.yaml` from the project root, falling back to defaults
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            log::debug!("No {} at {}, using defaults", CONFIG_FILE, root.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            crate::error::fs::read_failed(path.display().to_string(), e.to_string())
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            crate::error::CssfirstError::ConfigParseFailed { reason, .. } => {
                config::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Program argv declared for a lifecycle command
    pub fn command(&self, name: &str) -> Option<&[String]> {
        self.commands.get(name).map(Vec::as_slice)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(config::invalid("timeout_secs must be greater than zero"));
        }

        for (name, argv) in &self.commands {
            if !LIFECYCLE_COMMANDS.contains(&name.as_str()) {
                return Err(config::invalid(format!(
                    "unsupported command '{}' (expected one of: {})",
                    name,
                    LIFECYCLE_COMMANDS.join(", ")
                )));
            }
            if argv.first().is_none_or(|program| program.trim().is_empty()) {
                return Err(config::invalid(format!(
                    "command '{name}' has an empty program"
                )));
            }
        }

        Ok(())
    }
}
