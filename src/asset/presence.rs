//! Presence signal: does the destination exist, and are we in a source checkout?

use serde::Serialize;

use crate::project::Project;

/// Local facts that decide whether the stylesheet has to be fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresenceSignal {
    /// The destination file already exists
    pub destination_exists: bool,

    /// The project root is a git working copy rather than an unpacked distribution
    pub source_checkout: bool,
}

impl PresenceSignal {
    /// Inspect the project on disk
    pub fn detect(project: &Project) -> Self {
        Self {
            destination_exists: project.destination().exists(),
            source_checkout: project.is_source_checkout(),
        }
    }

    /// Packaged distributions ship the stylesheet and must not touch the network.
    /// Source checkouts always refresh.
    pub fn needs_fetch(&self) -> bool {
        self.source_checkout || !self.destination_exists
    }
}
