//! Run-before composition
//!
//! [`asset_first`] wraps any command so that the stylesheet fetch registered
//! under [`FETCH_COMMAND`] completes before the wrapped command starts.

use super::{Command, Session};
use crate::error::Result;

/// Name the stylesheet fetch is registered under
pub const FETCH_COMMAND: &str = "css";

/// Adapter returned by [`asset_first`]
pub struct AssetFirst<C> {
    inner: C,
}

/// Wrap `command` so the stylesheet is provisioned first
pub fn asset_first<C: Command>(command: C) -> AssetFirst<C> {
    AssetFirst { inner: command }
}

impl<C: Command> Command for AssetFirst<C> {
    fn run(&self, session: &mut Session<'_>) -> Result<()> {
        session.run_command(FETCH_COMMAND)?;
        self.inner.run(session)
    }
}
