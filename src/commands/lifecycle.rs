//! Entry point for `css`, `build`, `sdist` and `develop`

use std::path::PathBuf;

use super::{Session, standard_registry};
use crate::context::BuildContext;
use crate::error::Result;

/// Run the registered command `name` in a fresh session
pub fn run(project: Option<PathBuf>, quiet: bool, name: &str) -> Result<()> {
    let ctx = BuildContext::resolve(project, quiet)?;
    let registry = standard_registry(&ctx)?;
    log::debug!(
        "Registered commands: {}",
        registry.names().collect::<Vec<_>>().join(", ")
    );

    let mut session = Session::new(&registry);
    session.run_command(name)?;

    log::debug!("Completed: {}", session.completed().join(", "));
    Ok(())
}
