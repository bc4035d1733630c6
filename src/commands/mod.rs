//! Command implementations for cssfirst
//!
//! Two layers live here:
//! - the registry machinery: [`Command`], [`CommandRegistry`], [`Session`]
//!   and the [`asset_first`] composition
//! - the entry points `main` dispatches CLI subcommands to

pub mod completions;
pub mod compose;
pub mod external;
pub mod fetch_css;
pub mod lifecycle;
pub mod registry;
pub mod status;
pub mod version;

pub use compose::{FETCH_COMMAND, asset_first};
pub use external::ExternalCommand;
pub use fetch_css::FetchAssetCommand;
pub use registry::{CommandRegistry, Session};

use crate::context::BuildContext;
use crate::error::Result;
use crate::project::config::LIFECYCLE_COMMANDS;

/// A unit of work that can be registered and run by name
pub trait Command {
    /// Run the command
    ///
    /// Other registered commands are reached through `session`, which makes
    /// sure each of them runs at most once per invocation.
    fn run(&self, session: &mut Session<'_>) -> Result<()>;
}

/// Progress of a command within one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandState {
    #[default]
    NotStarted,
    Attempted,
    Satisfied,
    Failed,
}

/// Registry with `css` plus every configured lifecycle command wrapped by
/// [`asset_first`]
pub fn standard_registry(ctx: &BuildContext) -> Result<CommandRegistry<'_>> {
    let mut registry = CommandRegistry::new();
    registry.register(FETCH_COMMAND, FetchAssetCommand::new(ctx))?;

    let config = ctx.project.config();
    for name in LIFECYCLE_COMMANDS {
        let Some(argv) = config.command(name) else {
            log::debug!("No program configured for '{name}', not registering it");
            continue;
        };
        let command = ExternalCommand::new(*name, argv.to_vec(), ctx.project.root());
        registry.register(*name, asset_first(command))?;
    }

    Ok(registry)
}
