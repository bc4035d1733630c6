//! Command registry and per-invocation session
//!
//! The registry is filled once at startup and then only read. A [`Session`]
//! runs commands out of it by name and tracks each one through
//! [`CommandState`], so a command that already succeeded is skipped when
//! something else asks for it again.

use std::collections::BTreeMap;

use super::{Command, CommandState};
use crate::error::{Result, command};

/// Named commands available in this invocation
#[derive(Default)]
pub struct CommandRegistry<'a> {
    commands: BTreeMap<String, Box<dyn Command + 'a>>,
}

impl<'a> CommandRegistry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `command` under `name`
    ///
    /// Names are unique; registering one twice is an error.
    pub fn register(&mut self, name: &str, command: impl Command + 'a) -> Result<()> {
        if self.commands.contains_key(name) {
            return Err(command::duplicate(name));
        }
        self.commands.insert(name.to_string(), Box::new(command));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&(dyn Command + 'a)> {
        self.commands.get(name).map(Box::as_ref)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }
}

/// One invocation's view of the registry
pub struct Session<'r> {
    registry: &'r CommandRegistry<'r>,
    states: BTreeMap<String, CommandState>,
    completed: Vec<String>,
}

impl<'r> Session<'r> {
    pub fn new(registry: &'r CommandRegistry<'r>) -> Self {
        Self {
            registry,
            states: BTreeMap::new(),
            completed: Vec::new(),
        }
    }

    pub fn state(&self, name: &str) -> CommandState {
        self.states.get(name).copied().unwrap_or_default()
    }

    /// Names of commands that succeeded, in completion order
    pub fn completed(&self) -> &[String] {
        &self.completed
    }

    /// Run the command registered as `name` unless it already succeeded
    pub fn run_command(&mut self, name: &str) -> Result<()> {
        let registry = self.registry;
        let command = registry.get(name).ok_or_else(|| command::unknown(name))?;

        match self.state(name) {
            CommandState::NotStarted => {}
            CommandState::Satisfied => {
                log::debug!("'{name}' already ran in this session, skipping");
                return Ok(());
            }
            CommandState::Attempted => return Err(command::cycle(name)),
            CommandState::Failed => {
                return Err(command::failed(name, "an earlier failure in this session"));
            }
        }

        log::debug!("Running '{name}'");
        self.states.insert(name.to_string(), CommandState::Attempted);
        let result = command.run(self);

        let state = if result.is_ok() {
            self.completed.push(name.to_string());
            CommandState::Satisfied
        } else {
            CommandState::Failed
        };
        self.states.insert(name.to_string(), state);

        result
    }
}
