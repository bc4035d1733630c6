//! Lifecycle commands backed by an external program

use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use super::{Command, Session};
use crate::error::{Result, command, config};
use crate::ui;

/// Runs a configured program in the project root and checks its exit status
#[derive(Debug, Clone)]
pub struct ExternalCommand {
    name: String,
    argv: Vec<String>,
    cwd: PathBuf,
}

impl ExternalCommand {
    pub fn new(name: impl Into<String>, argv: Vec<String>, cwd: &Path) -> Self {
        Self {
            name: name.into(),
            argv,
            cwd: cwd.to_path_buf(),
        }
    }
}

impl Command for ExternalCommand {
    fn run(&self, _session: &mut Session<'_>) -> Result<()> {
        let Some((program, args)) = self.argv.split_first() else {
            return Err(config::invalid(format!(
                "command '{}' has an empty program",
                self.name
            )));
        };

        ui::print_command_info(&self.name, &self.argv);
        let start = Instant::now();

        // Output is inherited so the program's progress shows in real time
        let status = process::Command::new(program)
            .args(args)
            .current_dir(&self.cwd)
            .status()
            .map_err(|e| command::spawn_failed(&self.name, program, e.to_string()))?;

        if !status.success() {
            return Err(command::failed(&self.name, status.to_string()));
        }

        log::info!(
            "'{}' completed in {:.2}s",
            self.name,
            start.elapsed().as_secs_f64()
        );
        Ok(())
    }
}
