//! cssfirst - notebook stylesheet provisioning
//!
//! Downloads the pinned notebook stylesheet into a project and runs that step
//! ahead of the project's build, sdist and develop programs.

use clap::Parser;
use env_logger::{Builder, Env};
use miette::Diagnostic;

mod asset;
mod cli;
mod commands;
mod context;
mod error;
mod fetcher;
mod hash;
mod project;
mod transport;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use commands::FETCH_COMMAND;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .filter_module("reqwest", log::LevelFilter::Warn)
        .filter_module("hyper_util", log::LevelFilter::Warn)
        .filter_module("rustls", log::LevelFilter::Warn)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Css => commands::lifecycle::run(cli.project, cli.quiet, FETCH_COMMAND),
        Commands::Build => commands::lifecycle::run(cli.project, cli.quiet, "build"),
        Commands::Sdist => commands::lifecycle::run(cli.project, cli.quiet, "sdist"),
        Commands::Develop => commands::lifecycle::run(cli.project, cli.quiet, "develop"),
        Commands::Status(args) => commands::status::run(cli.project, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
