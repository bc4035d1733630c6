//! CLI definitions using clap derive API
//!
//! Argument types for commands that take options live in submodules:
//! - status: Status command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod status;

pub use completions::CompletionsArgs;
pub use status::StatusArgs;

/// cssfirst - notebook stylesheet provisioning
///
/// Makes sure the pinned notebook stylesheet is present before packaging commands run.
#[derive(Parser, Debug)]
#[command(
    name = "cssfirst",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Fetch the notebook stylesheet before build, sdist and develop",
    long_about = "cssfirst downloads the pinned notebook stylesheet into \
                  nbconvert/resources/style.min.css and runs it ahead of the \
                  project's build, sdist and develop programs.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  cssfirst css                 \x1b[90m# Download the stylesheet if needed\x1b[0m\n   \
                  cssfirst build               \x1b[90m# Fetch, then build a wheel\x1b[0m\n   \
                  cssfirst sdist -p ./nbconvert \x1b[90m# Fetch, then build an sdist elsewhere\x1b[0m\n   \
                  cssfirst status --json       \x1b[90m# Show what css would do\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "CSSFIRST_PROJECT")]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Hide the download spinner
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the notebook stylesheet if it is needed
    Css,

    /// Fetch the stylesheet, then run the configured build program
    Build,

    /// Fetch the stylesheet, then run the configured sdist program
    Sdist,

    /// Fetch the stylesheet, then run the configured develop program
    Develop,

    /// Show the stylesheet URL, destination and whether css would download
    Status(StatusArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_css() {
        let cli = Cli::try_parse_from(["cssfirst", "css"]).unwrap();
        assert!(matches!(cli.command, Commands::Css));
    }

    #[test]
    fn test_cli_parsing_lifecycle() {
        let cli = Cli::try_parse_from(["cssfirst", "build"]).unwrap();
        assert!(matches!(cli.command, Commands::Build));
        let cli = Cli::try_parse_from(["cssfirst", "sdist"]).unwrap();
        assert!(matches!(cli.command, Commands::Sdist));
        let cli = Cli::try_parse_from(["cssfirst", "develop"]).unwrap();
        assert!(matches!(cli.command, Commands::Develop));
    }

    #[test]
    fn test_cli_parsing_status_json() {
        let cli = Cli::try_parse_from(["cssfirst", "status", "--json"]).unwrap();
        match cli.command {
            Commands::Status(args) => assert!(args.json),
            _ => panic!("Expected Status command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["cssfirst", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli =
            Cli::try_parse_from(["cssfirst", "-v", "-q", "-p", "/tmp/project", "build"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.quiet);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/project")));
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["cssfirst", "css", "--project", "/tmp/project"]).unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/project")));
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["cssfirst", "bdist"]).is_err());
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["cssfirst", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
