//! UI/Progress presentation layer
//!
//! This module handles:
//! - A spinner while the stylesheet download is in flight
//! - Silent reporting for `--quiet` or when stderr is not a terminal
//! - Styled status lines for fetch outcomes and lifecycle commands
//!
//! All fetch progress goes through the [`FetchReporter`] trait so the fetch
//! command does not care which presentation is active.

use std::time::Duration;

use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};

use crate::fetcher::FetchOutcome;

/// Progress reporter for a single download
pub trait FetchReporter {
    /// A download of `url` is starting
    fn start(&mut self, url: &str);

    /// The fetch finished with `outcome`
    fn finish(&mut self, outcome: &FetchOutcome);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive reporter with a spinner on stderr
#[derive(Default)]
pub struct SpinnerReporter {
    spinner: Option<ProgressBar>,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn clear(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl FetchReporter for SpinnerReporter {
    fn start(&mut self, url: &str) {
        let style = ProgressStyle::default_spinner()
            .template("{spinner} Downloading {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(url.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn finish(&mut self, outcome: &FetchOutcome) {
        self.clear();
        print_outcome(outcome);
    }

    fn abandon(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.abandon();
        }
    }
}

/// Silent reporter for quiet mode
///
/// Outcomes are still printed; only the spinner is suppressed.
#[derive(Default)]
pub struct SilentReporter;

impl FetchReporter for SilentReporter {
    fn start(&mut self, _url: &str) {
        // No-op for silent mode
    }

    fn finish(&mut self, outcome: &FetchOutcome) {
        print_outcome(outcome);
    }

    fn abandon(&mut self) {
        // No-op for silent mode
    }
}

/// Pick the reporter for the current terminal and flags
pub fn reporter(quiet: bool) -> Box<dyn FetchReporter> {
    if quiet || !Term::stderr().is_term() {
        Box::new(SilentReporter)
    } else {
        Box::new(SpinnerReporter::new())
    }
}

/// Print a one-line summary of a fetch outcome
pub fn print_outcome(outcome: &FetchOutcome) {
    let (symbol, style) = match outcome {
        FetchOutcome::Stale { .. } => ("!", Style::new().bold().yellow()),
        _ => ("✓", Style::new().bold().green()),
    };
    println!("{} {}", style.apply_to(symbol), outcome);
}

/// Print the program a lifecycle command is about to run
pub fn print_command_info(name: &str, argv: &[String]) {
    println!(
        "{} {}",
        Style::new().bold().cyan().apply_to(format!("[{name}]")),
        argv.join(" ")
    );
}
