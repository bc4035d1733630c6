//! Status command: show what `css` would do without touching the network

use std::path::PathBuf;

use console::Style;
use serde::Serialize;

use crate::asset::{PresenceSignal, RemoteAsset};
use crate::cli::StatusArgs;
use crate::error::Result;
use crate::hash;
use crate::project::Project;

/// Snapshot of the project's stylesheet
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub url: String,
    pub version: &'static str,
    pub destination: PathBuf,
    #[serde(flatten)]
    pub presence: PresenceSignal,
    pub needs_fetch: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

impl StatusReport {
    pub fn collect(project: &Project, asset: &RemoteAsset) -> Self {
        let presence = PresenceSignal::detect(project);
        let digest = if presence.destination_exists {
            hash::hash_file(project.destination()).ok()
        } else {
            None
        };

        Self {
            url: asset.url().to_string(),
            version: asset.version(),
            destination: project.destination().to_path_buf(),
            needs_fetch: presence.needs_fetch(),
            presence,
            digest,
        }
    }
}

/// Run status command
pub fn run(project: Option<PathBuf>, args: &StatusArgs) -> Result<()> {
    let project = Project::resolve(project)?;
    let report = StatusReport::collect(&project, &RemoteAsset::from_env());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &StatusReport) {
    let label = Style::new().bold();
    let yes_no = |value: bool| if value { "yes" } else { "no" };

    println!("{} {}", label.apply_to("URL:"), report.url);
    println!(
        "{} {}",
        label.apply_to("Destination:"),
        report.destination.display()
    );
    println!(
        "{} {}",
        label.apply_to("Present:"),
        yes_no(report.presence.destination_exists)
    );
    println!(
        "{} {}",
        label.apply_to("Source checkout:"),
        yes_no(report.presence.source_checkout)
    );
    if let Some(digest) = &report.digest {
        println!("{} {}", label.apply_to("Digest:"), digest);
    }

    let verdict = if report.needs_fetch {
        Style::new().yellow().apply_to("would download")
    } else {
        Style::new().green().apply_to("nothing to do")
    };
    println!("{} {}", label.apply_to("css:"), verdict);
}
