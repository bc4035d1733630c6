//! Integration tests for `cssfirst status`

mod common;

use common::{DESTINATION, TestProject, unreachable_base};
use predicates::prelude::*;

#[test]
fn test_status_json_for_packaged_project() {
    let project = TestProject::new();
    project.write_file(DESTINATION, "shipped");

    let output = project
        .cmd(&unreachable_base())
        .args(["status", "--json"])
        .output()
        .expect("Failed to run cssfirst");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("status --json should print JSON");
    assert_eq!(report["destination_exists"], true);
    assert_eq!(report["source_checkout"], false);
    assert_eq!(report["needs_fetch"], false);
    assert_eq!(
        report["url"],
        "http://127.0.0.1:9/notebook/4.0.0-dev/style/style.min.css"
    );
    assert!(report["digest"].as_str().unwrap().starts_with("blake3:"));
}

#[test]
fn test_status_for_checkout() {
    let project = TestProject::checkout();

    project
        .cmd(&unreachable_base())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("would download"));

    assert!(!project.file_exists(DESTINATION));
}
