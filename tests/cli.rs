use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn izpack() -> Command {
    Command::cargo_bin("kodegen_bundler_izpack").unwrap()
}

#[test]
fn test_cli_prints_descriptor_path() {
    let temp = TempDir::new().unwrap();

    izpack()
        .arg("--manifest")
        .arg(fixture("Cargo.toml"))
        .arg("--output-dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("install.xml"));

    let descriptor = temp.path().join("izpack/install.xml");
    assert!(descriptor.is_file());
    assert!(temp.path().join("izpack/TargetPanel.dir.macosx").is_file());
}

#[test]
fn test_cli_json_report() {
    let temp = TempDir::new().unwrap();

    let output = izpack()
        .arg("--manifest")
        .arg(fixture("installer.toml"))
        .arg("--output-dir")
        .arg(temp.path())
        .arg("--report-json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["descriptor"].as_str().unwrap().ends_with("install.xml"));
    assert_eq!(report["side_cars"].as_array().unwrap().len(), 0);
    assert_eq!(report["sha256"].as_str().unwrap().len(), 64);
}

#[test]
fn test_cli_missing_manifest_is_an_argument_error() {
    let temp = TempDir::new().unwrap();

    izpack()
        .arg("--manifest")
        .arg(temp.path().join("absent.toml"))
        .arg("--output-dir")
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Manifest not found"));
}

#[test]
fn test_cli_render_failure_leaves_no_output() {
    let temp = TempDir::new().unwrap();

    izpack()
        .arg("--manifest")
        .arg(fixture("broken.toml"))
        .arg("--output-dir")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("appname"));

    assert!(!temp.path().join("izpack").exists());
}
