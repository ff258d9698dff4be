//! End-to-end tests for the pomhelper binary.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

const DESCRIPTOR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <parent>
    <groupId>org.example</groupId>
    <artifactId>example-parent</artifactId>
    <version>1.0</version>
    <relativePath>../../pom.xml</relativePath>
  </parent>
  <artifactId>example</artifactId>
  <properties>
    <zeta>z</zeta>
    <alpha>a</alpha>
  </properties>
</project>
"#;

fn pomhelper(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pomhelper"))
        .args(args)
        .env_remove("POMHELPER_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

fn write_descriptor(dir: &Path) -> String {
    let pom = dir.join("pom.xml");
    fs::write(&pom, DESCRIPTOR).expect("write descriptor");
    pom.to_string_lossy().into_owned()
}

fn property_lines(path: &Path) -> Vec<String> {
    let text = fs::read_to_string(path).expect("readable");
    let start = text.find("<properties>").expect("properties section");
    let end = text.find("</properties>").expect("properties end");
    text[start..end]
        .lines()
        .skip(1)
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

#[test]
fn sort_rewrites_in_place() {
    let dir = tempdir().expect("temp dir");
    let pom = write_descriptor(dir.path());

    let output = pomhelper(&["sort", &pom]);

    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        property_lines(Path::new(&pom)),
        vec!["<alpha>a</alpha>", "<zeta>z</zeta>"]
    );
    let text = fs::read_to_string(&pom).expect("readable");
    assert!(text.contains("<relativePath>../../pom.xml</relativePath>"));
}

#[test]
fn set_property_to_separate_output() {
    let dir = tempdir().expect("temp dir");
    let pom = write_descriptor(dir.path());
    let out = dir.path().join("out").join("pom.xml");

    let output = pomhelper(&[
        "set-property",
        "middle",
        "m",
        "--pom",
        &pom,
        "--output",
        &out.to_string_lossy(),
    ]);

    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        property_lines(&out),
        vec!["<alpha>a</alpha>", "<middle>m</middle>", "<zeta>z</zeta>"]
    );
    assert_eq!(fs::read_to_string(&pom).expect("readable"), DESCRIPTOR);
}

#[test]
fn remove_property_with_settings_file() {
    let dir = tempdir().expect("temp dir");
    let pom = write_descriptor(dir.path());
    let config = dir.path().join("pomhelper.yaml");
    fs::write(&config, "indent_size: 4\nxml_declaration: false\n").expect("write config");

    let output = pomhelper(&[
        "remove-property",
        "zeta",
        "--pom",
        &pom,
        "--config",
        &config.to_string_lossy(),
    ]);

    assert!(output.status.success(), "{output:?}");
    let text = fs::read_to_string(&pom).expect("readable");
    assert!(text.starts_with("<project"));
    assert!(text.contains("\n        <alpha>a</alpha>\n"));
    assert!(!text.contains("zeta"));
}

#[test]
fn show_json_reports_model() {
    let dir = tempdir().expect("temp dir");
    let pom = write_descriptor(dir.path());

    let output = pomhelper(&["show", &pom, "--json"]);

    assert!(output.status.success(), "{output:?}");
    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(summary["id"], "org.example:example:jar:1.0");
    assert_eq!(summary["parent"], "org.example:example-parent:pom:1.0");
    assert_eq!(summary["relative_path"], "../../pom.xml");
    assert_eq!(summary["properties"]["alpha"], "a");
}

#[test]
fn missing_descriptor_fails() {
    let dir = tempdir().expect("temp dir");
    let missing = dir.path().join("absent.xml");

    let output = pomhelper(&["sort", &missing.to_string_lossy()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("descriptor not found"), "{stderr}");
}
