//! Exporter integration tests.

#![cfg(feature = "ssr")]

use diebra_core::PageConfig;
use diebra_page::export::{ExportOptions, export_site};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn writes_page_into_missing_directories() {
    let dir = TempDir::new().expect("tempdir");
    let output = dir.path().join("site/nested/index.html");

    let summary = export_site(
        &PageConfig::default(),
        &ExportOptions {
            output: output.clone(),
            fixtures_json: None,
        },
    )
    .expect("export succeeds");

    let html = fs::read_to_string(&output).expect("page written");
    assert_eq!(summary.html_bytes, html.len());
    assert_eq!(summary.fixtures_bytes, None);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Monitoraggio torrente Diebra"));
    // initial state: nothing open, bars at baseline
    assert!(!html.contains("role=\"dialog\""));
    assert!(html.contains("style=\"width: 0%; transition-delay: 0ms;\""));
}

#[test]
fn writes_campaign_json() {
    let dir = TempDir::new().expect("tempdir");
    let json_path = dir.path().join("data/campaign.json");

    let summary = export_site(
        &PageConfig::default(),
        &ExportOptions {
            output: dir.path().join("index.html"),
            fixtures_json: Some(json_path.clone()),
        },
    )
    .expect("export succeeds");

    let raw = fs::read_to_string(&json_path).expect("json written");
    assert_eq!(summary.fixtures_bytes, Some(raw.len()));

    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value["measured_ibe"], 8);
    assert_eq!(value["taxon_groups"].as_array().map(Vec::len), Some(7));
    assert_eq!(value["substrate"][0]["label"], "Ghiaia");
    assert_eq!(value["glossary"][1]["term"], "Macroinvertebrati");
}

#[test]
fn config_assets_reach_the_page() {
    let dir = TempDir::new().expect("tempdir");
    let config = PageConfig::from_toml_str(
        r#"
        [assets]
        map_embed = "https://maps.example.org/embed"
        lab_photo = "photos/lab.png"
        "#,
    )
    .expect("config parses");

    let output = dir.path().join("index.html");
    export_site(
        &config,
        &ExportOptions {
            output: output.clone(),
            fixtures_json: None,
        },
    )
    .expect("export succeeds");

    let html = fs::read_to_string(&output).expect("page written");
    assert!(html.contains("src=\"https://maps.example.org/embed\""));
    assert!(html.contains("src=\"photos/lab.png\""));
}

#[test]
fn invalid_config_is_rejected_before_writing() {
    let dir = TempDir::new().expect("tempdir");
    let mut config = PageConfig::default();
    config.reveal.threshold = 0.0;

    let output = dir.path().join("index.html");
    let err = export_site(
        &config,
        &ExportOptions {
            output: output.clone(),
            fixtures_json: None,
        },
    )
    .unwrap_err();

    assert!(format!("{err:#}").contains("reveal threshold"));
    assert!(!output.exists());
}
