//! Tests for the JSON output format.
//!
//! These tests verify the structure of the machine-readable report built
//! from the committed survey fixture.

use std::path::PathBuf;

use colortally::report::{build_json, JsonReport};
use colortally::{analyze, parse_colors};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Parse and analyze the fixture, returning the JSON report struct.
fn run_and_get_json() -> JsonReport {
    let fixture = testdata_path().join("color_survey.html");
    let labels = parse_colors(&fixture).expect("fixture should parse");
    let (table, analysis) = analyze(&labels).expect("fixture has colors");
    build_json(&fixture.to_string_lossy(), &table, &analysis)
}

#[test]
fn test_json_report_structure() {
    let report = run_and_get_json();

    assert!(!report.version.is_empty(), "version should not be empty");
    assert!(
        report.source.ends_with("color_survey.html"),
        "source should carry the input path"
    );
    assert_eq!(report.total_colors, 24);
    assert_eq!(report.frequencies.len(), 7);
    assert_eq!(report.analysis.mode, "GREEN");
}

#[test]
fn test_json_field_names() {
    let report = run_and_get_json();
    let value: serde_json::Value = serde_json::to_value(&report).expect("report should serialize");

    for field in ["version", "source", "total_colors", "frequencies", "analysis"] {
        assert!(value.get(field).is_some(), "missing field {:?}", field);
    }

    let analysis = &value["analysis"];
    for field in [
        "total_observed",
        "mean_color",
        "mode",
        "median_color",
        "variance",
        "red_probability",
    ] {
        assert!(
            analysis.get(field).is_some(),
            "missing analysis field {:?}",
            field
        );
    }

    let first = &value["frequencies"][0];
    assert_eq!(first["color"], "GREEN");
    assert_eq!(first["count"], 8);
}

#[test]
fn test_json_parses_back() {
    let report = run_and_get_json();
    let text = serde_json::to_string_pretty(&report).expect("report should serialize");

    let parsed: JsonReport = serde_json::from_str(&text).expect("report should parse back");
    assert_eq!(parsed.total_colors, report.total_colors);
    assert_eq!(parsed.analysis.median_color, "GREEN");
}
