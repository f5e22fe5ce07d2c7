//! Integration tests for the full extract-and-analyze pipeline.
//!
//! These tests validate the pipeline against the committed survey fixture:
//! extraction order, misspelling correction, and all five analysis results.

use std::path::PathBuf;

use colortally::stats;
use colortally::{analyze, parse_colors, FrequencyTable};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Parse the committed fixture.
fn fixture_labels() -> Vec<String> {
    let fixture = testdata_path().join("color_survey.html");
    parse_colors(&fixture).expect("fixture should parse")
}

#[test]
fn test_extraction_yields_expected_sequence() {
    let labels = fixture_labels();

    let expected = [
        // Monday
        "GREEN", "YELLOW", "GREEN", "BROWN",
        // Tuesday
        "ARSH", "BROWN", "GREEN", "BROWN", "BLUE",
        // Wednesday (BLEW corrected)
        "GREEN", "YELLOW", "GREEN", "BROWN", "BLUE",
        // Thursday
        "BLUE", "BLUE", "GREEN", "WHITE", "BLUE",
        // Friday
        "GREEN", "WHITE", "GREEN", "BROWN", "RED",
    ];
    assert_eq!(labels, expected);
}

#[test]
fn test_misspelling_is_corrected() {
    let labels = fixture_labels();
    assert!(labels.iter().all(|l| l != "BLEW"));
}

#[test]
fn test_frequencies_in_first_seen_order() {
    let labels = fixture_labels();
    let table = FrequencyTable::from_labels(&labels);

    let entries: Vec<(&str, u64)> = table.iter().collect();
    assert_eq!(
        entries,
        vec![
            ("GREEN", 8),
            ("YELLOW", 2),
            ("BROWN", 5),
            ("ARSH", 1),
            ("BLUE", 5),
            ("WHITE", 2),
            ("RED", 1),
        ]
    );
    assert_eq!(table.total(), 24);
}

#[test]
fn test_analysis_results_for_fixture() {
    let labels = fixture_labels();
    let (_, analysis) = analyze(&labels).expect("fixture has colors");

    assert_eq!(analysis.total_observed, 24);
    assert_eq!(analysis.mode, "GREEN");
    // Mean frequency is 24/7; YELLOW and WHITE are both 1.43 away, and
    // YELLOW appears first in the table.
    assert_eq!(analysis.mean_color, "YELLOW");
    // Sorted observations: ARSH, BLUE x5, BROWN x5, GREEN x8, ... index 12
    // lands inside the GREEN run.
    assert_eq!(analysis.median_color, "GREEN");
    // Counts are [8, 2, 5, 1, 5, 2, 1]: population variance 292/49.
    assert!((analysis.variance - 292.0 / 49.0).abs() < 1e-9);
    // One RED out of 24 observations.
    assert!((analysis.red_probability - 100.0 / 24.0).abs() < 1e-9);
}

#[test]
fn test_median_matches_raw_sequence_not_counts() {
    // The median is taken over the sorted raw observations, so duplicating
    // a rare color must be able to shift it even though the distinct color
    // set is unchanged.
    let narrow: Vec<String> = ["B", "A", "B"].iter().map(|s| s.to_string()).collect();
    assert_eq!(stats::median_color(&narrow), Some("B"));

    let widened: Vec<String> = ["B", "A", "B", "A", "A"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(stats::median_color(&widened), Some("A"));
}
