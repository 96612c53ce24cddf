//! Binary-level smoke tests for the offline command surface (config,
//! completions, argument validation). Network-dependent commands are covered
//! at the driver layer instead.

mod common;

use common::LecternTest;

#[test]
fn test_config_show_reports_defaults() {
    let t = LecternTest::new();
    let output = t.run_success(&["config", "show"]);
    assert!(output.contains("api_url"));
    assert!(output.contains("page_size"));
    assert!(output.contains("12"));
}

#[test]
fn test_config_set_then_get_roundtrips() {
    let t = LecternTest::new();
    t.run_success(&["config", "set", "page_size", "24"]);
    let output = t.run_success(&["config", "get", "page_size"]);
    assert_eq!(output.trim(), "24");

    t.run_success(&["config", "set", "api_url", "https://catalog.test"]);
    let output = t.run_success(&["config", "get", "api_url"]);
    assert_eq!(output.trim(), "https://catalog.test");
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let t = LecternTest::new();
    let stderr = t.run_failure(&["config", "set", "colour_scheme", "mauve"]);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn test_config_set_rejects_zero_page_size() {
    let t = LecternTest::new();
    let stderr = t.run_failure(&["config", "set", "page_size", "0"]);
    assert!(stderr.contains("at least 1"));
}

#[test]
fn test_completions_generate() {
    let t = LecternTest::new();
    let output = t.run_success(&["completions", "bash"]);
    assert!(output.contains("lectern"));
}

#[test]
fn test_explore_rejects_foreign_address() {
    let t = LecternTest::new();
    let stderr = t.run_failure(&["explore", "--address", "/dashboard?type=events"]);
    assert!(stderr.contains("invalid explore address"));
}

#[test]
fn test_explore_rejects_unknown_filter_value() {
    let t = LecternTest::new();
    let stderr = t.run_failure(&["explore", "--category", "astrology"]);
    assert!(stderr.contains("invalid value"));
}
