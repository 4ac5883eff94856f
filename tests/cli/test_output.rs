//! Tests for CLI output formatting helpers
//!
//! - Byte formatting (KB, MB, GB)
//! - Duration formatting (ms, s, m)
//! - Relative time formatting
//! - Snippet truncation

use chrono::{Duration, Utc};
use ilmify::cli::output::{format_bytes, format_duration, format_relative_time, truncate_chars};

// =============================================================================
// format_bytes tests
// =============================================================================

/// Test byte formatting at unit boundaries
#[test]
fn test_format_bytes_boundaries() {
    assert_eq!(format_bytes(0), "0 B");
    assert_eq!(format_bytes(1023), "1023 B");
    assert_eq!(format_bytes(1024), "1.0 KB");
    assert_eq!(format_bytes(1048575), "1024.0 KB");
    assert_eq!(format_bytes(1048576), "1.0 MB");
    assert_eq!(format_bytes(1610612736), "1.5 GB");
}

// =============================================================================
// format_duration tests
// =============================================================================

#[test]
fn test_format_duration_ranges() {
    assert_eq!(format_duration(0.0), "0ms");
    assert_eq!(format_duration(0.25), "250ms");
    assert_eq!(format_duration(1.0), "1.00s");
    assert_eq!(format_duration(59.5), "59.50s");
    assert_eq!(format_duration(120.0), "2m 0.0s");
}

// =============================================================================
// format_relative_time tests
// =============================================================================

#[test]
fn test_format_relative_time_ranges() {
    let now = Utc::now();
    assert_eq!(format_relative_time(&(now - Duration::seconds(30))), "just now");
    assert_eq!(format_relative_time(&(now - Duration::minutes(5))), "5m ago");
    assert_eq!(format_relative_time(&(now - Duration::days(10))), "10d ago");
    assert_eq!(
        format_relative_time(&(now + Duration::hours(1))),
        "in the future"
    );
}

// =============================================================================
// truncate_chars tests
// =============================================================================

#[test]
fn test_truncate_snippet_with_newlines() {
    let snippet = "Rivers begin in the mountains\nand carry silt\tdown to fertile plains.";
    let short = truncate_chars(snippet, 30);
    assert_eq!(short.chars().count(), 30);
    assert!(short.ends_with("..."));
    assert!(!short.contains('\n'));
}

#[test]
fn test_truncate_exact_length_unchanged() {
    assert_eq!(truncate_chars("abcdef", 6), "abcdef");
    assert_eq!(truncate_chars("", 6), "");
}
