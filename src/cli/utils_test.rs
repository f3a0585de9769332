//! Tests for CLI utilities.

use crate::cli::utils::{format_optional, truncate_with_ellipsis};

#[test]
fn truncate_short_string_unchanged() {
    assert_eq!(truncate_with_ellipsis("Algebra", 50), "Algebra");
}

#[test]
fn truncate_long_string_adds_ellipsis() {
    let long = "a".repeat(60);
    let truncated = truncate_with_ellipsis(&long, 50);
    assert_eq!(truncated.chars().count(), 50);
    assert!(truncated.ends_with("..."));
}

#[test]
fn format_optional_dashes_missing_values() {
    assert_eq!(format_optional(None), "-");
    assert_eq!(format_optional(Some("")), "-");
    assert_eq!(format_optional(Some("on campus")), "on campus");
}
