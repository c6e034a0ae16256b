//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use listsplit::{split, split_keep_empty};
use test_case::test_case;

// =============================================================================
// Dropping empties
// =============================================================================

#[test_case("a,b;;c", &[","], &[";"], &["a", "b", ";", ";", "c"] ; "separators and spacers")]
#[test_case("abc", &[], &[], &["abc"] ; "no patterns")]
#[test_case("", &[","], &[";"], &[] ; "empty input")]
#[test_case("a b  c", &[" "], &[], &["a", "b", "c"] ; "double space collapses")]
#[test_case("1+2-3", &[], &["+", "-"], &["1", "+", "2", "-", "3"] ; "operators as spacers")]
#[test_case("k=v&x=y", &["&"], &["="], &["k", "=", "v", "x", "=", "y"] ; "query string")]
#[test_case("<a><b>", &["<", ">"], &[], &["a", "b"] ; "bracket separators")]
#[test_case("aaa", &["aa"], &[], &["a"] ; "overlapping pattern consumed once")]
#[test_case(";;", &[], &[";"], &[";", ";"] ; "only spacers")]
fn test_split(input: &str, separators: &[&str], spacers: &[&str], expected: &[&str]) {
    assert_eq!(split(input, separators, spacers).unwrap(), expected, "input={input:?}");
}

// =============================================================================
// Keeping empties
// =============================================================================

#[test_case("a,b;;c", &[","], &[";"], &["a", "b", ";", "", ";", "c"] ; "empty between spacers")]
#[test_case("", &[","], &[";"], &[] ; "empty input")]
#[test_case(",", &[","], &[], &[""] ; "lone separator")]
#[test_case("a,,b", &[","], &[], &["a", "", "b"] ; "empty between separators")]
#[test_case(",a,", &[","], &[], &["", "a"] ; "no trailing empty")]
#[test_case("a;", &[], &[";"], &["a", ";"] ; "trailing spacer")]
#[test_case(";", &[], &[";"], &["", ";"] ; "empty before leading spacer")]
#[test_case("abc", &[], &[], &["abc"] ; "no patterns")]
fn test_split_keep_empty(input: &str, separators: &[&str], spacers: &[&str], expected: &[&str]) {
    assert_eq!(
        split_keep_empty(input, separators, spacers).unwrap(),
        expected,
        "input={input:?}"
    );
}
