//! Tests for delimiter patterns and the matcher

use listsplit::tokenizer::{Delimiter, DelimiterMatch, DelimiterPattern, Haystack, Span, match_at};

#[test]
fn match_at_returns_first_hit_in_list_order() {
    let patterns = ["b", "ab", "a"];
    assert_eq!(match_at("xab", 1, &patterns), Some(DelimiterMatch { index: 1, len: 2 }));
    assert_eq!(match_at("xab", 2, &patterns), Some(DelimiterMatch { index: 0, len: 1 }));
}

#[test]
fn match_at_without_hit() {
    assert_eq!(match_at("abc", 0, &["x", "bc"]), None);
    assert_eq!(match_at("abc", 0, &[] as &[&str]), None);
}

#[test]
fn match_at_needs_the_whole_pattern() {
    assert_eq!(match_at("ab", 1, &["bc"]), None);
}

#[test]
fn match_at_end_and_past_end() {
    assert_eq!(match_at("ab", 2, &["b"]), None);
    assert_eq!(match_at("ab", 5, &["b"]), None);
}

#[test]
fn match_at_skips_empty_patterns() {
    assert_eq!(match_at("ab", 0, &["", "a"]), Some(DelimiterMatch { index: 1, len: 1 }));
}

#[test]
fn match_at_over_utf16_units() {
    let input: Vec<u16> = "x→y".encode_utf16().collect();
    let patterns = vec![vec![0x2192_u16]];
    assert_eq!(
        match_at(input.as_slice(), 1, &patterns),
        Some(DelimiterMatch { index: 0, len: 1 })
    );
}

#[test]
fn str_lengths_are_bytes() {
    assert_eq!(match_at("x→y", 1, &["→"]), Some(DelimiterMatch { index: 0, len: 3 }));
}

#[test]
fn delimiter_pattern_inert_without_payload() {
    let live = DelimiterPattern::new(",".to_string(), 7_u8);
    let inert = DelimiterPattern::<String, u8>::inert(",".to_string());

    assert_eq!(Delimiter::<str>::pattern(&live), Some(","));
    assert_eq!(Delimiter::<str>::pattern(&inert), None);
    assert_eq!(live.payload(), Some(&7));
    assert_eq!(inert.payload(), None);
    assert_eq!(live.to_string(), ",");
}

#[test]
fn option_and_reference_delimiters() {
    let absent: Option<&str> = None;
    assert_eq!(Delimiter::<str>::pattern(&absent), None);
    assert_eq!(Delimiter::<str>::pattern(&Some(";")), Some(";"));
    assert_eq!(Delimiter::<str>::pattern(&"|"), Some("|"));
    assert_eq!(Delimiter::<str>::pattern(&String::from("--")), Some("--"));
}

#[test]
fn haystack_slices() {
    assert_eq!("hello".slice(Span::new(1, 3)), "el");
    assert_eq!("héllo".units().len(), 6);

    let units = [1_u16, 2, 3, 4];
    assert_eq!(units[..].slice(Span::new(2, 4)), [3, 4]);
    assert_eq!(units[..].units(), [1, 2, 3, 4]);
}
