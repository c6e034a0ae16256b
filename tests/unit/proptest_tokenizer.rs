//! Property-based tests for the tokenizer
//!
//! Uses proptest to verify properties that should hold for all inputs.

use listsplit::tokenizer::{Piece, Token, Tokenizer, max_tokens};
use listsplit::{split, tokenize};
use proptest::prelude::*;

/// Small alphabet so delimiters actually show up
fn input_strategy() -> impl Strategy<Value = String> {
    "[ab,;:]{0,24}"
}

/// Patterns over the same alphabet, some empty, some multi-unit
fn patterns_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ab,;:]{0,2}", 0..4)
}

proptest! {
    /// Input with no delimiter in it comes back as a single token
    #[test]
    fn no_match_identity(input in "[a-z]{1,20}", keep_empty in any::<bool>()) {
        let tokens = tokenize(input.as_str(), &[","], &[";"], keep_empty).unwrap();
        prop_assert_eq!(tokens, vec![Token::Text(input.as_str())]);
    }

    /// Text, spacer and separator lengths add back up to the input length
    #[test]
    fn length_conservation(
        input in input_strategy(),
        separators in patterns_strategy(),
        spacers in patterns_strategy(),
        keep_empty in any::<bool>(),
    ) {
        let tokenizer = Tokenizer::new().with_keep_empty(keep_empty);
        let (pieces, stats) = tokenizer.scan_with_stats(input.as_str(), &separators, &spacers).unwrap();

        let covered: usize = pieces.iter().map(|piece| piece.span().len()).sum();
        prop_assert_eq!(covered + stats.separator_units, input.len());

        let mut last_end = 0;
        for piece in &pieces {
            let span = piece.span();
            prop_assert!(span.start >= last_end);
            prop_assert!(span.end <= input.len());
            last_end = span.end;
        }
    }

    /// Without keep_empty no empty text token is emitted
    #[test]
    fn empty_suppression(
        input in input_strategy(),
        separators in patterns_strategy(),
        spacers in patterns_strategy(),
    ) {
        let tokens = tokenize(input.as_str(), &separators, &spacers, false).unwrap();
        for token in &tokens {
            if let Token::Text(text) = token {
                prop_assert!(!text.is_empty());
            }
        }
    }

    /// Spacers are emitted the same number of times whatever keep_empty says
    #[test]
    fn spacers_never_suppressed(
        input in input_strategy(),
        separators in patterns_strategy(),
        spacers in patterns_strategy(),
    ) {
        let count = |keep_empty| {
            tokenize(input.as_str(), &separators, &spacers, keep_empty)
                .unwrap()
                .iter()
                .filter(|token| matches!(token, Token::Spacer(_)))
                .count()
        };
        prop_assert_eq!(count(false), count(true));
    }

    /// A pattern listed as both separator and spacer only ever separates
    #[test]
    fn separator_precedence(input in input_strategy()) {
        let tokens = tokenize(input.as_str(), &[";"], &[";"], true).unwrap();
        prop_assert!(tokens.iter().all(|token| matches!(token, Token::Text(_))));
    }

    /// Same inputs, same output
    #[test]
    fn determinism(
        input in input_strategy(),
        separators in patterns_strategy(),
        spacers in patterns_strategy(),
        keep_empty in any::<bool>(),
    ) {
        let tokenizer = Tokenizer::new().with_keep_empty(keep_empty);
        let first: Vec<Piece> = tokenizer.scan(input.as_str(), &separators, &spacers).unwrap();
        let second: Vec<Piece> = tokenizer.scan(input.as_str(), &separators, &spacers).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Token count stays within the preallocated bound
    #[test]
    fn token_count_within_bound(
        input in input_strategy(),
        separators in patterns_strategy(),
        spacers in patterns_strategy(),
        keep_empty in any::<bool>(),
    ) {
        let tokens = tokenize(input.as_str(), &separators, &spacers, keep_empty).unwrap();
        prop_assert!(tokens.len() <= max_tokens(input.len(), keep_empty));
    }

    /// A single one-char separator behaves like `str::split` minus empties
    #[test]
    fn single_separator_matches_str_split(input in input_strategy()) {
        let expected: Vec<&str> = input.split(',').filter(|s| !s.is_empty()).collect();
        prop_assert_eq!(split(&input, &[","], &[] as &[&str]).unwrap(), expected);
    }
}
