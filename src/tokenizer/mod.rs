//! Multi-pattern list tokenizer
//!
//! Splits an input text at every match of two ordered delimiter lists:
//! - **separators** are consumed and dropped
//! - **spacers** are consumed and handed back as their own tokens
//!
//! At each position separators win over spacers, and within a list the
//! earliest entry wins, regardless of match length. Zero-length text runs are
//! dropped unless `keep_empty` is set.
//!
//! # Examples
//!
//! ```
//! use listsplit::tokenizer::{Token, Tokenizer};
//!
//! let tokens = Tokenizer::new().tokenize("a,b;;c", &[","], &[";"]).unwrap();
//! let text: Vec<String> = tokens.iter().map(ToString::to_string).collect();
//! assert_eq!(text, ["a", "b", ";", ";", "c"]);
//! assert!(matches!(tokens[2], Token::Spacer(&";")));
//! ```

mod buffer;
mod delimiter;
mod scan;
mod token;

pub use buffer::{TokenBuffer, max_tokens};
pub use delimiter::{Delimiter, DelimiterMatch, DelimiterPattern, Haystack, match_at};
pub use scan::ScanStats;
pub use token::{Piece, Span, Token, TokenKind};

use crate::error::TokenizeError;

/// Tokenizer settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    keep_empty: bool,
}

impl Tokenizer {
    /// Tokenizer that drops empty text runs
    #[must_use]
    pub const fn new() -> Self {
        Self { keep_empty: false }
    }

    /// Set whether empty text runs next to delimiters are emitted
    #[must_use]
    pub const fn with_keep_empty(mut self, keep_empty: bool) -> Self {
        self.keep_empty = keep_empty;
        self
    }

    /// Whether empty text runs are emitted
    #[must_use]
    pub const fn keep_empty(&self) -> bool {
        self.keep_empty
    }

    /// Split `input` into text slices and references to matching spacers
    pub fn tokenize<'s, 'd, H, D>(
        &self,
        input: &'s H,
        separators: &'d [D],
        spacers: &'d [D],
    ) -> Result<Vec<Token<'s, 'd, H, D>>, TokenizeError>
    where
        H: Haystack + ?Sized,
        D: Delimiter<H>,
    {
        let (tokens, _) = scan::scan(input, separators, spacers, self.keep_empty, move |piece| {
            match piece {
                Piece::Text { span } => Token::Text(input.slice(span)),
                Piece::Spacer { index, .. } => Token::Spacer(&spacers[index]),
            }
        })?;
        Ok(tokens)
    }

    /// Split `input` into raw pieces (spans and spacer indices)
    pub fn scan<H, D>(
        &self,
        input: &H,
        separators: &[D],
        spacers: &[D],
    ) -> Result<Vec<Piece>, TokenizeError>
    where
        H: Haystack + ?Sized,
        D: Delimiter<H>,
    {
        self.scan_with_stats(input, separators, spacers).map(|(pieces, _)| pieces)
    }

    /// Like [`Tokenizer::scan`], also returning match counters
    pub fn scan_with_stats<H, D>(
        &self,
        input: &H,
        separators: &[D],
        spacers: &[D],
    ) -> Result<(Vec<Piece>, ScanStats), TokenizeError>
    where
        H: Haystack + ?Sized,
        D: Delimiter<H>,
    {
        scan::scan(input, separators, spacers, self.keep_empty, |piece| piece)
    }
}

/// Tokenize `input` with the given delimiter lists
pub fn tokenize<'s, 'd, H, D>(
    input: &'s H,
    separators: &'d [D],
    spacers: &'d [D],
    keep_empty: bool,
) -> Result<Vec<Token<'s, 'd, H, D>>, TokenizeError>
where
    H: Haystack + ?Sized,
    D: Delimiter<H>,
{
    Tokenizer::new().with_keep_empty(keep_empty).tokenize(input, separators, spacers)
}

/// Split a string into owned items, dropping empty runs
///
/// Spacer tokens come back as the spacer's text. Every allocation, including
/// each item's copy, is fallible and surfaces as
/// [`TokenizeError::AllocationFailure`].
pub fn split<D>(input: &str, separators: &[D], spacers: &[D]) -> Result<Vec<String>, TokenizeError>
where
    D: Delimiter<str>,
{
    split_owned(Tokenizer::new(), input, separators, spacers)
}

/// Split a string into owned items, keeping empty runs between delimiters
pub fn split_keep_empty<D>(
    input: &str,
    separators: &[D],
    spacers: &[D],
) -> Result<Vec<String>, TokenizeError>
where
    D: Delimiter<str>,
{
    split_owned(Tokenizer::new().with_keep_empty(true), input, separators, spacers)
}

fn split_owned<D>(
    tokenizer: Tokenizer,
    input: &str,
    separators: &[D],
    spacers: &[D],
) -> Result<Vec<String>, TokenizeError>
where
    D: Delimiter<str>,
{
    let pieces = tokenizer.scan(input, separators, spacers)?;
    let mut items = TokenBuffer::with_capacity(pieces.len())?;
    for piece in &pieces {
        items.push(owned_item(input.slice(piece.span()))?)?;
    }
    Ok(items.finish())
}

/// Copy one token's text into a fallibly allocated `String`
fn owned_item(text: &str) -> Result<String, TokenizeError> {
    let mut item = String::new();
    item.try_reserve_exact(text.len())
        .map_err(|source| TokenizeError::AllocationFailure { requested: 1, source })?;
    item.push_str(text);
    Ok(item)
}
