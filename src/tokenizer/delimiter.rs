//! Delimiter patterns and the matcher that tests them against the input
//!
//! A delimiter is anything that can hand out a pattern of the haystack's code
//! units. Entries that have no usable pattern (empty text, missing payload) are
//! inert: the matcher skips them without error.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Span;

/// Text that can be scanned code unit by code unit
///
/// Implemented for `str` (UTF-8 bytes) and `[T]` (e.g. `[u16]` for UTF-16
/// hosts). Lengths everywhere in this crate are counted in these units.
pub trait Haystack {
    /// The code unit compared during matching
    type Unit: PartialEq;

    /// The code units of this text
    fn units(&self) -> &[Self::Unit];

    /// Sub-slice covering `span`
    ///
    /// Callers only pass spans produced by the scanner, which start and end on
    /// match boundaries.
    fn slice(&self, span: Span) -> &Self;
}

impl Haystack for str {
    type Unit = u8;

    fn units(&self) -> &[u8] {
        self.as_bytes()
    }

    // Patterns are themselves `str`, so match boundaries are char boundaries.
    fn slice(&self, span: Span) -> &Self {
        &self[span.range()]
    }
}

impl<T: PartialEq> Haystack for [T] {
    type Unit = T;

    fn units(&self) -> &[T] {
        self
    }

    fn slice(&self, span: Span) -> &Self {
        &self[span.range()]
    }
}

/// Something usable as a separator or spacer over haystack `H`
pub trait Delimiter<H: Haystack + ?Sized> {
    /// Pattern text, or `None` when this entry can never match
    fn pattern(&self) -> Option<&H>;
}

impl Delimiter<str> for str {
    fn pattern(&self) -> Option<&str> {
        Some(self)
    }
}

impl Delimiter<str> for String {
    fn pattern(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: PartialEq> Delimiter<[T]> for [T] {
    fn pattern(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T: PartialEq> Delimiter<[T]> for Vec<T> {
    fn pattern(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<H, D> Delimiter<H> for &D
where
    H: Haystack + ?Sized,
    D: Delimiter<H> + ?Sized,
{
    fn pattern(&self) -> Option<&H> {
        (**self).pattern()
    }
}

impl<H, D> Delimiter<H> for Option<D>
where
    H: Haystack + ?Sized,
    D: Delimiter<H>,
{
    fn pattern(&self) -> Option<&H> {
        self.as_ref().and_then(|delimiter| delimiter.pattern())
    }
}

/// Pattern text paired with the caller's payload
///
/// When used as a spacer, the matching `DelimiterPattern` itself is handed
/// back in [`Token::Spacer`](super::Token::Spacer), so the payload comes back
/// by reference rather than being rebuilt from the matched text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterPattern<K, P> {
    /// Pattern text (`String`, `Vec<u16>`, ...)
    pub text: K,
    /// Opaque payload; `None` makes the pattern inert
    pub payload: Option<P>,
}

impl<K, P> DelimiterPattern<K, P> {
    /// Create a pattern carrying `payload`
    #[must_use]
    pub const fn new(text: K, payload: P) -> Self {
        Self {
            text,
            payload: Some(payload),
        }
    }

    /// Create a pattern with no payload (never matches)
    #[must_use]
    pub const fn inert(text: K) -> Self {
        Self {
            text,
            payload: None,
        }
    }

    /// The payload, if any
    #[must_use]
    pub const fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }
}

impl<H, K, P> Delimiter<H> for DelimiterPattern<K, P>
where
    H: Haystack + ?Sized,
    K: Borrow<H>,
{
    fn pattern(&self) -> Option<&H> {
        self.payload.as_ref().map(|_| self.text.borrow())
    }
}

impl<K: fmt::Display, P> fmt::Display for DelimiterPattern<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.text, f)
    }
}

/// A successful delimiter match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterMatch {
    /// Index of the matching pattern in its list
    pub index: usize,
    /// Code units consumed (always at least 1)
    pub len: usize,
}

/// Find the first pattern in `patterns` that matches `input` at `position`
///
/// Patterns are tried in list order and the first hit wins, even when a later
/// pattern would match more input. Comparison is exact code-unit equality.
/// Empty and inert patterns are skipped. A `position` past the end of the
/// input never matches.
#[must_use]
pub fn match_at<H, D>(input: &H, position: usize, patterns: &[D]) -> Option<DelimiterMatch>
where
    H: Haystack + ?Sized,
    D: Delimiter<H>,
{
    let rest = input.units().get(position..)?;
    patterns.iter().enumerate().find_map(|(index, delimiter)| {
        let pattern = delimiter.pattern()?.units();
        (!pattern.is_empty() && rest.starts_with(pattern)).then_some(DelimiterMatch {
            index,
            len: pattern.len(),
        })
    })
}
