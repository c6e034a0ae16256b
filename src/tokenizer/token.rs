//! Token types produced by a tokenize call

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A span in the input (code-unit offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start offset
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span contains another
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The span as an index range
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Kind of token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A run of input text between delimiters
    Text,
    /// A spacer delimiter re-emitted as its own token
    Spacer,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Spacer => write!(f, "spacer"),
        }
    }
}

/// Raw scan output: where a token came from, without borrowing the input
///
/// Hosts that materialize tokens into their own representation can work from
/// pieces directly (see [`Tokenizer::scan`](super::Tokenizer::scan)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Piece {
    /// Text run covering `span` of the input
    Text {
        /// Covered input
        span: Span,
    },
    /// Spacer number `index` of the spacer list matched at `span`
    Spacer {
        /// Index into the spacer list
        index: usize,
        /// Input consumed by the match
        span: Span,
    },
}

impl Piece {
    /// Kind of token this piece becomes
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Text { .. } => TokenKind::Text,
            Self::Spacer { .. } => TokenKind::Spacer,
        }
    }

    /// Input covered by this piece
    #[must_use]
    pub const fn span(&self) -> Span {
        match *self {
            Self::Text { span } | Self::Spacer { span, .. } => span,
        }
    }
}

/// A token borrowed from one tokenize call
///
/// `H` is the haystack type (`str`, `[u16]`, ...) and `D` the spacer type.
/// `Spacer` holds a reference to the caller's own spacer entry, so
/// [`Token::is_spacer`] can test identity with [`std::ptr::eq`].
#[derive(Debug)]
pub enum Token<'s, 'd, H: ?Sized, D: ?Sized> {
    /// Slice of the input between delimiters
    Text(&'s H),
    /// The spacer entry that matched
    Spacer(&'d D),
}

// Manual impls: derive would demand `H: Clone`, which `str` and `[T]` are not.
impl<H: ?Sized, D: ?Sized> Clone for Token<'_, '_, H, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: ?Sized, D: ?Sized> Copy for Token<'_, '_, H, D> {}

impl<H, D> PartialEq for Token<'_, '_, H, D>
where
    H: ?Sized + PartialEq,
    D: ?Sized + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Spacer(a), Self::Spacer(b)) => a == b,
            _ => false,
        }
    }
}

impl<H, D> Eq for Token<'_, '_, H, D>
where
    H: ?Sized + Eq,
    D: ?Sized + Eq,
{
}

impl<'s, 'd, H: ?Sized, D: ?Sized> Token<'s, 'd, H, D> {
    /// Kind of this token
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Text(_) => TokenKind::Text,
            Self::Spacer(_) => TokenKind::Spacer,
        }
    }

    /// The text slice, if this is a text token
    #[must_use]
    pub const fn as_text(&self) -> Option<&'s H> {
        match *self {
            Self::Text(text) => Some(text),
            Self::Spacer(_) => None,
        }
    }

    /// The spacer entry, if this is a spacer token
    #[must_use]
    pub const fn as_spacer(&self) -> Option<&'d D> {
        match *self {
            Self::Spacer(spacer) => Some(spacer),
            Self::Text(_) => None,
        }
    }

    /// Whether this token is exactly `spacer` (same object, not just equal)
    #[must_use]
    pub fn is_spacer(&self, spacer: &D) -> bool {
        self.as_spacer().is_some_and(|s| std::ptr::eq(s, spacer))
    }
}

impl<H, D> fmt::Display for Token<'_, '_, H, D>
where
    H: ?Sized + fmt::Display,
    D: ?Sized + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => fmt::Display::fmt(text, f),
            Self::Spacer(spacer) => fmt::Display::fmt(spacer, f),
        }
    }
}
