//! Pre-sized output buffer for the scanner

use crate::error::TokenizeError;

/// Upper bound on tokens a scan of `input_len` code units can emit
///
/// Without empties every token covers at least one code unit, so there are at
/// most `input_len`. With empties, each delimiter match adds at most an empty
/// text token plus a spacer, so there are at most `2 * input_len`.
#[must_use]
pub const fn max_tokens(input_len: usize, keep_empty: bool) -> usize {
    if keep_empty { input_len.saturating_mul(2) } else { input_len }
}

/// Output buffer sized once, up front, to the scan's upper bound
#[derive(Debug)]
pub struct TokenBuffer<T> {
    tokens: Vec<T>,
}

impl<T> TokenBuffer<T> {
    /// Allocate room for the worst case of a scan over `input_len` units
    pub fn for_input(input_len: usize, keep_empty: bool) -> Result<Self, TokenizeError> {
        Self::with_capacity(max_tokens(input_len, keep_empty))
    }

    /// Allocate room for exactly `capacity` tokens
    pub fn with_capacity(capacity: usize) -> Result<Self, TokenizeError> {
        let mut tokens = Vec::new();
        tokens.try_reserve_exact(capacity).map_err(|source| {
            TokenizeError::AllocationFailure {
                requested: capacity,
                source,
            }
        })?;
        Ok(Self { tokens })
    }

    /// Append a token
    ///
    /// Within the bound from [`max_tokens`] this never allocates.
    pub fn push(&mut self, token: T) -> Result<(), TokenizeError> {
        if self.tokens.len() == self.tokens.capacity() {
            self.tokens.try_reserve(1).map_err(|source| TokenizeError::AllocationFailure {
                requested: self.tokens.len() + 1,
                source,
            })?;
        }
        self.tokens.push(token);
        Ok(())
    }

    /// Number of tokens written so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if no tokens were written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Room reserved up front
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tokens.capacity()
    }

    /// Finish the buffer; only the tokens actually written are visible
    #[must_use]
    pub fn finish(self) -> Vec<T> {
        self.tokens
    }
}
