//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::tokenizer::{Piece, ScanStats, TokenKind};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One emitted token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenEntry {
    /// Text or spacer
    pub kind: TokenKind,
    /// Token text (the spacer's text for spacer tokens)
    pub value: String,
    /// Start offset in the input (bytes)
    pub start: usize,
    /// End offset in the input (bytes, exclusive)
    pub end: usize,
}

/// Result of a split operation
#[derive(Debug, Serialize)]
pub struct SplitResult {
    /// Input length in bytes
    pub input_len: usize,
    /// Whether empty runs were kept
    pub keep_empty: bool,
    /// Separator matches dropped
    pub separators_matched: usize,
    /// Tokens in scan order
    pub tokens: Vec<TokenEntry>,
}

impl SplitResult {
    /// Build a result from scanner pieces over `input`
    #[must_use]
    pub fn from_pieces(input: &str, pieces: &[Piece], stats: ScanStats, keep_empty: bool) -> Self {
        let tokens = pieces
            .iter()
            .map(|piece| {
                let span = piece.span();
                TokenEntry {
                    kind: piece.kind(),
                    value: input[span.range()].to_string(),
                    start: span.start,
                    end: span.end,
                }
            })
            .collect();
        Self {
            input_len: input.len(),
            keep_empty,
            separators_matched: stats.separators,
            tokens,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.tokens.is_empty() {
            println!("No tokens.");
            return;
        }

        for (i, token) in self.tokens.iter().enumerate() {
            let value = format!("{:?}", token.value);
            match token.kind {
                TokenKind::Text => println!("  [{i}] {:<6} {value}", token.kind),
                TokenKind::Spacer => {
                    println!("  [{i}] {:<6} {}", token.kind.to_string().cyan(), value.cyan());
                },
            }
        }
        println!("\n{}", format_list(self.tokens.iter().map(|t| t.value.as_str())));
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Render items as a script-style list literal: `["a", "b", ";"]`
#[must_use]
pub fn format_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let items: Vec<String> = items.into_iter().map(|item| format!("{item:?}")).collect();
    format!("[{}]", items.join(", "))
}
