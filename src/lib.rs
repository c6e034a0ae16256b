//! listsplit - Multi-pattern list tokenizer
//!
//! Splits text into a list at every match of two ordered delimiter lists:
//! separators, which are dropped, and spacers, which are kept as tokens of
//! their own. This library provides the tokenizer core plus the configuration
//! and output layers used by the `listsplit` binary.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod output;
pub mod tokenizer;

pub use error::{ConfigError, TokenizeError};
pub use tokenizer::{Token, Tokenizer, split, split_keep_empty, tokenize};
