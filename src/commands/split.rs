//! Split command - tokenize input with separators and spacers

use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use listsplit::config::TokenizerConfig;
use listsplit::output::{OutputMode, SplitResult};
use log::debug;

/// Options collected from the command line
#[derive(Debug)]
pub struct SplitArgs {
    /// Input text; stdin when absent
    pub input: Option<String>,
    /// Extra separators, tried after configured ones
    pub separators: Vec<String>,
    /// Extra spacers, tried after configured ones
    pub spacers: Vec<String>,
    /// Keep empty runs
    pub keep_empty: bool,
    /// Explicit config file
    pub config: Option<String>,
}

/// Split the input and render the tokens
pub fn split(args: SplitArgs, mode: OutputMode) -> anyhow::Result<()> {
    let config = TokenizerConfig::resolve(args.config.as_deref().map(Path::new))
        .context("failed to load config")?
        .extend(&args.separators, &args.spacers, args.keep_empty);

    let input = match args.input {
        Some(input) => input,
        None => read_stdin()?,
    };

    let tokenizer = config.tokenizer();
    let (pieces, stats) = tokenizer.scan_with_stats(
        input.as_str(),
        config.separators.as_slice(),
        config.spacers.as_slice(),
    )?;
    debug!(
        "split {} byte(s) with {} separator(s) and {} spacer(s)",
        input.len(),
        config.separators.len(),
        config.spacers.len()
    );

    SplitResult::from_pieces(&input, &pieces, stats, tokenizer.keep_empty()).render(mode);
    Ok(())
}

/// Read all of stdin, dropping one trailing newline
fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input).context("failed to read stdin")?;
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}
