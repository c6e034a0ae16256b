//! Config command - show the effective configuration

use std::path::Path;

use listsplit::config::TokenizerConfig;
use listsplit::output::{OutputMode, format_list};

/// Print the configuration a split would start from
pub fn config(path: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let config = TokenizerConfig::resolve(path.map(Path::new))?;
    let source = path.map_or_else(
        || TokenizerConfig::default_path().display().to_string(),
        ToString::to_string,
    );

    if mode == OutputMode::Json {
        let json = serde_json::json!({
            "path": source,
            "separators": config.separators,
            "spacers": config.spacers,
            "keep_empty": config.keep_empty,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("Config: {source}");
        println!("  separators: {}", format_list(config.separators.iter().map(String::as_str)));
        println!("  spacers:    {}", format_list(config.spacers.iter().map(String::as_str)));
        println!("  keep_empty: {}", config.keep_empty);
    }
    Ok(())
}
