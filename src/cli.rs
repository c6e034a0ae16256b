//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands::{self, SplitArgs};
use listsplit::output::OutputMode;

/// listsplit - Split text into a list at separators and spacers
#[derive(Parser, Debug)]
#[command(
    name = "listsplit",
    version,
    about = "Split text into a list at separators and spacers",
    long_about = "Split text into a list at every delimiter match.\n\n\
                  Separators are dropped from the output. Spacers are kept as tokens\n\
                  of their own. Earlier patterns win, and separators win over spacers."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split input text into tokens
    Split {
        /// Text to split (reads stdin when omitted)
        input: Option<String>,

        /// Separator pattern, dropped from output (repeatable)
        #[arg(short, long = "separator")]
        separators: Vec<String>,

        /// Spacer pattern, kept as its own token (repeatable)
        #[arg(short = 'p', long = "spacer")]
        spacers: Vec<String>,

        /// Keep empty tokens between adjacent delimiters
        #[arg(short, long)]
        keep_empty: bool,

        /// Config file with default patterns
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Show the effective configuration
    Config {
        /// Config file to show instead of the user-level one
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Split {
            input,
            separators,
            spacers,
            keep_empty,
            config,
        }) => commands::split(
            SplitArgs {
                input,
                separators,
                spacers,
                keep_empty,
                config,
            },
            output_mode,
        ),
        Some(Command::Config { config }) => commands::config(config.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": listsplit::VERSION
                    })
                );
            } else {
                println!("listsplit v{}", listsplit::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": listsplit::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("listsplit v{}", listsplit::VERSION);
                println!("\nRun 'listsplit --help' for usage");
                println!("Run 'listsplit split \"a,b;c\" -s , -p \";\"' to try it");
            }
            Ok(())
        },
    }
}
