use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wordlens")]
#[command(version)]
#[command(about = "Keyword frequency and text analysis toolkit")]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read the text from (stdin when neither is given)
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Text to analyze
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// File containing the text
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the most frequent words
    Keywords {
        /// Number of keywords (defaults to the configured count)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: Option<i64>,

        #[command(flatten)]
        input: InputArgs,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print every distinct word with its frequency
    Rank {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long)]
        json: bool,
    },

    /// Validate text and run the text analysis activity
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long)]
        json: bool,
    },

    /// List translation target languages
    Languages,

    /// About this tool
    About,

    /// Print version information
    Version,
}
