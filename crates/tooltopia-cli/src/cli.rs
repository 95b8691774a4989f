//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::{CONFIG_ENV, ColorMode};

/// Tooltopia - browse and run everyday text, web, security and developer tools
#[derive(Parser, Debug)]
#[command(name = "tooltopia")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = CONFIG_ENV, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// When to use colours (overrides the config file)
    #[arg(long, global = true, value_enum, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List all categories with their tool counts
    Categories {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the tools of one category
    Category {
        /// Category id (use 'tooltopia categories' to see options)
        id: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List every tool in catalog order
    Tools {
        /// Only tools of this category
        #[arg(short, long)]
        category: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the featured tools
    Featured {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the most popular tools
    Popular {
        /// How many tools to show (defaults to the config value)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Search tool names and descriptions
    ///
    /// Matching is case-insensitive substring matching.
    ///
    /// Examples:
    ///   tooltopia search json
    ///   tooltopia search "base64"
    Search {
        /// Text to look for
        query: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show details of a tool
    Show {
        /// Tool id (e.g., json-formatter)
        id: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Run a tool on some input
    ///
    /// Input comes from --input, --file or standard input, in that order.
    /// Tool options are passed as key=value pairs.
    ///
    /// Examples:
    ///   tooltopia run text-case-converter -i "Hello World" -o case=snakecase
    ///   tooltopia run password-generator -o length=24 -o symbols=false
    ///   cat style.css | tooltopia run css-minifier
    ///   tooltopia run text-diff-checker -i "a" --other "b"
    Run {
        /// Tool id (use 'tooltopia tools' to see options)
        id: String,

        /// Input text
        #[arg(short, long, conflicts_with = "file")]
        input: Option<String>,

        /// Read input from a file
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Second input, for tools that compare two texts
        #[arg(long)]
        other: Option<String>,

        /// Tool option as key=value (repeatable)
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        options: Vec<(String, String)>,
    },

    /// Resolve a navigation path (e.g., /category/web) to its page
    Route {
        /// Path to resolve
        path: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
