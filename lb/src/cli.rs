//! CLI command definitions and subcommands

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Library of Babel - every page of Persian text, addressed by shelf position
#[derive(Parser, Debug)]
#[command(
    name = "lb",
    version,
    about = "Read any page of the Persian Library of Babel, or find the page holding your text",
    after_help = "Logs are written to: ~/.local/share/libraryofbabel/logs/lb.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format (overrides config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the page stored at an address
    Page(PageArgs),

    /// Find the address of a page containing some text
    Search {
        /// Text to place (symbols from the alphabet only)
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file (a trailing newline is ignored)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Also print the page, with the text highlighted
        #[arg(short, long)]
        show_page: bool,
    },

    /// List the alphabet with digit values
    Alphabet,
}

/// Address of the page to print, compact or by field
#[derive(Args, Debug)]
pub struct PageArgs {
    /// Compact address: hex<id>:<wall>:<shelf>:<volume>:<page>
    #[arg(conflicts_with_all = ["hex", "wall", "shelf", "volume", "page"])]
    pub address: Option<String>,

    /// Hex id, e.g. hex42
    #[arg(long, required_unless_present = "address")]
    pub hex: Option<String>,

    /// Wall (1-4)
    #[arg(short, long, default_value = "1")]
    pub wall: u32,

    /// Shelf (1-5)
    #[arg(short, long, default_value = "1")]
    pub shelf: u32,

    /// Volume (1-32)
    #[arg(short, long, default_value = "1")]
    pub volume: u32,

    /// Page (1-410)
    #[arg(short, long, default_value = "1")]
    pub page: u32,
}

/// Output format for command results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}
