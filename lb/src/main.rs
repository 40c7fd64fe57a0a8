//! Library of Babel - CLI entry point
//!
//! Reads pages by address and finds the address of a page holding some text.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use libraryofbabel::cli::{Cli, Command, OutputFormat, PageArgs};
use libraryofbabel::config::Config;
use libraryofbabel::{HexId, LibraryAddress, PageContent, SearchHit, alphabet, generate_page, locate};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("libraryofbabel")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level).map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    };

    let log_file = fs::File::create(log_dir.join("lb.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    // Setup logging with priority: CLI > config > INFO default
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let format = cli.format.unwrap_or(config.output.format);
    debug!(?format, command = ?cli.command, "main: dispatching command");

    match cli.command {
        Command::Page(args) => cmd_page(&config, format, &args),
        Command::Search { text, file, show_page } => cmd_search(&config, format, text, file, show_page),
        Command::Alphabet => cmd_alphabet(format),
    }
}

/// Print the page at an address
fn cmd_page(config: &Config, format: OutputFormat, args: &PageArgs) -> Result<()> {
    debug!(?args, "cmd_page: called");
    let address = match (&args.address, &args.hex) {
        (Some(compact), _) => {
            debug!("cmd_page: compact address");
            compact.parse::<LibraryAddress>()?
        }
        (None, Some(hex)) => {
            debug!("cmd_page: address by field");
            LibraryAddress::new(hex.parse::<HexId>()?, args.wall, args.shelf, args.volume, args.page)?
        }
        (None, None) => eyre::bail!("An address or --hex is required"),
    };
    let page = generate_page(&address)?;
    info!(%address, "Generated page");

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "address": address,
                "content": page,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            println!("{}", address.to_string().cyan());
            for line in page.lines(config.display.line_width) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

/// Find and print the address holding some text
fn cmd_search(
    config: &Config,
    format: OutputFormat,
    text: Option<String>,
    file: Option<PathBuf>,
    show_page: bool,
) -> Result<()> {
    debug!(?file, show_page, "cmd_search: called");
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => {
            debug!(path = %path.display(), "cmd_search: reading text from file");
            let content = fs::read_to_string(&path).context(format!("Failed to read {}", path.display()))?;
            content.trim_end_matches(['\n', '\r']).to_string()
        }
        (None, None) => eyre::bail!("Text or --file is required"),
    };

    let hit = locate(&text)?;
    info!(address = %hit.address, offset = hit.offset, len = hit.len, "Located text");

    let page = if show_page { Some(generate_page(&hit.address)?) } else { None };

    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_value(&hit)?;
            if let Some(page) = &page {
                json["content"] = serde_json::to_value(page)?;
            }
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            println!("{} {}", "✓".green(), hit.address.to_string().cyan());
            println!("  Offset: {}", hit.offset);
            println!("  Length: {}", hit.len);
            if let Some(page) = &page {
                println!();
                print_highlighted(page, &hit, config.display.line_width, config.display.highlight);
            }
        }
    }
    Ok(())
}

/// Print a page wrapped at `width`, colouring the located span
fn print_highlighted(page: &PageContent, hit: &SearchHit, width: usize, highlight: bool) {
    let span = hit.offset..hit.offset + hit.len;
    let width = width.max(1);

    let mut line = String::new();
    for (position, symbol) in page.symbols().enumerate() {
        if highlight && span.contains(&position) {
            line.push_str(&symbol.to_string().black().on_yellow().to_string());
        } else {
            line.push(symbol);
        }
        if (position + 1) % width == 0 {
            println!("{}", line);
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("{}", line);
    }
}

/// List the alphabet
fn cmd_alphabet(format: OutputFormat) -> Result<()> {
    debug!(?format, "cmd_alphabet: called");
    match format {
        OutputFormat::Json => {
            let symbols: Vec<_> = alphabet::SYMBOLS
                .iter()
                .enumerate()
                .map(|(digit, symbol)| serde_json::json!({"digit": digit, "symbol": symbol}))
                .collect();
            println!("{}", serde_json::to_string_pretty(&symbols)?);
        }
        OutputFormat::Text => {
            for (digit, symbol) in alphabet::SYMBOLS.iter().enumerate() {
                println!("{} {:?}", format!("{:>2}", digit).dimmed(), symbol);
            }
        }
    }
    Ok(())
}
