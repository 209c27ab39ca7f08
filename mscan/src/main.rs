//! mscan - token listing tool for Mini C.
//!
//! This is the main entry point for the mscan CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_config, run_keywords, run_scan, ScanArgs};
use config::{Config, OutputFormat};
use error::{MscanError, Result};

/// mscan - scan Mini C source into a token listing
#[derive(Parser, Debug)]
#[command(name = "mscan")]
#[command(author = "Mini C Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Mini C source into a token listing", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MSCAN_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MSCAN_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the mscan CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a source file and list its tokens
    ///
    /// Every token is written, the final eof token included. Lexical
    /// errors are printed to stderr and make the exit status non-zero.
    Scan(ScanCommand),

    /// Print the keyword table
    Keywords,

    /// Show the effective configuration as TOML
    ///
    /// With --write, saves it to a file instead, which is a convenient way
    /// to start an mscan.toml.
    Config(ConfigCommand),
}

/// Arguments for the scan subcommand.
#[derive(Parser, Debug)]
struct ScanCommand {
    /// Source file to scan (default: stdin, also with "-")
    input: Option<PathBuf>,

    /// Write the token listing to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (listing, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Consume comments without listing them
    #[arg(long)]
    skip_comments: bool,

    /// Accept any non-identifier character after an exponent
    #[arg(long)]
    relaxed_exponents: bool,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to this path
    #[arg(short, long)]
    write: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parses arguments, initializes logging, loads configuration, and
/// dispatches to the selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system. Logs go to stderr so they never mix with
/// the token listing.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MscanError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Scan(args) => run_scan(scan_args(args, config)?),
        Commands::Keywords => run_keywords(),
        Commands::Config(args) => run_config(args.write.as_deref(), &config),
    }
}

/// Merges the scan flags over the loaded configuration.
fn scan_args(args: ScanCommand, config: Config) -> Result<ScanArgs> {
    let format = match args.format.as_deref() {
        Some(name) => OutputFormat::from_str(name).ok_or_else(|| {
            MscanError::Validation(format!(
                "Unknown output format '{}' (expected listing or json)",
                name
            ))
        })?,
        None => config.output.format,
    };

    let mut scanner = config.scanner;
    if args.skip_comments {
        scanner.skip_comments = true;
    }
    if args.relaxed_exponents {
        scanner.strict_exponent_suffix = false;
    }

    Ok(ScanArgs {
        input: args.input,
        output: args.output,
        format,
        scanner,
    })
}
