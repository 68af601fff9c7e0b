//! idlt CLI - A command-line tool for scanning OMG IDL files.
//!
//! This is the main entry point for the idlt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{IdltError, Result};

/// idlt - A CLI tool for scanning OMG IDL files
///
/// idlt runs the IDL lexer over source files and prints the token stream
/// or the lexical diagnostics it finds.
#[derive(Parser, Debug)]
#[command(name = "idlt")]
#[command(author = "IDL Tools Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for scanning OMG IDL files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "IDLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "IDLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "IDLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the idlt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of IDL files
    ///
    /// Each token is printed as `KIND 'text'`, or as a JSON object with
    /// its kind, text and location. Illegal tokens are also reported as
    /// diagnostics on stderr.
    Tokens(TokensCommand),

    /// Check IDL files for lexical errors
    ///
    /// Scans the files without printing tokens and reports every illegal
    /// token with its location.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// IDL files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short = 'F', long, value_parser = ["text", "json"])]
    format: Option<String>,

    /// Prefix each token with its line:column
    #[arg(short, long)]
    spans: bool,

    /// Reject identifiers that differ from a keyword only by case
    #[arg(long)]
    strict: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// IDL files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Reject identifiers that differ from a keyword only by case
    #[arg(long)]
    strict: bool,
}

/// Main entry point for the idlt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler. Errors are printed
/// to stderr and turn into a non-zero exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Log output goes to stderr so that token streams on stdout stay clean.
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
        .map_err(|e| IdltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Check(args) => execute_check(args, config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        files: args.files,
        format: args.format,
        spans: args.spans,
        strict: args.strict,
    };
    run_tokens(tokens_args, config)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        files: args.files,
        strict: args.strict,
    };
    run_check(check_args, config)
}
