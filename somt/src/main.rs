//! somt - command-line tool for inspecting SOM source files.
//!
//! This is the main entry point for the somt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs},
    common::OutputFormat,
    lex::{run_lex, LexArgs},
};
use config::Config;
use error::{Result, SomtError};

/// somt - inspect SOM source files
///
/// Dumps the token stream of SOM sources and checks them for lexical
/// errors.
#[derive(Parser, Debug)]
#[command(name = "somt")]
#[command(author = "SOM Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect SOM source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SOMT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SOMT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SOMT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the somt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of each file
    ///
    /// Writes one `KIND literal` line per token, or a JSON array with
    /// offsets and positions. Lexical diagnostics go to stderr.
    Lex(LexCommand),

    /// Check files for lexical errors
    ///
    /// Renders every diagnostic with its source line and exits non-zero
    /// when any file has errors.
    Check(CheckCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Print line and column after each token
    #[arg(short, long)]
    spans: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Fail on warnings as well as errors
    #[arg(long)]
    deny_warnings: bool,
}

/// Main entry point for the somt CLI.
///
/// Any error is printed to stderr and turned into a failing exit code.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load configuration, initialize logging and run the selected command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token dumps on stdout stay machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| SomtError::Config(format!("Failed to initialize logging: {}", e)))?;

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
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, verbose, config),
        Commands::Check(args) => execute_check(args, verbose, config),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, verbose: bool, config: Config) -> Result<()> {
    let lex_args = LexArgs {
        verbose,
        files: args.files,
        format: args.format,
        spans: args.spans,
    };
    run_lex(lex_args, config)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        verbose,
        files: args.files,
        deny_warnings: args.deny_warnings,
    };
    run_check(check_args, config)
}
