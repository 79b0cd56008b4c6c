//! lintconf CLI
//!
//! Resolves layered linter configuration files into one effective
//! configuration and explains where each value came from.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::Result;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "LINTCONF_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} layered linter configuration", "lintconf".green().bold());
            println!();
            println!("Run {} for available commands.", "lintconf --help".cyan());
            Ok(())
        }
    }
}

/// Logs go to stderr so resolved output on stdout stays machine readable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
    tracing::debug!("Verbose mode enabled");
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve {
            files,
            format,
            output,
        } => commands::run_resolve(&files, format.into(), output.as_deref()),
        Commands::Explain { files, key } => commands::run_explain(&files, &key),
        Commands::Rules { files, json } => commands::run_rules(&files, json),
    }
}
