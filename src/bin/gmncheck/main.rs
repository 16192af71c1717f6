//! `gmncheck` CLI.

/// Internal module.
mod commands;
/// Internal module.
mod error;
/// Internal module.
mod output;
/// Internal module.
mod util;

use clap::{Parser, Subcommand};
use error::{CliError, Result};
use output::Output;

fn main() {
    match run() {
        Ok(Outcome::Pass) => {}
        Ok(Outcome::Fail) => std::process::exit(1),
        Err(err) => {
            Output::error_user(err.user_message());
            std::process::exit(1);
        }
    }
}

#[derive(Parser)]
#[command(name = "gmncheck")]
#[command(about = "GS1 healthcare GMN check character tool", version)]
#[command(arg_required_else_help = true)]
/// Internal struct.
struct Cli {
    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (only errors and results).
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    /// Internal field.
    command: Commands,
}

#[derive(Subcommand)]
/// Internal enum.
enum Commands {
    /// Print the check character pair for a partial GMN.
    Check(commands::check::CmdArgs),

    /// Complete a partial GMN by appending its check character pair.
    Complete(commands::complete::CmdArgs),

    /// Verify the check character pair of a complete GMN.
    Verify(commands::verify::CmdArgs),

    /// Process one GMN per line from a file (or `-` for stdin).
    Batch(commands::batch::CmdArgs),

    /// Mark the characters that are not valid for their position.
    Positions(commands::positions::CmdArgs),
}

/// Process exit status of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exit 0.
    Pass,
    /// Exit 1 without an error message (e.g. check characters not valid).
    Fail,
}

/// Internal struct.
struct Context {
    /// Internal field.
    out: Output,
}

/// Internal helper function.
fn run() -> Result<Outcome> {
    let cli = Cli::parse();

    if cli.quiet && cli.verbose {
        return Err(CliError::Message(
            "--quiet and --verbose cannot be used together".to_string(),
        ));
    }

    let ctx = Context {
        out: Output::new(cli.quiet, cli.verbose),
    };

    match cli.command {
        Commands::Check(args) => commands::check::run(&ctx, &args),
        Commands::Complete(args) => commands::complete::run(&ctx, &args),
        Commands::Verify(args) => commands::verify::run(&ctx, &args),
        Commands::Batch(args) => commands::batch::run(&ctx, &args),
        Commands::Positions(args) => commands::positions::run(&ctx, &args),
    }
}
