//! smtc — a small CLI over the SMT-LIB v2 lexer, parser, printer, and
//! solver driver.
//!
//! It exercises the library end to end: `fmt` proves the parse/print round
//! trip on real files, `tokenize` exposes the lexer for debugging, and
//! `check` drives an actual solver subprocess through a script.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt as tracing_fmt, prelude::*, EnvFilter};

use commands::{CheckArgs, FmtArgs, TokenizeArgs};
use error::Result;

#[derive(Parser, Debug)]
#[command(name = "smtc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize, parse, print, and drive a solver over SMT-LIB v2 scripts")]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true, env = "SMTC_VERBOSE")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a script and re-print it in canonical form.
    Fmt(FmtArgs),
    /// Dump the token stream of a script, with positions.
    Tokenize(TokenizeArgs),
    /// Parse a script and send its commands to a solver subprocess.
    Check(CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Fmt(args) => commands::run_fmt(args),
        Commands::Tokenize(args) => commands::run_tokenize(args),
        Commands::Check(args) => commands::run_check(args),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_fmt::layer().with_target(false))
        .try_init();
}
