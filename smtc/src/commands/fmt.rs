//! `smtc fmt` — parse a script and re-print it in canonical form.

use std::path::PathBuf;

use smtlib_parse::Parser;
use smtlib_print::{print_script, to_string};

use crate::commands::common::read_source;
use crate::error::Result;

#[derive(Debug, Clone, clap::Args)]
pub struct FmtArgs {
    /// Script to parse and re-print.
    pub file: PathBuf,
}

pub fn run_fmt(args: FmtArgs) -> Result<()> {
    let source = read_source(&args.file)?;
    let mut parser = Parser::new(&source)?;
    let script = parser.parse_script()?;
    print!("{}", to_string(|w| print_script(w, &script)));
    Ok(())
}
