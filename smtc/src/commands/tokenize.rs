//! `smtc tokenize` — dump the token stream with positions.

use std::path::PathBuf;

use smtlib_lex::Lexer;

use crate::commands::common::read_source;
use crate::error::Result;

#[derive(Debug, Clone, clap::Args)]
pub struct TokenizeArgs {
    /// Script to tokenize.
    pub file: PathBuf,
}

pub fn run_tokenize(args: TokenizeArgs) -> Result<()> {
    let source = read_source(&args.file)?;
    for result in Lexer::new(&source) {
        let (token, position) = result.map_err(smtlib_parse::Error::from)?;
        println!("{position} {token:?}");
    }
    Ok(())
}
