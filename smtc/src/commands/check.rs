//! `smtc check` — drive a solver subprocess through a script.

use std::path::PathBuf;

use smtlib_driver::Driver;
use smtlib_print::{print_response, to_string};

use crate::commands::common::read_source;
use crate::error::{Result, SmtcError};

#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Script whose commands are sent to the solver in order.
    pub file: PathBuf,

    /// Solver command to spawn, e.g. `"z3 -in"`.
    #[arg(long)]
    pub solver: String,
}

pub fn run_check(args: CheckArgs) -> Result<()> {
    let source = read_source(&args.file)?;
    let mut parser = smtlib_parse::Parser::new(&source)?;
    let script = parser.parse_script()?;

    let mut parts = args.solver.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| SmtcError::InvalidSolverCommand(args.solver.clone()))?;
    let solver_args: Vec<&str> = parts.collect();

    let mut driver = Driver::spawn(program, &solver_args)?;
    for command in script.commands() {
        let response = driver.send(command)?;
        println!("{}", to_string(|w| print_response(w, &response)));
    }
    driver.shutdown()?;
    Ok(())
}
