//! Drives an external SMT solver process over its stdio pipes.
//!
//! Grounded on the `SMTProc` trait pattern (a `Child`'s stdin/stdout pair
//! driven with `Write`/`Read`), adapted from raw-byte-buffer polling to the
//! blocking line-oriented protocol real solvers speak: one command in,
//! exactly one response out. No state is kept beyond the child process
//! itself — the caller is responsible for the order commands are sent in,
//! same as talking to the solver directly.

mod error;

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command as ProcessCommand, Stdio};

use smtlib_ast::command::Command;
use smtlib_ast::response::{CheckSatResult, Response};
use smtlib_parse::Parser;

pub use error::{DriverError, Result};

/// A live connection to a solver subprocess.
pub struct Driver {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl Driver {
    /// Spawns `program` with `args`, wiring its stdin/stdout for use by
    /// [`Driver::send`]. Stderr is discarded; solver diagnostics are not
    /// part of the wire contract this driver speaks.
    pub fn spawn(program: &str, args: &[&str]) -> Result<Self> {
        let mut child = ProcessCommand::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(DriverError::Spawn)?;

        let stdin = child.stdin.take().expect("spawned with piped stdin");
        let stdout = child.stdout.take().expect("spawned with piped stdout");

        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }

    /// Prints `command`, flushes it to the solver, and reads back exactly
    /// one response of the kind that command produces.
    ///
    /// `Exit` gets no response on most solvers, so it is not followed by a
    /// read; callers that want a clean shutdown should use
    /// [`Driver::shutdown`] instead of sending `Exit` directly.
    pub fn send(&mut self, command: &Command) -> Result<Response> {
        let text = smtlib_print::to_string(|w| smtlib_print::print_command(w, command));
        tracing::debug!(command = %text, "writing command to solver");
        writeln!(self.stdin, "{text}")?;
        self.stdin.flush()?;

        if matches!(command, Command::Exit) {
            return Ok(Response::Success);
        }

        let response_text = self.read_response_text()?;
        tracing::debug!(response = response_text.trim(), "read response from solver");
        Ok(parse_response(command, &response_text))
    }

    /// Sends `(exit)` and waits for the child to terminate. Prefer this
    /// over letting a `Driver` simply drop when the caller cares about the
    /// exit status; `Drop` performs the same teardown but discards it.
    pub fn shutdown(mut self) -> Result<()> {
        let _ = self.send(&Command::Exit);
        self.child.wait()?;
        Ok(())
    }

    /// Reads lines until parenthesis depth returns to zero, treating
    /// anything inside a double-quoted string as opaque. A bare word
    /// response (`sat`, `success`, ...) has no parens at all, so it
    /// satisfies this after its first line.
    fn read_response_text(&mut self) -> Result<String> {
        let mut buf = String::new();
        let mut depth: i64 = 0;
        let mut seen_non_whitespace = false;
        let mut in_string = false;

        loop {
            let mut line = String::new();
            let n = self.stdout.read_line(&mut line)?;
            if n == 0 {
                return if seen_non_whitespace {
                    Ok(buf)
                } else {
                    Err(DriverError::Protocol(
                        "solver closed its stdout before responding".to_string(),
                    ))
                };
            }

            for ch in line.chars() {
                if in_string {
                    if ch == '"' {
                        in_string = false;
                    }
                    continue;
                }
                match ch {
                    '"' => {
                        in_string = true;
                        seen_non_whitespace = true;
                    }
                    '(' => {
                        depth += 1;
                        seen_non_whitespace = true;
                    }
                    ')' => {
                        depth -= 1;
                        seen_non_whitespace = true;
                    }
                    c if c.is_whitespace() => {}
                    _ => seen_non_whitespace = true,
                }
            }

            buf.push_str(&line);
            if seen_non_whitespace && depth <= 0 {
                return Ok(buf);
            }
        }
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        let _ = writeln!(self.stdin, "(exit)");
        let _ = self.stdin.flush();
        let _ = self.child.wait();
    }
}

fn parse_response(command: &Command, text: &str) -> Response {
    let mut parser = match Parser::new(text) {
        Ok(parser) => parser,
        Err(_) => return fallback_response(command, text),
    };

    let parsed = match command {
        Command::CheckSat => parser.parse_check_sat_response(),
        Command::GetAssertions => parser.parse_get_assertions_response(),
        Command::GetProof => parser.parse_get_proof_response(),
        Command::GetUnsatCore => parser.parse_get_unsat_core_response(),
        Command::GetValue(_) => parser.parse_get_value_response(),
        Command::GetAssignment => parser.parse_get_assignment_response(),
        Command::GetOption(_) => parser.parse_get_option_response(),
        Command::GetInfo(_) => parser.parse_get_info_response(),
        Command::GetModel => parser.parse_get_model_response(),
        _ => parser.parse_gen_response(),
    };

    parsed.unwrap_or_else(|_| fallback_response(command, text))
}

/// A `CheckSat` response that doesn't parse is treated as a solver saying
/// "I don't know" rather than a driver-level failure; every other command's
/// malformed response becomes an `Error` carrying the raw text, since there
/// is no safe default answer for "what did the solver's model look like".
fn fallback_response(command: &Command, text: &str) -> Response {
    if matches!(command, Command::CheckSat) {
        Response::CheckSatResponse(CheckSatResult::Unknown)
    } else {
        Response::Error(text.trim().to_string())
    }
}
