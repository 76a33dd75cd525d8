//! Response printing — the solver side of the wire format.

use std::io::{self, Write};

use smtlib_ast::response::{CheckSatResult, Response};

use crate::canonical::{format_keyword, format_string_literal, format_symbol};
use crate::sexpr::print_sexpr;
use crate::term::print_term;

pub fn print_response<W: Write>(w: &mut W, response: &Response) -> io::Result<()> {
    match response {
        Response::Success => write!(w, "success"),
        Response::Unsupported => write!(w, "unsupported"),
        Response::Error(message) => write!(w, "(error {})", format_string_literal(message)),
        Response::CheckSatResponse(result) => write!(
            w,
            "{}",
            match result {
                CheckSatResult::Sat => "sat",
                CheckSatResult::Unsat => "unsat",
                CheckSatResult::Unknown => "unknown",
            }
        ),
        Response::GetAssertionsResponse(terms) => {
            write!(w, "(")?;
            for (i, term) in terms.iter().enumerate() {
                if i > 0 {
                    write!(w, " ")?;
                }
                print_term(w, term)?;
            }
            write!(w, ")")
        }
        Response::GetAssignmentResponse(pairs) => {
            write!(w, "(")?;
            for (i, (symbol, value)) in pairs.iter().enumerate() {
                if i > 0 {
                    write!(w, " ")?;
                }
                write!(w, "({} {value})", format_symbol(symbol))?;
            }
            write!(w, ")")
        }
        Response::GetValueResponse(pairs) => {
            write!(w, "(")?;
            for (i, (key, value)) in pairs.iter().enumerate() {
                if i > 0 {
                    write!(w, " ")?;
                }
                write!(w, "(")?;
                print_term(w, key)?;
                write!(w, " ")?;
                print_term(w, value)?;
                write!(w, ")")?;
            }
            write!(w, ")")
        }
        Response::GetProofResponse(sexpr) => print_sexpr(w, sexpr),
        Response::GetUnsatCoreResponse(names) => {
            write!(w, "(")?;
            for (i, name) in names.iter().enumerate() {
                if i > 0 {
                    write!(w, " ")?;
                }
                write!(w, "{}", format_symbol(name))?;
            }
            write!(w, ")")
        }
        Response::GetOptionResponse(sexpr) => print_sexpr(w, sexpr),
        Response::GetInfoResponse(items) => {
            write!(w, "(")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(w, " ")?;
                }
                write!(w, "({} ", format_keyword(&item.keyword))?;
                print_sexpr(w, &item.value)?;
                write!(w, ")")?;
            }
            write!(w, ")")
        }
        Response::GetModelResponse(items) => {
            write!(w, "(model")?;
            for item in items.iter() {
                write!(w, " ")?;
                print_sexpr(w, item)?;
            }
            write!(w, ")")
        }
    }
}
