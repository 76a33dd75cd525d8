//! Command and script printing.
//!
//! Each family member has its own fixed textual shape; there is no
//! generic fallback beyond [`smtlib_ast::command::Command::NonStandardCommand`],
//! which is printed verbatim from its captured s-expression.

use std::io::{self, Write};

use smtlib_ast::command::{Command, ConstructorDecl, DatatypeDecl, InfoFlag, SMTOption};
use smtlib_ast::script::Script;
use smtlib_ast::term::Attribute;

use crate::canonical::{format_keyword, format_string_literal, format_symbol};
use crate::identifier::print_sort;
use crate::sexpr::print_sexpr;
use crate::term::{print_term, print_term_stack_safe};

fn to_string(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> io::Result<String> {
    let mut buf = Vec::new();
    f(&mut buf)?;
    Ok(String::from_utf8(buf).expect("printer only emits UTF-8"))
}

fn attribute_string(attr: &Attribute) -> io::Result<String> {
    match &attr.value {
        None => Ok(format_keyword(&attr.keyword)),
        Some(value) => {
            let value_str = to_string(|w| print_sexpr(w, value))?;
            Ok(format!("{} {}", format_keyword(&attr.keyword), value_str))
        }
    }
}

fn smt_option_string(option: &SMTOption) -> io::Result<String> {
    Ok(match option {
        SMTOption::PrintSuccess(b) => format!(":print-success {b}"),
        SMTOption::ExpandDefinitions(b) => format!(":expand-definitions {b}"),
        SMTOption::InteractiveMode(b) => format!(":interactive-mode {b}"),
        SMTOption::ProduceProofs(b) => format!(":produce-proofs {b}"),
        SMTOption::ProduceUnsatCores(b) => format!(":produce-unsat-cores {b}"),
        SMTOption::ProduceModels(b) => format!(":produce-models {b}"),
        SMTOption::ProduceAssignments(b) => format!(":produce-assignments {b}"),
        SMTOption::RegularOutputChannel(s) => {
            format!(":regular-output-channel {}", format_string_literal(s))
        }
        SMTOption::DiagnosticOutputChannel(s) => {
            format!(":diagnostic-output-channel {}", format_string_literal(s))
        }
        SMTOption::RandomSeed(n) => format!(":random-seed {n}"),
        SMTOption::Verbosity(n) => format!(":verbosity {n}"),
        SMTOption::AttributeOption(attr) => attribute_string(attr)?,
    })
}

fn info_flag_string(flag: &InfoFlag) -> String {
    match flag {
        InfoFlag::ErrorBehavior => ":error-behavior".to_string(),
        InfoFlag::Name => ":name".to_string(),
        InfoFlag::Authors => ":authors".to_string(),
        InfoFlag::Version => ":version".to_string(),
        InfoFlag::Status => ":status".to_string(),
        InfoFlag::ReasonUnknown => ":reason-unknown".to_string(),
        InfoFlag::AllStatistics => ":all-statistics".to_string(),
        InfoFlag::Keyword(k) => format_keyword(k),
    }
}

fn constructor_decl_string(ctor: &ConstructorDecl) -> io::Result<String> {
    let mut s = format!("({}", format_symbol(&ctor.name));
    for (field, sort) in &ctor.fields {
        s.push_str(&format!(
            " ({} {})",
            format_symbol(field),
            to_string(|w| print_sort(w, sort))?
        ));
    }
    s.push(')');
    Ok(s)
}

fn datatype_decl_string(decl: &DatatypeDecl) -> io::Result<String> {
    let mut s = format!("({}", format_symbol(&decl.name));
    for ctor in decl.constructors.iter() {
        s.push(' ');
        s.push_str(&constructor_decl_string(ctor)?);
    }
    s.push(')');
    Ok(s)
}

/// Prints a command using the recursive term printer for any embedded
/// term. Fine for ordinary scripts; see [`print_command_stack_safe`] for
/// commands that may embed pathologically deep terms.
pub fn print_command<W: Write>(w: &mut W, command: &Command) -> io::Result<()> {
    print_command_with(w, command, &print_term)
}

/// Prints a command using the stack-safe term printer for any embedded
/// term.
pub fn print_command_stack_safe<W: Write>(w: &mut W, command: &Command) -> io::Result<()> {
    print_command_with(w, command, &print_term_stack_safe)
}

fn print_command_with<W: Write>(
    w: &mut W,
    command: &Command,
    term_printer: &dyn Fn(&mut W, &smtlib_ast::term::Term) -> io::Result<()>,
) -> io::Result<()> {
    match command {
        Command::SetLogic(symbol) => write!(w, "(set-logic {})", format_symbol(symbol)),
        Command::SetOption(option) => write!(w, "(set-option {})", smt_option_string(option)?),
        Command::SetInfo(attr) => write!(w, "(set-info {})", attribute_string(attr)?),
        Command::DeclareSort(symbol, arity) => write!(
            w,
            "(declare-sort {} {})",
            format_symbol(symbol),
            arity.to_canonical_string()
        ),
        Command::DefineSort(symbol, params, sort) => {
            write!(w, "(define-sort {} (", format_symbol(symbol))?;
            for (i, param) in params.iter().enumerate() {
                if i > 0 {
                    write!(w, " ")?;
                }
                write!(w, "{}", format_symbol(param))?;
            }
            write!(w, ") ")?;
            print_sort(w, sort)?;
            write!(w, ")")
        }
        Command::DeclareFun(symbol, params, ret) => {
            write!(w, "(declare-fun {} (", format_symbol(symbol))?;
            for (i, param) in params.iter().enumerate() {
                if i > 0 {
                    write!(w, " ")?;
                }
                print_sort(w, param)?;
            }
            write!(w, ") ")?;
            print_sort(w, ret)?;
            write!(w, ")")
        }
        Command::DefineFun(symbol, params, ret, body) => {
            write!(w, "(define-fun {} (", format_symbol(symbol))?;
            for (i, (param_name, param_sort)) in params.iter().enumerate() {
                if i > 0 {
                    write!(w, " ")?;
                }
                write!(w, "({} ", format_symbol(param_name))?;
                print_sort(w, param_sort)?;
                write!(w, ")")?;
            }
            write!(w, ") ")?;
            print_sort(w, ret)?;
            write!(w, " ")?;
            term_printer(w, body)?;
            write!(w, ")")
        }
        Command::Push(n) => write!(w, "(push {})", n.to_canonical_string()),
        Command::Pop(n) => write!(w, "(pop {})", n.to_canonical_string()),
        Command::Assert(term) => {
            write!(w, "(assert ")?;
            term_printer(w, term)?;
            write!(w, ")")
        }
        Command::CheckSat => write!(w, "(check-sat)"),
        Command::GetAssertions => write!(w, "(get-assertions)"),
        Command::GetProof => write!(w, "(get-proof)"),
        Command::GetUnsatCore => write!(w, "(get-unsat-core)"),
        Command::GetValue(terms) => {
            write!(w, "(get-value (")?;
            for (i, term) in terms.iter().enumerate() {
                if i > 0 {
                    write!(w, " ")?;
                }
                term_printer(w, term)?;
            }
            write!(w, "))")
        }
        Command::GetAssignment => write!(w, "(get-assignment)"),
        Command::GetOption(keyword) => write!(w, "(get-option {})", format_keyword(keyword)),
        Command::GetInfo(flag) => write!(w, "(get-info {})", info_flag_string(flag)),
        Command::Exit => write!(w, "(exit)"),
        Command::GetModel => write!(w, "(get-model)"),
        Command::DeclareDatatypes(decls) => {
            write!(w, "(declare-datatypes () (")?;
            for (i, decl) in decls.iter().enumerate() {
                if i > 0 {
                    write!(w, " ")?;
                }
                write!(w, "{}", datatype_decl_string(decl)?)?;
            }
            write!(w, "))")
        }
        Command::NonStandardCommand(sexpr) => print_sexpr(w, sexpr),
    }
}

/// Prints every command in order, each terminated by a newline.
pub fn print_script<W: Write>(w: &mut W, script: &Script) -> io::Result<()> {
    for command in script.commands() {
        print_command(w, command)?;
        writeln!(w)?;
    }
    Ok(())
}

pub fn print_script_stack_safe<W: Write>(w: &mut W, script: &Script) -> io::Result<()> {
    for command in script.commands() {
        print_command_stack_safe(w, command)?;
        writeln!(w)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smtlib_ast::identifier::Identifier;
    use smtlib_ast::literal::{Literal, Numeral};
    use smtlib_ast::qualified_identifier::QualifiedIdentifier;
    use smtlib_ast::sort::Sort;
    use smtlib_ast::term::Term;

    fn print(command: &Command) -> String {
        to_string(|w| print_command(w, command)).unwrap()
    }

    #[test]
    fn declare_fun_prints_argument_list() {
        let cmd = Command::DeclareFun(
            "f".into(),
            vec![Sort::leaf(Identifier::simple("A")), Sort::leaf(Identifier::simple("B"))],
            Sort::leaf(Identifier::simple("C")),
        );
        assert_eq!(print(&cmd), "(declare-fun f (A B) C)");
    }

    #[test]
    fn check_sat_has_no_arguments() {
        assert_eq!(print(&Command::CheckSat), "(check-sat)");
    }

    #[test]
    fn assert_prints_wrapped_term() {
        let term = Term::identifier(QualifiedIdentifier::plain(Identifier::simple("true")));
        assert_eq!(print(&Command::Assert(term)), "(assert true)");
    }

    #[test]
    fn non_standard_command_prints_verbatim() {
        use smtlib_ast::sexpr::SExpr;
        let cmd = Command::NonStandardCommand(SExpr::list(vec![SExpr::symbol("reset-assertions")]));
        assert_eq!(print(&cmd), "(reset-assertions)");
    }

    #[test]
    fn get_value_wraps_terms_in_pairs_of_parens() {
        let cmd = Command::get_value(
            Term::identifier(QualifiedIdentifier::plain(Identifier::simple("a"))),
            vec![Term::literal(Literal::Numeral(Numeral::from_u64(1)))],
        );
        assert_eq!(print(&cmd), "(get-value (a 1))");
    }

    #[test]
    fn script_terminates_each_command_with_newline() {
        let script = Script::new(vec![Command::CheckSat, Command::Exit]);
        assert_eq!(to_string(|w| print_script(w, &script)).unwrap(), "(check-sat)\n(exit)\n");
    }

    #[test]
    fn declare_datatypes_prints_the_empty_sort_parameter_list() {
        use smtlib_ast::command::{ConstructorDecl, DatatypeDecl};
        let ctor = ConstructorDecl::new("A1", vec![("a1a".into(), Sort::leaf(Identifier::simple("A")))]);
        let decl = DatatypeDecl::new("A", ctor, vec![]);
        let cmd = Command::declare_datatypes(decl, vec![]);
        assert_eq!(print(&cmd), "(declare-datatypes () ((A (A1 (a1a A)))))");
    }

    #[test]
    fn output_channel_options_escape_embedded_quotes_and_backslashes() {
        let cmd = Command::SetOption(SMTOption::RegularOutputChannel("a\"b\\c".into()));
        assert_eq!(print(&cmd), "(set-option :regular-output-channel \"a\\\"b\\\\c\")");
    }
}
