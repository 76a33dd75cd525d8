//! Round-trip and seed-scenario coverage across the lex/parse/print
//! pipeline as a whole.

use smtlib_ast::command::Command;
use smtlib_ast::identifier::Identifier;
use smtlib_ast::literal::{Literal, Numeral};
use smtlib_ast::qualified_identifier::QualifiedIdentifier;
use smtlib_ast::script::Script;
use smtlib_ast::sort::Sort;
use smtlib_ast::term::{Term, VarBinding};
use smtlib_ast::response::Response;
use smtlib_parse::Parser;
use smtlib_print::{print_command, print_response, print_script, print_term, to_string};

fn print_cmd(cmd: &Command) -> String {
    to_string(|w| print_command(w, cmd))
}

fn reparse_command(text: &str) -> Command {
    let mut parser = Parser::new(text).unwrap();
    parser.parse_command().unwrap()
}

#[test]
fn declare_fun_round_trips() {
    let cmd = Command::DeclareFun(
        "f".into(),
        vec![Sort::leaf(Identifier::simple("A")), Sort::leaf(Identifier::simple("B"))],
        Sort::leaf(Identifier::simple("C")),
    );
    let printed = print_cmd(&cmd);
    assert_eq!(printed, "(declare-fun f (A B) C)");
    assert_eq!(reparse_command(&printed), cmd);
}

#[test]
fn assert_with_nested_application_round_trips() {
    let term = Term::apply(
        QualifiedIdentifier::plain(Identifier::simple("f")),
        Term::literal(Literal::Numeral(Numeral::from_u64(0))),
        vec![Term::literal(Literal::Numeral(Numeral::from_u64(1)))],
    );
    let cmd = Command::Assert(term);
    let printed = print_cmd(&cmd);
    assert_eq!(printed, "(assert (f 0 1))");
    assert_eq!(reparse_command(&printed), cmd);
}

#[test]
fn get_value_round_trips() {
    let cmd = Command::get_value(
        Term::identifier(QualifiedIdentifier::plain(Identifier::simple("a"))),
        vec![Term::identifier(QualifiedIdentifier::plain(Identifier::simple("b")))],
    );
    let printed = print_cmd(&cmd);
    assert_eq!(printed, "(get-value (a b))");
    assert_eq!(reparse_command(&printed), cmd);
}

#[test]
fn printing_twice_after_a_reparse_is_stable() {
    let cmd = Command::Assert(Term::let_binding(
        VarBinding::new("x", Term::literal(Literal::Numeral(Numeral::from_u64(0)))),
        vec![],
        Term::identifier(QualifiedIdentifier::plain(Identifier::simple("x"))),
    ));
    let first = print_cmd(&cmd);
    let reparsed = reparse_command(&first);
    let second = print_cmd(&reparsed);
    assert_eq!(first, second);
}

#[test]
fn quoted_symbol_round_trips_through_lexer_and_printer() {
    let cmd = Command::SetLogic("a b".into());
    let printed = print_cmd(&cmd);
    assert_eq!(printed, "(set-logic |a b|)");
    assert_eq!(reparse_command(&printed), cmd);
}

#[test]
fn hexadecimal_literal_is_canonical_uppercase_after_round_trip() {
    let source = "(assert (= x #xdead))";
    let mut parser = Parser::new(source).unwrap();
    let cmd = parser.parse_command().unwrap();
    let printed = print_cmd(&cmd);
    assert!(printed.contains("#xDEAD"));
}

#[test]
fn whole_script_round_trips() {
    let script = Script::new(vec![
        Command::SetLogic("QF_LIA".into()),
        Command::DeclareFun("x".into(), vec![], Sort::leaf(Identifier::simple("Int"))),
        Command::Assert(Term::identifier(QualifiedIdentifier::plain(Identifier::simple("x")))),
        Command::CheckSat,
        Command::Exit,
    ]);
    let printed = to_string(|w| print_script(w, &script));
    let mut parser = Parser::new(&printed).unwrap();
    let reparsed = parser.parse_script().unwrap();
    assert_eq!(reparsed, script);
}

#[test]
fn seed_scenario_declare_fun_text_matches() {
    let text = "(declare-fun f (A B) C)";
    let cmd = reparse_command(text);
    assert_eq!(print_cmd(&cmd), text);
}

#[test]
fn seed_scenario_get_value_text_matches() {
    let text = "(get-value (a b))";
    let cmd = reparse_command(text);
    assert_eq!(print_cmd(&cmd), text);
}

#[test]
fn seed_scenario_get_value_response_text_matches() {
    let text = "((a 42) (b 12))";
    let mut parser = Parser::new(text).unwrap();
    let response = parser.parse_get_value_response().unwrap();
    match &response {
        Response::GetValueResponse(pairs) => assert_eq!(pairs.len(), 2),
        other => panic!("expected get-value response, got {other:?}"),
    }
    assert_eq!(to_string(|w| print_response(w, &response)), text);
}

#[test]
fn seed_scenario_declare_datatypes_with_two_constructors_round_trips() {
    let text = "(declare-datatypes () ((A (A1 (a1a A) (a1b A)) (A2 (a2a A) (a2b A)))))";
    let cmd = reparse_command(text);
    match &cmd {
        Command::DeclareDatatypes(decls) => {
            assert_eq!(decls.len(), 1);
            assert_eq!(decls.head().constructors.len(), 2);
        }
        other => panic!("expected declare-datatypes, got {other:?}"),
    }
    assert_eq!(print_cmd(&cmd), text);
}

#[test]
fn declare_datatypes_rejects_a_missing_leading_sort_parameter_list() {
    let mut parser = Parser::new("(declare-datatypes ((A (A1 (a1a A)))))").unwrap();
    assert!(parser.parse_command().is_err());
}

#[test]
fn moderately_nested_let_chain_round_trips() {
    // Exercises the same shape as the depth-robustness property, at a
    // depth shallow enough for the hand-written recursive-descent parser
    // (which, unlike the stack-safe printer, has no explicit work-stack)
    // to handle comfortably on an ordinary thread stack.
    let depth = 500;
    let mut term = Term::identifier(QualifiedIdentifier::plain(Identifier::simple("x")));
    for i in 0..depth {
        let binding = VarBinding::new(
            format!("x{i}"),
            Term::literal(Literal::Numeral(Numeral::from_u64(0))),
        );
        term = Term::let_binding(binding, vec![], term);
    }
    let printed = to_string(|w| print_term(w, &term));
    let mut parser = Parser::new(&printed).unwrap();
    let reparsed = parser.parse_term().unwrap();
    assert_eq!(reparsed, term);
}
