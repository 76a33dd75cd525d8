//! Term printing, in two forms.
//!
//! [`print_term`] is ordinary structural recursion — the natural way to
//! write it, and fine for the depths any hand-written script reaches. It
//! is allowed to blow the native call stack on pathological input (a
//! 10,000-deep `let` chain, say).
//!
//! [`print_term_stack_safe`] produces byte-identical output through an
//! explicit work-stack instead of the call stack, so it survives inputs
//! [`print_term`] can't. Each step pops one unit of work — either a raw
//! text chunk to emit, or a subterm still to be expanded — and expansion
//! pushes its children back on in right-to-left order so they pop out
//! left to right.

use std::io::{self, Write};

use smtlib_ast::term::{Attribute, Term};

use crate::canonical::{format_keyword, format_symbol};
use crate::identifier::{print_qualified_identifier, print_sort};
use crate::literal::print_literal;
use crate::sexpr::print_sexpr;

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

/// Plain recursive descent. One stack frame per nested `Term`.
pub fn print_term<W: Write>(w: &mut W, term: &Term) -> io::Result<()> {
    match term {
        Term::Literal(lit) => print_literal(w, lit),
        Term::Identifier(qid) => print_qualified_identifier(w, qid),
        Term::FunctionApplication { function, args } => {
            write!(w, "(")?;
            print_qualified_identifier(w, function)?;
            for arg in args {
                write!(w, " ")?;
                print_term(w, arg)?;
            }
            write!(w, ")")
        }
        Term::Let { bindings, body } => {
            write!(w, "(let (")?;
            for (i, binding) in bindings.iter().enumerate() {
                if i > 0 {
                    write!(w, " ")?;
                }
                write!(w, "({} ", format_symbol(&binding.symbol))?;
                print_term(w, &binding.term)?;
                write!(w, ")")?;
            }
            write!(w, ") ")?;
            print_term(w, body)?;
            write!(w, ")")
        }
        Term::ForAll { vars, body } => print_quantifier(w, "forall", vars, body),
        Term::Exists { vars, body } => print_quantifier(w, "exists", vars, body),
        Term::Annotated { term, attrs } => {
            write!(w, "(! ")?;
            print_term(w, term)?;
            for attr in attrs {
                write!(w, " {}", attribute_string(attr)?)?;
            }
            write!(w, ")")
        }
    }
}

fn print_quantifier<W: Write>(
    w: &mut W,
    keyword: &str,
    vars: &smtlib_ast::nonempty::NonEmptyVec<smtlib_ast::term::SortedVar>,
    body: &Term,
) -> io::Result<()> {
    write!(w, "({keyword} (")?;
    for (i, var) in vars.iter().enumerate() {
        if i > 0 {
            write!(w, " ")?;
        }
        write!(w, "({} ", format_symbol(&var.symbol))?;
        print_sort(w, &var.sort)?;
        write!(w, ")")?;
    }
    write!(w, ") ")?;
    print_term(w, body)?;
    write!(w, ")")
}

enum Frame<'a> {
    Raw(String),
    Term(&'a Term),
}

fn push_in_order<'a>(stack: &mut Vec<Frame<'a>>, items: Vec<Frame<'a>>) {
    for item in items.into_iter().rev() {
        stack.push(item);
    }
}

/// Iterative descent over an explicit work-stack. Produces exactly the
/// same bytes as [`print_term`] for any input both can handle, and keeps
/// working where [`print_term`] would overflow the call stack.
pub fn print_term_stack_safe<W: Write>(w: &mut W, term: &Term) -> io::Result<()> {
    let mut stack = vec![Frame::Term(term)];
    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Raw(s) => w.write_all(s.as_bytes())?,
            Frame::Term(t) => expand_term(&mut stack, t)?,
        }
    }
    Ok(())
}

fn expand_term<'a>(stack: &mut Vec<Frame<'a>>, term: &'a Term) -> io::Result<()> {
    match term {
        Term::Literal(lit) => {
            stack.push(Frame::Raw(to_string(|w| print_literal(w, lit))?));
        }
        Term::Identifier(qid) => {
            stack.push(Frame::Raw(to_string(|w| print_qualified_identifier(w, qid))?));
        }
        Term::FunctionApplication { function, args } => {
            let mut items = Vec::with_capacity(2 * args.len() + 1);
            items.push(Frame::Raw(format!(
                "({}",
                to_string(|w| print_qualified_identifier(w, function))?
            )));
            for arg in args {
                items.push(Frame::Raw(" ".to_string()));
                items.push(Frame::Term(arg));
            }
            items.push(Frame::Raw(")".to_string()));
            push_in_order(stack, items);
        }
        Term::Let { bindings, body } => {
            let mut items = vec![Frame::Raw("(let (".to_string())];
            for (i, binding) in bindings.iter().enumerate() {
                if i > 0 {
                    items.push(Frame::Raw(" ".to_string()));
                }
                items.push(Frame::Raw(format!("({} ", format_symbol(&binding.symbol))));
                items.push(Frame::Term(&binding.term));
                items.push(Frame::Raw(")".to_string()));
            }
            items.push(Frame::Raw(") ".to_string()));
            items.push(Frame::Term(body));
            items.push(Frame::Raw(")".to_string()));
            push_in_order(stack, items);
        }
        Term::ForAll { vars, body } => expand_quantifier(stack, "forall", vars, body)?,
        Term::Exists { vars, body } => expand_quantifier(stack, "exists", vars, body)?,
        Term::Annotated { term, attrs } => {
            let mut items = vec![Frame::Raw("(! ".to_string()), Frame::Term(term)];
            for attr in attrs {
                items.push(Frame::Raw(format!(" {}", attribute_string(attr)?)));
            }
            items.push(Frame::Raw(")".to_string()));
            push_in_order(stack, items);
        }
    }
    Ok(())
}

fn expand_quantifier<'a>(
    stack: &mut Vec<Frame<'a>>,
    keyword: &str,
    vars: &smtlib_ast::nonempty::NonEmptyVec<smtlib_ast::term::SortedVar>,
    body: &'a Term,
) -> io::Result<()> {
    let mut header = format!("({keyword} (");
    for (i, var) in vars.iter().enumerate() {
        if i > 0 {
            header.push(' ');
        }
        header.push_str(&format!(
            "({} {})",
            format_symbol(&var.symbol),
            to_string(|w| print_sort(w, &var.sort))?
        ));
    }
    header.push_str(") ");
    let items = vec![Frame::Raw(header), Frame::Term(body), Frame::Raw(")".to_string())];
    push_in_order(stack, items);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smtlib_ast::identifier::Identifier;
    use smtlib_ast::literal::Numeral;
    use smtlib_ast::qualified_identifier::QualifiedIdentifier;
    use smtlib_ast::term::VarBinding;

    fn print(term: &Term) -> String {
        to_string(|w| print_term(w, term)).unwrap()
    }

    fn print_safe(term: &Term) -> String {
        to_string(|w| print_term_stack_safe(w, term)).unwrap()
    }

    fn id_term(name: &str) -> Term {
        Term::identifier(QualifiedIdentifier::plain(Identifier::simple(name)))
    }

    #[test]
    fn function_application_prints_both_ways_identically() {
        let t = Term::apply(
            QualifiedIdentifier::plain(Identifier::simple("f")),
            Term::literal(smtlib_ast::literal::Literal::Numeral(Numeral::from_u64(0))),
            vec![id_term("x")],
        );
        assert_eq!(print(&t), "(f 0 x)");
        assert_eq!(print_safe(&t), "(f 0 x)");
    }

    #[test]
    fn let_term_prints_both_ways_identically() {
        let binding = VarBinding::new("x", id_term("y"));
        let t = Term::let_binding(binding, vec![], id_term("x"));
        assert_eq!(print(&t), "(let ((x y)) x)");
        assert_eq!(print_safe(&t), "(let ((x y)) x)");
    }

    #[test]
    fn deep_let_chain_survives_under_stack_safe_printer() {
        let depth = 10_000;
        let mut term = id_term("x");
        for i in 0..depth {
            let binding = VarBinding::new(format!("x{i}"), Term::literal(
                smtlib_ast::literal::Literal::Numeral(Numeral::from_u64(0)),
            ));
            term = Term::let_binding(binding, vec![], term);
        }
        let printed = print_safe(&term);
        assert!(printed.starts_with("(let ((x9999 0)) (let ((x9998 0))"));
        assert_eq!(printed.matches("(let").count(), depth);
    }

    #[test]
    fn deep_let_chain_and_shallow_chain_agree_between_printers() {
        let mut term = id_term("x");
        for i in 0..50 {
            let binding = VarBinding::new(format!("x{i}"), id_term("x"));
            term = Term::let_binding(binding, vec![], term);
        }
        assert_eq!(print(&term), print_safe(&term));
    }
}
