//! Canonical text forms shared by both printers: symbol/keyword spelling,
//! string escaping. Numeral/decimal/hexadecimal/binary literals already
//! carry their own canonical form on the AST type, so there is nothing to
//! add for those here.

use smtlib_ast::symbol::{is_bare_printable, Keyword, Symbol};

/// Renders a symbol the way the grammar requires: bare if every character
/// is in the simple-symbol alphabet and it doesn't start with a digit,
/// `|quoted|` otherwise. A quoted symbol escapes only `|` and `\`, the two
/// characters that would otherwise end or corrupt the quoting.
pub fn format_symbol(symbol: &Symbol) -> String {
    let name = symbol.as_str();
    if is_bare_printable(name) {
        name.to_string()
    } else {
        let mut out = String::with_capacity(name.len() + 2);
        out.push('|');
        for c in name.chars() {
            if c == '\\' || c == '|' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('|');
        out
    }
}

pub fn format_keyword(keyword: &Keyword) -> String {
    format!(":{}", keyword.as_str())
}

/// Renders a string literal with `"` and `\` escaped, matching the
/// lexer's two-escape rule in reverse.
pub fn format_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}
