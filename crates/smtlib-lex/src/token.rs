//! Token kinds produced by the lexer.

/// A lexical token. Reserved words get their own variant so the parser's
/// command/term dispatch can match on token identity rather than on a
/// symbol's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    OParen,
    CParen,

    NumeralLit(String),
    DecimalLit { int_part: String, frac_part: String },
    StringLit(String),
    BinaryLit(Vec<bool>),
    HexadecimalLit(String),

    SymbolLit(String),
    Keyword(String),

    Assert,
    CheckSat,
    DeclareSort,
    DeclareFun,
    DefineSort,
    DefineFun,
    Exit,
    GetAssertions,
    GetAssignment,
    GetInfo,
    GetOption,
    GetProof,
    GetUnsatCore,
    GetValue,
    GetModel,
    Pop,
    Push,
    SetLogic,
    SetInfo,
    SetOption,
    DeclareDatatypes,
    Par,
    NumeralKw,
    DecimalKw,
    StringKw,
    Underscore,
    Bang,
    As,
    Let,
    ForAll,
    Exists,

    Eof,
}

/// Maps a fully-read symbol body to its reserved-word token, if any.
///
/// Reserved-word recognition happens only after a whole symbol has been
/// read; a prefix of a reserved word that continues into more
/// simple-symbol characters is just a symbol.
pub fn lookup_reserved(body: &str) -> Option<Token> {
    Some(match body {
        "assert" => Token::Assert,
        "check-sat" => Token::CheckSat,
        "declare-sort" => Token::DeclareSort,
        "declare-fun" => Token::DeclareFun,
        "define-sort" => Token::DefineSort,
        "define-fun" => Token::DefineFun,
        "exit" => Token::Exit,
        "get-assertions" => Token::GetAssertions,
        "get-assignment" => Token::GetAssignment,
        "get-info" => Token::GetInfo,
        "get-option" => Token::GetOption,
        "get-proof" => Token::GetProof,
        "get-unsat-core" => Token::GetUnsatCore,
        "get-value" => Token::GetValue,
        "get-model" => Token::GetModel,
        "pop" => Token::Pop,
        "push" => Token::Push,
        "set-logic" => Token::SetLogic,
        "set-info" => Token::SetInfo,
        "set-option" => Token::SetOption,
        "declare-datatypes" => Token::DeclareDatatypes,
        "par" => Token::Par,
        "NUMERAL" => Token::NumeralKw,
        "DECIMAL" => Token::DecimalKw,
        "STRING" => Token::StringKw,
        "_" => Token::Underscore,
        "!" => Token::Bang,
        "as" => Token::As,
        "let" => Token::Let,
        "forall" => Token::ForAll,
        "exists" => Token::Exists,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_word_hits() {
        assert_eq!(lookup_reserved("let"), Some(Token::Let));
        assert_eq!(lookup_reserved("check-sat"), Some(Token::CheckSat));
    }

    #[test]
    fn non_reserved_symbol_misses() {
        assert_eq!(lookup_reserved("my-function"), None);
    }
}
