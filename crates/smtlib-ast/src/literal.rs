//! Constant literals: numerals, decimals, hexadecimals, binaries, strings.

use num_bigint::BigUint;

/// An arbitrary-precision non-negative integer literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeral(BigUint);

impl Numeral {
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    pub fn from_u64(value: u64) -> Self {
        Self(BigUint::from(value))
    }

    /// Parses a base-10 digit string with no sign, as produced by the
    /// lexer. Panics on non-digit input — callers own validation.
    pub fn from_digits(digits: &str) -> Self {
        Self(digits.parse().expect("numeral digits must be base-10"))
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// Canonical base-10 form: no leading zeros except the literal `0`.
    pub fn to_canonical_string(&self) -> String {
        self.0.to_str_radix(10)
    }
}

/// An exact decimal literal: an integer part and a fractional digit
/// sequence, stored verbatim so printing never round-trips through binary
/// floating point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    int_part: String,
    frac_part: String,
}

impl Decimal {
    /// Builds a decimal from its lexed digit sequences. `int_part` and
    /// `frac_part` must each be non-empty ASCII-digit strings.
    pub fn new(int_part: impl Into<String>, frac_part: impl Into<String>) -> Self {
        let int_part = int_part.into();
        let frac_part = frac_part.into();
        debug_assert!(!int_part.is_empty() && int_part.bytes().all(|b| b.is_ascii_digit()));
        debug_assert!(!frac_part.is_empty() && frac_part.bytes().all(|b| b.is_ascii_digit()));
        Self {
            int_part,
            frac_part,
        }
    }

    pub fn int_part(&self) -> &str {
        &self.int_part
    }

    pub fn frac_part(&self) -> &str {
        &self.frac_part
    }

    pub fn to_canonical_string(&self) -> String {
        format!("{}.{}", self.int_part, self.frac_part)
    }
}

/// A hexadecimal literal. Stores its canonical uppercase digit string, so
/// two values differing only in input case compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hexadecimal {
    digits: String,
}

impl Hexadecimal {
    /// Builds from a hex digit string of either case; normalizes to
    /// uppercase on construction.
    pub fn new(digits: impl AsRef<str>) -> Self {
        let digits = digits.as_ref();
        debug_assert!(!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()));
        Self {
            digits: digits.to_ascii_uppercase(),
        }
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn to_canonical_string(&self) -> String {
        format!("#x{}", self.digits)
    }
}

/// A bit-vector literal: an ordered, length-significant sequence of bits,
/// most-significant bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binary {
    bits: Vec<bool>,
}

impl Binary {
    /// `bits[0]` is the most significant bit and prints first.
    pub fn new(bits: Vec<bool>) -> Self {
        debug_assert!(!bits.is_empty());
        Self { bits }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn to_canonical_string(&self) -> String {
        let mut s = String::with_capacity(2 + self.bits.len());
        s.push_str("#b");
        for b in &self.bits {
            s.push(if *b { '1' } else { '0' });
        }
        s
    }
}

/// A constant literal, one of the five kinds a `Term` can embed directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Numeral(Numeral),
    Decimal(Decimal),
    Hexadecimal(Hexadecimal),
    Binary(Binary),
    Str(String),
}
