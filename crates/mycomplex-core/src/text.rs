//! Text form of complex values
//!
//! Output is `<re><sign><im>i`, where the sign is `+` unless the imaginary
//! part is negative (its own `-` is printed instead):
//! `3+2i`, `3-2i`, `3+0i`.
//!
//! Each part is written in the shortest form that reads back exactly. Finite
//! non-zero parts with magnitude outside `1e-5..1e16` use exponent notation
//! (`1e300`, `1.5e-7`) instead of spelling out every digit. A formatter
//! precision (`{:.3}`) applies to both parts under the same rule.
//!
//! Input follows stream-extraction rules. Three reads happen in sequence,
//! each skipping leading whitespace:
//! 1. the longest floating-point literal prefix becomes `re`
//! 2. the longest floating-point literal prefix becomes `im`
//! 3. a run of non-whitespace characters (the suffix, usually `i`) is discarded
//!
//! So `"3 2 i"`, `"3+2i"` and `"3 -2 i"` all read, and the output of
//! `Display` reads back to the same value.

use std::fmt;
use std::io;
use std::str::FromStr;

use crate::{Complex, Part, ParseComplexError};

impl fmt::Display for Complex {
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `!(im < 0)` rather than `im >= 0`: NaN and -0.0 also get a `+`
        let sign = if !(self.im < 0.0) { "+" } else { "" };
        let precision = f.precision();
        write_scalar(f, self.re, precision)?;
        f.write_str(sign)?;
        write_scalar(f, self.im, precision)?;
        f.write_str("i")
    }
}

/// Plain notation covers magnitudes in `[EXP_BELOW, EXP_FROM)`
const EXP_BELOW: f64 = 1e-5;
const EXP_FROM: f64 = 1e16;

/// Write one real number the way `Complex` writes its parts
pub fn write_scalar<W: fmt::Write>(out: &mut W, x: f64, precision: Option<usize>) -> fmt::Result {
    let magnitude = x.abs();
    let exponent = x.is_finite() && x != 0.0 && !(EXP_BELOW..EXP_FROM).contains(&magnitude);
    match (exponent, precision) {
        (true, Some(p)) => write!(out, "{:.*e}", p, x),
        (true, None) => write!(out, "{:e}", x),
        (false, Some(p)) => write!(out, "{:.*}", p, x),
        (false, None) => write!(out, "{}", x),
    }
}

impl Complex {
    /// Write the text form to any writer
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self)
    }

    /// Extract one complex value from the front of `input`.
    ///
    /// Returns the value and the unread remainder, which starts right after
    /// the suffix token.
    pub fn parse_prefix(input: &str) -> Result<(Complex, &str), ParseComplexError> {
        let (re, rest) = scan_number(input, Part::Real)?;
        let (im, rest) = scan_number(rest, Part::Imaginary)?;
        let rest = skip_suffix(rest)?;
        Ok((Complex::new(re, im), rest))
    }
}

impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, rest) = Complex::parse_prefix(s)?;
        let rest = rest.trim();
        if !rest.is_empty() {
            return Err(ParseComplexError::TrailingInput(rest.to_string()));
        }
        Ok(value)
    }
}

/// Read one floating-point literal after optional whitespace
fn scan_number(input: &str, part: Part) -> Result<(f64, &str), ParseComplexError> {
    let input = input.trim_start();
    if input.is_empty() {
        return Err(ParseComplexError::UnexpectedEnd { part });
    }

    let len = literal_len(input.as_bytes());
    if len == 0 {
        return Err(ParseComplexError::InvalidNumber {
            part,
            found: leading_token(input).to_string(),
        });
    }

    let (lexeme, rest) = input.split_at(len);
    let value = lexeme
        .parse::<f64>()
        .map_err(|_| ParseComplexError::InvalidNumber {
            part,
            found: lexeme.to_string(),
        })?;
    Ok((value, rest))
}

/// Consume the suffix token after optional whitespace
fn skip_suffix(input: &str) -> Result<&str, ParseComplexError> {
    let input = input.trim_start();
    let token = leading_token(input);
    if token.is_empty() {
        return Err(ParseComplexError::UnexpectedEnd { part: Part::Suffix });
    }
    Ok(&input[token.len()..])
}

fn leading_token(input: &str) -> &str {
    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    &input[..end]
}

/// Length in bytes of the longest float literal at the start of `bytes`, 0 if none.
///
/// Accepts `[+-]? digits [. digits] [(e|E) [+-]? digits]` with at least one
/// mantissa digit, and `[+-]? (inf|infinity|nan)` in any case.
fn literal_len(bytes: &[u8]) -> usize {
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    if let Some(word) = non_finite_len(&bytes[pos..]) {
        return pos + word;
    }

    let int_digits = digit_run(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = digit_run(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    // Exponent only counts when it carries at least one digit
    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = digit_run(&bytes[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    pos
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn non_finite_len(bytes: &[u8]) -> Option<usize> {
    // Longest word first so "infinity" is not cut to "inf"
    ["infinity", "inf", "nan"].iter().find_map(|word| {
        let word = word.as_bytes();
        (bytes.len() >= word.len() && bytes[..word.len()].eq_ignore_ascii_case(word))
            .then_some(word.len())
    })
}
