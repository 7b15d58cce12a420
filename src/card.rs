//! Module implementing the parsing of a single 80 bytes card
//!
//! A card is a keyword/value record of the form:
//! `KEYWORD = value / comment`
//! with the keyword on the 8 first bytes and the value indicator `= ` on
//! bytes 8 and 9.
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Byte length of a card
pub const CARD_SIZE: usize = 80;

pub type Keyword = String;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Logical(bool),
    String(String),
    Undefined,
}

impl Value {
    /// Returns the string form used when comparing values
    ///
    /// Strings are trimmed and lowercased. Numbers are compared through their
    /// textual form and never through floating point equality.
    pub fn normalized(&self) -> String {
        match self {
            Value::Integer(v) => v.to_string(),
            // Debug gives the shortest round-trip form keeping a decimal point
            Value::Float(v) => format!("{:?}", v),
            Value::Logical(true) => "t".to_owned(),
            Value::Logical(false) => "f".to_owned(),
            Value::String(s) => normalize(s),
            Value::Undefined => String::new(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Logical(v)
    }
}

/// Trim and lowercase a string for comparison
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[derive(Debug, PartialEq, Clone)]
pub struct Card {
    pub kw: Keyword,
    pub v: Value,
}

/// Outcome of parsing one card of a header
#[derive(Debug, PartialEq)]
pub enum Parsed {
    /// A keyword = value card
    Card(Card),
    /// COMMENT, HISTORY, blank keywords or any card without value indicator
    Commentary,
    /// The END card closing the header
    End,
}

pub fn parse_card(card: &[u8; CARD_SIZE]) -> Result<Parsed, Error> {
    let kw = std::str::from_utf8(&card[..8])?.trim_end();
    if kw == "END" {
        return Ok(Parsed::End);
    }
    if kw.is_empty() || &card[8..10] != b"= " {
        return Ok(Parsed::Commentary);
    }

    let rest = String::from_utf8_lossy(&card[10..]);
    let v = parse_value(&rest);

    Ok(Parsed::Card(Card {
        kw: kw.to_owned(),
        v,
    }))
}

fn parse_value(s: &str) -> Value {
    let s = s.trim_start();
    if let Some(quoted) = s.strip_prefix('\'') {
        return Value::String(parse_quoted(quoted));
    }

    // Take until the comment beginning with '/'
    let s = s.split('/').next().unwrap_or_default().trim();
    if s.is_empty() {
        Value::Undefined
    } else if s == "T" {
        Value::Logical(true)
    } else if s == "F" {
        Value::Logical(false)
    } else if let Ok(v) = s.parse::<i64>() {
        Value::Integer(v)
    } else if let Ok(v) = s.replace(['D', 'd'], "E").parse::<f64>() {
        Value::Float(v)
    } else {
        // Not a valid FITS value but kept as is
        Value::String(s.to_owned())
    }
}

/// Read a string value whose opening quote has already been consumed.
/// A doubled quote stands for a literal one.
fn parse_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                out.push('\'');
                chars.next();
            } else {
                break;
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Build an 80 bytes card from its keyword and raw value text
pub fn card_bytes(kw: &str, value: &str) -> [u8; CARD_SIZE] {
    let mut card = [b' '; CARD_SIZE];
    let kw = kw.as_bytes();
    let kw_len = kw.len().min(8);
    card[..kw_len].copy_from_slice(&kw[..kw_len]);
    if kw_len > 0 && &card[..8] != b"END     " {
        card[8] = b'=';
        let value = value.as_bytes();
        let v_len = value.len().min(CARD_SIZE - 10);
        card[10..10 + v_len].copy_from_slice(&value[..v_len]);
    }
    card
}

#[cfg(test)]
mod tests {
    use super::{card_bytes, parse_card, Card, Parsed, Value};
    use test_case::test_case;

    fn parsed(kw: &str, v: Value) -> Parsed {
        Parsed::Card(Card { kw: kw.to_owned(), v })
    }

    #[test]
    fn test_parse_card() {
        assert_eq!(
            parse_card(
                b"AZSDFGFC=                    T                                                  "
            ),
            Ok(parsed("AZSDFGFC", Value::Logical(true)))
        );
        assert_eq!(
            parse_card(
                b"CDS_1   =                     T                                                 "
            ),
            Ok(parsed("CDS_1", Value::Logical(true)))
        );
    }

    #[test_case("'NASA IRTF'          / Telescope", Value::String("NASA IRTF".to_owned()) ; "string with comment")]
    #[test_case("'LowRes15 '", Value::String("LowRes15 ".to_owned()) ; "padded string kept verbatim")]
    #[test_case("'ergs s-1 cm-2 A-1'", Value::String("ergs s-1 cm-2 A-1".to_owned()) ; "string with spaces")]
    #[test_case("'O''Brien / obs'", Value::String("O'Brien / obs".to_owned()) ; "escaped quote and slash")]
    #[test_case("                 564", Value::Integer(564) ; "integer")]
    #[test_case("            -32.5 / deg", Value::Float(-32.5) ; "float with comment")]
    #[test_case("1.5D+03", Value::Float(1500.0) ; "fortran exponent")]
    #[test_case("F", Value::Logical(false) ; "logical")]
    #[test_case("        / only a comment", Value::Undefined ; "undefined")]
    fn test_parse_value(raw: &str, expected: Value) {
        assert_eq!(parse_card(&card_bytes("KEY", raw)), Ok(parsed("KEY", expected)));
    }

    #[test]
    fn test_commentary_and_end() {
        assert_eq!(
            parse_card(&card_bytes("", "")),
            Ok(Parsed::Commentary)
        );
        let mut history = [b' '; 80];
        history[..21].copy_from_slice(b"HISTORY reduced by xt");
        assert_eq!(parse_card(&history), Ok(Parsed::Commentary));
        assert_eq!(parse_card(&card_bytes("END", "")), Ok(Parsed::End));
    }

    #[test_case(Value::String("  LowRes15 ".to_owned()), "lowres15")]
    #[test_case(Value::Integer(-12), "-12")]
    #[test_case(Value::Float(30.0), "30.0")]
    #[test_case(Value::Logical(true), "t")]
    #[test_case(Value::Undefined, "")]
    fn test_normalized(v: Value, expected: &str) {
        assert_eq!(v.normalized(), expected);
    }
}
