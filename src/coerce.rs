//! Deciding which JSON type a bare token takes, and checking the type assertions.

use tracing::trace;

use crate::error::SyntaxError;
use crate::value::{Number, Value};

/// The literals accepted by the `bool` assertion.
const TRUE_LITERALS: [&str; 6] = ["1", "t", "T", "TRUE", "true", "True"];
const FALSE_LITERALS: [&str; 6] = ["0", "f", "F", "FALSE", "false", "False"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberError {
    Invalid,
    NonFinite,
}

/// Tokens that start an object member: `name:` or the `key` keyword.
pub(crate) fn is_key_token(token: &str) -> bool {
    token.ends_with(':') || token == "key"
}

/// `name:` becomes `name`. Only one colon is stripped, so `a::` names the key `a:`.
pub(crate) fn strip_key_colon(token: &str) -> Option<&str> {
    token.strip_suffix(':')
}

/// Parse a base-10 float literal into a [`Number`].
///
/// Text that already is a JSON number is kept verbatim. Text that Rust reads as a finite float
/// but JSON does not accept (`+5`, `.5`, `5.`, `007`) is rewritten textually, never through the
/// float, so no digits are lost.
pub(crate) fn parse_number(text: &str) -> Result<Number, NumberError> {
    let float: f64 = text.parse().map_err(|_| NumberError::Invalid)?;
    if !float.is_finite() {
        return Err(NumberError::NonFinite);
    }
    if let Ok(n) = serde_json::from_str::<serde_json::Number>(text) {
        return Ok(n.into());
    }
    let normalized = normalize_number_text(text);
    trace!(text, %normalized, "rewrote number that is not JSON syntax");
    serde_json::from_str::<serde_json::Number>(&normalized)
        .map(Number::from)
        .map_err(|_| NumberError::Invalid)
}

/// Drop a leading `+`, strip redundant leading zeros and fill in the digits JSON requires
/// around the decimal point. Only called on text Rust already accepted as a float.
fn normalize_number_text(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };
    let (mantissa, exponent) = match unsigned.find(|c| c == 'e' || c == 'E') {
        Some(i) => unsigned.split_at(i),
        None => (unsigned, ""),
    };
    let (integer, fraction) = match mantissa.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (mantissa, None),
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push_str(sign);
    match integer.trim_start_matches('0') {
        "" => out.push('0'),
        digits => out.push_str(digits),
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(if fraction.is_empty() { "0" } else { fraction });
    }
    out.push_str(exponent);
    out
}

pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    if TRUE_LITERALS.contains(&text) {
        Some(true)
    } else if FALSE_LITERALS.contains(&text) {
        Some(false)
    } else {
        None
    }
}

/// The `num` assertion.
pub(crate) fn assert_number(text: &str, position: usize) -> Result<Number, SyntaxError> {
    parse_number(text).map_err(|e| match e {
        NumberError::Invalid => SyntaxError::InvalidNumber {
            arg: text.to_owned(),
            position,
        },
        NumberError::NonFinite => SyntaxError::NonFiniteNumber {
            arg: text.to_owned(),
            position,
        },
    })
}

/// The `bool` assertion.
pub(crate) fn assert_bool(text: &str, position: usize) -> Result<bool, SyntaxError> {
    parse_bool(text).ok_or_else(|| SyntaxError::InvalidBoolean {
        arg: text.to_owned(),
        position,
    })
}

/// A token with no keyword meaning is a number if it reads as a finite one, otherwise a string.
pub(crate) fn auto_detect(token: &str) -> Value {
    match parse_number(token) {
        Ok(n) => Value::Number(n),
        Err(_) => Value::String(token.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::error::ErrorKind;

    #[rstest]
    #[case("45", "45")]
    #[case("1.50", "1.50")]
    #[case("-0", "-0")]
    #[case("2.5e-3", "2.5e-3")]
    #[case("123456789012345678901", "123456789012345678901")]
    #[case("+5", "5")]
    #[case(".5", "0.5")]
    #[case("5.", "5.0")]
    #[case("-.5e3", "-0.5e3")]
    #[case("5.e2", "5.0e2")]
    #[case("007", "7")]
    #[case("-00.25", "-0.25")]
    #[case("+123456789012345678901", "123456789012345678901")]
    #[case(".12345678901234567890123", "0.12345678901234567890123")]
    fn number_text(#[case] token: &str, #[case] rendered: &str) {
        assert_eq!(parse_number(token).unwrap().to_string(), rendered);
    }

    #[rstest]
    #[case("Inf")]
    #[case("-infinity")]
    #[case("NaN")]
    #[case("1e400")]
    fn non_finite_numbers(#[case] token: &str) {
        assert_eq!(parse_number(token), Err(NumberError::NonFinite));
        assert_eq!(
            assert_number(token, 3).unwrap_err().kind(),
            ErrorKind::NonFiniteNumber
        );
        assert_eq!(auto_detect(token), Value::String(token.to_owned()));
    }

    #[rstest]
    #[case("bad")]
    #[case("")]
    #[case(" 1")]
    #[case("0x10")]
    #[case("1_000")]
    fn invalid_numbers_stay_strings(#[case] token: &str) {
        assert_eq!(parse_number(token), Err(NumberError::Invalid));
        assert_eq!(auto_detect(token), Value::String(token.to_owned()));
    }

    #[test]
    fn bool_literals() {
        for t in TRUE_LITERALS {
            assert_eq!(parse_bool(t), Some(true));
        }
        for f in FALSE_LITERALS {
            assert_eq!(parse_bool(f), Some(false));
        }
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool("tRUE"), None);

        let err = assert_bool("yes", 1).unwrap_err();
        assert_eq!(err.to_string(), r#"invalid boolean "yes" at argument 1"#);
    }

    #[test]
    fn key_tokens() {
        assert!(is_key_token("a:"));
        assert!(is_key_token(":"));
        assert!(is_key_token("key"));
        assert!(!is_key_token("keys"));
        assert_eq!(strip_key_colon("a::"), Some("a:"));
        assert_eq!(strip_key_colon(":"), Some(""));
        assert_eq!(strip_key_colon("a"), None);
    }
}
