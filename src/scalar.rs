//! Scalar type inference for value tokens.
//!
//! [`coerce`] turns the text after a `key:` or `- ` into a typed [`Value`].
//! The rules are tried in a fixed order and the first match wins:
//!
//! | Token | Result |
//! |-------|--------|
//! | empty, `null`, `none` (any case) | [`Value::Null`] |
//! | `true`, `false` (any case) | [`Value::Bool`] |
//! | finite decimal containing `.` | [`Value::Float`] |
//! | decimal without `.`, fits in `i64` | [`Value::Int`] |
//! | anything else | [`Value::String`], one layer of matching quotes removed |
//!
//! Quotes are only looked at after the numeric rules have failed, and a
//! quoted token never parses as a number, so `'123'` is the string `123`.

use crate::Value;

/// Converts a token into a typed scalar. Never fails.
///
/// # Examples
///
/// ```rust
/// use yaml_lite::{coerce, Value};
///
/// assert_eq!(coerce("TRUE"), Value::Bool(true));
/// assert_eq!(coerce(" 123 "), Value::Int(123));
/// assert_eq!(coerce("1.5"), Value::Float(1.5));
/// assert_eq!(coerce("'123'"), Value::String("123".to_string()));
/// assert_eq!(coerce("None"), Value::Null);
/// ```
#[must_use]
pub fn coerce(token: &str) -> Value {
    let v = token.trim();

    if v.is_empty() || v.eq_ignore_ascii_case("null") || v.eq_ignore_ascii_case("none") {
        return Value::Null;
    }
    if v.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if v.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    if v.contains('.') {
        if let Some(f) = parse_float(v) {
            return Value::Float(f);
        }
    } else if let Ok(i) = v.parse::<i64>() {
        return Value::Int(i);
    }

    Value::String(unquote(v).to_string())
}

/// Parses a decimal float, rejecting the `inf`/`nan` spellings that
/// `f64::from_str` would otherwise accept and any value that overflows to
/// infinity.
fn parse_float(v: &str) -> Option<f64> {
    let digits = v.strip_prefix(&['+', '-'][..]).unwrap_or(v);
    if !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    v.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Removes one layer of enclosing `'…'` or `"…"`.
fn unquote(v: &str) -> &str {
    let bytes = v.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&first), Some(&last))
            if bytes.len() >= 2 && first == last && (first == b'\'' || first == b'"') =>
        {
            &v[1..v.len() - 1]
        }
        _ => v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_tokens() {
        for token in ["", "   ", "null", "NULL", "Null", "none", "None", "NONE"] {
            assert_eq!(coerce(token), Value::Null, "token {:?}", token);
        }
    }

    #[test]
    fn test_bool_tokens() {
        for token in ["true", "True", "TRUE", "tRuE"] {
            assert_eq!(coerce(token), Value::Bool(true));
        }
        for token in ["false", "False", "FALSE"] {
            assert_eq!(coerce(token), Value::Bool(false));
        }
        // only the bare words count
        assert_eq!(coerce("yes"), Value::from("yes"));
        assert_eq!(coerce("on"), Value::from("on"));
    }

    #[test]
    fn test_integers() {
        assert_eq!(coerce("123"), Value::Int(123));
        assert_eq!(coerce("-7"), Value::Int(-7));
        assert_eq!(coerce("+7"), Value::Int(7));
        assert_eq!(coerce("0"), Value::Int(0));
        assert_eq!(coerce("9223372036854775807"), Value::Int(i64::MAX));
    }

    #[test]
    fn test_integer_overflow_is_a_string() {
        assert_eq!(
            coerce("9223372036854775808"),
            Value::from("9223372036854775808")
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(coerce("1.5"), Value::Float(1.5));
        assert_eq!(coerce("-0.25"), Value::Float(-0.25));
        assert_eq!(coerce(".5"), Value::Float(0.5));
        assert_eq!(coerce("5."), Value::Float(5.0));
        assert_eq!(coerce("1.5e3"), Value::Float(1500.0));
    }

    #[test]
    fn test_failed_numbers_fall_through_to_strings() {
        assert_eq!(coerce("1.2.3"), Value::from("1.2.3"));
        assert_eq!(coerce("192.168.0.1"), Value::from("192.168.0.1"));
        assert_eq!(coerce("1e5"), Value::from("1e5"));
        assert_eq!(coerce("12abc"), Value::from("12abc"));
        assert_eq!(coerce("."), Value::from("."));
        assert_eq!(coerce("inf.0"), Value::from("inf.0"));
    }

    #[test]
    fn test_float_overflow_is_a_string() {
        assert_eq!(coerce("1.0e999"), Value::from("1.0e999"));
        assert_eq!(coerce("-1.0e999"), Value::from("-1.0e999"));
        assert_eq!(coerce("1.0e308"), Value::Float(1.0e308));
    }

    #[test]
    fn test_quoted_strings() {
        assert_eq!(coerce("'123'"), Value::from("123"));
        assert_eq!(coerce("\"1.5\""), Value::from("1.5"));
        assert_eq!(coerce("'true'"), Value::from("true"));
        assert_eq!(coerce("''"), Value::from(""));
        assert_eq!(coerce("'a b'"), Value::from("a b"));
    }

    #[test]
    fn test_only_one_matching_layer_is_stripped() {
        assert_eq!(coerce("\"'x'\""), Value::from("'x'"));
        assert_eq!(coerce("'x\""), Value::from("'x\""));
        assert_eq!(coerce("'"), Value::from("'"));
        assert_eq!(coerce("'it's'"), Value::from("it's"));
    }

    #[test]
    fn test_no_escape_processing() {
        assert_eq!(coerce(r#""a\nb""#), Value::from(r"a\nb"));
    }
}
