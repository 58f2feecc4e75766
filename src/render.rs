//! Tree to text: the printer.
//!
//! Two surface styles are supported, selected with [`RenderOptions::style`]:
//!
//! **Native** output is the markup [`parse`](crate::parse) reads:
//!
//! ```text
//! motor:
//!     kp: 7.0
//!     calibrate: true
//!     ports:
//!         - 1
//!         - 2
//! ```
//!
//! **JSON-like** output is for looking at a tree:
//!
//! ```text
//! {
//!     "motor": {
//!         "kp": 7.0,
//!         "calibrate": true,
//!         "ports": [
//!             1,
//!             2
//!         ]
//!     }
//! }
//! ```
//!
//! Native output of any tree the parser produced parses back into an equal
//! tree. Floats always carry a `.` and strings that would otherwise read back
//! as something else (`'123'`, `'true'`, `''`) are wrapped in single quotes.
//! Strings containing `#` or a line break cannot be represented.

use crate::scalar::coerce;
use crate::{Error, RenderOptions, Result, Style, Value};
use std::io::{self, Write};

/// Renders `value` to a string.
///
/// # Examples
///
/// ```rust
/// use yaml_lite::{parse, render, RenderOptions};
///
/// let tree = parse("a:\n  b: 1\nitems:\n  - x\n").unwrap();
/// let text = render(&tree, &RenderOptions::new());
/// assert_eq!(text, "a:\n    b: 1\nitems:\n    - x\n");
/// assert_eq!(parse(&text).unwrap(), tree);
/// ```
#[must_use]
pub fn render(value: &Value, options: &RenderOptions) -> String {
    let mut output = String::with_capacity(256);
    match options.style {
        Style::Native => write_native(&mut output, value, options.indent, 0),
        Style::JsonLike => write_json(&mut output, value, options.indent, 0),
    }
    output
}

/// Renders `value` and writes it to `writer`, ending with a newline.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn write_to<W: Write>(mut writer: W, value: &Value, options: &RenderOptions) -> Result<()> {
    let mut text = render(value, options);
    if !text.ends_with('\n') {
        text.push('\n');
    }
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io(&e.to_string()))
}

/// Renders `value` to standard output.
///
/// # Errors
///
/// Returns [`Error::Io`] if standard output cannot be written.
pub fn emit(value: &Value, options: &RenderOptions) -> Result<()> {
    write_to(io::stdout().lock(), value, options)
}

/// Emits `value`, or returns its text when `options.return_text` is set.
///
/// # Examples
///
/// ```rust
/// use yaml_lite::{pretty_print, yaml, RenderOptions};
///
/// let options = RenderOptions::new().with_return_text(true);
/// let text = pretty_print(&yaml!({"on": true}), &options).unwrap();
/// assert_eq!(text.as_deref(), Some("on: true\n"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if emitting to standard output fails.
pub fn pretty_print(value: &Value, options: &RenderOptions) -> Result<Option<String>> {
    if options.return_text {
        Ok(Some(render(value, options)))
    } else {
        emit(value, options).map(|()| None)
    }
}

/// Formats a float so that it always reads back as a float.
pub(crate) fn format_float(f: f64) -> String {
    let mut s = f.to_string();
    if f.is_finite() && !s.contains('.') {
        s.push_str(".0");
    }
    s
}

#[inline]
fn pad(output: &mut String, width: usize) {
    output.extend(std::iter::repeat(' ').take(width));
}

fn write_native(output: &mut String, value: &Value, indent: usize, level: usize) {
    let width = level * indent;
    match value {
        Value::Mapping(map) => {
            for (key, child) in map.iter() {
                pad(output, width);
                output.push_str(key);
                output.push(':');
                if child.is_container() {
                    output.push('\n');
                    write_native(output, child, indent, level + 1);
                } else {
                    output.push(' ');
                    write_native_scalar(output, child);
                    output.push('\n');
                }
            }
        }
        Value::Sequence(items) => {
            for item in items {
                pad(output, width);
                if item.is_container() {
                    output.push_str("-\n");
                    write_native(output, item, indent, level + 1);
                } else {
                    output.push_str("- ");
                    write_native_scalar(output, item);
                    output.push('\n');
                }
            }
        }
        scalar => {
            pad(output, width);
            write_native_scalar(output, scalar);
            output.push('\n');
        }
    }
}

fn write_native_scalar(output: &mut String, value: &Value) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => output.push_str(&i.to_string()),
        Value::Float(f) => output.push_str(&format_float(*f)),
        Value::String(s) => {
            if needs_quotes(s) {
                output.push('\'');
                output.push_str(s);
                output.push('\'');
            } else {
                output.push_str(s);
            }
        }
        // containers are laid out by write_native
        Value::Mapping(_) | Value::Sequence(_) => {}
    }
}

/// A string needs quotes when reading it back bare would give anything other
/// than the same string.
fn needs_quotes(s: &str) -> bool {
    match coerce(s) {
        Value::String(read_back) => read_back != s,
        _ => true,
    }
}

fn write_json(output: &mut String, value: &Value, indent: usize, depth: usize) {
    match value {
        Value::Mapping(map) if map.is_empty() => output.push_str("{}"),
        Value::Mapping(map) => {
            output.push_str("{\n");
            let last = map.len() - 1;
            for (i, (key, child)) in map.iter().enumerate() {
                pad(output, (depth + 1) * indent);
                write_json_string(output, key);
                output.push_str(": ");
                write_json(output, child, indent, depth + 1);
                output.push_str(if i < last { ",\n" } else { "\n" });
            }
            pad(output, depth * indent);
            output.push('}');
        }
        Value::Sequence(items) if items.is_empty() => output.push_str("[]"),
        Value::Sequence(items) => {
            output.push_str("[\n");
            let last = items.len() - 1;
            for (i, item) in items.iter().enumerate() {
                pad(output, (depth + 1) * indent);
                write_json(output, item, indent, depth + 1);
                output.push_str(if i < last { ",\n" } else { "\n" });
            }
            pad(output, depth * indent);
            output.push(']');
        }
        Value::Null => output.push_str("null"),
        Value::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => output.push_str(&i.to_string()),
        Value::Float(f) => output.push_str(&format_float(*f)),
        Value::String(s) => write_json_string(output, s),
    }
}

fn write_json_string(output: &mut String, s: &str) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => output.push_str(&format!("\\u{:04x}", c as u32)),
            c => output.push(c),
        }
    }
    output.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, yaml, Mapping};

    fn sample() -> Value {
        yaml!({
            "kros": {
                "motor": {
                    "kp": 7.0,
                    "calibrate": true,
                    "name": "left",
                    "ports": [1, 2]
                },
                "empty": {}
            },
            "version": "1.0",
            "owner": null
        })
    }

    #[test]
    fn test_native_layout() {
        let text = render(&sample(), &RenderOptions::new());
        assert_eq!(
            text,
            "\
kros:
    motor:
        kp: 7.0
        calibrate: true
        name: left
        ports:
            - 1
            - 2
    empty:
version: '1.0'
owner: null
"
        );
    }

    #[test]
    fn test_native_indent_width() {
        let text = render(&yaml!({"a": {"b": [true]}}), &RenderOptions::new().with_indent(2));
        assert_eq!(text, "a:\n  b:\n    - true\n");
    }

    #[test]
    fn test_native_round_trip() {
        let tree = sample();
        for indent in [1, 2, 4, 8] {
            let text = render(&tree, &RenderOptions::new().with_indent(indent));
            assert_eq!(parse(&text).unwrap(), tree, "indent {}", indent);
        }
    }

    #[test]
    fn test_strings_that_need_quotes() {
        for s in ["", "  ", "123", "1.5", "true", "False", "null", "None", " padded ", "'x'", "\"y\""] {
            assert!(needs_quotes(s), "{:?} should be quoted", s);
        }
        for s in ["plain", "with space", "a: b", "'", "it's", "- dash", "1.2.3"] {
            assert!(!needs_quotes(s), "{:?} should stay bare", s);
        }
    }

    #[test]
    fn test_quoted_strings_read_back() {
        let mut map = Mapping::new();
        for (i, s) in ["", "007", "TRUE", " x ", "'q'", "\"d\"", "4.0"].iter().enumerate() {
            map.insert(format!("k{}", i), Value::from(*s));
        }
        let tree = Value::Mapping(map);
        let text = render(&tree, &RenderOptions::new());
        assert_eq!(parse(&text).unwrap(), tree);
    }

    #[test]
    fn test_floats_keep_their_type() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-0.5), "-0.5");
        assert_eq!(format_float(1e21), "1000000000000000000000.0");
        assert_eq!(format_float(f64::NAN), "NaN");
        let tree = yaml!({"whole": 3.0});
        let text = render(&tree, &RenderOptions::new());
        assert_eq!(text, "whole: 3.0\n");
        assert_eq!(parse(&text).unwrap(), tree);
    }

    #[test]
    fn test_sequence_with_container_items() {
        let tree = Value::Sequence(vec![yaml!({"a": 1}), Value::Int(2)]);
        let text = render(&tree, &RenderOptions::new().with_indent(2));
        assert_eq!(text, "-\n  a: 1\n- 2\n");
    }

    #[test]
    fn test_scalar_root() {
        assert_eq!(render(&Value::Int(5), &RenderOptions::new()), "5\n");
        assert_eq!(render(&Value::from("x y"), &RenderOptions::json()), "\"x y\"");
    }

    #[test]
    fn test_json_layout() {
        let text = render(&sample(), &RenderOptions::json().with_indent(2));
        assert_eq!(
            text,
            r#"{
  "kros": {
    "motor": {
      "kp": 7.0,
      "calibrate": true,
      "name": "left",
      "ports": [
        1,
        2
      ]
    },
    "empty": {}
  },
  "version": "1.0",
  "owner": null
}"#
        );
    }

    #[test]
    fn test_json_is_valid_json_for_finite_trees() {
        let text = render(&sample(), &RenderOptions::json());
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["kros"]["motor"]["ports"][1], serde_json::json!(2));
        assert_eq!(parsed["version"], serde_json::json!("1.0"));
    }

    #[test]
    fn test_json_escapes_strings() {
        let tree = yaml!({"q\"k": "a\\b\n\u{1}"});
        let text = render(&tree, &RenderOptions::json().with_indent(0));
        assert_eq!(text, "{\n\"q\\\"k\": \"a\\\\b\\n\\u0001\"\n}");
    }

    #[test]
    fn test_write_to_appends_newline() {
        let mut buffer = Vec::new();
        write_to(&mut buffer, &yaml!({"a": [1]}), &RenderOptions::json()).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "{\n    \"a\": [\n        1\n    ]\n}\n"
        );

        let mut buffer = Vec::new();
        write_to(&mut buffer, &yaml!({"a": 1}), &RenderOptions::new()).unwrap();
        assert_eq!(buffer, b"a: 1\n");
    }

    #[test]
    fn test_pretty_print_modes() {
        let tree = yaml!({"a": 1});
        let returned = pretty_print(&tree, &RenderOptions::json().with_return_text(true)).unwrap();
        assert_eq!(returned.as_deref(), Some("{\n    \"a\": 1\n}"));
        assert_eq!(pretty_print(&tree, &RenderOptions::new()).unwrap(), None);
    }
}
