//! # yaml_lite
//!
//! A reader and writer for a small, indentation-based subset of YAML, aimed at
//! configuration files.
//!
//! ## What is supported?
//!
//! Nested mappings, sequences of scalars, `#` comments, and five scalar types
//! (null, booleans, 64-bit integers, floats, strings). There are no anchors,
//! tags, flow collections, multi-line strings, or multiple documents. See the
//! [`grammar`] module for the exact rules.
//!
//! ## Key Features
//!
//! - **Ordered**: mappings keep the order keys first appeared in
//! - **Round-trips**: native output of any parsed tree parses back to an equal tree
//! - **Two printers**: native markup, or a JSON-like view for inspection
//! - **Serde Compatible**: read straight into `#[derive(Deserialize)]` types
//! - **Precise errors**: every grammar error carries its 1-based line number
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! yaml-lite = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Parsing
//!
//! ```rust
//! use yaml_lite::{parse, Value};
//!
//! let text = "\
//! kros:
//!   motor:
//!     pid_controller:
//!       kp: 7.0   # proportional gain
//!     slew_limiter:
//!       calibrate: true
//!   ports:
//!     - 1
//!     - 2
//! ";
//!
//! let tree = parse(text).unwrap();
//! assert_eq!(tree["kros"]["motor"]["pid_controller"]["kp"], Value::Float(7.0));
//! assert_eq!(
//!     tree.get_path(&["kros", "motor", "slew_limiter", "calibrate"]),
//!     Some(&Value::Bool(true))
//! );
//! assert_eq!(tree["kros"]["ports"][1], Value::Int(2));
//! ```
//!
//! ### Typed Access
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use yaml_lite::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Motor {
//!     name: String,
//!     kp: f64,
//!     enabled: bool,
//! }
//!
//! let motor = Motor { name: "left".to_string(), kp: 7.0, enabled: true };
//!
//! let text = to_string(&motor).unwrap();
//! assert_eq!(text, "name: left\nkp: 7.0\nenabled: true\n");
//!
//! let back: Motor = from_str(&text).unwrap();
//! assert_eq!(back, motor);
//! ```
//!
//! ### Printing
//!
//! ```rust
//! use yaml_lite::{render, yaml, RenderOptions};
//!
//! let tree = yaml!({"version": "1.0", "ids": [1, 2]});
//!
//! assert_eq!(
//!     render(&tree, &RenderOptions::new().with_indent(2)),
//!     "version: '1.0'\nids:\n  - 1\n  - 2\n"
//! );
//! assert_eq!(
//!     render(&tree, &RenderOptions::json().with_indent(2)),
//!     "{\n  \"version\": \"1.0\",\n  \"ids\": [\n    1,\n    2\n  ]\n}"
//! );
//! ```
//!
//! ## Files
//!
//! [`load`] and [`configure`] read files, [`dump`] and [`dump_to_file`] write
//! them. Everything else works on in-memory text.
//!
//! ## Demos
//!
//! - **`config_roundtrip.rs`** - load, inspect, re-render and re-parse a configuration
//! - **`dynamic_values.rs`** - build and walk [`Value`] trees without types
//!
//! Run one with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod grammar;
pub mod loader;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod render;
pub mod scalar;
pub mod ser;
pub mod value;

pub use de::ValueDeserializer;
pub use error::{Error, Result};
pub use loader::{configure, dump, dump_to_file, load, parse_reader};
pub use map::Mapping;
pub use options::{RenderOptions, Style};
pub use parser::Parser;
pub use render::{emit, pretty_print, render, write_to};
pub use scalar::coerce;
pub use ser::{to_value, ValueSerializer};
pub use value::Value;

use serde::{de::DeserializeOwned, Serialize};

/// Parses configuration text into a tree whose root is always a mapping.
///
/// # Examples
///
/// ```rust
/// use yaml_lite::{parse, yaml};
///
/// assert_eq!(parse("a:\n  b: 1\nc: 2").unwrap(), yaml!({"a": {"b": 1}, "c": 2}));
/// assert_eq!(parse("").unwrap(), yaml!({}));
/// assert!(parse("- 1").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Grammar`] with the 1-based line number of the first line
/// that does not fit the grammar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<Value> {
    Parser::new(text).parse()
}

/// Deserializes an instance of `T` from a [`Value`] tree.
///
/// # Examples
///
/// ```rust
/// use yaml_lite::{from_value, yaml};
///
/// let ports: Vec<u16> = from_value(yaml!([80, 443])).unwrap();
/// assert_eq!(ports, vec![80, 443]);
/// ```
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] when a value has the wrong type for the
/// field it lands in, or [`Error::Custom`] for missing fields and similar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

/// Parses `text` and deserializes the tree into `T`.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use yaml_lite::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns [`Error::Grammar`] for malformed text, then anything
/// [`from_value`] reports.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse(text)?)
}

/// Serializes `value` into native-style text with the default indent.
///
/// The result parses back into the same tree as long as the top level is a
/// struct or map, sequences are non-empty and hold scalars only, and no
/// string contains `#` or a line break.
///
/// # Errors
///
/// Returns an error if `value` cannot be turned into a tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(render(&to_value(value)?, &RenderOptions::default()))
}
