//! The accepted configuration grammar.
//!
//! This module only documents the format read by [`parse`](crate::parse) and
//! written by [`render`](crate::render). It is a small subset of YAML.
//!
//! # Lines
//!
//! Input is split on `\n`. On every line, everything from the first `#` on is
//! a comment and is dropped. Lines that are then blank are skipped entirely,
//! so comments and empty lines never affect structure.
//!
//! The **indent** of a line is its number of leading ASCII spaces. Tabs do not
//! count towards the indent. The **content** is the rest of the line with
//! surrounding whitespace trimmed (a trailing `\r` included).
//!
//! The `#` rule ignores quotes: `color: '#fff'` has the value `'`.
//!
//! # Line kinds
//!
//! | Content | Meaning |
//! |---------|---------|
//! | `- value` | Item appended to the enclosing sequence |
//! | `key: value` | Scalar entry in the enclosing mapping |
//! | `key:` | Opens a nested mapping or sequence under `key` |
//!
//! Anything else is a grammar error: a bare `-`, or a line without a `:`.
//! The key is the text before the first `:`, trimmed, so keys cannot contain
//! colons while values can (`url: http://host` has the value `http://host`).
//!
//! # Blocks
//!
//! A `key:` line with nothing after the colon opens a block. Its kind is
//! decided by the next content line: if that line is indented deeper than the
//! `key:` line and starts with `- `, the block is a sequence. Otherwise
//! (including at the end of input) it is a mapping, possibly an empty one.
//!
//! ```text
//! kros:
//!   motor:
//!     pid_controller:
//!       kp: 7.0
//!   ports:
//!     - 1
//!     - 2
//! ```
//!
//! A block stays open while subsequent lines are indented deeper than the line
//! that opened it. A line at the same or a smaller indent closes it. Sibling
//! lines need not share exactly the same indent; only the comparison with
//! open blocks matters. The top level is always a mapping, and an empty
//! document is an empty mapping.
//!
//! Sequences contain scalars only. A `key: value` line among sequence items
//! and a `- item` line in a mapping are both errors.
//!
//! # Scalars
//!
//! Each value token is trimmed, then interpreted by the first matching rule:
//!
//! | Token | Value |
//! |-------|-------|
//! | empty, `null`, `none` (any case) | null |
//! | `true`, `false` (any case) | boolean |
//! | contains `.` and parses as a float | float |
//! | parses as a 64-bit integer | integer |
//! | anything else | string, with one layer of matching `'` or `"` removed |
//!
//! `inf` and `nan` spellings stay strings, as does a float too large for 64
//! bits (`1.0e999`). An integer too large for 64 bits is also a string.
//! Quoting is how a value that looks like a number or boolean is kept
//! as a string: `'123'` is the string `123`.
//!
//! # Duplicates
//!
//! A repeated key replaces the earlier value and keeps the earlier position.
//!
//! # Output
//!
//! The native printer writes `key: value` and `- item` lines indented by a fixed
//! number of spaces per level, writes `null` for null, always includes a `.` in
//! floats, and single-quotes strings that would otherwise read back as a
//! different value. Strings containing `#` or line breaks have no
//! representation.
