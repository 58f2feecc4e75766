//! Text to tree: the indentation stack parser.
//!
//! Parsing happens in two passes over the input:
//!
//! 1. [`tokenize`] splits the text into lines, cuts each line at its first `#`,
//!    drops lines that are blank afterwards, and records every remaining line's
//!    indentation (count of leading spaces) and trimmed content.
//! 2. [`Parser`] walks that list with a stack of open blocks. Before handling a
//!    line it closes every block whose opening line was indented at least as
//!    deep, so the innermost block left open is the line's parent.
//!
//! A `key:` line with nothing after the colon opens a block. Whether the block
//! is a mapping or a sequence depends only on the next content line, see
//! [`classify_next_block`].
//!
//! ## Examples
//!
//! ```rust
//! use yaml_lite::{parse, Value};
//!
//! let config = parse("a:\n  b: 1\nc: 2\n").unwrap();
//! assert_eq!(config["a"]["b"], Value::Int(1));
//! assert_eq!(config["c"], Value::Int(2));
//! ```
//!
//! ## Known limitations
//!
//! - The comment marker is not quote-aware: in `color: '#fff'` the value is
//!   the single character `'`.
//! - Only spaces count as indentation. A leading tab is trimmed off the
//!   content like any other whitespace but adds nothing to the depth.

use crate::scalar::coerce;
use crate::{Error, Mapping, Result, Value};

/// One non-blank line of input after comment stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number in the original text
    pub number: usize,
    /// Number of leading spaces
    pub indent: usize,
    /// The line with comment and surrounding whitespace removed
    pub content: &'a str,
}

/// The kind of container a block-opening key introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Mapping,
    Sequence,
}

impl BlockKind {
    fn empty_value(self) -> Value {
        match self {
            BlockKind::Mapping => Value::Mapping(Mapping::new()),
            BlockKind::Sequence => Value::Sequence(Vec::new()),
        }
    }
}

/// Splits `text` into content lines.
///
/// # Examples
///
/// ```rust
/// use yaml_lite::parser::tokenize;
///
/// let lines = tokenize("# header\nport: 80 # http\n\n  - x\n");
/// assert_eq!(lines.len(), 2);
/// assert_eq!((lines[0].number, lines[0].indent, lines[0].content), (2, 0, "port: 80"));
/// assert_eq!((lines[1].number, lines[1].indent, lines[1].content), (4, 2, "- x"));
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<Line<'_>> {
    text.split('\n')
        .enumerate()
        .filter_map(|(i, raw)| {
            let code = raw.find('#').map_or(raw, |pos| &raw[..pos]);
            let content = code.trim();
            if content.is_empty() {
                return None;
            }
            let indent = code.len() - code.trim_start_matches(' ').len();
            Some(Line {
                number: i + 1,
                indent,
                content,
            })
        })
        .collect()
}

/// Decides what a block-opening key at depth `min_indent` contains, by looking
/// at `lines[from]`.
///
/// The block is a sequence only when that line is indented deeper than
/// `min_indent` and starts with `"- "`. Anything else, including running out
/// of lines, gives a mapping (possibly one that stays empty).
///
/// # Examples
///
/// ```rust
/// use yaml_lite::parser::{classify_next_block, tokenize, BlockKind};
///
/// let lines = tokenize("items:\n  - 1\nother:\nlast: 2\n");
/// assert_eq!(classify_next_block(&lines, 1, 0), BlockKind::Sequence);
/// assert_eq!(classify_next_block(&lines, 3, 0), BlockKind::Mapping);
/// assert_eq!(classify_next_block(&lines, 4, 0), BlockKind::Mapping);
/// ```
#[must_use]
pub fn classify_next_block(lines: &[Line<'_>], from: usize, min_indent: usize) -> BlockKind {
    match lines.get(from) {
        Some(next) if next.indent > min_indent && next.content.starts_with("- ") => {
            BlockKind::Sequence
        }
        _ => BlockKind::Mapping,
    }
}

enum Container {
    Mapping(Mapping),
    Sequence(Vec<Value>),
}

impl Container {
    fn new(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Mapping => Container::Mapping(Mapping::new()),
            BlockKind::Sequence => Container::Sequence(Vec::new()),
        }
    }

    fn into_value(self) -> Value {
        match self {
            Container::Mapping(map) => Value::Mapping(map),
            Container::Sequence(seq) => Value::Sequence(seq),
        }
    }
}

/// An open block: the key that opened it, the indentation of that key's
/// line, and the children collected so far.
struct Frame {
    indent: usize,
    key: String,
    container: Container,
}

enum Active<'p> {
    Mapping(&'p mut Mapping),
    Sequence(&'p mut Vec<Value>),
}

/// The indentation stack machine.
///
/// The root mapping sits below every frame and is never closed, acting as the
/// frame at depth -1.
pub struct Parser<'a> {
    lines: Vec<Line<'a>>,
    root: Mapping,
    stack: Vec<Frame>,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Parser {
            lines: tokenize(text),
            root: Mapping::new(),
            stack: Vec::new(),
        }
    }

    /// Consumes every line and returns the root mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Grammar`] for the first line that does not fit the
    /// grammar. No partial tree is returned.
    pub fn parse(mut self) -> Result<Value> {
        for index in 0..self.lines.len() {
            let line = self.lines[index];
            self.close_blocks_at(line.indent);
            self.parse_line(index, line)?;
        }
        while !self.stack.is_empty() {
            self.close_block();
        }
        Ok(Value::Mapping(self.root))
    }

    fn parse_line(&mut self, index: usize, line: Line<'a>) -> Result<()> {
        if let Some(item) = line.content.strip_prefix("- ") {
            return match self.active() {
                Active::Sequence(items) => {
                    items.push(coerce(item));
                    Ok(())
                }
                Active::Mapping(_) => Err(Error::grammar_with_context(
                    line.number,
                    "list item found but parent is not a list",
                    line.content,
                    Some("list items belong under a 'key:' line and must be indented deeper than it"),
                )),
            };
        }

        if line.content == "-" {
            return Err(Error::grammar_with_context(
                line.number,
                "empty list item not supported (no value after dash)",
                line.content,
                None,
            ));
        }

        let Some((key, raw)) = line.content.split_once(':') else {
            return Err(Error::grammar_with_context(
                line.number,
                "invalid line (no colon)",
                line.content,
                Some(&format!("Did you mean '{}: <value>'?", line.content)),
            ));
        };
        let key = key.trim();
        let raw = raw.trim();

        let kind = raw
            .is_empty()
            .then(|| classify_next_block(&self.lines, index + 1, line.indent));

        let Active::Mapping(parent) = self.active() else {
            return Err(Error::grammar_with_context(
                line.number,
                "expected mapping as parent",
                line.content,
                Some("a 'key: value' line cannot appear among list items"),
            ));
        };

        match kind {
            Some(kind) => {
                parent.insert(key.to_string(), kind.empty_value());
                self.stack.push(Frame {
                    indent: line.indent,
                    key: key.to_string(),
                    container: Container::new(kind),
                });
            }
            None => {
                parent.insert(key.to_string(), coerce(raw));
            }
        }
        Ok(())
    }

    /// Closes every block opened at `indent` or deeper.
    fn close_blocks_at(&mut self, indent: usize) {
        while self.stack.last().is_some_and(|top| indent <= top.indent) {
            self.close_block();
        }
    }

    /// Pops the innermost block and stores it under its key in the parent.
    fn close_block(&mut self) {
        if let Some(frame) = self.stack.pop() {
            // blocks are only ever opened from a mapping
            if let Active::Mapping(parent) = self.active() {
                parent.insert(frame.key, frame.container.into_value());
            }
        }
    }

    fn active(&mut self) -> Active<'_> {
        match self.stack.last_mut() {
            Some(frame) => match &mut frame.container {
                Container::Mapping(map) => Active::Mapping(map),
                Container::Sequence(seq) => Active::Sequence(seq),
            },
            None => Active::Mapping(&mut self.root),
        }
    }
}
