//! Configuration options for rendering trees back to text.
//!
//! - [`RenderOptions`]: indentation, surface style, and output mode
//! - [`Style`]: native markup or the JSON-like printer
//!
//! ## Examples
//!
//! ```rust
//! use yaml_lite::{render, yaml, RenderOptions, Style};
//!
//! let data = yaml!({"x": 1, "y": 2});
//!
//! let native = render(&data, &RenderOptions::new().with_indent(2));
//! assert_eq!(native, "x: 1\ny: 2\n");
//!
//! let json = render(&data, &RenderOptions::new().with_style(Style::JsonLike));
//! assert_eq!(json, "{\n    \"x\": 1,\n    \"y\": 2\n}");
//! ```

/// Surface syntax used by the printer.
///
/// # Examples
///
/// ```rust
/// use yaml_lite::Style;
///
/// assert_eq!(Style::default(), Style::Native);
/// assert_eq!(Style::JsonLike.as_str(), "json");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Style {
    /// Indented `key: value` / `- item` markup that the parser reads back.
    #[default]
    Native,
    /// Braces, brackets, and quoted strings. A printer for humans, not a JSON
    /// producer for other programs.
    JsonLike,
}

impl Style {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Style::Native => "yaml",
            Style::JsonLike => "json",
        }
    }
}

/// Options for [`render`](crate::render) and [`pretty_print`](crate::pretty_print).
///
/// # Examples
///
/// ```rust
/// use yaml_lite::{RenderOptions, Style};
///
/// let options = RenderOptions::new();
/// assert_eq!(options.indent, 4);
/// assert_eq!(options.style, Style::Native);
/// assert!(!options.return_text);
///
/// let options = RenderOptions::json().with_indent(2).with_return_text(true);
/// assert_eq!(options.style, Style::JsonLike);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces added per nesting level. Native output with an indent of 0
    /// cannot be parsed back into the same tree.
    pub indent: usize,
    pub style: Style,
    /// When set, [`pretty_print`](crate::pretty_print) hands the text back
    /// instead of writing it to standard output.
    pub return_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent: 4,
            style: Style::default(),
            return_text: false,
        }
    }
}

impl RenderOptions {
    /// Creates default options (native style, 4-space indent, emit to stdout).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for the JSON-like style.
    #[must_use]
    pub fn json() -> Self {
        RenderOptions {
            style: Style::JsonLike,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_return_text(mut self, return_text: bool) -> Self {
        self.return_text = return_text;
        self
    }
}
