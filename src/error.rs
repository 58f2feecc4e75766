//! Error types for parsing, loading, and typed access.
//!
//! ## Error Categories
//!
//! - **Grammar errors**: a structurally invalid line, with its 1-based line number
//! - **Missing resources**: the loader could not open the named file
//! - **Type mismatches**: a caller expected one scalar type and found another
//! - **I/O errors**: any other read or write failure
//!
//! The parser is the only source of [`Error::Grammar`]. Scalar coercion never
//! fails, so everything that is not a structural problem ends up as a string.
//!
//! ## Examples
//!
//! ```rust
//! use yaml_lite::{parse, Error};
//!
//! let result = parse("justtext");
//! assert!(matches!(result, Err(Error::Grammar { line: 1, .. })));
//!
//! if let Err(err) = result {
//!     eprintln!("{}", err);
//! }
//! ```

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Represents every failure the crate can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A line that does not fit the grammar
    #[error("Grammar error at line {line}: {msg}\n    {context}{suggestion}")]
    Grammar {
        line: usize,
        msg: String,
        context: String,
        suggestion: String,
    },

    /// The named configuration resource does not exist or cannot be opened
    #[error("file not found: {path}")]
    ResourceNotFound { path: String },

    /// A value did not have the type the caller asked for
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// A Rust value with no representation in the grammar
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a grammar error for the given 1-based line number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yaml_lite::Error;
    ///
    /// let err = Error::grammar(10, "invalid line");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn grammar(line: usize, msg: &str) -> Self {
        Error::Grammar {
            line,
            msg: msg.to_string(),
            context: String::new(),
            suggestion: String::new(),
        }
    }

    /// Creates a grammar error that quotes the offending line and, optionally,
    /// a hint for fixing it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yaml_lite::Error;
    ///
    /// let err = Error::grammar_with_context(
    ///     3,
    ///     "invalid line (no colon)",
    ///     "name Alice",
    ///     Some("Did you mean 'name: Alice'?"),
    /// );
    /// assert!(err.to_string().contains("Help:"));
    /// ```
    pub fn grammar_with_context(
        line: usize,
        msg: &str,
        context: &str,
        suggestion: Option<&str>,
    ) -> Self {
        Error::Grammar {
            line,
            msg: msg.to_string(),
            context: context.to_string(),
            suggestion: suggestion
                .map(|s| format!("\nHelp: {}", s))
                .unwrap_or_default(),
        }
    }

    /// Creates the loader's "nothing to parse" error.
    pub fn resource_not_found<P: AsRef<Path>>(path: P) -> Self {
        Error::ResourceNotFound {
            path: path.as_ref().display().to_string(),
        }
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yaml_lite::Error;
    ///
    /// let err = Error::type_mismatch("float", "string");
    /// assert!(err.to_string().contains("expected float"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors raised by the parser.
    #[must_use]
    pub fn is_grammar(&self) -> bool {
        matches!(self, Error::Grammar { .. })
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    fn invalid_type(unexp: serde::de::Unexpected, exp: &dyn serde::de::Expected) -> Self {
        Error::TypeMismatch {
            expected: exp.to_string(),
            found: unexp.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
