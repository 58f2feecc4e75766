//! Reading configuration files from disk and writing trees back out.
//!
//! The loader is the only part of the crate that touches the file system. It
//! emits `tracing` debug events; install a subscriber to see them.
//!
//! ```rust,no_run
//! use yaml_lite::{configure, load};
//!
//! let defaults = configure(None).unwrap(); // reads ./config.yaml
//! let robot = load("robot.yaml").unwrap();
//! println!("{}", robot["kros"]["motor"]);
//! # let _ = defaults;
//! ```

use crate::{emit, parse, render, Error, RenderOptions, Result, Value};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// File read by [`configure`] when no path is given.
pub const DEFAULT_FILE: &str = "config.yaml";

/// Reads and parses the file at `path`.
///
/// # Errors
///
/// Returns [`Error::ResourceNotFound`] if the file cannot be opened,
/// [`Error::Io`] if it cannot be read as UTF-8 text, and [`Error::Grammar`]
/// for malformed content.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading configuration");

    let file = File::open(path).map_err(|err| {
        tracing::debug!(path = %path.display(), error = %err, "cannot open configuration");
        Error::resource_not_found(path)
    })?;
    let value = parse_reader(file)?;

    tracing::debug!(
        path = %path.display(),
        keys = value.as_mapping().map_or(0, |map| map.len()),
        "configuration loaded"
    );
    Ok(value)
}

/// Loads `path`, or [`DEFAULT_FILE`] from the working directory when `None`.
///
/// # Errors
///
/// Same as [`load`].
pub fn configure(path: Option<&Path>) -> Result<Value> {
    load(path.unwrap_or_else(|| Path::new(DEFAULT_FILE)))
}

/// Reads the whole stream, then parses it.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use yaml_lite::{parse_reader, Value};
///
/// let tree = parse_reader(Cursor::new("rate: 50\n")).unwrap();
/// assert_eq!(tree["rate"], Value::Int(50));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] on read failure and [`Error::Grammar`] for malformed
/// content.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Value> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&text)
}

/// Prints `value` to standard output in the native style.
///
/// # Errors
///
/// Returns [`Error::Io`] if standard output cannot be written.
pub fn dump(value: &Value, indent: usize) -> Result<()> {
    emit(value, &RenderOptions::new().with_indent(indent))
}

/// Renders `value` with `options` and writes it to `path`, replacing any
/// existing file. `options.return_text` is ignored.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
pub fn dump_to_file<P: AsRef<Path>>(value: &Value, path: P, options: &RenderOptions) -> Result<()> {
    let path = path.as_ref();
    let mut text = render(value, options);
    if !text.ends_with('\n') {
        text.push('\n');
    }

    File::create(path)
        .and_then(|mut file| file.write_all(text.as_bytes()))
        .map_err(|e| io_error(path, &e))?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "configuration written");
    Ok(())
}

fn io_error(path: &Path, err: &io::Error) -> Error {
    Error::io(&format!("{}: {}", path.display(), err))
}
