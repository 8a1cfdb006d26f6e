//! Error types for TOON encoding and decoding.
//!
//! ## Error categories
//!
//! - **Syntax errors**: malformed tokens, missing colons, unterminated quotes.
//! - **Strict-mode errors**: indentation, array length, and blank-line
//!   violations that only surface when [`crate::DecodeOptions::strict`]
//!   is `true`.
//! - **Depth errors**: nesting beyond the implementation's recursion cap.
//! - **I/O errors**: failures from the `save`/`load` file shims.
//!
//! ## Examples
//!
//! ```rust
//! use toon::{from_str, Error, Value};
//!
//! let result: Result<Value, Error> = from_str("items[3]: 1,2");
//! assert!(result.is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Which array emission produced a [`Error::CountMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayKind {
    Inline,
    List,
    Tabular,
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKind::Inline => write!(f, "inline"),
            ArrayKind::List => write!(f, "list"),
            ArrayKind::Tabular => write!(f, "tabular"),
        }
    }
}

/// All errors that can occur while encoding or decoding TOON.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Empty or whitespace-only document, or an empty file path passed to
    /// the `save`/`load` shims.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Malformed token: missing colon after key, unterminated quote,
    /// unparseable array length, unterminated bracket/brace, and so on.
    #[error("syntax error at line {line}: {msg}")]
    SyntaxError { line: usize, msg: String },

    /// Strict mode: a tab character in leading whitespace, or an indent
    /// that is not a multiple of the configured indent width.
    #[error("indentation error at line {line}: {msg}")]
    IndentationError { line: usize, msg: String },

    /// Strict mode: an array's declared length does not match the number
    /// of rows/items actually found.
    #[error("{kind} array length mismatch: expected {expected}, found {actual}")]
    CountMismatch {
        expected: usize,
        actual: usize,
        kind: ArrayKind,
    },

    /// Strict mode: a blank line was found inside a tabular row block.
    #[error("unexpected blank line(s) at {lines:?}")]
    UnexpectedBlankLine { lines: Vec<usize> },

    /// Nesting depth exceeded the implementation's recursion cap.
    #[error("nesting depth exceeded the limit of {limit}")]
    DepthExceeded { limit: usize },

    /// Failure from a `save`/`load` file shim.
    #[error("IO error: {0}")]
    Io(String),

    /// Custom message, typically raised by a derived `Serialize`/
    /// `Deserialize` implementation on the host type rather than by the
    /// TOON grammar itself.
    #[error("{0}")]
    Message(String),
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub fn syntax(line: usize, msg: impl Into<String>) -> Self {
        Error::SyntaxError {
            line,
            msg: msg.into(),
        }
    }

    pub fn indentation(line: usize, msg: impl Into<String>) -> Self {
        Error::IndentationError {
            line,
            msg: msg.into(),
        }
    }

    pub fn count_mismatch(expected: usize, actual: usize, kind: ArrayKind) -> Self {
        Error::CountMismatch {
            expected,
            actual,
            kind,
        }
    }

    pub fn unexpected_blank_line(lines: Vec<usize>) -> Self {
        Error::UnexpectedBlankLine { lines }
    }

    pub fn depth_exceeded(limit: usize) -> Self {
        Error::DepthExceeded { limit }
    }

    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
