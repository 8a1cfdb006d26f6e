//! # toon
//!
//! Token-Oriented Object Notation (TOON): a compact, indentation-sensitive
//! serialization format designed to cut the token count of structured data
//! passed to large language models, while staying a lossless, isomorphic
//! encoding of the same data JSON would carry.
//!
//! ## Key properties
//!
//! - **Token-efficient**: punctuation that doesn't disambiguate anything is
//!   dropped, and arrays of uniform objects collapse into CSV-like tables.
//! - **Serde-compatible**: any `T: Serialize`/`Deserialize` works via
//!   [`to_string`]/[`from_str`], the same as `serde_json`.
//! - **A real intermediate value**: [`Value`] is a first-class, inspectable
//!   tree for working with TOON data whose shape isn't known up front.
//!
//! ## Quick start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toon::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//!
//! let text = to_string(&user).unwrap();
//! // id: 123
//! // name: Alice
//! // active: true
//!
//! let user_back: User = from_str(&text).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ## Tabular arrays
//!
//! Arrays of objects that share the same keys in the same order collapse
//! into a header plus comma-separated rows:
//!
//! ```rust
//! use serde::Serialize;
//! use toon::to_string;
//!
//! #[derive(Serialize)]
//! struct Product { id: u32, name: String, price: f64 }
//!
//! let products = vec![
//!     Product { id: 1, name: "Widget".to_string(), price: 9.99 },
//!     Product { id: 2, name: "Gadget".to_string(), price: 14.99 },
//! ];
//!
//! let text = to_string(&products).unwrap();
//! assert_eq!(text, "[2]{id,name,price}:\n  1,Widget,9.99\n  2,Gadget,14.99");
//! ```
//!
//! ## Dynamic values with the `toon!` macro
//!
//! ```rust
//! use toon::{toon, Value};
//!
//! let data = toon!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "serde", "llm"]
//! });
//!
//! if let Value::Object(obj) = data {
//!     assert_eq!(obj.get("name").and_then(Value::as_str), Some("Alice"));
//! }
//! ```

pub mod de;
pub mod decoder;
pub mod emitter;
pub mod encode;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod quoting;
pub mod scanner;
pub mod ser;
pub mod shape;
pub mod value;

pub use de::from_value;
pub use encode::{decode, encode, is_valid, round_trip};
pub use error::{Error, Result};
pub use map::ToonMap;
pub use options::{Delimiter, DecodeOptions, EncodeOptions};
pub use ser::to_value;
pub use value::Value;

use std::io;

use serde::{Deserialize, Serialize};

/// Serializes any `T: Serialize` to a TOON string using
/// [`EncodeOptions::default`].
///
/// # Errors
///
/// Returns an error if `value` contains a type the normalizer can't
/// represent (tuple/struct enum variants).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &EncodeOptions::default())
}

/// Serializes any `T: Serialize` to a TOON string with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let tree = to_value(value)?;
    encode(&tree, options)
}

/// Serializes any `T: Serialize` to a writer in TOON format.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to `writer` fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &EncodeOptions::default())
}

/// Serializes any `T: Serialize` to a writer in TOON format with custom
/// options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to `writer` fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &EncodeOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Deserializes an instance of `T` from a string of TOON text, using
/// [`DecodeOptions::default`] (strict mode).
///
/// # Errors
///
/// Returns an error if `s` is not valid TOON, or if the decoded value
/// doesn't match `T`'s shape.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    from_str_with_options(s, &DecodeOptions::default())
}

/// Deserializes an instance of `T` from a string of TOON text with
/// custom options.
///
/// # Errors
///
/// Returns an error if `s` is not valid TOON, or if the decoded value
/// doesn't match `T`'s shape.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<'a, T>(s: &'a str, options: &DecodeOptions) -> Result<T>
where
    T: Deserialize<'a>,
{
    let tree = decode(s, options)?;
    from_value(tree)
}

/// Deserializes an instance of `T` from an I/O stream of TOON text.
///
/// # Errors
///
/// Returns an error if reading from `reader` fails, the input is not
/// valid TOON, or the data doesn't match `T`'s shape.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader.read_to_string(&mut string)?;
    from_str(&string)
}

/// Deserializes an instance of `T` from UTF-8 bytes of TOON text.
///
/// # Errors
///
/// Returns an error if `v` is not valid UTF-8, not valid TOON, or
/// doesn't match `T`'s shape.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(Error::custom)?;
    from_str(s)
}

/// Parses a JSON string directly into a [`Value`], without going
/// through TOON text. Useful for adapting an existing JSON payload
/// before re-encoding it as TOON.
///
/// # Errors
///
/// Returns an error if `s` is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json_str(s: &str) -> Result<Value> {
    serde_json::from_str(s).map_err(Error::custom)
}

/// Renders a [`Value`] as a JSON string.
///
/// # Errors
///
/// Returns an error if `value` cannot be represented as JSON (it
/// always can, in practice — every [`Value`] variant has a JSON
/// equivalent).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_string(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(Error::custom)
}

/// Encodes `value` and writes it to `path`, overwriting any existing
/// file.
///
/// # Errors
///
/// Returns an error if encoding fails or the file can't be written.
pub fn save<T>(path: impl AsRef<std::path::Path>, value: &T, options: &EncodeOptions) -> Result<()>
where
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    std::fs::write(path, text)?;
    Ok(())
}

/// Reads `path` and decodes it into `T`.
///
/// # Errors
///
/// Returns an error if the file can't be read, isn't valid TOON, or
/// doesn't match `T`'s shape.
pub fn load<T>(path: impl AsRef<std::path::Path>, options: &DecodeOptions) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let text = std::fs::read_to_string(path)?;
    from_str_with_options(&text, options)
}
