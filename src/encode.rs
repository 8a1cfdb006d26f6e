//! Pipeline glue: the public encode/decode/round-trip/validate entry
//! points that sit directly on top of [`crate::emitter`] and
//! [`crate::decoder`].

use crate::decoder;
use crate::emitter;
use crate::error::Result;
use crate::options::{DecodeOptions, EncodeOptions};
use crate::value::Value;

/// Encodes a [`Value`] to TOON text.
pub fn encode(value: &Value, options: &EncodeOptions) -> Result<String> {
    emitter::emit(value, options)
}

/// Decodes TOON text into a [`Value`].
pub fn decode(text: &str, options: &DecodeOptions) -> Result<Value> {
    decoder::decode(text, options)
}

/// Encodes `value`, then immediately decodes the result, returning
/// whatever came out the other end. Useful for exercising the full
/// pipeline or for tests that assert a value survives the round trip.
pub fn round_trip(
    value: &Value,
    encode_options: &EncodeOptions,
    decode_options: &DecodeOptions,
) -> Result<Value> {
    let text = encode(value, encode_options)?;
    decode(&text, decode_options)
}

/// Returns `true` if `text` decodes without error under `options`,
/// discarding the decoded value and swallowing the error.
#[must_use]
pub fn is_valid(text: &str, options: &DecodeOptions) -> bool {
    decode(text, options).is_ok()
}
