#![doc = include_str!("../README.md")]

pub mod classify;
pub mod encode;
pub mod error;
pub mod options;

pub use crate::classify::{ValueKind, classify};
pub use crate::encode::encode;
pub use crate::error::{Error, Result};
pub use crate::options::EncodeOptions;

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

/// Serializes any `Serialize` type into a `serde_json::Value` and encodes it.
pub fn encode_to_string<T: Serialize>(value: &T, options: &EncodeOptions) -> Result<String> {
    let v: Value = serde_json::to_value(value)?;
    encode(&v, options)
}

/// Like [`encode_to_string`], writing the result to `writer`.
pub fn encode_to_writer<W: Write, T: Serialize>(
    mut writer: W,
    value: &T,
    options: &EncodeOptions,
) -> Result<()> {
    let s = encode_to_string(value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

/// Reverse direction, declared but not implemented: always returns
/// [`Error::DecodeUnsupported`]. The entry point exists so callers can probe
/// for support without a version check.
pub fn decode(_input: &str) -> Result<Value> {
    Err(Error::DecodeUnsupported)
}
