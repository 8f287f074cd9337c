//! # tagson
//!
//! Pluggable type-tagging over JSON: round-trip values the base format
//! cannot express natively (arbitrary-precision integers out of the box,
//! anything else by registration) as `#<type>:<payload>` string tokens
//! embedded in ordinary JSON text.
//!
//! ## How It Works
//!
//! Two small pieces cooperate:
//!
//! - A [`Registry`] maps type names to codecs. Each codec carries a
//!   predicate that claims values during serialization, an encode function
//!   producing the token, and a decode function parsing the payload back.
//! - The token protocol runs once per value as the base serializer or
//!   parser traverses the tree: claimed values become quoted token strings
//!   on the way out; recognized tokens become typed values on the way back.
//!   Strings that merely *look* like tokens are protected by the built-in
//!   `String` escaping codec, so every plain string round-trips exactly.
//!
//! Unknown type names never fail: text written by a registry with more
//! types still reads back, the unrecognized tokens degrading to plain
//! strings.
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tagson = "0.1"
//! ```
//!
//! ### Big integers through JSON
//!
//! ```rust
//! use num_bigint::BigInt;
//! use tagson::{from_str, to_string, Registry, Value};
//!
//! let registry = Registry::default();
//!
//! let big: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let text = to_string(&Value::BigInt(big.clone()), &registry).unwrap();
//! assert_eq!(text, "\"#bigint:123456789012345678901234567890\"");
//!
//! let value = from_str(&text, &registry).unwrap();
//! assert_eq!(value, Value::BigInt(big));
//! ```
//!
//! ### Registering your own type
//!
//! ```rust
//! use tagson::{from_str, to_string, Error, Number, Registry, Value};
//!
//! let mut registry = Registry::default();
//! registry.register_type(
//!     "f64bits",
//!     |v| matches!(v, Value::Number(Number::Float(_))),
//!     |v| match v.as_f64() {
//!         Some(f) => Ok(format!("#f64bits:{:016x}", f.to_bits())),
//!         None => Err(Error::unsupported_value("f64bits codec needs a float")),
//!     },
//!     |payload| {
//!         let bits = u64::from_str_radix(payload, 16)
//!             .map_err(|e| Error::decode("f64bits", e))?;
//!         Ok(Value::from(f64::from_bits(bits)))
//!     },
//! );
//!
//! let text = to_string(&Value::from(0.1), &registry).unwrap();
//! let value = from_str(&text, &registry).unwrap();
//! assert_eq!(value, Value::from(0.1));
//! ```
//!
//! ### Pluggable base engines
//!
//! The default engine is `serde_json`, but any serde serializer works: the
//! tagging hook travels with the value, not the engine.
//!
//! ```rust
//! use tagson::{tagson, to_string_with, Error, Registry};
//!
//! let registry = Registry::default();
//! let value = tagson!({ "id": 1, "name": "Alice" });
//! let pretty = to_string_with(&value, &registry, |tagged| {
//!     serde_json::to_string_pretty(tagged).map_err(Error::json)
//! }).unwrap();
//! ```
//!
//! ## Concurrency
//!
//! A [`Registry`] is plain data: build it, register everything, then share
//! `&Registry` freely across threads; reads take no locks. Registration
//! needs `&mut`, so the borrow checker enforces what the protocol requires:
//! no registering while a traversal is reading.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Proper error propagation with `Result` types
//! - No panics in public API
//!
//! ## Wire Format
//!
//! See the [`format`] module for the token grammar, the escaping rule, and
//! the decode policy table.

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod registry;
pub mod ser;
pub mod token;
pub mod value;

pub use de::revive;
pub use error::{Error, Result};
pub use map::Map;
pub use registry::{Registry, TypeCodec, BIGINT, STRING_ESCAPE};
pub use ser::Tagged;
pub use token::{format_token, parse_token, Token};
pub use value::{Number, Value};

use std::io;

/// Serialize a [`Value`] to a JSON string, tagging through the registry.
///
/// # Examples
///
/// ```rust
/// use tagson::{tagson, to_string, Registry};
///
/// let registry = Registry::default();
/// let value = tagson!({ "id": 1, "name": "Alice" });
/// let text = to_string(&value, &registry).unwrap();
/// assert_eq!(text, r#"{"id":1,"name":"Alice"}"#);
/// ```
///
/// # Errors
///
/// Returns an error if a codec's encode fails or a value has neither a
/// native rendering nor a registered codec.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(value: &Value, registry: &Registry) -> Result<String> {
    to_string_with(value, registry, |tagged| {
        serde_json::to_string(tagged).map_err(Error::json)
    })
}

/// Serialize a [`Value`] through a caller-supplied base engine.
///
/// The engine receives a [`Tagged`] view of the value; serializing it with
/// any serde backend invokes the encode hook once per value, so the token
/// rules hold regardless of the engine.
///
/// # Errors
///
/// Returns whatever the engine or a codec raises.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with<F>(value: &Value, registry: &Registry, serialize_fn: F) -> Result<String>
where
    F: FnOnce(&Tagged<'_>) -> Result<String>,
{
    serialize_fn(&Tagged::new(value, registry))
}

/// Serialize a [`Value`] as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, value: &Value, registry: &Registry) -> Result<()>
where
    W: io::Write,
{
    serde_json::to_writer(writer, &Tagged::new(value, registry)).map_err(|e| {
        if e.is_io() {
            Error::io(&e.to_string())
        } else {
            Error::json(e)
        }
    })
}

/// Encode a [`Value`] into a `serde_json::Value` tree with all tokens
/// applied, for engines that want a tree rather than text.
///
/// # Errors
///
/// Same failure cases as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_value(value: &Value, registry: &Registry) -> Result<serde_json::Value> {
    serde_json::to_value(Tagged::new(value, registry)).map_err(Error::json)
}

/// Deserialize a [`Value`] from a string of JSON text, decoding tokens
/// through the registry.
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use tagson::{from_str, Registry, Value};
///
/// let registry = Registry::default();
/// let value = from_str("\"#bigint:42\"", &registry).unwrap();
/// assert_eq!(value, Value::BigInt(BigInt::from(42)));
/// ```
///
/// # Errors
///
/// Returns an error if the text is not valid JSON, or a registered codec
/// rejects a payload. Unknown type names are not errors.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(text: &str, registry: &Registry) -> Result<Value> {
    from_str_with(text, registry, |s| {
        serde_json::from_str(s).map_err(Error::json)
    })
}

/// Deserialize a [`Value`] through a caller-supplied base parser.
///
/// The parser turns text into a `serde_json::Value` tree however it likes;
/// the decode hook then runs once per value it produced.
///
/// # Errors
///
/// Returns whatever the parser or a codec raises.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with<F>(text: &str, registry: &Registry, parse_fn: F) -> Result<Value>
where
    F: FnOnce(&str) -> Result<serde_json::Value>,
{
    revive(parse_fn(text)?, registry)
}

/// Deserialize a [`Value`] from an I/O stream of JSON.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid JSON, or a
/// registered codec rejects a payload.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R, registry: &Registry) -> Result<Value>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string, registry)
}

/// Deserialize a [`Value`] from bytes of JSON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or valid JSON, or a
/// registered codec rejects a payload.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8], registry: &Registry) -> Result<Value> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s, registry)
}

/// Decode an already-parsed `serde_json::Value` tree through the registry.
///
/// # Errors
///
/// Returns an error only when a registered codec rejects a payload.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json_value(json: serde_json::Value, registry: &Registry) -> Result<Value> {
    revive(json, registry)
}
