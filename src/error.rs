//! Error types for the tagging layer.
//!
//! The layer is deliberately fail-open for anything that merely *looks*
//! wrong on the wire: a string that fails the token grammar, or a token
//! whose type name has no registered codec, is an ordinary string and never
//! an error. Errors are reserved for the cases that must not pass silently:
//!
//! - **Decode failures**: a known type's payload does not parse (e.g. an
//!   invalid integer literal for `bigint`), surfaced from the codec as-is.
//! - **Unsupported values**: a [`Value::BigInt`](crate::Value::BigInt)
//!   reached the serializer with no codec registered for it; JSON has no
//!   native rendering to fall back on.
//! - **Base format errors**: the underlying JSON engine rejected the text.
//!
//! ## Examples
//!
//! ```rust
//! use tagson::{from_str, Registry};
//!
//! let registry = Registry::default();
//! // Known type, malformed payload: fail-loud.
//! assert!(from_str("\"#bigint:not-a-number\"", &registry).is_err());
//! // Unknown type: fail-open, the string passes through.
//! let value = from_str("\"#SmallInt:42\"", &registry).unwrap();
//! assert_eq!(value.as_str(), Some("#SmallInt:42"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors from serializing or deserializing through
/// the tagging layer.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// The base JSON engine rejected the input or output
    #[error("JSON error: {0}")]
    Json(String),

    /// A value with no native JSON rendering and no registered codec
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    /// A registered type's decode function rejected its payload
    #[error("cannot decode {type_name} payload: {msg}")]
    Decode { type_name: String, msg: String },

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an error wrapping a failure from the base JSON engine.
    pub fn json<T: fmt::Display>(err: T) -> Self {
        Error::Json(err.to_string())
    }

    /// Creates an unsupported-value error for values the registry cannot
    /// encode.
    pub fn unsupported_value(msg: &str) -> Self {
        Error::UnsupportedValue(msg.to_string())
    }

    /// Creates a decode error for a known type whose payload failed to parse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagson::Error;
    ///
    /// let err = Error::decode("bigint", "invalid digit found in string");
    /// assert!(err.to_string().contains("bigint"));
    /// ```
    pub fn decode<T: fmt::Display>(type_name: &str, msg: T) -> Self {
        Error::Decode {
            type_name: type_name.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
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
}

pub type Result<T> = std::result::Result<T, Error>;
