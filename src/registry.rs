//! The codec registry: which types tag, and how.
//!
//! A [`Registry`] maps type names to [`TypeCodec`]s. Each codec carries
//! three closures:
//!
//! - `matches` decides, per value, whether the codec claims it during
//!   serialization. Rust cannot dispatch on an open-ended runtime type name,
//!   so claiming a value is an explicit predicate chosen at registration.
//! - `encode` turns a claimed value into its full `#<type>:<payload>` token.
//! - `decode` turns a token payload back into a value. Its errors propagate
//!   unwrapped; the layer adds no context of its own.
//!
//! The registry is an explicit argument to [`to_string`](crate::to_string)
//! and [`from_str`](crate::from_str) rather than process-wide state. Build
//! it once, register everything, then share it immutably; `&Registry` reads
//! take no locks.
//!
//! ## Examples
//!
//! ```rust
//! use tagson::{Registry, Value};
//!
//! let mut registry = Registry::default(); // bigint + String escaping
//! registry.register_type(
//!     "f64bits",
//!     |v| matches!(v, Value::Number(tagson::Number::Float(_))),
//!     |v| match v.as_f64() {
//!         Some(f) => Ok(format!("#f64bits:{:016x}", f.to_bits())),
//!         None => Err(tagson::Error::unsupported_value("f64bits codec needs a float")),
//!     },
//!     |payload| {
//!         let bits = u64::from_str_radix(payload, 16)
//!             .map_err(|e| tagson::Error::decode("f64bits", e))?;
//!         Ok(Value::from(f64::from_bits(bits)))
//!     },
//! );
//! ```

use crate::token::parse_token;
use crate::{Error, Result, Value};
use indexmap::IndexMap;
use num_bigint::BigInt;
use std::fmt;

/// Name of the built-in arbitrary-precision integer type.
pub const BIGINT: &str = "bigint";

/// Name of the built-in escaping type for strings that look like tokens.
pub const STRING_ESCAPE: &str = "String";

type MatchFn = Box<dyn Fn(&Value) -> bool + Send + Sync>;
type EncodeFn = Box<dyn Fn(&Value) -> Result<String> + Send + Sync>;
type DecodeFn = Box<dyn Fn(&str) -> Result<Value> + Send + Sync>;

/// A registered type: a name plus its claim predicate and codec pair.
///
/// `encode` must return a full token (`#<name>:<payload>`); `decode`
/// receives the payload only. The pair must round-trip every value the
/// predicate claims.
pub struct TypeCodec {
    name: String,
    matches: MatchFn,
    encode: EncodeFn,
    decode: DecodeFn,
}

impl TypeCodec {
    /// Creates a codec from its name and closures.
    pub fn new<M, E, D>(name: impl Into<String>, matches: M, encode: E, decode: D) -> Self
    where
        M: Fn(&Value) -> bool + Send + Sync + 'static,
        E: Fn(&Value) -> Result<String> + Send + Sync + 'static,
        D: Fn(&str) -> Result<Value> + Send + Sync + 'static,
    {
        TypeCodec {
            name: name.into(),
            matches: Box::new(matches),
            encode: Box::new(encode),
            decode: Box::new(decode),
        }
    }

    /// The type name this codec is registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if this codec claims the value during serialization.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        (self.matches)(value)
    }

    /// Encodes a claimed value into its full token string.
    ///
    /// # Errors
    ///
    /// Whatever the codec's encode closure raises; the built-ins only fail
    /// when handed a value their predicate would not have claimed.
    pub fn encode(&self, value: &Value) -> Result<String> {
        (self.encode)(value)
    }

    /// Decodes a token payload back into a value.
    ///
    /// # Errors
    ///
    /// The codec's own parse failure, propagated as-is.
    pub fn decode(&self, payload: &str) -> Result<Value> {
        (self.decode)(payload)
    }
}

impl fmt::Debug for TypeCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeCodec")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An ordered collection of [`TypeCodec`]s.
///
/// Registration order is dispatch precedence, newest first: when several
/// predicates claim the same value, the most recently registered codec
/// wins. Re-registering a name replaces the codec and moves it to the front
/// of that precedence, so a replacement also overrides dispatch.
///
/// # Examples
///
/// ```rust
/// use tagson::{to_string, Registry, Value};
/// use num_bigint::BigInt;
///
/// let registry = Registry::default();
/// let big: BigInt = "123456789012345678901234567890".parse().unwrap();
/// let text = to_string(&Value::BigInt(big), &registry).unwrap();
/// assert_eq!(text, "\"#bigint:123456789012345678901234567890\"");
/// ```
pub struct Registry {
    codecs: IndexMap<String, TypeCodec>,
}

impl Registry {
    /// Creates a registry with no codecs at all.
    ///
    /// Without the built-ins, [`Value::BigInt`] cannot serialize and token
    /// strings pass through deserialization untouched.
    #[must_use]
    pub fn empty() -> Self {
        Registry {
            codecs: IndexMap::new(),
        }
    }

    /// Creates a registry carrying the standard codecs: [`BIGINT`] and the
    /// [`STRING_ESCAPE`] rule.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Registry::empty();
        registry.register(bigint_codec());
        registry.register(string_escape_codec());
        registry
    }

    /// Registers a codec, replacing any previous codec with the same name.
    ///
    /// Last write wins, in both senses: the old codec is gone, and the new
    /// one takes the highest dispatch precedence.
    pub fn register(&mut self, codec: TypeCodec) {
        // shift_remove keeps the order of the remaining codecs intact;
        // re-inserting puts the codec at the end, which is the front of
        // the reverse scan in codec_for_value.
        self.codecs.shift_remove(codec.name());
        self.codecs.insert(codec.name.clone(), codec);
    }

    /// Convenience wrapper building the [`TypeCodec`] inline.
    pub fn register_type<M, E, D>(&mut self, name: impl Into<String>, matches: M, encode: E, decode: D)
    where
        M: Fn(&Value) -> bool + Send + Sync + 'static,
        E: Fn(&Value) -> Result<String> + Send + Sync + 'static,
        D: Fn(&str) -> Result<Value> + Send + Sync + 'static,
    {
        self.register(TypeCodec::new(name, matches, encode, decode));
    }

    /// Encode-side lookup: the codec claiming this value, if any.
    ///
    /// Scans predicates newest-registration-first and returns the first
    /// match.
    #[must_use]
    pub fn codec_for_value(&self, value: &Value) -> Option<&TypeCodec> {
        self.codecs.values().rev().find(|codec| codec.matches(value))
    }

    /// Decode-side lookup: the codec registered under this exact name, if any.
    #[must_use]
    pub fn codec_for_name(&self, name: &str) -> Option<&TypeCodec> {
        self.codecs.get(name)
    }

    /// Returns `true` if a codec is registered under this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.codecs.contains_key(name)
    }

    /// Number of registered codecs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Returns `true` if no codecs are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("codecs", &self.codecs.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// The built-in arbitrary-precision integer codec.
///
/// Encodes `Value::BigInt(v)` as `#bigint:<decimal>`; decodes the payload
/// with [`BigInt`]'s string parser, so an invalid literal fails loudly.
fn bigint_codec() -> TypeCodec {
    TypeCodec::new(
        BIGINT,
        |value| matches!(value, Value::BigInt(_)),
        |value| match value {
            Value::BigInt(n) => Ok(format!("#{BIGINT}:{n}")),
            other => Err(Error::unsupported_value(&format!(
                "{BIGINT} codec cannot encode {other}"
            ))),
        },
        |payload| {
            payload
                .parse::<BigInt>()
                .map(Value::BigInt)
                .map_err(|e| Error::decode(BIGINT, e))
        },
    )
}

/// The built-in escaping codec.
///
/// A plain string whose content already parses as a syntactic token would
/// be misdecoded on the way back in. This codec claims exactly those
/// strings and hides them behind one more layer: encode prefixes
/// `#String:`, decode strips exactly one such prefix and returns the
/// remainder verbatim, with no further decoding. One encode+decode round
/// trip is therefore the identity on every string, however many
/// `#name:`-shaped segments it starts with.
fn string_escape_codec() -> TypeCodec {
    TypeCodec::new(
        STRING_ESCAPE,
        |value| matches!(value, Value::String(s) if parse_token(s).is_tagged()),
        |value| match value {
            Value::String(s) => Ok(format!("#{STRING_ESCAPE}:{s}")),
            other => Err(Error::unsupported_value(&format!(
                "{STRING_ESCAPE} codec cannot encode {other}"
            ))),
        },
        |payload| Ok(Value::String(payload.to_string())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    #[test]
    fn defaults_carry_bigint_and_string_escape() {
        let registry = Registry::default();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(BIGINT));
        assert!(registry.contains(STRING_ESCAPE));
    }

    #[test]
    fn bigint_roundtrip() {
        let registry = Registry::default();
        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        let value = Value::BigInt(big.clone());

        let codec = registry.codec_for_value(&value).unwrap();
        assert_eq!(codec.name(), BIGINT);

        let token = codec.encode(&value).unwrap();
        assert_eq!(token, "#bigint:123456789012345678901234567890");

        let decoded = registry
            .codec_for_name(BIGINT)
            .unwrap()
            .decode("123456789012345678901234567890")
            .unwrap();
        assert_eq!(decoded, Value::BigInt(big));
    }

    #[test]
    fn bigint_decode_rejects_garbage() {
        let registry = Registry::default();
        let err = registry
            .codec_for_name(BIGINT)
            .unwrap()
            .decode("12x34")
            .unwrap_err();
        assert!(matches!(err, Error::Decode { ref type_name, .. } if type_name == BIGINT));
    }

    #[test]
    fn string_escape_claims_only_token_lookalikes() {
        let registry = Registry::default();

        let plain = Value::String("hello".to_string());
        assert!(registry.codec_for_value(&plain).is_none());

        let lookalike = Value::String("#BigInt:1234".to_string());
        let codec = registry.codec_for_value(&lookalike).unwrap();
        assert_eq!(codec.name(), STRING_ESCAPE);
        assert_eq!(codec.encode(&lookalike).unwrap(), "#String:#BigInt:1234");
    }

    #[test]
    fn string_escape_strips_exactly_one_layer() {
        let registry = Registry::default();
        let codec = registry.codec_for_name(STRING_ESCAPE).unwrap();

        // The remainder is returned verbatim even though it parses as a
        // bigint token.
        let decoded = codec.decode("#bigint:1234").unwrap();
        assert_eq!(decoded, Value::String("#bigint:1234".to_string()));

        let decoded = codec.decode("#String:#String:x").unwrap();
        assert_eq!(decoded, Value::String("#String:#String:x".to_string()));
    }

    #[test]
    fn reregistration_replaces_and_wins_dispatch() {
        let mut registry = Registry::default();
        registry.register_type(
            BIGINT,
            |v| matches!(v, Value::BigInt(_)),
            |v| match v {
                Value::BigInt(n) => Ok(format!("#bigint:{:x}", n)),
                _ => Err(Error::unsupported_value("not a bigint")),
            },
            |payload| {
                BigInt::parse_bytes(payload.as_bytes(), 16)
                    .map(Value::BigInt)
                    .ok_or_else(|| Error::decode(BIGINT, "invalid hex literal"))
            },
        );

        // Still two codecs: the name was replaced, not duplicated.
        assert_eq!(registry.len(), 2);

        let value = Value::BigInt(BigInt::from(255));
        let codec = registry.codec_for_value(&value).unwrap();
        assert_eq!(codec.encode(&value).unwrap(), "#bigint:ff");
    }

    #[test]
    fn most_recently_registered_wins() {
        let mut registry = Registry::default();
        // A narrower codec that also claims bigints.
        registry.register_type(
            "evenbig",
            |v| matches!(v, Value::BigInt(n) if n % BigInt::from(2) == BigInt::from(0)),
            |v| match v {
                Value::BigInt(n) => Ok(format!("#evenbig:{n}")),
                _ => Err(Error::unsupported_value("not a bigint")),
            },
            |payload| {
                payload
                    .parse::<BigInt>()
                    .map(Value::BigInt)
                    .map_err(|e| Error::decode("evenbig", e))
            },
        );

        let even = Value::BigInt(BigInt::from(4));
        assert_eq!(registry.codec_for_value(&even).unwrap().name(), "evenbig");

        let odd = Value::BigInt(BigInt::from(3));
        assert_eq!(registry.codec_for_value(&odd).unwrap().name(), BIGINT);
    }

    #[test]
    fn empty_registry_claims_nothing() {
        let registry = Registry::empty();
        assert!(registry.is_empty());
        assert!(registry
            .codec_for_value(&Value::BigInt(BigInt::from(1)))
            .is_none());
        assert!(registry.codec_for_name(BIGINT).is_none());
    }

    #[test]
    fn numbers_are_never_claimed_by_defaults() {
        let registry = Registry::default();
        assert!(registry
            .codec_for_value(&Value::Number(Number::Integer(42)))
            .is_none());
        assert!(registry
            .codec_for_value(&Value::Number(Number::Float(1.5)))
            .is_none());
    }
}
