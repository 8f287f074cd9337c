//! Serialization: the replacer side of the token protocol.
//!
//! [`Tagged`] pairs a [`Value`] with a [`Registry`] and implements
//! [`serde::Serialize`]. Every node the base serializer visits goes through
//! the registry first: a claimed value is replaced by its token and emitted
//! as an ordinary string at that position; everything else serializes
//! natively, with arrays and objects recursing through `Tagged` so the hook
//! runs exactly once per value.
//!
//! Because the hook lives in the `Serialize` impl, *any* serde backend acts
//! as the base engine. The crate-root functions default to `serde_json`;
//! [`to_string_with`](crate::to_string_with) accepts a custom engine:
//!
//! ```rust
//! use tagson::{tagson, to_string_with, Error, Registry};
//!
//! let registry = Registry::default();
//! let value = tagson!({ "id": 1 });
//! let pretty = to_string_with(&value, &registry, |tagged| {
//!     serde_json::to_string_pretty(tagged).map_err(Error::json)
//! }).unwrap();
//! assert!(pretty.contains("\"id\": 1"));
//! ```
//!
//! The hook is stateless: it reads the registry and the single value, and
//! nothing persists between calls.

use crate::{Number, Registry, Value};
use serde::ser::{self, Serialize, SerializeMap, SerializeSeq, Serializer};

/// A [`Value`] bound to the [`Registry`] that knows how to tag it.
///
/// Construct one with [`Tagged::new`] and hand it to any serde serializer.
pub struct Tagged<'a> {
    value: &'a Value,
    registry: &'a Registry,
}

impl<'a> Tagged<'a> {
    /// Binds a value to a registry for serialization.
    #[must_use]
    pub fn new(value: &'a Value, registry: &'a Registry) -> Self {
        Tagged { value, registry }
    }
}

impl Serialize for Tagged<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // The encode hook: consult the registry before the value's native
        // rendering. A claimed value is emitted as its token string at this
        // position, and the base serializer quotes it like any other string.
        if let Some(codec) = self.registry.codec_for_value(self.value) {
            let token = codec
                .encode(self.value)
                .map_err(|e| ser::Error::custom(e.to_string()))?;
            return serializer.serialize_str(&token);
        }

        match self.value {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&Tagged::new(item, self.registry))?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (key, value) in obj.iter() {
                    map.serialize_entry(key, &Tagged::new(value, self.registry))?;
                }
                map.end()
            }
            Value::BigInt(_) => Err(ser::Error::custom(
                "big integer value with no registered codec",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Map, Registry};
    use num_bigint::BigInt;

    fn render(value: &Value, registry: &Registry) -> serde_json::Result<String> {
        serde_json::to_string(&Tagged::new(value, registry))
    }

    #[test]
    fn natives_pass_through_untouched() {
        let registry = Registry::default();
        assert_eq!(render(&Value::Null, &registry).unwrap(), "null");
        assert_eq!(render(&Value::Bool(true), &registry).unwrap(), "true");
        assert_eq!(render(&Value::from(42), &registry).unwrap(), "42");
        assert_eq!(render(&Value::from(1.5), &registry).unwrap(), "1.5");
        assert_eq!(
            render(&Value::from("hello"), &registry).unwrap(),
            "\"hello\""
        );
    }

    #[test]
    fn bigint_becomes_a_quoted_token() {
        let registry = Registry::default();
        let value = Value::BigInt(BigInt::from(7));
        assert_eq!(render(&value, &registry).unwrap(), "\"#bigint:7\"");
    }

    #[test]
    fn bigint_without_codec_is_an_error() {
        let registry = Registry::empty();
        let value = Value::BigInt(BigInt::from(7));
        assert!(render(&value, &registry).is_err());
    }

    #[test]
    fn hook_runs_on_nested_values() {
        let registry = Registry::default();
        let mut inner = Map::new();
        inner.insert("big".to_string(), Value::BigInt(BigInt::from(9)));
        let value = Value::Array(vec![Value::Object(inner), Value::from(1)]);

        assert_eq!(
            render(&value, &registry).unwrap(),
            "[{\"big\":\"#bigint:9\"},1]"
        );
    }

    #[test]
    fn token_lookalike_string_is_escaped() {
        let registry = Registry::default();
        let value = Value::from("#BigInt:1234");
        assert_eq!(
            render(&value, &registry).unwrap(),
            "\"#String:#BigInt:1234\""
        );
    }

    #[test]
    fn object_keys_keep_insertion_order() {
        let registry = Registry::default();
        let mut obj = Map::new();
        obj.insert("z".to_string(), Value::from(1));
        obj.insert("a".to_string(), Value::from(2));
        assert_eq!(
            render(&Value::Object(obj), &registry).unwrap(),
            "{\"z\":1,\"a\":2}"
        );
    }
}
