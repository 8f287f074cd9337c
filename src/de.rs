//! Deserialization: the reviver side of the token protocol.
//!
//! The base parser produces a plain [`serde_json::Value`] tree; [`revive`]
//! walks it once and applies the decode hook to every value:
//!
//! - non-strings map straight into [`Value`]; only strings can carry tokens;
//! - strings run through the token grammar; a failed parse or an unknown
//!   type name leaves the string untouched (fail-open, so payloads written
//!   by a registry with more types still read back);
//! - a recognized type name hands the payload to its codec, and whatever
//!   error the codec raises propagates as-is.
//!
//! Like the encode side, each call is a pure function of the registry and
//! one value; nothing persists between calls and sibling order is
//! irrelevant.

use crate::token::parse_token;
use crate::{Map, Number, Registry, Result, Value};
use num_bigint::BigInt;

/// Applies the decode hook across a parsed JSON tree.
///
/// # Errors
///
/// Only a registered codec rejecting its payload fails; everything else is
/// pass-through.
pub fn revive(json: serde_json::Value, registry: &Registry) -> Result<Value> {
    match json {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_json::Value::Number(n) => Ok(revive_number(&n)),
        serde_json::Value::String(s) => revive_string(s, registry),
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| revive(item, registry))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        serde_json::Value::Object(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, value) in entries {
                map.insert(key, revive(value, registry)?);
            }
            Ok(Value::Object(map))
        }
    }
}

fn revive_number(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(Number::Integer(i))
    } else if let Some(u) = n.as_u64() {
        // Integers past i64::MAX keep their precision.
        Value::BigInt(BigInt::from(u))
    } else {
        Value::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN)))
    }
}

fn revive_string(s: String, registry: &Registry) -> Result<Value> {
    let token = parse_token(&s);
    if let Some(tag) = token.tag {
        if let Some(codec) = registry.codec_for_name(tag) {
            return codec.decode(token.payload);
        }
    }
    Ok(Value::String(s))
}
