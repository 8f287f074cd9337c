//! Property-based tests for the core round-trip guarantees.
//!
//! The load-bearing property is the escaping involution: *every* string,
//! token-lookalike or not, must come back byte-identical after one
//! serialize+deserialize round trip.

use num_bigint::BigInt;
use proptest::prelude::*;
use tagson::{from_str, to_string, Map, Registry, Value};

fn roundtrip(value: &Value, registry: &Registry) -> bool {
    match to_string(value, registry) {
        Ok(serialized) => match from_str(&serialized, registry) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

/// Strings weighted toward token-shaped inputs, where the escaping rule
/// earns its keep.
fn string_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "#[A-Za-z]{1,8}:[0-9]{0,12}",
        "(#String:){0,4}#bigint:[0-9]{1,6}",
        "#{0,3}:{0,3}[a-z]{0,4}",
    ]
}

proptest! {
    #[test]
    fn prop_string_roundtrip_is_exact(s in string_strategy()) {
        let registry = Registry::default();
        prop_assert!(roundtrip(&Value::from(s), &registry));
    }

    #[test]
    fn prop_i64(n in any::<i64>()) {
        let registry = Registry::default();
        prop_assert!(roundtrip(&Value::from(n), &registry));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        let registry = Registry::default();
        prop_assert!(roundtrip(&Value::from(b), &registry));
    }

    #[test]
    fn prop_bigint(digits in "-?[1-9][0-9]{0,60}") {
        let registry = Registry::default();
        let big: BigInt = digits.parse().unwrap();
        prop_assert!(roundtrip(&Value::BigInt(big), &registry));
    }

    #[test]
    fn prop_string_array(items in prop::collection::vec(string_strategy(), 0..16)) {
        let registry = Registry::default();
        let value = Value::Array(items.into_iter().map(Value::from).collect());
        prop_assert!(roundtrip(&value, &registry));
    }

    #[test]
    fn prop_object_of_mixed_values(
        entries in prop::collection::vec(
            ("[a-z]{1,8}", prop_oneof![
                Just(Value::Null),
                any::<bool>().prop_map(Value::from),
                any::<i64>().prop_map(Value::from),
                string_strategy().prop_map(Value::from),
                "[0-9]{1,40}".prop_map(|d| Value::BigInt(d.parse().unwrap())),
            ]),
            0..12,
        )
    ) {
        let registry = Registry::default();
        let mut map = Map::new();
        for (key, value) in entries {
            map.insert(key, value);
        }
        let value = Value::Object(map);
        prop_assert!(roundtrip(&value, &registry));
    }

    // An encoded tree is always plain JSON: no bigints survive encoding,
    // and every string on the wire is either untagged or a wellformed token.
    #[test]
    fn prop_wire_text_is_plain_json(digits in "[0-9]{1,40}", s in string_strategy()) {
        let registry = Registry::default();
        let value = Value::Array(vec![
            Value::BigInt(digits.parse().unwrap()),
            Value::from(s),
        ]);
        let text = to_string(&value, &registry).unwrap();
        prop_assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok());
    }
}
