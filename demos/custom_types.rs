//! Registering custom codecs.
//!
//! Run with: cargo run --example custom_types

use chrono::{DateTime, SecondsFormat, Utc};
use std::error::Error;
use tagson::{from_str, to_string, Number, Registry, Value};

fn main() -> Result<(), Box<dyn Error>> {
    let mut registry = Registry::default();

    // A codec claiming RFC 3339-shaped strings, canonicalized to UTC.
    registry.register_type(
        "date",
        |v| matches!(v, Value::String(s) if DateTime::parse_from_rfc3339(s).is_ok()),
        |v| match v.as_str() {
            Some(s) => {
                let parsed = DateTime::parse_from_rfc3339(s)
                    .map_err(|e| tagson::Error::custom(format!("date codec: {e}")))?;
                Ok(format!(
                    "#date:{}",
                    parsed
                        .with_timezone(&Utc)
                        .to_rfc3339_opts(SecondsFormat::Secs, true)
                ))
            }
            None => Err(tagson::Error::unsupported_value("date codec needs a string")),
        },
        |payload| {
            let parsed = DateTime::parse_from_rfc3339(payload)
                .map_err(|e| tagson::Error::decode("date", e))?;
            Ok(Value::String(
                parsed
                    .with_timezone(&Utc)
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
            ))
        },
    );

    // A codec preserving float bit patterns exactly.
    registry.register_type(
        "f64bits",
        |v| matches!(v, Value::Number(Number::Float(_))),
        |v| match v.as_f64() {
            Some(f) => Ok(format!("#f64bits:{:016x}", f.to_bits())),
            None => Err(tagson::Error::unsupported_value("f64bits codec needs a float")),
        },
        |payload| {
            let bits = u64::from_str_radix(payload, 16)
                .map_err(|e| tagson::Error::decode("f64bits", e))?;
            Ok(Value::from(f64::from_bits(bits)))
        },
    );

    let created = Value::from("2024-01-15T12:30:00+02:00");
    let text = to_string(&created, &registry)?;
    println!("Date on the wire: {}", text);
    println!("Date revived:     {}\n", from_str(&text, &registry)?);

    let ratio = Value::from(0.1);
    let text = to_string(&ratio, &registry)?;
    println!("Float on the wire: {}", text);
    assert_eq!(from_str(&text, &registry)?, ratio);
    println!("✓ Bit-exact float round-trip");

    // A reader without these codecs still gets valid data: the tokens
    // degrade to plain strings instead of failing.
    let plain_registry = Registry::default();
    let degraded = from_str("\"#date:2024-01-15T10:30:00Z\"", &plain_registry)?;
    println!("\nWithout the codec: {}", degraded);

    Ok(())
}
