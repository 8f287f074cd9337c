//! Basic tagged serialization and deserialization.
//!
//! Run with: cargo run --example simple

use num_bigint::BigInt;
use std::error::Error;
use tagson::{from_str, to_string, Map, Registry, Value};

fn main() -> Result<(), Box<dyn Error>> {
    let registry = Registry::default();

    let balance: BigInt = "123456789012345678901234567890".parse()?;
    let mut account = Map::new();
    account.insert("id".to_string(), Value::from(42));
    account.insert("owner".to_string(), Value::from("Alice Johnson"));
    account.insert("balance".to_string(), Value::BigInt(balance));
    let account = Value::Object(account);

    // Serialize: the bigint travels as an ordinary JSON string token.
    let text = to_string(&account, &registry)?;
    println!("JSON output:\n{}\n", text);

    // Deserialize: the token comes back as a bigint, exactly.
    let account_back = from_str(&text, &registry)?;
    assert_eq!(account, account_back);
    println!("✓ Round-trip successful");

    // Strings that merely look like tokens are protected automatically.
    let tricky = Value::from("#bigint:1234");
    let text = to_string(&tricky, &registry)?;
    println!("\nToken-lookalike string on the wire: {}", text);
    assert_eq!(from_str(&text, &registry)?, tricky);
    println!("✓ Escaping round-trip successful");

    Ok(())
}
