//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use std::error::Error;
use toon::{encode, to_value, toon, EncodeOptions, Value};

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let options = EncodeOptions::default();

    let config = toon!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Config as TOON:\n{}\n", encode(&config, &options)?);

    if let Value::Object(obj) = &config {
        if let Some(Value::Str(host)) = obj.get("host") {
            println!("Accessing field 'host': {host}");
        }

        if let Some(port) = obj.get("port").and_then(Value::as_i64) {
            println!("Accessing field 'port': {port}");
        }

        if let Some(Value::Array(features)) = obj.get("features") {
            println!("Accessing field 'features': {} items\n", features.len());
        }
    }

    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;
    println!("User as Value:\n{}\n", encode(&user_value, &options)?);

    println!("Type checks:");
    println!("  is_primitive: {}", user_value.is_primitive());
    println!("  as_object:    {}", user_value.as_object().is_some());
    println!("  as_array:     {}", user_value.as_array().is_some());

    Ok(())
}
