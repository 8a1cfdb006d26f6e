//! Using the toon! macro for dynamic value construction.
//!
//! Run with: cargo run --example macro

use std::error::Error;
use toon::{encode, toon, EncodeOptions, Value};

fn main() -> Result<(), Box<dyn Error>> {
    let options = EncodeOptions::default();

    let null_val = toon!(null);
    let bool_val = toon!(true);
    let number = toon!(42);
    let text = toon!("Hello, TOON!");

    println!("Primitives:");
    println!("  null:   {}", encode(&null_val, &options)?);
    println!("  bool:   {}", encode(&bool_val, &options)?);
    println!("  number: {}", encode(&number, &options)?);
    println!("  text:   {}\n", encode(&text, &options)?);

    let numbers = toon!([1, 2, 3, 4, 5]);
    let mixed = toon!([1, "two", true, null]);

    println!("Arrays:");
    println!("  Numbers: {}", encode(&numbers, &options)?);
    println!("  Mixed:   {}\n", encode(&mixed, &options)?);

    let user = toon!({
        "id": 123,
        "name": "Alice",
        "email": "alice@example.com",
        "active": true
    });

    println!("Objects:");
    println!("{}\n", encode(&user, &options)?);

    let config = toon!({
        "app": {
            "name": "MyApp",
            "version": "1.0.0"
        },
        "database": {
            "host": "localhost",
            "port": 5432,
            "name": "mydb"
        },
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Nested structures:");
    println!("{}\n", encode(&config, &options)?);

    let items = vec![
        toon!({"id": 1, "status": "active"}),
        toon!({"id": 2, "status": "pending"}),
        toon!({"id": 3, "status": "completed"}),
    ];

    let summary = toon!({
        "total": 3,
        "items": items
    });

    println!("Dynamic construction:");
    println!("{}\n", encode(&summary, &options)?);

    if let Value::Object(obj) = &config {
        if let Some(Value::Object(app)) = obj.get("app") {
            if let Some(name) = app.get("name").and_then(Value::as_str) {
                println!("Accessing values:");
                println!("  App name: {name}");
            }
        }

        if let Some(Value::Array(features)) = obj.get("features") {
            println!("  Features: {}", features.len());
        }
    }

    Ok(())
}
