//! Customizing TOON output with EncodeOptions.
//!
//! Run with: cargo run --example custom_options

use serde::{Deserialize, Serialize};
use std::error::Error;
use toon::{to_string_with_options, Delimiter, EncodeOptions};

#[derive(Debug, Serialize, Deserialize)]
struct Config {
    name: String,
    version: String,
    debug: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct DataRow {
    id: u32,
    value: String,
    active: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        version: "1.0.0".to_string(),
        debug: true,
    };

    println!("Default (comma):");
    let default = toon::to_string(&config)?;
    println!("{default}\n");

    println!("Tab delimiter:");
    let tab_options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
    let tab_format = to_string_with_options(&config, &tab_options)?;
    println!("{tab_format}\n");

    println!("Pipe delimiter:");
    let pipe_options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    let pipe_format = to_string_with_options(&config, &pipe_options)?;
    println!("{pipe_format}\n");

    println!("Custom length marker (#):");
    let marked_options = EncodeOptions::new().with_length_marker('#');
    let data = vec![
        DataRow {
            id: 1,
            value: "test".to_string(),
            active: true,
        },
        DataRow {
            id: 2,
            value: "prod".to_string(),
            active: false,
        },
    ];
    let marked = to_string_with_options(&data, &marked_options)?;
    println!("{marked}");

    Ok(())
}
