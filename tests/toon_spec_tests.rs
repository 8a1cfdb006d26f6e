use serde::{Deserialize, Serialize};
use toon::{to_string, to_string_with_options, Delimiter, EncodeOptions};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    role: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    qty: u32,
    price: f64,
}

#[test]
fn test_tabular_array_format() {
    let users = vec![
        User {
            id: 1,
            name: "Alice".to_string(),
            role: "admin".to_string(),
        },
        User {
            id: 2,
            name: "Bob".to_string(),
            role: "user".to_string(),
        },
    ];

    let toon = to_string(&users).unwrap();

    assert!(toon.contains("[2]{"));
    assert!(toon.contains("id,name,role"));
    assert!(toon.contains("1,Alice,admin"));
    assert!(toon.contains("2,Bob,user"));
}

#[test]
fn test_inline_primitive_array() {
    let tags = vec!["admin", "developer", "ops"];
    let toon = to_string(&tags).unwrap();

    assert!(toon.starts_with("[3]: "));
    assert!(toon.contains("admin,developer,ops"));
}

#[test]
fn test_tab_delimiter() {
    let products = vec![
        Product {
            sku: "A1".to_string(),
            qty: 2,
            price: 9.99,
        },
        Product {
            sku: "B2".to_string(),
            qty: 1,
            price: 14.5,
        },
    ];

    let options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
    let toon = to_string_with_options(&products, &options).unwrap();

    assert!(toon.contains("[2\t]{"));
    assert!(toon.contains("sku\tqty\tprice"));
}

#[test]
fn test_pipe_delimiter() {
    let products = vec![
        Product {
            sku: "A1".to_string(),
            qty: 2,
            price: 9.99,
        },
        Product {
            sku: "B2".to_string(),
            qty: 1,
            price: 14.5,
        },
    ];

    let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    let toon = to_string_with_options(&products, &options).unwrap();

    assert!(toon.contains("[2|]{"));
    assert!(toon.contains("sku|qty|price"));
}

#[test]
fn test_length_marker() {
    let tags = vec!["rust", "serde", "toon"];

    let options = EncodeOptions::new().with_length_marker('#');
    let toon = to_string_with_options(&tags, &options).unwrap();

    assert!(toon.starts_with("[#3]: "));
}

#[test]
fn test_mixed_array_list_format() {
    use toon::Value;

    let mixed = Value::Array(vec![
        Value::Int(1),
        {
            let mut map = toon::ToonMap::new();
            map.insert("name".to_string(), Value::Str("Alice".to_string()));
            map.insert("age".to_string(), Value::Int(30));
            Value::Object(map)
        },
        Value::Str("text".to_string()),
    ]);

    let toon = toon::encode(&mixed, &EncodeOptions::default()).unwrap();

    assert!(toon.contains("[3]:"));
    assert!(toon.contains("- 1"));
    assert!(toon.contains("- name: Alice"));
    assert!(toon.contains("age: 30"));
    assert!(toon.contains("- text"));
}

#[test]
fn test_empty_array() {
    let empty: Vec<String> = vec![];
    let toon = to_string(&empty).unwrap();
    assert_eq!(toon, "[0]:");
}

#[test]
fn test_quoting_rules() {
    use toon::Value;

    let mut data = toon::ToonMap::new();
    data.insert("normal".to_string(), Value::Str("hello world".to_string()));
    data.insert(
        "with_comma".to_string(),
        Value::Str("hello,world".to_string()),
    );
    data.insert(
        "with_spaces".to_string(),
        Value::Str(" padded ".to_string()),
    );
    data.insert(
        "boolean_like".to_string(),
        Value::Str("true".to_string()),
    );
    data.insert("number_like".to_string(), Value::Str("123".to_string()));
    data.insert("empty".to_string(), Value::Str(String::new()));

    let value = Value::Object(data);
    let toon = toon::encode(&value, &EncodeOptions::default()).unwrap();

    assert!(toon.contains("\"hello,world\""));
    assert!(toon.contains("\" padded \""));
    assert!(toon.contains("\"true\""));
    assert!(toon.contains("\"123\""));
    assert!(toon.contains("\"\""));
    assert!(toon.contains("hello world"));
}

#[test]
fn test_strict_mode_rejects_truncated_tabular_block() {
    let text = "[2]{id,name}:\n  1,Alice";
    let result = toon::decode(text, &toon::DecodeOptions::default());
    assert!(matches!(result, Err(toon::Error::CountMismatch { .. })));
}

#[test]
fn test_lenient_mode_accepts_truncated_tabular_block() {
    let text = "[2]{id,name}:\n  1,Alice";
    let options = toon::DecodeOptions::new().with_strict(false);
    let value = toon::decode(text, &options).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
}

#[test]
fn test_is_valid() {
    assert!(toon::is_valid(
        "[2]{id}:\n  1\n  2",
        &toon::DecodeOptions::default()
    ));
    assert!(!toon::is_valid(
        "[2]{id}:\n  1",
        &toon::DecodeOptions::default()
    ));
}

#[test]
fn test_round_trip_helper() {
    let value = toon::toon!({"a": 1, "b": [1, 2, 3]});
    let back = toon::round_trip(
        &value,
        &EncodeOptions::default(),
        &toon::DecodeOptions::default(),
    )
    .unwrap();
    assert_eq!(value, back);
}
