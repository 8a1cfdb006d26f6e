//! Encoder shape analysis: decide, for every [`Value`], whether it emits
//! as a primitive token, an object, or one of the three array emissions
//! (inline, tabular, bulleted list).

use crate::value::Value;

/// The emission shape chosen for a [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Primitive,
    EmptyObject,
    Object,
    EmptyArray,
    /// Array of primitives (mixed kinds tolerated).
    Inline,
    /// Array of arrays, every element itself an array of primitives.
    ListOfInlineArrays,
    /// Array of objects, uniform key sequence, primitive values.
    /// Carries the column order taken from the first element.
    Tabular(Vec<String>),
    /// Fallback bulleted-list emission.
    List,
}

#[must_use]
pub fn classify(value: &Value) -> Shape {
    match value {
        Value::Object(map) if map.is_empty() => Shape::EmptyObject,
        Value::Object(_) => Shape::Object,
        Value::Array(items) if items.is_empty() => Shape::EmptyArray,
        Value::Array(items) => classify_items(items),
        _ => Shape::Primitive,
    }
}

/// Classifies an array's elements directly, without wrapping them in a
/// [`Value::Array`] first.
#[must_use]
pub fn classify_items(items: &[Value]) -> Shape {
    if items.is_empty() {
        return Shape::EmptyArray;
    }
    classify_array(items)
}

fn classify_array(items: &[Value]) -> Shape {
    if items.iter().all(Value::is_primitive) {
        return Shape::Inline;
    }
    if items.iter().all(|v| match v {
        Value::Array(inner) => inner.iter().all(Value::is_primitive),
        _ => false,
    }) {
        return Shape::ListOfInlineArrays;
    }
    if let Some(fields) = tabular_fields(items) {
        return Shape::Tabular(fields);
    }
    Shape::List
}

/// Applies the tabular-uniformity test: every element must be an object,
/// sharing the exact same key sequence (Invariant 2: "same order", not
/// merely the same set) with a primitive value at every key.
#[must_use]
pub fn tabular_fields(items: &[Value]) -> Option<Vec<String>> {
    let Value::Object(first_map) = items.first()? else {
        return None;
    };
    let keys: Vec<String> = first_map.keys().cloned().collect();
    if keys.is_empty() {
        return None;
    }
    for item in items {
        let Value::Object(map) = item else {
            return None;
        };
        let item_keys: Vec<&String> = map.keys().collect();
        if item_keys.len() != keys.len() {
            return None;
        }
        for (actual, expected) in item_keys.iter().zip(keys.iter()) {
            if *actual != expected {
                return None;
            }
        }
        for key in &keys {
            match map.get(key) {
                Some(v) if v.is_primitive() => {}
                _ => return None,
            }
        }
    }
    Some(keys)
}
