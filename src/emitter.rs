//! Line writer: turns a [`Value`] plus the [`Shape`] decisions from
//! [`crate::shape`] into TOON text — indentation, header formatting, row
//! joining.

use crate::error::{Error, Result};
use crate::options::EncodeOptions;
use crate::quoting::{encode_string, format_float};
use crate::shape::{self, Shape};
use crate::value::Value;

const MAX_DEPTH: usize = 256;

fn check_depth(depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        Err(Error::depth_exceeded(MAX_DEPTH))
    } else {
        Ok(())
    }
}

fn indent(depth: usize, options: &EncodeOptions) -> String {
    " ".repeat(depth * options.indent)
}

fn format_primitive_token(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::Str(s) => encode_string(s),
        Value::Array(_) | Value::Object(_) => unreachable!("not a primitive"),
    }
}

fn encode_key(key: &str) -> String {
    encode_string(key)
}

/// Builds `[key-part][length-part][fields-part]` (no trailing colon).
fn header_text(
    key: Option<&str>,
    length: usize,
    options: &EncodeOptions,
    fields: Option<&[String]>,
) -> String {
    let mut s = String::new();
    if let Some(k) = key {
        s.push_str(&encode_key(k));
    }
    s.push('[');
    if options.length_marker == Some('#') {
        s.push('#');
    }
    s.push_str(&length.to_string());
    if let Some(suffix) = options.delimiter.header_suffix() {
        s.push(suffix);
    }
    s.push(']');
    if let Some(fields) = fields {
        s.push('{');
        let joined = fields
            .iter()
            .map(|f| encode_key(f))
            .collect::<Vec<_>>()
            .join(",");
        s.push_str(&joined);
        s.push('}');
    }
    s
}

fn join_values(values: &[String], options: &EncodeOptions) -> String {
    values.join(&options.delimiter.as_char().to_string())
}

/// Emits the text for an entire [`Value`] (the root of an encode call).
pub fn emit(value: &Value, options: &EncodeOptions) -> Result<String> {
    let mut out = Vec::new();
    match value {
        Value::Object(map) => {
            for (i, (k, v)) in map.iter().enumerate() {
                let _ = i;
                emit_field(k, v, 0, options, &mut out, "")?;
            }
        }
        Value::Array(items) => emit_array(None, items, 0, options, &mut out, "")?,
        primitive => out.push(format_primitive_token(primitive)),
    }
    Ok(out.join("\n"))
}

/// Emits one object field: `key:` plus whatever body the value's shape
/// requires. `lead` is prefixed before the key on the first line only
/// (used for `"- "` list-item bullets); it does not affect nested depth.
fn emit_field(
    key: &str,
    value: &Value,
    depth: usize,
    options: &EncodeOptions,
    out: &mut Vec<String>,
    lead: &str,
) -> Result<()> {
    check_depth(depth)?;
    match shape::classify(value) {
        Shape::Primitive => {
            out.push(format!(
                "{}{}{}: {}",
                indent(depth, options),
                lead,
                encode_key(key),
                format_primitive_token(value)
            ));
        }
        Shape::EmptyObject => {
            out.push(format!(
                "{}{}{}:",
                indent(depth, options),
                lead,
                encode_key(key)
            ));
        }
        Shape::Object => {
            out.push(format!(
                "{}{}{}:",
                indent(depth, options),
                lead,
                encode_key(key)
            ));
            let Value::Object(map) = value else {
                unreachable!()
            };
            for (k, v) in map.iter() {
                emit_field(k, v, depth + 1, options, out, "")?;
            }
        }
        _ => {
            let Value::Array(items) = value else {
                unreachable!()
            };
            emit_array_with_lead(Some(key), items, depth, options, out, lead)?;
        }
    }
    Ok(())
}

fn emit_array(
    key: Option<&str>,
    items: &[Value],
    depth: usize,
    options: &EncodeOptions,
    out: &mut Vec<String>,
    lead: &str,
) -> Result<()> {
    emit_array_with_lead(key, items, depth, options, out, lead)
}

fn emit_array_with_lead(
    key: Option<&str>,
    items: &[Value],
    depth: usize,
    options: &EncodeOptions,
    out: &mut Vec<String>,
    lead: &str,
) -> Result<()> {
    check_depth(depth)?;
    let shape = shape::classify_items(items);

    match shape {
        Shape::EmptyArray => {
            out.push(format!(
                "{}{}{}:",
                indent(depth, options),
                lead,
                header_text(key, 0, options, None)
            ));
        }
        Shape::Inline => {
            let values: Vec<String> = items.iter().map(format_primitive_token).collect();
            out.push(format!(
                "{}{}{}: {}",
                indent(depth, options),
                lead,
                header_text(key, items.len(), options, None),
                join_values(&values, options)
            ));
        }
        Shape::Tabular(fields) => {
            out.push(format!(
                "{}{}{}:",
                indent(depth, options),
                lead,
                header_text(key, items.len(), options, Some(&fields))
            ));
            for item in items {
                let Value::Object(map) = item else {
                    unreachable!()
                };
                let row: Vec<String> = fields
                    .iter()
                    .map(|f| {
                        map.get(f)
                            .map(format_primitive_token)
                            .unwrap_or_else(|| "null".to_string())
                    })
                    .collect();
                out.push(format!(
                    "{}{}",
                    indent(depth + 1, options),
                    join_values(&row, options)
                ));
            }
        }
        Shape::ListOfInlineArrays | Shape::List => {
            out.push(format!(
                "{}{}{}:",
                indent(depth, options),
                lead,
                header_text(key, items.len(), options, None)
            ));
            for item in items {
                emit_list_item(item, depth + 1, options, out)?;
            }
        }
        Shape::Primitive | Shape::Object | Shape::EmptyObject => unreachable!(),
    }
    Ok(())
}

/// Emits one element of a bulleted list, per the four element shapes in
/// the list-array rules: primitive, primitive array, object, or a
/// (possibly non-uniform) array of objects.
fn emit_list_item(
    item: &Value,
    depth: usize,
    options: &EncodeOptions,
    out: &mut Vec<String>,
) -> Result<()> {
    check_depth(depth)?;
    match item {
        Value::Array(items) => emit_array_with_lead(None, items, depth, options, out, "- ")?,
        Value::Object(map) => {
            if map.is_empty() {
                out.push(format!("{}- {{}}", indent(depth, options)));
            } else {
                for (i, (k, v)) in map.iter().enumerate() {
                    let lead = if i == 0 { "- " } else { "" };
                    emit_field(k, v, depth, options, out, lead)?;
                }
            }
        }
        primitive => out.push(format!(
            "{}- {}",
            indent(depth, options),
            format_primitive_token(primitive)
        )),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::ToonMap;
    use crate::options::Delimiter;

    fn obj(pairs: Vec<(&str, Value)>) -> Value {
        let mut map = ToonMap::new();
        for (k, v) in pairs {
            map.insert(k.to_string(), v);
        }
        Value::Object(map)
    }

    #[test]
    fn emits_primitive_tabular_array() {
        let value = obj(vec![(
            "users",
            Value::Array(vec![
                obj(vec![
                    ("id", Value::Int(1)),
                    ("name", Value::Str("Alice".into())),
                    ("role", Value::Str("admin".into())),
                ]),
                obj(vec![
                    ("id", Value::Int(2)),
                    ("name", Value::Str("Bob".into())),
                    ("role", Value::Str("user".into())),
                ]),
            ]),
        )]);
        let text = emit(&value, &EncodeOptions::default()).unwrap();
        assert_eq!(
            text,
            "users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user"
        );
    }

    #[test]
    fn emits_inline_array_with_pipe_delimiter() {
        let value = obj(vec![(
            "items",
            Value::Array(vec![
                Value::Str("a".into()),
                Value::Str("b".into()),
                Value::Str("c".into()),
            ]),
        )]);
        let options = EncodeOptions::default().with_delimiter(Delimiter::Pipe);
        let text = emit(&value, &options).unwrap();
        assert_eq!(text, "items[3|]: a|b|c");
    }

    #[test]
    fn emits_list_of_inline_arrays() {
        let value = obj(vec![(
            "matrix",
            Value::Array(vec![
                Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
                Value::Array(vec![Value::Int(4), Value::Int(5), Value::Int(6)]),
            ]),
        )]);
        let options = EncodeOptions::default().with_delimiter(Delimiter::Pipe);
        let text = emit(&value, &options).unwrap();
        assert_eq!(text, "matrix[2]:\n  - [3|]: 1|2|3\n  - [3|]: 4|5|6");
    }

    #[test]
    fn emits_length_marker() {
        let value = obj(vec![(
            "nums",
            Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
        )]);
        let options = EncodeOptions::default().with_length_marker('#');
        let text = emit(&value, &options).unwrap();
        assert_eq!(text, "nums[#3]: 1,2,3");
    }

    #[test]
    fn quotes_delimiter_containing_value() {
        let value = obj(vec![(
            "addresses",
            Value::Array(vec![
                obj(vec![
                    ("id", Value::Int(1)),
                    ("address", Value::Str("123 Main, Apt 4".into())),
                ]),
                obj(vec![
                    ("id", Value::Int(2)),
                    ("address", Value::Str("456 Oak, Suite 10".into())),
                ]),
            ]),
        )]);
        let options = EncodeOptions::default().with_delimiter(Delimiter::Pipe);
        let text = emit(&value, &options).unwrap();
        assert_eq!(
            text,
            "addresses[2|]{id,address}:\n  1|\"123 Main, Apt 4\"\n  2|\"456 Oak, Suite 10\""
        );
    }

    #[test]
    fn emits_bulleted_list_of_objects_non_uniform() {
        let value = obj(vec![(
            "rows",
            Value::Array(vec![
                obj(vec![("a", Value::Int(1)), ("b", Value::Int(2))]),
                obj(vec![("a", Value::Int(3))]),
            ]),
        )]);
        let text = emit(&value, &EncodeOptions::default()).unwrap();
        assert_eq!(text, "rows[2]:\n  - a: 1\n  b: 2\n  - a: 3");
    }

    #[test]
    fn root_array_has_no_key() {
        let value = Value::Array(vec![Value::Int(1), Value::Int(2)]);
        let text = emit(&value, &EncodeOptions::default()).unwrap();
        assert_eq!(text, "[2]: 1,2");
    }

    #[test]
    fn root_primitive_is_single_line() {
        let text = emit(&Value::Int(42), &EncodeOptions::default()).unwrap();
        assert_eq!(text, "42");
    }
}
