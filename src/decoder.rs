//! Decoder driver: the second decode stage.
//!
//! Walks the [`crate::scanner::ParsedLine`] stream produced by
//! [`crate::scanner::scan`], dispatching each line through
//! [`crate::parser`]'s header/key grammar and assembling a [`Value`] tree.
//! `decode_object` and `decode_array` mirror the encoder's `emit_field`/
//! `emit_array` pair in reverse.

use crate::error::{ArrayKind, Error, Result};
use crate::map::ToonMap;
use crate::options::{DecodeOptions, Delimiter};
use crate::parser::{self, ArrayHeader};
use crate::quoting;
use crate::scanner::{self, ParsedLine, ScanResult};
use crate::value::Value;

const MAX_DEPTH: usize = 256;

fn check_depth(depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        Err(Error::depth_exceeded(MAX_DEPTH))
    } else {
        Ok(())
    }
}

struct Cursor<'a> {
    lines: &'a [ParsedLine],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(lines: &'a [ParsedLine]) -> Self {
        Cursor { lines, pos: 0 }
    }

    fn peek(&self) -> Option<&'a ParsedLine> {
        self.lines.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}

/// Decodes a complete TOON document into a [`Value`].
pub fn decode(text: &str, options: &DecodeOptions) -> Result<Value> {
    let scan = scanner::scan(text, options)?;
    if scan.lines.is_empty() {
        return Err(Error::invalid_input(
            "document is empty or contains only whitespace",
        ));
    }

    let mut cursor = Cursor::new(&scan.lines);
    let first = cursor.peek().expect("checked non-empty above").clone();

    if let Some((header, rest)) =
        parser::try_parse_array_header(&first.content, Delimiter::Comma, first.line_number)?
    {
        if header.key.is_none() {
            cursor.advance();
            return decode_array(
                &mut cursor,
                &header,
                &rest,
                first.depth,
                0,
                options,
                &scan,
                first.line_number,
            );
        }
    }

    if scan.lines.len() == 1 && parser::find_unquoted_colon(&first.content).is_none() {
        cursor.advance();
        return decode_primitive_token(&first.content, first.line_number);
    }

    decode_object(&mut cursor, 0, options, &scan)
}

/// Decodes an object: every sibling key at the depth of the first
/// encountered line, stopping as soon as a line at a shallower depth
/// appears (that line belongs to an enclosing context).
fn decode_object(
    cursor: &mut Cursor,
    rec_depth: usize,
    options: &DecodeOptions,
    scan: &ScanResult,
) -> Result<Value> {
    check_depth(rec_depth)?;
    let mut map = ToonMap::new();
    let mut object_depth: Option<usize> = None;

    loop {
        let Some(line) = cursor.peek() else { break };
        let od = *object_depth.get_or_insert(line.depth);
        if line.depth != od {
            break;
        }
        let line = line.clone();
        cursor.advance();

        decode_object_field(
            &mut map,
            &line.content,
            line.line_number,
            od,
            rec_depth,
            cursor,
            options,
            scan,
        )?;
    }

    Ok(Value::Object(map))
}

/// Decodes an array given its already-parsed header. `depth` is the
/// header line's own depth; rows/items live at `depth + 1`.
#[allow(clippy::too_many_arguments)]
fn decode_array(
    cursor: &mut Cursor,
    header: &ArrayHeader,
    inline_rest: &str,
    depth: usize,
    rec_depth: usize,
    options: &DecodeOptions,
    scan: &ScanResult,
    header_line: usize,
) -> Result<Value> {
    check_depth(rec_depth)?;

    let trimmed = inline_rest.trim();
    if !trimmed.is_empty() {
        let tokens = parser::parse_inline_values(trimmed, header.delimiter);
        if options.strict && tokens.len() != header.length {
            return Err(Error::count_mismatch(
                header.length,
                tokens.len(),
                ArrayKind::Inline,
            ));
        }
        let values = tokens
            .iter()
            .map(|t| decode_primitive_token(t, header_line))
            .collect::<Result<Vec<_>>>()?;
        return Ok(Value::Array(values));
    }

    if header.length == 0 {
        return Ok(Value::Array(Vec::new()));
    }

    if let Some(fields) = &header.fields {
        return decode_tabular_rows(cursor, header, fields, depth, options, scan, header_line);
    }

    decode_list_items(cursor, header, depth, rec_depth, options, scan)
}

#[allow(clippy::too_many_arguments)]
fn decode_tabular_rows(
    cursor: &mut Cursor,
    header: &ArrayHeader,
    fields: &[String],
    depth: usize,
    options: &DecodeOptions,
    scan: &ScanResult,
    header_line: usize,
) -> Result<Value> {
    let mut rows = Vec::new();
    let mut last_line = header_line;

    while rows.len() < header.length {
        let Some(line) = cursor.peek() else { break };
        if line.depth != depth + 1 {
            break;
        }
        cursor.advance();
        last_line = line.line_number;

        let cells = parser::parse_inline_values(&line.content, header.delimiter);
        let mut obj = ToonMap::new();
        for (i, field) in fields.iter().enumerate() {
            let value = match cells.get(i) {
                Some(tok) => decode_primitive_token(tok, line.line_number)?,
                None => Value::Null,
            };
            obj.insert(field.clone(), value);
        }
        rows.push(Value::Object(obj));
    }

    if options.strict {
        if rows.len() != header.length {
            return Err(Error::count_mismatch(
                header.length,
                rows.len(),
                ArrayKind::Tabular,
            ));
        }
        let blanks = scan.blanks_between(header_line, last_line);
        if !blanks.is_empty() {
            return Err(Error::unexpected_blank_line(blanks));
        }
    }

    Ok(Value::Array(rows))
}

fn is_list_item_marker(content: &str) -> bool {
    content == "-" || content.starts_with("- ")
}

fn strip_list_marker(content: &str) -> &str {
    content.strip_prefix("- ").unwrap_or(content)
}

fn decode_list_items(
    cursor: &mut Cursor,
    header: &ArrayHeader,
    depth: usize,
    rec_depth: usize,
    options: &DecodeOptions,
    scan: &ScanResult,
) -> Result<Value> {
    let mut items = Vec::new();

    while items.len() < header.length {
        let Some(line) = cursor.peek() else { break };
        if line.depth != depth + 1 {
            break;
        }
        let line = line.clone();
        cursor.advance();
        let content = strip_list_marker(&line.content);

        if let Some((inner_header, inner_rest)) =
            parser::try_parse_array_header(content, header.delimiter, line.line_number)?
        {
            if inner_header.key.is_none() {
                let value = decode_array(
                    cursor,
                    &inner_header,
                    &inner_rest,
                    depth + 1,
                    rec_depth + 1,
                    options,
                    scan,
                    line.line_number,
                )?;
                items.push(value);
                continue;
            }
        }

        if parser::find_unquoted_colon(content).is_some() {
            items.push(decode_list_object_item(
                cursor, content, &line, depth, rec_depth, options, scan,
            )?);
            continue;
        }

        items.push(decode_primitive_token(content, line.line_number)?);
    }

    if options.strict && items.len() != header.length {
        return Err(Error::count_mismatch(
            header.length,
            items.len(),
            ArrayKind::List,
        ));
    }

    Ok(Value::Array(items))
}

/// Decodes one `- key: value` list item, then keeps consuming sibling
/// `key: value` lines at the same depth (lines that don't start a new
/// `- ` item) as further fields of the same object.
fn decode_list_object_item(
    cursor: &mut Cursor,
    first_content: &str,
    first_line: &ParsedLine,
    depth: usize,
    rec_depth: usize,
    options: &DecodeOptions,
    scan: &ScanResult,
) -> Result<Value> {
    let mut obj = ToonMap::new();
    decode_object_field(
        &mut obj,
        first_content,
        first_line.line_number,
        depth + 1,
        rec_depth + 1,
        cursor,
        options,
        scan,
    )?;

    loop {
        let Some(next) = cursor.peek() else { break };
        if next.depth != depth + 1 || is_list_item_marker(&next.content) {
            break;
        }
        let next = next.clone();
        cursor.advance();
        decode_object_field(
            &mut obj,
            &next.content,
            next.line_number,
            depth + 1,
            rec_depth + 1,
            cursor,
            options,
            scan,
        )?;
    }

    Ok(Value::Object(obj))
}

/// Parses one object field line into `obj`: a keyed array header
/// (`key[N]...:`) first, falling back to a plain `key: rest` split.
/// Recurses into a nested object on the following lines when `rest` is
/// empty and the next line is one level deeper.
#[allow(clippy::too_many_arguments)]
fn decode_object_field(
    obj: &mut ToonMap,
    content: &str,
    line_number: usize,
    field_depth: usize,
    rec_depth: usize,
    cursor: &mut Cursor,
    options: &DecodeOptions,
    scan: &ScanResult,
) -> Result<()> {
    if let Some((header, arr_rest)) =
        parser::try_parse_array_header(content, Delimiter::Comma, line_number)?
    {
        if let Some(key) = header.key.clone() {
            let value = decode_array(
                cursor,
                &header,
                &arr_rest,
                field_depth,
                rec_depth + 1,
                options,
                scan,
                line_number,
            )?;
            obj.insert(key, value);
            return Ok(());
        }
    }

    let (key, rest) = parser::parse_key(content, line_number)?;
    let rest_trim = rest.trim();

    if rest_trim.is_empty() {
        if let Some(next) = cursor.peek() {
            if next.depth == field_depth + 1 {
                let child = decode_object(cursor, rec_depth + 1, options, scan)?;
                obj.insert(key, child);
                return Ok(());
            }
        }
        obj.insert(key, Value::Object(ToonMap::new()));
    } else {
        obj.insert(key, decode_primitive_token(rest_trim, line_number)?);
    }
    Ok(())
}

/// Decodes one bare token: quoted string, reserved literal, number, or
/// else a plain (unquoted) string.
pub fn decode_primitive_token(tok: &str, line_number: usize) -> Result<Value> {
    let trimmed = tok.trim();

    if trimmed.starts_with('"') {
        return match quoting::strip_quotes(trimmed) {
            Some(s) => Ok(Value::Str(s)),
            None => Err(Error::syntax(line_number, "unterminated quoted string")),
        };
    }

    match trimmed {
        "null" => return Ok(Value::Null),
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }

    if let Some(i) = quoting::parse_int_token(trimmed) {
        return Ok(Value::Int(i));
    }
    if let Some(f) = quoting::parse_float_token(trimmed) {
        return Ok(Value::Float(f));
    }

    Ok(Value::Str(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_tabular_array() {
        let text = "users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user";
        let value = decode(text, &DecodeOptions::default()).unwrap();
        let obj = value.as_object().unwrap();
        let users = obj.get("users").unwrap().as_array().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(
            users[0].as_object().unwrap().get("name").unwrap().as_str(),
            Some("Alice")
        );
    }

    #[test]
    fn decodes_inline_array_with_pipe_delimiter() {
        let value = decode("items[3|]: a|b|c", &DecodeOptions::default()).unwrap();
        let items = value.as_object().unwrap().get("items").unwrap().as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].as_str(), Some("b"));
    }

    #[test]
    fn decodes_list_of_inline_arrays() {
        let text = "matrix[2]:\n  - [3]: 1,2,3\n  - [3]: 4,5,6";
        let value = decode(text, &DecodeOptions::default()).unwrap();
        let matrix = value.as_object().unwrap().get("matrix").unwrap().as_array().unwrap();
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[0].as_array().unwrap()[2].as_i64(), Some(3));
    }

    #[test]
    fn decodes_bulleted_list_with_sibling_keys() {
        let text = "rows[2]:\n  - a: 1\n  b: 2\n  - a: 3";
        let value = decode(text, &DecodeOptions::default()).unwrap();
        let rows = value.as_object().unwrap().get("rows").unwrap().as_array().unwrap();
        assert_eq!(rows.len(), 2);
        let first = rows[0].as_object().unwrap();
        assert_eq!(first.get("a").unwrap().as_i64(), Some(1));
        assert_eq!(first.get("b").unwrap().as_i64(), Some(2));
        let second = rows[1].as_object().unwrap();
        assert_eq!(second.get("a").unwrap().as_i64(), Some(3));
        assert_eq!(second.get("b"), None);
    }

    #[test]
    fn strict_mode_rejects_short_tabular_block() {
        let text = "users[2]{id}:\n  1";
        let result = decode(text, &DecodeOptions::default());
        assert!(matches!(result, Err(Error::CountMismatch { expected: 2, actual: 1, .. })));
    }

    #[test]
    fn lenient_mode_accepts_short_array() {
        let text = "users[2]{id}:\n  1";
        let opts = DecodeOptions::default().with_strict(false);
        let value = decode(text, &opts).unwrap();
        let users = value.as_object().unwrap().get("users").unwrap().as_array().unwrap();
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn quoted_value_containing_delimiter_round_trips() {
        let text = "addresses[2|]{id,address}:\n  1|\"123 Main, Apt 4\"\n  2|\"456 Oak, Suite 10\"";
        let value = decode(text, &DecodeOptions::default()).unwrap();
        let addresses = value.as_object().unwrap().get("addresses").unwrap().as_array().unwrap();
        assert_eq!(
            addresses[0].as_object().unwrap().get("address").unwrap().as_str(),
            Some("123 Main, Apt 4")
        );
    }

    #[test]
    fn root_array_with_no_key() {
        let value = decode("[2]: 1,2", &DecodeOptions::default()).unwrap();
        assert_eq!(value, Value::Array(vec![Value::Int(1), Value::Int(2)]));
    }

    #[test]
    fn root_primitive_single_line() {
        let value = decode("42", &DecodeOptions::default()).unwrap();
        assert_eq!(value, Value::Int(42));
    }

    #[test]
    fn nested_object_field() {
        let text = "user:\n  name: Alice\n  address:\n    city: NYC";
        let value = decode(text, &DecodeOptions::default()).unwrap();
        let user = value.as_object().unwrap().get("user").unwrap().as_object().unwrap();
        assert_eq!(user.get("name").unwrap().as_str(), Some("Alice"));
        let address = user.get("address").unwrap().as_object().unwrap();
        assert_eq!(address.get("city").unwrap().as_str(), Some("NYC"));
    }

    #[test]
    fn quoted_string_equal_to_reserved_literal_decodes_as_string() {
        let value = decode_primitive_token("\"true\"", 1).unwrap();
        assert_eq!(value, Value::Str("true".to_string()));
    }

    #[test]
    fn keyed_array_header_as_sole_root_field() {
        let text = "users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user";
        let value = decode(text, &DecodeOptions::default()).unwrap();
        assert!(value.as_object().is_some());
    }

    #[test]
    fn list_item_keyed_array_field_keeps_enclosing_object() {
        let text = "rows[1]:\n  - tags[2]: 1,2";
        let value = decode(text, &DecodeOptions::default()).unwrap();
        let rows = value.as_object().unwrap().get("rows").unwrap().as_array().unwrap();
        assert_eq!(rows.len(), 1);
        let row = rows[0].as_object().unwrap();
        let tags = row.get("tags").unwrap().as_array().unwrap();
        assert_eq!(tags[0].as_i64(), Some(1));
        assert_eq!(tags[1].as_i64(), Some(2));
    }

    #[test]
    fn round_trip_nested_keyed_array_in_list_item() {
        use crate::emitter;
        use crate::options::EncodeOptions;

        let mut row = ToonMap::new();
        row.insert(
            "tags".to_string(),
            Value::Array(vec![Value::Int(1), Value::Int(2)]),
        );
        let mut root = ToonMap::new();
        root.insert("rows".to_string(), Value::Array(vec![Value::Object(row)]));
        let value = Value::Object(root);

        let text = emitter::emit(&value, &EncodeOptions::default()).unwrap();
        let decoded = decode(&text, &DecodeOptions::default()).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn list_item_keyed_tabular_field_keeps_enclosing_object() {
        let text = "groups[1]:\n  - users[2]{id,name}:\n    1,Alice\n    2,Bob";
        let value = decode(text, &DecodeOptions::default()).unwrap();
        let groups = value.as_object().unwrap().get("groups").unwrap().as_array().unwrap();
        let group = groups[0].as_object().unwrap();
        let users = group.get("users").unwrap().as_array().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(
            users[1].as_object().unwrap().get("name").unwrap().as_str(),
            Some("Bob")
        );
    }
}
