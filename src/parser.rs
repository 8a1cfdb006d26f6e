//! Header, key, and delimited-value grammar.
//!
//! These are pure string-level parsers over one [`crate::scanner::ParsedLine`]'s
//! content; they do not own a cursor over the line stream (that's
//! [`crate::decoder`]'s job).

use crate::error::{Error, Result};
use crate::options::Delimiter;
use crate::quoting::{find_closing_quote, split_delimited, unescape_string};

/// A parsed array header: `[key-part][length-part][fields-part]:`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayHeader {
    pub key: Option<String>,
    pub length: usize,
    pub delimiter: Delimiter,
    pub fields: Option<Vec<String>>,
    pub has_length_marker: bool,
}

/// Parses a key token from the start of `content`: a quoted string, or a
/// bareword up to the first unquoted colon. Returns the key and the
/// remainder of the line after the colon (not yet trimmed).
pub fn parse_key(content: &str, line_number: usize) -> Result<(String, &str)> {
    if content.starts_with('"') {
        let end = find_closing_quote(content)
            .ok_or_else(|| Error::syntax(line_number, "unterminated quoted key"))?;
        let key = unescape_string(&content[1..end - 1]);
        let after = &content[end..];
        let after = after
            .strip_prefix(':')
            .ok_or_else(|| Error::syntax(line_number, "missing colon after key"))?;
        Ok((key, after))
    } else {
        match find_unquoted_colon(content) {
            Some(idx) => {
                let key = content[..idx].trim().to_string();
                Ok((key, &content[idx + 1..]))
            }
            None => Err(Error::syntax(line_number, "missing colon after key")),
        }
    }
}

/// Finds the byte offset of the first colon in `s` that is not inside a
/// double-quoted span.
#[must_use]
pub fn find_unquoted_colon(s: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut chars = s.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if in_quotes {
            if c == '\\' {
                chars.next();
            } else if c == '"' {
                in_quotes = false;
            }
            continue;
        }
        if c == '"' {
            in_quotes = true;
        } else if c == ':' {
            return Some(i);
        }
    }
    None
}

/// Attempts to parse `content` as an array header. Returns `None` (not
/// an error) when `content` simply isn't shaped like a header — callers
/// fall back to treating the line as a plain key or primitive.
pub fn try_parse_array_header(
    content: &str,
    default_delimiter: Delimiter,
    line_number: usize,
) -> Result<Option<(ArrayHeader, String)>> {
    let (key, bracket_start) = if content.starts_with('"') {
        match find_closing_quote(content) {
            Some(end) => (Some(unescape_string(&content[1..end - 1])), end),
            None => return Ok(None),
        }
    } else {
        match content.find('[') {
            Some(idx) => {
                let key_part = content[..idx].trim();
                if key_part.is_empty() {
                    (None, idx)
                } else {
                    (Some(key_part.to_string()), idx)
                }
            }
            None => return Ok(None),
        }
    };

    if content.as_bytes().get(bracket_start) != Some(&b'[') {
        return Ok(None);
    }
    let Some(close_rel) = content[bracket_start..].find(']') else {
        return Ok(None);
    };
    let close_idx = bracket_start + close_rel;
    let inner = &content[bracket_start + 1..close_idx];

    let has_length_marker = inner.starts_with('#');
    let remaining = if has_length_marker { &inner[1..] } else { inner };

    let (num_part, delim_char) = match remaining.chars().last() {
        Some(c @ ('|' | '\t')) => (&remaining[..remaining.len() - c.len_utf8()], Some(c)),
        _ => (remaining, None),
    };
    let Ok(length) = num_part.parse::<usize>() else {
        return Ok(None);
    };
    let delimiter = delim_char
        .and_then(Delimiter::from_suffix)
        .unwrap_or(default_delimiter);

    let mut rest = &content[close_idx + 1..];
    let fields = if let Some(stripped) = rest.strip_prefix('{') {
        let Some(end_rel) = stripped.find('}') else {
            return Err(Error::syntax(line_number, "unterminated field list"));
        };
        let field_text = &stripped[..end_rel];
        let parsed = parse_field_list(field_text);
        rest = &stripped[end_rel + 1..];
        Some(parsed)
    } else {
        None
    };

    let Some(after_colon) = rest.strip_prefix(':') else {
        return Ok(None);
    };

    Ok(Some((
        ArrayHeader {
            key,
            length,
            delimiter,
            fields,
            has_length_marker,
        },
        after_colon.to_string(),
    )))
}

/// Splits a `{...}` field list on comma, regardless of the array's data
/// delimiter, honoring quotes.
#[must_use]
pub fn parse_field_list(text: &str) -> Vec<String> {
    split_delimited(text, Delimiter::Comma)
        .into_iter()
        .map(|piece| {
            crate::quoting::strip_quotes(&piece).unwrap_or_else(|| piece.trim().to_string())
        })
        .collect()
}

/// Splits `text` (the portion of a line after a header's colon, or an
/// inline array's values) into raw value tokens by `delimiter`.
#[must_use]
pub fn parse_inline_values(text: &str, delimiter: Delimiter) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    split_delimited(text, delimiter)
}
