//! Token classification: quoting rules, escape/unescape, and number
//! recognition shared by the encoder and decoder.

use crate::options::Delimiter;

const RESERVED_LITERALS: [&str; 3] = ["null", "true", "false"];
const MUST_QUOTE_CHARS: [char; 10] = ['"', '\\', ',', '|', '\t', ':', '[', ']', '{', '}'];

/// Returns `true` if `s` must be wrapped in double quotes to be emitted
/// unambiguously, independent of which delimiter is active (field names
/// and values share the same must-quote set beyond the reserved set of
/// delimiter characters, per the grammar).
#[must_use]
pub fn needs_quotes(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if RESERVED_LITERALS.contains(&s) {
        return true;
    }
    if s.contains(|c: char| c.is_control()) {
        return true;
    }
    if s.contains(['#']) || s.contains(MUST_QUOTE_CHARS) {
        return true;
    }
    if looks_numeric(s) {
        return true;
    }
    false
}

/// Returns `true` if an unquoted `s` would be mistaken for a number on
/// decode, e.g. `"05"`, `"1e10"`, `"-3.5"`.
#[must_use]
pub fn looks_numeric(s: &str) -> bool {
    parse_int_token(s).is_some() || parse_float_token(s).is_some()
}

/// Decode-side number recognition: try a signed 64-bit integer first,
/// then a 64-bit float. Returns `None` if neither grammar matches.
#[must_use]
pub fn parse_int_token(s: &str) -> Option<i64> {
    if s.is_empty() {
        return None;
    }
    let bytes = s.as_bytes();
    let start = usize::from(bytes[0] == b'-' || bytes[0] == b'+');
    if start == bytes.len() {
        return None;
    }
    if !bytes[start..].iter().all(u8::is_ascii_digit) {
        return None;
    }
    s.parse::<i64>().ok()
}

#[must_use]
pub fn parse_float_token(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    let mut chars = s.chars().peekable();
    if matches!(chars.peek(), Some('+') | Some('-')) {
        chars.next();
    }
    let mut saw_digit = false;
    let mut saw_dot = false;
    let mut saw_exp = false;
    while let Some(&c) = chars.peek() {
        match c {
            '0'..='9' => {
                saw_digit = true;
                chars.next();
            }
            '.' if !saw_dot && !saw_exp => {
                saw_dot = true;
                chars.next();
            }
            'e' | 'E' if !saw_exp && saw_digit => {
                saw_exp = true;
                chars.next();
                if matches!(chars.peek(), Some('+') | Some('-')) {
                    chars.next();
                }
            }
            _ => return None,
        }
    }
    if !saw_digit {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Wraps `s` in double quotes, escaping the five-character escape
/// alphabet (`" \ \n \r \t`); every other byte is emitted as-is.
#[must_use]
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Emits `s` quoted if [`needs_quotes`] requires it, bare otherwise.
#[must_use]
pub fn encode_string(s: &str) -> String {
    if needs_quotes(s) {
        quote_string(s)
    } else {
        s.to_string()
    }
}

/// Unescapes the contents of a quoted token (quotes already stripped).
/// Any `\X` sequence outside the five-escape alphabet is left literal:
/// the backslash and `X` both survive.
#[must_use]
pub fn unescape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('"') => {
                out.push('"');
                chars.next();
            }
            Some('\\') => {
                out.push('\\');
                chars.next();
            }
            Some('n') => {
                out.push('\n');
                chars.next();
            }
            Some('r') => {
                out.push('\r');
                chars.next();
            }
            Some('t') => {
                out.push('\t');
                chars.next();
            }
            _ => out.push('\\'),
        }
    }
    out
}

/// Formats a float for encoding: shortest round-trip form, normalizes
/// `-0` to `0`.
#[must_use]
pub fn format_float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    f.to_string()
}

/// Returns `true` if `key` can be emitted unquoted as an object key or
/// array field name.
#[must_use]
pub fn is_valid_unquoted_key(key: &str) -> bool {
    !needs_quotes(key)
}

/// Splits `text` on `delimiter`, honoring double-quoted spans and
/// backslash escapes inside quotes, per the delimited-value splitter
/// state machine. Each piece is trimmed and returned verbatim (quotes
/// are not stripped here; callers feed pieces through
/// [`crate::decoder::decode_primitive_token`]).
#[must_use]
pub fn split_delimited(text: &str, delimiter: Delimiter) -> Vec<String> {
    let delim = delimiter.as_char();
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            current.push(c);
            if c == '\\' {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            } else if c == '"' {
                in_quotes = false;
            }
            continue;
        }
        if c == '"' {
            in_quotes = true;
            current.push(c);
        } else if c == delim {
            pieces.push(current.trim().to_string());
            current = String::new();
        } else {
            current.push(c);
        }
    }
    pieces.push(current.trim().to_string());
    pieces
}

/// If `tok` is a complete quoted string (starts with `"`, the matching
/// closing quote ends exactly at `tok`'s last byte), returns the
/// unescaped inner content. Otherwise returns `None`.
#[must_use]
pub fn strip_quotes(tok: &str) -> Option<String> {
    if !tok.starts_with('"') {
        return None;
    }
    let end = find_closing_quote(tok)?;
    if end != tok.len() {
        return None;
    }
    Some(unescape_string(&tok[1..end - 1]))
}

/// Finds the index just past the closing quote of a quoted span starting
/// at `s[0]` (which must be `"`), honoring backslash escapes. Returns
/// `None` if no closing quote is found.
#[must_use]
pub fn find_closing_quote(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'"') {
        return None;
    }
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_reserved_literals() {
        assert!(needs_quotes("null"));
        assert!(needs_quotes("true"));
        assert!(needs_quotes("false"));
    }

    #[test]
    fn quotes_empty_string() {
        assert!(needs_quotes(""));
    }

    #[test]
    fn quotes_numeric_looking_strings() {
        assert!(needs_quotes("42"));
        assert!(needs_quotes("-3.5"));
        assert!(needs_quotes("1e10"));
        assert!(needs_quotes("05"));
    }

    #[test]
    fn quotes_delimiter_characters() {
        for c in [',', '|', '\t', ':', '[', ']', '{', '}', '#', '"', '\\'] {
            assert!(needs_quotes(&format!("a{c}b")), "{c:?} should force quoting");
        }
    }

    #[test]
    fn bare_word_is_unquoted() {
        assert!(!needs_quotes("Alice"));
        assert!(!needs_quotes("admin"));
    }

    #[test]
    fn escape_roundtrip() {
        let original = "line1\nline2\ttab\"quote\\backslash\rcr";
        let quoted = quote_string(original);
        let inner = &quoted[1..quoted.len() - 1];
        assert_eq!(unescape_string(inner), original);
    }

    #[test]
    fn unknown_escape_left_literal() {
        assert_eq!(unescape_string("\\b"), "\\b");
        assert_eq!(unescape_string("\\u0041"), "\\u0041");
    }

    #[test]
    fn split_delimited_respects_quotes() {
        let pieces = split_delimited(r#"1,"a, b",3"#, Delimiter::Comma);
        assert_eq!(pieces, vec!["1", r#""a, b""#, "3"]);
    }

    #[test]
    fn format_float_trims_zeros() {
        assert_eq!(format_float(1.5), "1.5");
        assert_eq!(format_float(2.0), "2");
        assert_eq!(format_float(-0.0), "0");
    }
}
