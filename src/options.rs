//! Configuration records for TOON encoding and decoding.
//!
//! [`EncodeOptions`] and [`DecodeOptions`] are plain value records, not
//! builder state: there is no singleton or ambient configuration, and
//! both are cheap to construct and pass by value.

/// Delimiter choice for inline arrays and tabular rows.
///
/// - **Comma**: default, most compact.
/// - **Tab**: best for TSV-like output.
/// - **Pipe**: readable for markdown-style tables.
///
/// # Examples
///
/// ```rust
/// use toon::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_char(), '\t');
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// The header suffix emitted for non-default delimiters, `None` for
    /// the default comma.
    #[must_use]
    pub const fn header_suffix(&self) -> Option<char> {
        match self {
            Delimiter::Comma => None,
            Delimiter::Tab => Some('\t'),
            Delimiter::Pipe => Some('|'),
        }
    }

    /// Recognizes a delimiter from its header-suffix character.
    #[must_use]
    pub const fn from_suffix(c: char) -> Option<Self> {
        match c {
            '|' => Some(Delimiter::Pipe),
            '\t' => Some(Delimiter::Tab),
            _ => None,
        }
    }
}

/// Options controlling how a [`crate::Value`] is encoded into TOON text.
///
/// # Examples
///
/// ```rust
/// use toon::{EncodeOptions, Delimiter};
///
/// let options = EncodeOptions::new()
///     .with_delimiter(Delimiter::Pipe)
///     .with_length_marker('#')
///     .with_indent(4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    pub indent: usize,
    pub delimiter: Delimiter,
    pub length_marker: Option<char>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 2,
            delimiter: Delimiter::default(),
            length_marker: None,
        }
    }
}

impl EncodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_length_marker(mut self, marker: char) -> Self {
        self.length_marker = Some(marker);
        self
    }
}

/// Options controlling how TOON text is decoded into a [`crate::Value`].
///
/// `strict` defaults to `true`: the intended use (LLM prompt payloads)
/// benefits from early detection of truncated or malformed input.
///
/// # Examples
///
/// ```rust
/// use toon::DecodeOptions;
///
/// let lenient = DecodeOptions::new().with_strict(false);
/// assert!(!lenient.strict);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    pub indent: usize,
    pub strict: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            indent: 2,
            strict: true,
        }
    }
}

impl DecodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_encode_options() {
        let opts = EncodeOptions::default();
        assert_eq!(opts.indent, 2);
        assert_eq!(opts.delimiter, Delimiter::Comma);
        assert_eq!(opts.length_marker, None);
    }

    #[test]
    fn default_decode_options() {
        let opts = DecodeOptions::default();
        assert_eq!(opts.indent, 2);
        assert!(opts.strict);
    }

    #[test]
    fn delimiter_suffix_roundtrip() {
        for d in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe] {
            if let Some(suffix) = d.header_suffix() {
                assert_eq!(Delimiter::from_suffix(suffix), Some(d));
            }
        }
    }
}
