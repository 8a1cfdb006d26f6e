//! Line scanner: the first decode stage.
//!
//! Splits input text into non-blank [`ParsedLine`]s (tracking indentation
//! depth) and a side list of [`BlankLineInfo`], so the decoder can later
//! check whether a blank line fell inside a tabular row block without the
//! parser having to special-case blank lines itself.

use crate::error::{Error, Result};
use crate::options::DecodeOptions;

/// A non-blank line of TOON text, with indentation already resolved to a
/// nesting depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub raw: String,
    pub content: String,
    pub indent: usize,
    pub depth: usize,
    pub line_number: usize,
}

/// A blank (empty or whitespace-only) line, recorded so strict-mode
/// decoding can detect one falling inside a row block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankLineInfo {
    pub line_number: usize,
    pub indent: usize,
    pub depth: usize,
}

/// Output of a full scan: the non-blank line stream plus the blanks that
/// were elided from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub lines: Vec<ParsedLine>,
    pub blanks: Vec<BlankLineInfo>,
}

impl ScanResult {
    /// Line numbers of any blank line with `start < line_number < end`.
    #[must_use]
    pub fn blanks_between(&self, start: usize, end: usize) -> Vec<usize> {
        self.blanks
            .iter()
            .filter(|b| b.line_number > start && b.line_number < end)
            .map(|b| b.line_number)
            .collect()
    }
}

/// Splits `text` into lines, computing indent/depth for each, per
/// strict-mode rules when `options.strict` is set.
pub fn scan(text: &str, options: &DecodeOptions) -> Result<ScanResult> {
    let mut lines = Vec::new();
    let mut blanks = Vec::new();

    for (i, raw_line) in text.split('\n').enumerate() {
        let line_number = i + 1;
        let raw = raw_line.strip_suffix('\r').unwrap_or(raw_line);

        let indent = raw.chars().take_while(|c| *c == ' ').count();
        let content = &raw[indent..];

        if content.trim().is_empty() {
            let depth = if options.indent == 0 {
                0
            } else {
                indent / options.indent
            };
            blanks.push(BlankLineInfo {
                line_number,
                indent,
                depth,
            });
            continue;
        }

        if options.strict {
            let leading = &raw[..indent];
            if leading.contains('\t') {
                return Err(Error::indentation(
                    line_number,
                    "leading whitespace contains a tab character",
                ));
            }
            if options.indent != 0 && indent % options.indent != 0 {
                return Err(Error::indentation(
                    line_number,
                    format!(
                        "indent of {indent} spaces is not a multiple of {}",
                        options.indent
                    ),
                ));
            }
        }

        let depth = if options.indent == 0 {
            0
        } else {
            indent / options.indent
        };

        lines.push(ParsedLine {
            raw: raw.to_string(),
            content: content.to_string(),
            indent,
            depth,
            line_number,
        });
    }

    Ok(ScanResult { lines, blanks })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_computes_depth() {
        let result = scan("a: 1\n  b: 2\n", &DecodeOptions::default()).unwrap();
        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.lines[0].depth, 0);
        assert_eq!(result.lines[1].depth, 1);
        assert_eq!(result.lines[1].content, "b: 2");
    }

    #[test]
    fn blank_lines_are_recorded_separately() {
        let result = scan("a: 1\n\nb: 2\n", &DecodeOptions::default()).unwrap();
        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.blanks.len(), 1);
        assert_eq!(result.blanks[0].line_number, 2);
    }

    #[test]
    fn strict_rejects_tab_indent() {
        let result = scan("a:\n\tb: 1\n", &DecodeOptions::default());
        assert!(matches!(result, Err(Error::IndentationError { line: 2, .. })));
    }

    #[test]
    fn strict_rejects_non_multiple_indent() {
        let result = scan("a:\n   b: 1\n", &DecodeOptions::default());
        assert!(matches!(result, Err(Error::IndentationError { line: 2, .. })));
    }

    #[test]
    fn lenient_tolerates_odd_indent() {
        let opts = DecodeOptions::default().with_strict(false);
        let result = scan("a:\n   b: 1\n", &opts).unwrap();
        assert_eq!(result.lines.len(), 2);
    }

    #[test]
    fn strips_trailing_cr() {
        let result = scan("a: 1\r\nb: 2\r\n", &DecodeOptions::default()).unwrap();
        assert_eq!(result.lines[0].content, "a: 1");
        assert_eq!(result.lines[1].content, "b: 2");
    }
}
