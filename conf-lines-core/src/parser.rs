use std::fs;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::line::SourceLine;

/// Errors that can occur while reading configuration text into [`SourceLine`]s.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input bytes were not valid UTF-8.
    #[error("invalid UTF-8 in configuration text: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// Failed to read input file or stream.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Split configuration text into trimmed statements, dropping blanks and `#` comments.
///
/// Statements are separated by `\n`, `\r\n`, a lone `\r`, vertical tab, form
/// feed, the ASCII file/group/record separators, NEL and the Unicode line and
/// paragraph separators. Line numbers count every separator.
pub fn parse(text: &str) -> Vec<SourceLine> {
    split_lines(text)
        .into_iter()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            Some(SourceLine::new(idx + 1, trimmed))
        })
        .collect()
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Parse raw bytes, rejecting invalid UTF-8.
pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<SourceLine>, ParseError> {
    Ok(parse(std::str::from_utf8(bytes)?))
}

/// Read and parse a configuration file.
pub fn parse_file(path: &Path) -> Result<Vec<SourceLine>, ParseError> {
    let bytes = fs::read(path)?;
    parse_bytes(&bytes)
}

/// Read a stream to the end and parse it.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Vec<SourceLine>, ParseError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::{parse, parse_bytes, split_lines, ParseError};

    #[test]
    fn drops_blank_and_comment_lines() {
        let lines = parse("global\n\n   # a comment\n    maxconn 4096\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].number, 1);
        assert_eq!(lines[1].number, 4);
        assert_eq!(lines[1].text, "maxconn 4096");
    }

    #[test]
    fn handles_crlf_input() {
        let lines = parse("frontend web\r\n    bind *:80\r\n");
        assert_eq!(lines[0].text, "frontend web");
        assert_eq!(lines[1].text, "bind *:80");
    }

    #[test]
    fn splits_on_every_line_separator() {
        let lines = parse("global\rmaxconn 10\x0bdefaults\x0ctimeout connect 5s\u{2028}mode http");
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["global", "maxconn 10", "defaults", "timeout connect 5s", "mode http"]
        );
        assert_eq!(lines[4].number, 5);
    }

    #[test]
    fn crlf_counts_as_one_break() {
        assert_eq!(split_lines("a\r\nb\r\rc\n"), vec!["a", "b", "", "c"]);
        assert_eq!(split_lines(""), Vec::<&str>::new());
        assert_eq!(split_lines("\u{85}x"), vec!["", "x"]);
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = parse_bytes(&[0x66, 0xff, 0x0a]).expect_err("invalid utf-8");
        assert!(matches!(err, ParseError::Utf8(_)));
    }
}
