use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// One retained configuration statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLine {
    /// 1-based line number in the original input.
    pub number: usize,
    /// Statement text with surrounding whitespace removed.
    pub text: String,
}

impl SourceLine {
    /// Create a new line, trimming surrounding whitespace.
    pub fn new(number: usize, text: impl AsRef<str>) -> Self {
        Self {
            number,
            text: text.as_ref().trim().to_string(),
        }
    }

    /// Whitespace-separated tokens of the statement.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    /// Return the token at `idx`, if present.
    pub fn token(&self, idx: usize) -> Option<&str> {
        self.tokens().nth(idx)
    }

    /// Remaining text after skipping `count` tokens, with leading whitespace removed.
    ///
    /// Returns `None` when the line has `count` tokens or fewer.
    pub fn rest_after(&self, count: usize) -> Option<&str> {
        let mut rest = self.text.as_str();
        for _ in 0..count {
            rest = rest.trim_start();
            let end = rest.find(char::is_whitespace)?;
            rest = &rest[end..];
        }
        let rest = rest.trim_start();
        if rest.is_empty() {
            None
        } else {
            Some(rest)
        }
    }
}

impl Display for SourceLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
