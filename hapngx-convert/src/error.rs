use serde::Serialize;
use thiserror::Error;

use crate::classify::DirectiveKind;

/// A recognized directive that lacks the tokens its rule needs.
///
/// Never aborts a translation: the engine renders it as a comment and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("{directive}: missing {expected}")]
    MissingToken {
        directive: &'static str,
        expected: &'static str,
    },
}

impl DirectiveError {
    pub(crate) fn missing(directive: &'static str, expected: &'static str) -> Self {
        DirectiveError::MissingToken {
            directive,
            expected,
        }
    }
}

/// A malformed line reported alongside the translated output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DirectiveKind,
    pub message: String,
    pub text: String,
}
