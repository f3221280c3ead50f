use conf_lines_core::SourceLine;
use serde::Serialize;

use crate::classify::{classify, DirectiveKind};

/// Classification of one retained source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectEntry {
    pub line: usize,
    pub kind: DirectiveKind,
    pub text: String,
}

/// Classify every line without translating anything.
pub fn inspect(lines: &[SourceLine]) -> Vec<InspectEntry> {
    lines
        .iter()
        .map(|line| InspectEntry {
            line: line.number,
            kind: classify(line),
            text: line.text.clone(),
        })
        .collect()
}
