use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while writing rendered configuration text.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to write output file.
    #[error("failed to write configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// Join rendered lines with `\n`. No trailing newline is added.
pub fn write<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out
}

/// Write rendered text to `path`, terminated by a single newline.
pub fn write_file(text: &str, path: &Path) -> Result<(), WriteError> {
    let mut body = text.to_string();
    if !body.ends_with('\n') {
        body.push('\n');
    }
    fs::write(path, body)?;
    Ok(())
}
