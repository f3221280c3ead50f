use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use conf_lines_core::{parse_file, parse_reader, SourceLine};

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read retained source lines from a file, or stdin for `-`.
pub fn read_source(path: &Path) -> Result<Vec<SourceLine>> {
    if is_stdin(path) {
        return parse_reader(io::stdin().lock()).context("failed to read config from stdin");
    }
    parse_file(path).with_context(|| format!("failed to read {}", path.display()))
}
