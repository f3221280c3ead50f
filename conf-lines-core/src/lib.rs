//! Generic reading and writing primitives for line-oriented, directive-based
//! configuration files (HAProxy, nginx and similar).

pub mod line;
pub mod parser;
pub mod writer;

pub use line::SourceLine;
pub use parser::{parse, parse_bytes, parse_file, parse_reader, ParseError};
pub use writer::{write, write_file, WriteError};
