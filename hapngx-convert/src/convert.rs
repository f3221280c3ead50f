//! `convert` subcommand.
//!
//! Reads the HAProxy config, runs the translation engine with the requested
//! assembly policy and writes the nginx text to a file or stdout. Translation
//! itself never fails; this layer only fails on I/O, on an attempt to overwrite
//! the input, or in `--strict` mode when malformed directives were found.

use std::io::IsTerminal;
use std::path::Path;

use anyhow::{bail, Context, Result};
use conf_lines_core::write_file;
use hapngx_convert::conversion_summary::{
    render as render_conversion_summary, summarize as summarize_conversion, ConversionSummary,
};
use hapngx_convert::known_mappings::{default_mappings, load_mappings, DirectiveMappings};
use hapngx_convert::report::{render_diagnostics, render_text};
use hapngx_convert::{BlockClosing, Diagnostic, TranslateOptions, TranslationStats, Translator};
use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::{CloseBlocks, ConvertArgs, OutputFormat};
use crate::path_guard::ensure_output_not_input;
use crate::source::read_source;

/// Execute the `convert` workflow.
///
/// # Errors
///
/// Returns error if:
/// - The output path resolves to the input file
/// - The input cannot be read or is not UTF-8
/// - The output file cannot be written
/// - `--strict` is set and at least one directive was malformed
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    if let Some(out) = &args.output {
        ensure_output_not_input(out, &args.input)?;
    }

    let lines = read_source(&args.input)?;
    let (mappings, mappings_source) = resolve_mappings(args.mappings_file.as_deref());
    debug!(source = %mappings_source, "using directive mappings");

    let options = TranslateOptions {
        block_closing: match args.close_blocks {
            CloseBlocks::Single => BlockClosing::Single,
            CloseBlocks::PerBlock => BlockClosing::PerBlock,
        },
        emit_ssl: args.emit_ssl,
        keep_time_units: args.keep_time_units,
    };
    let result = Translator::new(mappings, options).translate_lines(&lines);
    let text = result.text();
    let summary = summarize_conversion(&result.stats);

    if args.strict && !result.diagnostics.is_empty() {
        eprintln!("{}", render_diagnostics(&result.diagnostics));
        bail!(
            "strict mode failed: {} malformed directive(s)",
            result.diagnostics.len()
        );
    }

    if let Some(out) = &args.output {
        write_file(&text, out)
            .with_context(|| format!("failed to write output config {}", out.display()))?;
        println!("{}", render_conversion_summary(summary));
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => {
            if std::io::stdout().is_terminal() {
                println!("{}", render_text(&text));
            } else {
                println!("{text}");
            }
            if args.summary {
                eprintln!("{}", render_conversion_summary(summary));
            }
        }
        OutputFormat::Json => {
            let report = ConvertReport {
                output: text,
                summary,
                stats: result.stats,
                diagnostics: result.diagnostics,
                mappings: mappings_source,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// Resolve mapping tables from `--mappings-file` or the embedded defaults.
///
/// A file that cannot be loaded is reported and the embedded tables are used.
fn resolve_mappings(path: Option<&Path>) -> (DirectiveMappings, String) {
    let Some(path) = path else {
        return (default_mappings(), "embedded".to_string());
    };
    match load_mappings(path) {
        Ok(mappings) => (mappings, format!("file:{}", path.display())),
        Err(err) => {
            warn!("{err}; using embedded mappings");
            (default_mappings(), "embedded".to_string())
        }
    }
}

#[derive(Debug, Serialize)]
struct ConvertReport {
    output: String,
    summary: ConversionSummary,
    stats: TranslationStats,
    diagnostics: Vec<Diagnostic>,
    mappings: String,
}
