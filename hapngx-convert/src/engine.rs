//! Single-pass HAProxy → nginx translation.
//!
//! The scan walks retained source lines once. Each line is classified, then its
//! rule either appends straight to the output sequence or to one of the
//! [`DeferredFragments`] groups. After the scan the groups are flushed in a
//! fixed order and the closing brace(s) appended.
//!
//! All state lives in a [`Translation`] owned by a single call, so one
//! [`Translator`] can serve any number of concurrent callers.

use std::collections::BTreeMap;

use conf_lines_core::{parse, SourceLine};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::classify::{classify, DirectiveKind};
use crate::error::Diagnostic;
use crate::fragments::{
    DeferredFragments, FragmentGroup, ASSEMBLY_ORDER, ASSEMBLY_ORDER_WITH_SSL,
};
use crate::known_mappings::{default_mappings, DirectiveMappings};
use crate::rules;

/// Indentation used for lines nested inside an emitted block.
pub const INDENT: &str = "    ";

/// How many closing braces end the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockClosing {
    /// Exactly one `}` regardless of how many blocks were opened.
    #[default]
    Single,
    /// One `}` per `http {` / `upstream {` opener, never fewer than one.
    PerBlock,
}

/// Knobs for the output-assembly policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TranslateOptions {
    pub block_closing: BlockClosing,
    /// Flush SSL directives collected from `bind` lines after the server list.
    pub emit_ssl: bool,
    /// Pass timeout values that already carry an nginx unit (`10s`, `1m`)
    /// through unchanged instead of appending `ms`.
    pub keep_time_units: bool,
}

/// Counters gathered during one translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslationStats {
    /// Retained (non-blank, non-comment) source lines.
    pub lines: usize,
    /// Output lines written during the scan.
    pub emitted: usize,
    /// Output lines accumulated in deferred groups.
    pub deferred: usize,
    /// SSL lines withheld from the output.
    pub withheld_ssl: usize,
    pub unsupported: usize,
    pub malformed: usize,
    pub blocks_opened: usize,
    pub closers: usize,
    pub by_kind: BTreeMap<DirectiveKind, usize>,
    /// Lines of each kind that were rejected as malformed.
    pub malformed_by_kind: BTreeMap<DirectiveKind, usize>,
}

impl TranslationStats {
    /// Lines of `kind` whose rewrite rule succeeded.
    pub fn rewritten(&self, kind: DirectiveKind) -> usize {
        let seen = self.by_kind.get(&kind).copied().unwrap_or(0);
        let rejected = self.malformed_by_kind.get(&kind).copied().unwrap_or(0);
        seen - rejected
    }
}

/// Rendered target configuration plus what happened while producing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationOutput {
    pub lines: Vec<String>,
    pub stats: TranslationStats,
    pub diagnostics: Vec<Diagnostic>,
}

impl TranslationOutput {
    /// Output lines joined with `\n`; always ends with a `}` line.
    pub fn text(&self) -> String {
        conf_lines_core::write(&self.lines)
    }
}

/// Reusable translator holding immutable mappings and options.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    mappings: DirectiveMappings,
    options: TranslateOptions,
}

impl Translator {
    pub fn new(mappings: DirectiveMappings, options: TranslateOptions) -> Self {
        Self { mappings, options }
    }

    pub fn with_options(options: TranslateOptions) -> Self {
        Self::new(default_mappings(), options)
    }

    pub fn mappings(&self) -> &DirectiveMappings {
        &self.mappings
    }

    pub fn options(&self) -> TranslateOptions {
        self.options
    }

    /// Translate a whole configuration text.
    pub fn translate(&self, text: &str) -> TranslationOutput {
        self.translate_lines(&parse(text))
    }

    /// Translate lines already read by [`conf_lines_core`].
    pub fn translate_lines(&self, lines: &[SourceLine]) -> TranslationOutput {
        let mut translation = Translation::new(&self.mappings, self.options);
        for line in lines {
            translation.process(line);
        }
        translation.finish()
    }
}

/// Translate with the built-in mappings and default options.
pub fn translate(text: &str) -> String {
    Translator::default().translate(text).text()
}

/// Accumulators for one invocation.
#[derive(Debug)]
pub struct Translation<'m> {
    mappings: &'m DirectiveMappings,
    options: TranslateOptions,
    output: Vec<String>,
    fragments: DeferredFragments,
    stats: TranslationStats,
    diagnostics: Vec<Diagnostic>,
}

impl<'m> Translation<'m> {
    fn new(mappings: &'m DirectiveMappings, options: TranslateOptions) -> Self {
        Self {
            mappings,
            options,
            output: Vec::new(),
            fragments: DeferredFragments::default(),
            stats: TranslationStats::default(),
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn mappings(&self) -> &'m DirectiveMappings {
        self.mappings
    }

    pub(crate) fn options(&self) -> TranslateOptions {
        self.options
    }

    /// Append directly to the output sequence.
    pub(crate) fn emit(&mut self, line: impl Into<String>) {
        self.stats.emitted += 1;
        self.output.push(line.into());
    }

    /// Append to a deferred group.
    pub(crate) fn defer(&mut self, group: FragmentGroup, line: impl Into<String>) {
        self.stats.deferred += 1;
        self.fragments.push(group, line);
    }

    /// Emit an opener that a closing brace is owed for.
    pub(crate) fn open_block(&mut self, line: impl Into<String>) {
        self.stats.blocks_opened += 1;
        self.emit(line);
    }

    fn process(&mut self, line: &SourceLine) {
        let kind = classify(line);
        debug!(line = line.number, %kind, text = %line.text, "classified directive");
        self.stats.lines += 1;
        *self.stats.by_kind.entry(kind).or_default() += 1;
        if kind == DirectiveKind::Unrecognized {
            self.stats.unsupported += 1;
        }

        if let Err(err) = rules::apply(kind, line, self) {
            warn!(line = line.number, %kind, error = %err, "malformed directive");
            self.emit(format!("# Malformed directive ({err}): {}", line.text));
            self.stats.malformed += 1;
            *self.stats.malformed_by_kind.entry(kind).or_default() += 1;
            self.diagnostics.push(Diagnostic {
                line: line.number,
                kind,
                message: err.to_string(),
                text: line.text.clone(),
            });
        }
    }

    fn finish(self) -> TranslationOutput {
        let Translation {
            options,
            mut output,
            fragments,
            mut stats,
            diagnostics,
            ..
        } = self;

        let order: &[FragmentGroup] = if options.emit_ssl {
            &ASSEMBLY_ORDER_WITH_SSL
        } else {
            stats.withheld_ssl = fragments.get(FragmentGroup::SslDirectives).len();
            &ASSEMBLY_ORDER
        };
        if stats.withheld_ssl > 0 {
            debug!(count = stats.withheld_ssl, "withholding ssl directives from output");
        }
        fragments.flush_into(order, &mut output);

        stats.closers = match options.block_closing {
            BlockClosing::Single => 1,
            BlockClosing::PerBlock => stats.blocks_opened.max(1),
        };
        output.extend(std::iter::repeat("}".to_string()).take(stats.closers));

        info!(
            lines = stats.lines,
            unsupported = stats.unsupported,
            malformed = stats.malformed,
            "translation finished"
        );
        TranslationOutput {
            lines: output,
            stats,
            diagnostics,
        }
    }
}

#[cfg(test)]
impl<'m> Translation<'m> {
    pub(crate) fn for_test(mappings: &'m DirectiveMappings) -> Self {
        Self::new(mappings, TranslateOptions::default())
    }

    pub(crate) fn output(&self) -> &[String] {
        &self.output
    }
}
