use serde::Serialize;

use crate::classify::DirectiveKind;
use crate::engine::TranslationStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub lines: usize,
    pub translated: usize,
    pub deferred: usize,
    pub unsupported: usize,
    pub malformed: usize,
    pub upstreams: usize,
    pub servers: usize,
    pub acls: usize,
    pub withheld_ssl: usize,
}

/// Per-kind counts only include lines that were actually rewritten, so a
/// nameless `backend` does not count as an upstream.
pub fn summarize(stats: &TranslationStats) -> ConversionSummary {
    ConversionSummary {
        lines: stats.lines,
        translated: stats.lines - stats.unsupported - stats.malformed,
        deferred: stats.deferred,
        unsupported: stats.unsupported,
        malformed: stats.malformed,
        upstreams: stats.rewritten(DirectiveKind::BackendMarker),
        servers: stats.rewritten(DirectiveKind::Server),
        acls: stats.rewritten(DirectiveKind::Acl),
        withheld_ssl: stats.withheld_ssl,
    }
}

pub fn render(summary: ConversionSummary) -> String {
    format!(
        "convert_summary lines={} translated={} deferred={} unsupported={} malformed={} upstreams={} servers={} acls={} withheld_ssl={}",
        summary.lines,
        summary.translated,
        summary.deferred,
        summary.unsupported,
        summary.malformed,
        summary.upstreams,
        summary.servers,
        summary.acls,
        summary.withheld_ssl
    )
}
