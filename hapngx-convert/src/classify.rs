//! Priority-ordered directive classification.
//!
//! Each retained HAProxy line is tested against [`CLASSIFIERS`] from top to
//! bottom and takes the kind of the first predicate that accepts it. Several
//! predicates are plain substring tests, so the order is load-bearing: any line
//! containing `log` (including `option httplog`) is a [`DirectiveKind::LogStatement`]
//! before the httplog rule is ever consulted.

use std::fmt::{self, Display, Formatter};
use std::sync::LazyLock;

use conf_lines_core::SourceLine;
use regex::Regex;
use serde::Serialize;

/// Tag assigned to a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectiveKind {
    GlobalMarker,
    LogStatement,
    Maxconn,
    DefaultsMarker,
    Timeout,
    HttplogOption,
    FrontendMarker,
    BackendMarker,
    Bind,
    Acl,
    UseBackend,
    Server,
    StickTable,
    Balance,
    ListenStats,
    Unrecognized,
}

impl DirectiveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DirectiveKind::GlobalMarker => "global-marker",
            DirectiveKind::LogStatement => "log-statement",
            DirectiveKind::Maxconn => "maxconn",
            DirectiveKind::DefaultsMarker => "defaults-marker",
            DirectiveKind::Timeout => "timeout",
            DirectiveKind::HttplogOption => "httplog-option",
            DirectiveKind::FrontendMarker => "frontend-marker",
            DirectiveKind::BackendMarker => "backend-marker",
            DirectiveKind::Bind => "bind",
            DirectiveKind::Acl => "acl",
            DirectiveKind::UseBackend => "use-backend",
            DirectiveKind::Server => "server",
            DirectiveKind::StickTable => "stick-table",
            DirectiveKind::Balance => "balance",
            DirectiveKind::ListenStats => "listen-stats",
            DirectiveKind::Unrecognized => "unrecognized",
        }
    }
}

impl Display for DirectiveKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) static USE_BACKEND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^use_backend\s+(\S+)\s+if\s+(.+)").unwrap());
pub(crate) static SERVER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^server\s+(\S+)\s+(\S+)(.*)").unwrap());

type Predicate = fn(&str) -> bool;

/// Classification table in priority order. `Unrecognized` is the implicit fallback.
pub static CLASSIFIERS: &[(DirectiveKind, Predicate)] = &[
    (DirectiveKind::GlobalMarker, |l: &str| l.starts_with("global")),
    (DirectiveKind::LogStatement, |l: &str| l.contains("log")),
    (DirectiveKind::Maxconn, |l: &str| l.contains("maxconn")),
    (DirectiveKind::DefaultsMarker, |l: &str| l.starts_with("defaults")),
    (DirectiveKind::Timeout, |l: &str| l.contains("timeout")),
    (DirectiveKind::HttplogOption, |l: &str| {
        l.contains("option") && l.contains("httplog")
    }),
    (DirectiveKind::FrontendMarker, |l: &str| l.starts_with("frontend")),
    (DirectiveKind::BackendMarker, |l: &str| l.starts_with("backend")),
    (DirectiveKind::Bind, |l: &str| l.starts_with("bind")),
    // Keyword match only; a missing condition is reported by the rule.
    (DirectiveKind::Acl, |l: &str| has_keyword(l, "acl")),
    (DirectiveKind::UseBackend, |l: &str| USE_BACKEND_RE.is_match(l)),
    (DirectiveKind::Server, |l: &str| has_keyword(l, "server")),
    (DirectiveKind::StickTable, |l: &str| l.starts_with("stick-table")),
    (DirectiveKind::Balance, |l: &str| l.starts_with("balance")),
    (DirectiveKind::ListenStats, |l: &str| l.starts_with("listen stats")),
];

/// Classify one retained line.
pub fn classify(line: &SourceLine) -> DirectiveKind {
    classify_text(&line.text)
}

/// Classify trimmed statement text.
pub fn classify_text(text: &str) -> DirectiveKind {
    CLASSIFIERS
        .iter()
        .find(|(_, matches)| matches(text))
        .map(|(kind, _)| *kind)
        .unwrap_or(DirectiveKind::Unrecognized)
}

fn has_keyword(line: &str, keyword: &str) -> bool {
    line.split_whitespace().next() == Some(keyword)
}
