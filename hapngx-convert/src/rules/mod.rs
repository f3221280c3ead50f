//! Per-kind rewrite rules.
//!
//! Every rule checks the tokens it needs before writing anything, so a
//! [`DirectiveError`] never leaves a half-emitted fragment behind.

use conf_lines_core::SourceLine;

use crate::classify::DirectiveKind;
use crate::engine::Translation;
use crate::error::DirectiveError;

pub mod bind;
pub mod condition;
pub mod markers;
pub mod scalar;
pub mod server;

type RuleResult = Result<(), DirectiveError>;

/// Run the rewrite rule for an already-classified line.
pub(crate) fn apply(kind: DirectiveKind, line: &SourceLine, tx: &mut Translation<'_>) -> RuleResult {
    match kind {
        DirectiveKind::GlobalMarker => markers::global(tx, line),
        DirectiveKind::LogStatement => scalar::log(tx, line),
        DirectiveKind::Maxconn => scalar::maxconn(tx, line),
        DirectiveKind::DefaultsMarker => markers::defaults(tx, line),
        DirectiveKind::Timeout => scalar::timeout(tx, line),
        DirectiveKind::HttplogOption => scalar::httplog(tx, line),
        DirectiveKind::FrontendMarker => markers::frontend(tx, line),
        DirectiveKind::BackendMarker => markers::backend(tx, line),
        DirectiveKind::Bind => bind::bind(tx, line),
        DirectiveKind::Acl => condition::acl(tx, line),
        DirectiveKind::UseBackend => condition::use_backend(tx, line),
        DirectiveKind::Server => server::server(tx, line),
        DirectiveKind::StickTable => scalar::stick_table(tx, line),
        DirectiveKind::Balance => scalar::balance(tx, line),
        DirectiveKind::ListenStats => markers::listen_stats(tx, line),
        DirectiveKind::Unrecognized => markers::unrecognized(tx, line),
    }
}
