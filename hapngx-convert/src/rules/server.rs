use std::sync::LazyLock;

use conf_lines_core::SourceLine;
use regex::Regex;

use super::RuleResult;
use crate::classify::SERVER_RE;
use crate::engine::{Translation, INDENT};
use crate::error::DirectiveError;
use crate::fragments::FragmentGroup;

static HEALTH_CHECK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(rise|fall|inter)\s+(\S+)").unwrap());

/// `server <name> <address> [options]` → `server <address>;  # <name>`.
///
/// With `check`, the directive gains `health_check` and each rise/fall/inter
/// setting is noted immediately in the output rather than deferred.
pub fn server(tx: &mut Translation<'_>, line: &SourceLine) -> RuleResult {
    let caps = SERVER_RE
        .captures(&line.text)
        .ok_or_else(|| DirectiveError::missing("server", "address"))?;
    let name = &caps[1];
    let address = &caps[2];
    let options = caps[3].trim();

    let mut directive = format!("{INDENT}server {address};  # {name}");
    if options.contains("check") {
        directive = directive.replace(';', " health_check;");
        for hc in HEALTH_CHECK_RE.captures_iter(options) {
            tx.emit(format!("{INDENT}# Health check {}: {}", &hc[1], &hc[2]));
        }
    }
    tx.defer(FragmentGroup::ServerDirectives, directive);
    Ok(())
}
