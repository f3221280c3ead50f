use conf_lines_core::SourceLine;

use super::RuleResult;
use crate::engine::{Translation, INDENT};
use crate::error::DirectiveError;
use crate::fragments::FragmentGroup;

pub fn log(tx: &mut Translation<'_>, line: &SourceLine) -> RuleResult {
    tx.emit(format!(
        "{INDENT}# Logging is not directly supported in Nginx: {}",
        line.text
    ));
    Ok(())
}

pub fn maxconn(tx: &mut Translation<'_>, line: &SourceLine) -> RuleResult {
    let limit = line
        .token(1)
        .ok_or_else(|| DirectiveError::missing("maxconn", "connection limit"))?;
    tx.emit(format!("{INDENT}worker_connections {limit};"));
    Ok(())
}

/// `timeout <key> <value>`: mapped keys become nginx timeout directives.
pub fn timeout(tx: &mut Translation<'_>, line: &SourceLine) -> RuleResult {
    let key = line
        .token(1)
        .ok_or_else(|| DirectiveError::missing("timeout", "timeout name"))?;
    let Some(directive) = tx.mappings().timeout_directive(key) else {
        tx.emit(format!("{INDENT}# Unsupported timeout setting: {}", line.text));
        return Ok(());
    };
    let value = line
        .token(2)
        .ok_or_else(|| DirectiveError::missing("timeout", "duration"))?;
    let value = timeout_value(value, tx.options().keep_time_units);
    tx.emit(format!("{INDENT}{directive} {value};"));
    Ok(())
}

/// Strip a trailing `ms` and append `ms`.
///
/// With `keep_units`, values already carrying another nginx time unit
/// (`10s`, `1m`) pass through instead.
fn timeout_value(raw: &str, keep_units: bool) -> String {
    let bare = raw.strip_suffix("ms").unwrap_or(raw);
    if keep_units && has_time_unit(bare) {
        bare.to_string()
    } else {
        format!("{bare}ms")
    }
}

fn has_time_unit(value: &str) -> bool {
    match value.char_indices().last() {
        Some((idx, unit)) if idx > 0 && matches!(unit, 's' | 'm' | 'h' | 'd') => {
            value[..idx].chars().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}

pub fn httplog(tx: &mut Translation<'_>, _line: &SourceLine) -> RuleResult {
    tx.emit(format!("{INDENT}access_log /var/log/nginx/access.log;"));
    Ok(())
}

pub fn balance(tx: &mut Translation<'_>, line: &SourceLine) -> RuleResult {
    let method = line
        .token(1)
        .ok_or_else(|| DirectiveError::missing("balance", "method"))?;
    let rendered = if tx.mappings().is_supported_balance(method) {
        format!("{INDENT}{method};")
    } else {
        format!("{INDENT}# Unsupported balance method: {method}")
    };
    tx.defer(FragmentGroup::UpstreamOptions, rendered);
    Ok(())
}

pub fn stick_table(tx: &mut Translation<'_>, line: &SourceLine) -> RuleResult {
    tx.defer(
        FragmentGroup::StickTableSettings,
        format!(
            "{INDENT}# Stick-table settings are not supported in Nginx: {}",
            line.text
        ),
    );
    Ok(())
}
