use conf_lines_core::SourceLine;

use super::RuleResult;
use crate::engine::{Translation, INDENT};
use crate::error::DirectiveError;
use crate::fragments::FragmentGroup;

pub fn global(tx: &mut Translation<'_>, _line: &SourceLine) -> RuleResult {
    tx.emit("# Global settings (partially converted)");
    Ok(())
}

pub fn defaults(tx: &mut Translation<'_>, _line: &SourceLine) -> RuleResult {
    tx.emit("# Defaults settings (partially converted)");
    Ok(())
}

/// `frontend <name>` opens an `http` context. Its closer is owed, not emitted here.
pub fn frontend(tx: &mut Translation<'_>, line: &SourceLine) -> RuleResult {
    let name = line
        .token(1)
        .ok_or_else(|| DirectiveError::missing("frontend", "name"))?;
    tx.open_block(format!("http {{ # Frontend: {name}"));
    Ok(())
}

pub fn backend(tx: &mut Translation<'_>, line: &SourceLine) -> RuleResult {
    let name = line
        .token(1)
        .ok_or_else(|| DirectiveError::missing("backend", "name"))?;
    tx.open_block(format!("upstream {name} {{"));
    Ok(())
}

pub fn listen_stats(tx: &mut Translation<'_>, _line: &SourceLine) -> RuleResult {
    tx.defer(FragmentGroup::StatsBlock, format!("{INDENT}location /stats {{"));
    tx.defer(FragmentGroup::StatsBlock, format!("{INDENT}{INDENT}stub_status;"));
    tx.defer(FragmentGroup::StatsBlock, format!("{INDENT}}}"));
    Ok(())
}

pub fn unrecognized(tx: &mut Translation<'_>, line: &SourceLine) -> RuleResult {
    tx.emit(format!("# Unsupported setting: {}", line.text));
    Ok(())
}
