//! ACL and `use_backend` rewriting.
//!
//! Conditions are rewritten by literal substitution only (see
//! [`DirectiveMappings::rewrite_condition`](crate::known_mappings::DirectiveMappings::rewrite_condition)),
//! so partial-word matches such as `!is_api` → `notis_api` are expected.

use conf_lines_core::SourceLine;

use super::RuleResult;
use crate::classify::USE_BACKEND_RE;
use crate::engine::{Translation, INDENT};
use crate::error::DirectiveError;
use crate::fragments::FragmentGroup;

/// `acl <name> <condition>` → `set $acl_<name> "<condition>";`
pub fn acl(tx: &mut Translation<'_>, line: &SourceLine) -> RuleResult {
    let (Some(name), Some(raw)) = (line.token(1), line.rest_after(2)) else {
        return Err(DirectiveError::missing("acl", "name and condition"));
    };
    let condition = tx.mappings().rewrite_condition(raw);
    tx.defer(
        FragmentGroup::AclRules,
        format!("{INDENT}set $acl_{name} \"{condition}\";"),
    );
    Ok(())
}

/// `use_backend <name> if <condition>` → an `if` block proxying to the upstream.
pub fn use_backend(tx: &mut Translation<'_>, line: &SourceLine) -> RuleResult {
    let caps = USE_BACKEND_RE
        .captures(&line.text)
        .ok_or_else(|| DirectiveError::missing("use_backend", "backend and condition"))?;
    let backend = &caps[1];
    let condition = tx.mappings().rewrite_condition(&caps[2]);
    tx.defer(FragmentGroup::UseBackendRules, format!("{INDENT}if ({condition}) {{"));
    tx.defer(
        FragmentGroup::UseBackendRules,
        format!("{INDENT}{INDENT}proxy_pass http://{backend};"),
    );
    tx.defer(FragmentGroup::UseBackendRules, format!("{INDENT}}}"));
    Ok(())
}
