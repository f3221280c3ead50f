//! Deferred fragment groups and final assembly order.

use serde::Serialize;

/// Named accumulator flushed as a unit after the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentGroup {
    UpstreamOptions,
    ServerDirectives,
    SslDirectives,
    AclRules,
    UseBackendRules,
    StickTableSettings,
    StatsBlock,
}

/// Flush order when SSL directives are withheld.
pub const ASSEMBLY_ORDER: [FragmentGroup; 6] = [
    FragmentGroup::UpstreamOptions,
    FragmentGroup::ServerDirectives,
    FragmentGroup::AclRules,
    FragmentGroup::UseBackendRules,
    FragmentGroup::StickTableSettings,
    FragmentGroup::StatsBlock,
];

/// Flush order with SSL directives following the server list.
pub const ASSEMBLY_ORDER_WITH_SSL: [FragmentGroup; 7] = [
    FragmentGroup::UpstreamOptions,
    FragmentGroup::ServerDirectives,
    FragmentGroup::SslDirectives,
    FragmentGroup::AclRules,
    FragmentGroup::UseBackendRules,
    FragmentGroup::StickTableSettings,
    FragmentGroup::StatsBlock,
];

/// Per-translation accumulators, one per [`FragmentGroup`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeferredFragments {
    upstream_options: Vec<String>,
    server_directives: Vec<String>,
    ssl_directives: Vec<String>,
    acl_rules: Vec<String>,
    use_backend_rules: Vec<String>,
    stick_table_settings: Vec<String>,
    stats_block: Vec<String>,
}

impl DeferredFragments {
    pub fn push(&mut self, group: FragmentGroup, line: impl Into<String>) {
        self.slot_mut(group).push(line.into());
    }

    pub fn get(&self, group: FragmentGroup) -> &[String] {
        match group {
            FragmentGroup::UpstreamOptions => &self.upstream_options,
            FragmentGroup::ServerDirectives => &self.server_directives,
            FragmentGroup::SslDirectives => &self.ssl_directives,
            FragmentGroup::AclRules => &self.acl_rules,
            FragmentGroup::UseBackendRules => &self.use_backend_rules,
            FragmentGroup::StickTableSettings => &self.stick_table_settings,
            FragmentGroup::StatsBlock => &self.stats_block,
        }
    }

    /// Append the groups named in `order` to `output`, each in its entirety.
    pub fn flush_into(mut self, order: &[FragmentGroup], output: &mut Vec<String>) {
        for group in order {
            output.append(self.slot_mut(*group));
        }
    }

    fn slot_mut(&mut self, group: FragmentGroup) -> &mut Vec<String> {
        match group {
            FragmentGroup::UpstreamOptions => &mut self.upstream_options,
            FragmentGroup::ServerDirectives => &mut self.server_directives,
            FragmentGroup::SslDirectives => &mut self.ssl_directives,
            FragmentGroup::AclRules => &mut self.acl_rules,
            FragmentGroup::UseBackendRules => &mut self.use_backend_rules,
            FragmentGroup::StickTableSettings => &mut self.stick_table_settings,
            FragmentGroup::StatsBlock => &mut self.stats_block,
        }
    }
}
