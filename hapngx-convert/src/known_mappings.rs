use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// HAProxy `timeout <key>` to nginx directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutMapping {
    pub key: String,
    pub directive: String,
}

/// One literal replacement applied to ACL conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub from: String,
    pub to: String,
}

/// Lookup tables consulted by the translation rules.
///
/// Loaded once per run and never mutated while translating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveMappings {
    #[serde(rename = "timeout")]
    pub timeouts: Vec<TimeoutMapping>,
    pub balance_methods: Vec<String>,
    #[serde(rename = "substitution")]
    pub substitutions: Vec<Substitution>,
}

impl DirectiveMappings {
    /// nginx directive for a timeout sub-key.
    pub fn timeout_directive(&self, key: &str) -> Option<&str> {
        self.timeouts
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.directive.as_str())
    }

    /// Whether `method` can be emitted verbatim inside an `upstream` block.
    pub fn is_supported_balance(&self, method: &str) -> bool {
        self.balance_methods.iter().any(|m| m == method)
    }

    /// Apply every substitution in order, each replacing all occurrences.
    pub fn rewrite_condition(&self, condition: &str) -> String {
        self.substitutions
            .iter()
            .fold(condition.to_string(), |acc, sub| acc.replace(&sub.from, &sub.to))
    }
}

impl Default for DirectiveMappings {
    fn default() -> Self {
        default_mappings()
    }
}

/// Errors returned when loading mapping files.
#[derive(Debug, Error)]
pub enum MappingLoadError {
    #[error("failed to read mappings file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse mappings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid mappings file {path}: {reason}")]
    Invalid { path: String, reason: String },
}

/// Load directive mappings from a TOML file.
pub fn load_mappings(path: &Path) -> Result<DirectiveMappings, MappingLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| MappingLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_mappings(&raw, path.display().to_string())
}

/// Built-in mappings, falling back to a hard-coded table if the embedded file is unusable.
pub fn default_mappings() -> DirectiveMappings {
    let embedded = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/mappings/directives.toml"
    ));
    match parse_mappings(embedded, "embedded mappings".to_string()) {
        Ok(mappings) if !mappings.timeouts.is_empty() => mappings,
        _ => fallback_mappings(),
    }
}

fn parse_mappings(raw: &str, path: String) -> Result<DirectiveMappings, MappingLoadError> {
    let parsed: DirectiveMappings = toml::from_str(raw).map_err(|source| {
        MappingLoadError::Parse {
            path: path.clone(),
            source,
        }
    })?;
    // An empty pattern would splice the replacement between every character.
    if let Some(sub) = parsed.substitutions.iter().find(|s| s.from.is_empty()) {
        return Err(MappingLoadError::Invalid {
            path,
            reason: format!("substitution to '{}' has an empty 'from' pattern", sub.to),
        });
    }
    if let Some(t) = parsed.timeouts.iter().find(|t| t.directive.trim().is_empty()) {
        return Err(MappingLoadError::Invalid {
            path,
            reason: format!("timeout '{}' maps to an empty directive", t.key),
        });
    }
    Ok(parsed)
}

fn fallback_mappings() -> DirectiveMappings {
    let timeout = |key: &str, directive: &str| TimeoutMapping {
        key: key.to_string(),
        directive: directive.to_string(),
    };
    let sub = |from: &str, to: &str| Substitution {
        from: from.to_string(),
        to: to.to_string(),
    };
    DirectiveMappings {
        timeouts: vec![
            timeout("connect", "proxy_connect_timeout"),
            timeout("client", "client_body_timeout"),
            timeout("server", "proxy_read_timeout"),
            timeout("queue", "proxy_timeout_queue"),
            timeout("http-keep-alive", "keepalive_timeout"),
        ],
        balance_methods: ["roundrobin", "leastconn", "source", "uri", "hash"]
            .iter()
            .map(|m| m.to_string())
            .collect(),
        substitutions: vec![
            sub("hdr", "$http"),
            sub("path_beg", "starts_with"),
            sub("&&", "and"),
            sub("||", "or"),
            sub("!", "not"),
        ],
    }
}
