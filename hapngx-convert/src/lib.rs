//! HAProxy to nginx configuration translation.
//!
//! This library rewrites a HAProxy-style load-balancer configuration into an
//! nginx-style one. It is a best-effort, line-oriented transpiler: directives it
//! recognizes are rewritten into nginx syntax and everything else is preserved
//! as a comment, so no input statement is silently dropped.
//!
//! # Architecture
//!
//! - [`classify`] — Priority-ordered directive classification (first match wins)
//! - `rules` — Per-kind rewrite rules
//!   - Structural markers (`global`, `defaults`, `frontend`, `backend`, `listen stats`)
//!   - Scalar directives (`log`, `maxconn`, `timeout`, `balance`, `stick-table`)
//!   - `bind` SSL parameters
//!   - ACL / `use_backend` condition rewriting
//!   - `server` lines and health checks
//! - [`fragments`] — Deferred fragment groups and their fixed flush order
//! - [`engine`] — The single-pass scan and final assembly
//! - [`known_mappings`] — Timeout, balance and condition lookup tables (TOML)
//!
//! ## Reporting
//!
//! - [`conversion_summary`] — Post-translation counts
//! - [`inspect`] — Per-line classification without translating
//! - [`report`] — Terminal-friendly colored output
//!
//! # Examples
//!
//! ```
//! let nginx = hapngx_convert::translate("backend api\nbalance leastconn\nserver a1 10.0.0.1:80");
//! assert_eq!(nginx, "upstream api {\n    leastconn;\n    server 10.0.0.1:80;  # a1\n}");
//! ```
//!
//! # Known limitations
//!
//! Only one closing brace is emitted by default however many `http`/`upstream`
//! blocks were opened, and SSL parameters gathered from `bind` lines are
//! withheld. Both are configurable through [`TranslateOptions`].

pub mod classify;
pub mod conversion_summary;
pub mod engine;
pub mod error;
pub mod fragments;
pub mod inspect;
pub mod known_mappings;
pub mod report;
mod rules;

pub use classify::{classify, DirectiveKind};
pub use engine::{
    translate, BlockClosing, TranslateOptions, TranslationOutput, TranslationStats, Translator,
};
pub use error::{DirectiveError, Diagnostic};
pub use known_mappings::{default_mappings, load_mappings, DirectiveMappings, MappingLoadError};
