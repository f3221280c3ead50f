use colored::Colorize;

use crate::error::Diagnostic;
use crate::inspect::InspectEntry;

/// Render translated nginx text for terminal output.
pub fn render_text(text: &str) -> String {
    let mut out = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim_start();
        let colored = if trimmed.starts_with("# Malformed directive") {
            line.red().to_string()
        } else if trimmed.starts_with("# Unsupported") {
            line.magenta().to_string()
        } else if trimmed.starts_with('#') {
            line.yellow().to_string()
        } else if trimmed.ends_with('{') || trimmed.starts_with("http {") || trimmed == "}" {
            line.cyan().to_string()
        } else {
            line.to_string()
        };
        out.push(colored);
    }

    out.join("\n")
}

/// Render per-line classification.
pub fn render_inspect(entries: &[InspectEntry]) -> String {
    let width = entries
        .iter()
        .map(|e| e.kind.as_str().len())
        .max()
        .unwrap_or(0);
    entries
        .iter()
        .map(|e| format!("{:>4}  {:<width$}  {}", e.line, e.kind.as_str(), e.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render malformed-directive diagnostics, one per line.
pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("warning: line {}: {} ({})", d.line, d.message, d.text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{render_diagnostics, render_inspect, render_text};
    use crate::classify::DirectiveKind;
    use crate::error::Diagnostic;
    use crate::inspect::InspectEntry;

    #[test]
    fn plain_text_survives_without_color() {
        colored::control::set_override(false);
        let text = "upstream api {\n    roundrobin;\n}";
        assert_eq!(render_text(text), text);
        colored::control::unset_override();
    }

    #[test]
    fn inspect_columns_align() {
        let rendered = render_inspect(&[
            InspectEntry {
                line: 1,
                kind: DirectiveKind::GlobalMarker,
                text: "global".to_string(),
            },
            InspectEntry {
                line: 12,
                kind: DirectiveKind::Acl,
                text: "acl a path_beg /a".to_string(),
            },
        ]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "   1  global-marker  global");
        assert_eq!(lines[1], "  12  acl            acl a path_beg /a");
    }

    #[test]
    fn diagnostics_name_the_line() {
        let rendered = render_diagnostics(&[Diagnostic {
            line: 7,
            kind: DirectiveKind::Maxconn,
            message: "maxconn: missing connection limit".to_string(),
            text: "maxconn".to_string(),
        }]);
        assert_eq!(
            rendered,
            "warning: line 7: maxconn: missing connection limit (maxconn)"
        );
    }
}
