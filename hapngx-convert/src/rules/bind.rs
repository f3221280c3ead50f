use conf_lines_core::SourceLine;

use super::RuleResult;
use crate::engine::{Translation, INDENT};
use crate::fragments::FragmentGroup;

/// `bind <address> [params...]`: the address is ignored; SSL-related params
/// accumulate into the shared SSL group.
pub fn bind(tx: &mut Translation<'_>, line: &SourceLine) -> RuleResult {
    // Skip `bind` and the address.
    let mut params = line.tokens().skip(2).peekable();
    while let Some(param) = params.next() {
        let rendered = if param.starts_with("ssl") {
            "ssl on;".to_string()
        } else if let Some(rest) = param.strip_prefix("crt") {
            format!("ssl_certificate {};", param_value(param, rest, &mut params))
        } else if let Some(rest) = param.strip_prefix("key") {
            format!("ssl_certificate_key {};", param_value(param, rest, &mut params))
        } else if let Some(rest) = param.strip_prefix("alpn") {
            format!("ssl_protocols {};", param_value(param, rest, &mut params))
        } else if param.starts_with("accept-proxy") {
            "proxy_protocol on;".to_string()
        } else if param.starts_with("no-ssl") {
            "# SSL disabled for this bind".to_string()
        } else {
            continue;
        };
        tx.defer(FragmentGroup::SslDirectives, format!("{INDENT}{rendered}"));
    }
    Ok(())
}

/// Value after the first `=`; a bare keyword takes the next parameter instead.
fn param_value<'a, I>(param: &'a str, rest: &str, params: &mut std::iter::Peekable<I>) -> &'a str
where
    I: Iterator<Item = &'a str>,
{
    if let Some((_, value)) = param.split_once('=') {
        return value;
    }
    if rest.is_empty() {
        if let Some(next) = params.next_if(|p| !p.contains('=')) {
            return next;
        }
    }
    param
}
