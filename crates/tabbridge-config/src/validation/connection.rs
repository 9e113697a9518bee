//! Connection endpoint validation.

use crate::schema::BridgeConfig;

use super::helpers::validate_non_empty;

pub(super) fn validate_connection(errors: &mut Vec<String>, config: &BridgeConfig) {
    let url = config.connection.url.trim();
    validate_non_empty(errors, "connection.url", url);
    if url.is_empty() {
        return;
    }

    match url.split_once("://") {
        Some((scheme, rest)) => {
            if !scheme.eq_ignore_ascii_case("ws") && !scheme.eq_ignore_ascii_case("wss") {
                errors.push(format!(
                    "connection.url = '{url}' must use the ws:// or wss:// scheme"
                ));
            }
            let host = rest.split(['/', '?', '#']).next().unwrap_or("");
            if host.is_empty() {
                errors.push(format!("connection.url = '{url}' is missing a host"));
            }
        }
        None => errors.push(format!(
            "connection.url = '{url}' must use the ws:// or wss:// scheme"
        )),
    }
}
