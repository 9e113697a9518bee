//! Fallback document shown in place of a page that failed to load.

/// Render the error page for a failed main-frame load.
///
/// `failed_url` and `error_text` are HTML-escaped.
pub fn render(failed_url: &str, error_text: &str, error_code: i32) -> String {
    format!(
        "<html><body><h2>Failed to load URL: {}</h2><p>Error: {} ({error_code})</p></body></html>",
        escape_html(failed_url),
        escape_html(error_text),
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
