//! HTML helper functions

/// Escape HTML special characters
///
/// Shared by every HTML and XML context the generator writes to.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Whether a link target may be rendered as an anchor
///
/// Only `http://`, `https://` and `mailto:` are allowed, case-insensitive.
pub fn is_safe_link(url: &str) -> bool {
    let url = url.trim().as_bytes();
    ["http://", "https://", "mailto:"].iter().any(|scheme| {
        url.len() >= scheme.len() && url[..scheme.len()].eq_ignore_ascii_case(scheme.as_bytes())
    })
}

/// Generate an anchor tag that opens in a new browsing context
///
/// Both arguments are escaped. Returns `None` for unsafe schemes.
pub fn external_link(url: &str, text: &str) -> Option<String> {
    let url = url.trim();
    if !is_safe_link(url) {
        return None;
    }
    Some(format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        html_escape(url),
        html_escape(text)
    ))
}
