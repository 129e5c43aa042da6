//! Helper utility functions

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// True when a `tabview-tab` payload carries no group data.
pub fn is_empty_payload(payload: Option<&str>) -> bool {
    match payload {
        None => true,
        Some(text) => text.trim().is_empty() || text == "null",
    }
}
