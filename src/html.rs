/// Escape text for interpolation into HTML element content or an attribute.
///
/// Same escaping the template registry applies to every `{{value}}`.
pub fn escape(text: &str) -> String {
    handlebars::html_escape(text)
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
