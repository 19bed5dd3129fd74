pub fn is_str_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// Only http(s) targets may be rendered into an href.
pub fn is_str_http_url(value: &str) -> bool {
    let lower = value.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Turn a profile link into an href, or `None` when it must not be linked.
///
/// Bare hosts ("hildegard.org") get an `http://` prefix; anything carrying
/// another scheme ("javascript:...") is rejected.
pub fn to_safe_href(value: &str) -> Option<String> {
    let value = value.trim();
    if is_str_blank(value) {
        return None;
    }
    if is_str_http_url(value) {
        return Some(value.to_string());
    }
    if value.contains(':') {
        return None;
    }
    Some(format!("http://{}", value))
}
