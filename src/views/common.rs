use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorView {
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Muted,
    Error,
}

#[derive(Debug, Serialize)]
pub struct NoticeView {
    pub tone: Tone,
    pub message: String,
}

/// The "no results" placeholder of a list.
#[derive(Debug, Serialize)]
pub struct EmptyView {
    pub icon: &'static str,
    pub title: &'static str,
    pub hint: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InfoItem {
    pub label: &'static str,
    pub value: String,
    pub href: Option<String>,
}

impl InfoItem {
    pub fn text(label: &'static str, value: impl ToString) -> Self {
        InfoItem {
            label,
            value: value.to_string(),
            href: None,
        }
    }

    pub fn link(label: &'static str, value: impl ToString, href: Option<String>) -> Self {
        InfoItem {
            label,
            value: value.to_string(),
            href,
        }
    }
}
