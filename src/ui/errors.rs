use handlebars::Handlebars;
use serde::Serialize;

use crate::html;
use crate::views::common::{ErrorView, NoticeView, Tone};

use super::document::{ContainerId, Document};
use super::templates;

/// Replace the whole content of `container` with the error card.
pub fn show_error(document: &mut Document, registry: &Handlebars<'static>, container: ContainerId, message: &str) {
    let view = ErrorView {
        message: message.to_string(),
    };
    let fallback = || format!("<div class=\"error-card\"><h3>Error</h3><p>{}</p></div>", html::escape(message));
    let card = render_or(registry, templates::ERROR, &view, fallback);
    document.replace(container, card);
}

/// Replace `container` with a one-line message, used for nested containers
/// that degrade locally instead of showing the error card.
pub fn show_notice(
    document: &mut Document,
    registry: &Handlebars<'static>,
    container: ContainerId,
    tone: Tone,
    message: &str,
) {
    let view = NoticeView {
        tone,
        message: message.to_string(),
    };
    let fallback = || format!("<div class=\"notice\">{}</div>", html::escape(message));
    let notice = render_or(registry, templates::NOTICE, &view, fallback);
    document.replace(container, notice);
}

fn render_or<T: Serialize>(
    registry: &Handlebars<'static>,
    name: &str,
    data: &T,
    fallback: impl FnOnce() -> String,
) -> String {
    match registry.render(name, data) {
        Ok(html) => html,
        Err(err) => {
            log::error!("Failed to render {}: {}", name, err);
            fallback()
        }
    }
}
