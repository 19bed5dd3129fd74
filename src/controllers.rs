pub mod actions;
pub mod forms;
pub mod index;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use handlebars::Handlebars;
use tokio::sync::Mutex;

use crate::app::App;
use crate::error::DispatchError;
use crate::ui::templates;
use crate::views::page::ErrorPageView;

/// Shared by every route. Actions are serialized through the mutex, so each
/// one settles before the next starts.
pub struct AppState {
    pub app: Mutex<App>,
}

impl AppState {
    pub fn new(app: App) -> Self {
        AppState { app: Mutex::new(app) }
    }
}

pub fn render_page(app: &App) -> Response {
    match app.render_page() {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            let err = DispatchError::from(err);
            log::error!("{}", err);
            get_error_page(app.registry(), StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}

pub fn get_error_page(registry: &Handlebars<'static>, status: StatusCode, message: &str) -> Response {
    let template = if status == StatusCode::NOT_FOUND {
        templates::NOT_FOUND
    } else {
        templates::INTERNAL_ERROR
    };
    let view = ErrorPageView {
        title: status.to_string(),
        message: message.to_string(),
    };
    match registry.render(template, &view) {
        Ok(page) => (status, Html(page)).into_response(),
        Err(err) => {
            log::error!("Failed to render error page: {}", err);
            (status, message.to_string()).into_response()
        }
    }
}
