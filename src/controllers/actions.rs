use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::ui::bindings::BindingId;

use super::AppState;


#[axum_macros::debug_handler]
pub async fn get_action(Path(binding): Path<BindingId>, State(state): State<Arc<AppState>>) -> Response {
    let mut app = state.app.lock().await;

    if let Err(err) = app.trigger(binding).await {
        log::warn!("{}", err);
        let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return super::get_error_page(app.registry(), status, &err.to_string());
    }

    super::render_page(&app)
}
