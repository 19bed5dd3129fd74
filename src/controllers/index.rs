use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;

use super::AppState;


pub async fn get_index(State(state): State<Arc<AppState>>) -> Response {
    let app = state.app.lock().await;
    super::render_page(&app)
}
