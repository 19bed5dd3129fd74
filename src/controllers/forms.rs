use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Response;
use serde::Deserialize;

use super::AppState;


#[derive(Debug, Deserialize)]
pub struct GitHubFormViewModel {
    since: Option<String>,
    #[serde(rename = "perPage")]
    per_page: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsFormViewModel {
    user_id: Option<String>,
    limit: Option<String>,
}

#[axum_macros::debug_handler]
pub async fn get_github(query: Query<GitHubFormViewModel>, State(state): State<Arc<AppState>>) -> Response {
    let form = query.0;
    let mut app = state.app.lock().await;
    app.submit_github(form.since, form.per_page).await;
    super::render_page(&app)
}

#[axum_macros::debug_handler]
pub async fn get_posts(query: Query<PostsFormViewModel>, State(state): State<Arc<AppState>>) -> Response {
    let form = query.0;
    let mut app = state.app.lock().await;
    app.submit_posts(form.user_id, form.limit).await;
    super::render_page(&app)
}
