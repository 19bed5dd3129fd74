use serde::Serialize;

use crate::ui::bindings::BindingId;

#[derive(Debug, Serialize)]
pub struct PostsView {
    pub summary: Option<String>,
    pub cards: Vec<PostCard>,
}

#[derive(Debug, Serialize)]
pub struct PostCard {
    pub open: BindingId,
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub excerpt: String,
}

#[derive(Debug, Serialize)]
pub struct PostDetailView {
    pub back: BindingId,
    pub open_user: Option<BindingId>,
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}
