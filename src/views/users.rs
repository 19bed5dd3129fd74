use serde::Serialize;

use crate::ui::bindings::BindingId;

use super::common::InfoItem;

#[derive(Debug, Serialize)]
pub struct UsersView {
    pub summary: Option<String>,
    pub cards: Vec<UserCard>,
}

#[derive(Debug, Serialize)]
pub struct UserCard {
    pub open: BindingId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: String,
}

#[derive(Debug, Serialize)]
pub struct UserDetailView {
    pub back: BindingId,
    pub view_posts: Option<BindingId>,
    pub id: i64,
    pub name: String,
    pub username: String,
    pub groups: Vec<InfoGroup>,
}

#[derive(Debug, Serialize)]
pub struct InfoGroup {
    pub heading: &'static str,
    pub items: Vec<InfoItem>,
}
