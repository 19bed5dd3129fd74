use serde::Serialize;

use crate::ui::bindings::BindingId;

use super::common::InfoItem;

#[derive(Debug, Serialize)]
pub struct GitHubUsersView {
    pub summary: Option<String>,
    pub cards: Vec<GitHubUserCard>,
}

#[derive(Debug, Serialize)]
pub struct GitHubUserCard {
    pub open: BindingId,
    pub id: i64,
    pub login: String,
    pub avatar_url: String,
}

#[derive(Debug, Serialize)]
pub struct GitHubUserDetailView {
    pub back: BindingId,
    pub login: String,
    pub title: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub info: Vec<InfoItem>,
    pub stats: Vec<InfoItem>,
    /// Slot marker of the nested repositories container, inserted unescaped.
    pub repositories: String,
}

#[derive(Debug, Serialize)]
pub struct GitHubReposView {
    pub cards: Vec<GitHubRepoCard>,
}

#[derive(Debug, Serialize)]
pub struct GitHubRepoCard {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub href: Option<String>,
}
