use crate::models::github_repo::GitHubRepo;
use crate::models::github_user::{GitHubUserDetail, GitHubUserSummary};
use crate::ui::bindings::BindingId;
use crate::ui::document::ContainerId;
use crate::validators;
use crate::views::common::InfoItem;
use crate::views::github::{GitHubRepoCard, GitHubUserCard, GitHubUserDetailView};

use super::present;

pub fn to_card(model: &GitHubUserSummary, open: BindingId) -> GitHubUserCard {
    GitHubUserCard {
        open,
        id: model.id,
        login: model.login.clone(),
        avatar_url: model.avatar_url.clone(),
    }
}

pub fn to_detail_view(model: &GitHubUserDetail, back: BindingId) -> GitHubUserDetailView {
    let mut info = Vec::new();
    if let Some(company) = present(&model.company) {
        info.push(InfoItem::text("Company", company));
    }
    if let Some(location) = present(&model.location) {
        info.push(InfoItem::text("Location", location));
    }
    if let Some(email) = present(&model.email) {
        info.push(InfoItem::text("Email", email));
    }
    if let Some(blog) = present(&model.blog) {
        let href = validators::to_safe_href(&blog);
        info.push(InfoItem::link("Website", blog, href));
    }

    let stats = vec![
        InfoItem::text("Public Repos", model.public_repos.unwrap_or(0)),
        InfoItem::text("Followers", model.followers.unwrap_or(0)),
        InfoItem::text("Following", model.following.unwrap_or(0)),
        InfoItem::text("Public Gists", model.public_gists.unwrap_or(0)),
    ];

    GitHubUserDetailView {
        back,
        login: model.login.clone(),
        title: present(&model.name).unwrap_or_else(|| model.login.clone()),
        avatar_url: present(&model.avatar_url),
        bio: present(&model.bio),
        info,
        stats,
        repositories: ContainerId::Repositories.slot(),
    }
}

pub fn to_repo_card(model: &GitHubRepo) -> GitHubRepoCard {
    GitHubRepoCard {
        name: model.name.clone(),
        description: present(&model.description),
        language: present(&model.language),
        stars: model.stargazers_count.unwrap_or(0),
        forks: model.forks_count.unwrap_or(0),
        href: Some(model.html_url.as_str())
            .filter(|url| validators::is_str_http_url(url))
            .map(str::to_string),
    }
}
