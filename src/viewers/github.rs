use crate::error::Result;
use crate::mappers::{self, github_mapper};
use crate::models::envelope::Envelope;
use crate::models::github_repo::GitHubRepo;
use crate::models::github_user::{GitHubUserDetail, GitHubUserSummary};
use crate::services::github_service::GitHubService;
use crate::ui::bindings::Action;
use crate::ui::document::ContainerId;
use crate::ui::templates;
use crate::views::common::{EmptyView, Tone};
use crate::views::github::{GitHubReposView, GitHubUsersView};

use super::ViewContext;

pub const CONTAINER: ContainerId = ContainerId::GitHubContent;
pub const REPOS_CONTAINER: ContainerId = ContainerId::Repositories;
pub const REPOS_PAGE: u32 = 1;
pub const REPOS_PER_PAGE: u32 = 10;

const NO_USERS: EmptyView = EmptyView {
    icon: "🔍",
    title: "No Users Found",
    hint: Some("Try a different starting ID or increase the per-page limit"),
};

pub async fn list_users(ctx: &mut ViewContext<'_>, service: &GitHubService) -> bool {
    let since = ctx.document.inputs.github_since().to_string();
    let per_page = ctx.document.inputs.github_per_page().to_string();
    ctx.run(
        CONTAINER,
        "fetching GitHub users",
        service.list_users(&since, &per_page),
        render_users,
    )
    .await
}

/// Show one GitHub user, then load their repositories into the nested container.
pub async fn open_user(ctx: &mut ViewContext<'_>, service: &GitHubService, login: &str) -> bool {
    let rendered = ctx
        .run(
            CONTAINER,
            "fetching user details",
            service.get_by_username(login),
            render_user,
        )
        .await;
    if rendered {
        load_repositories(ctx, service, login).await;
    }
    rendered
}

/// Secondary fetch of the detail view. Failures stay inside the repositories
/// container and the loading indicator is left alone.
pub async fn load_repositories(ctx: &mut ViewContext<'_>, service: &GitHubService, login: &str) {
    let outcome = match service.list_repos(login, REPOS_PAGE, REPOS_PER_PAGE).await {
        Ok(envelope) => render_repositories(ctx, envelope),
        Err(err) => Err(err),
    };
    if let Err(err) = outcome {
        log::error!("Error fetching repositories: {}", err);
        ctx.show_notice(REPOS_CONTAINER, Tone::Error, "Failed to load repositories");
    }
}

fn render_users(ctx: &mut ViewContext<'_>, envelope: Envelope<Vec<GitHubUserSummary>>) -> Result<()> {
    if envelope.data.is_empty() {
        return ctx.render_empty(CONTAINER, &NO_USERS);
    }
    ctx.render(CONTAINER, templates::GITHUB_USERS, |binder| GitHubUsersView {
        summary: mappers::to_summary(&envelope.metadata, "user", "users"),
        cards: envelope
            .data
            .iter()
            .map(|user| github_mapper::to_card(user, binder.bind(Action::OpenGitHubUser(user.login.clone()))))
            .collect(),
    })
}

fn render_user(ctx: &mut ViewContext<'_>, envelope: Envelope<GitHubUserDetail>) -> Result<()> {
    ctx.render(CONTAINER, templates::GITHUB_USER, |binder| {
        github_mapper::to_detail_view(&envelope.data, binder.bind(Action::BackToGitHubUsers))
    })?;
    ctx.show_notice(REPOS_CONTAINER, Tone::Muted, "Loading repositories...");
    Ok(())
}

fn render_repositories(ctx: &mut ViewContext<'_>, envelope: Envelope<Vec<GitHubRepo>>) -> Result<()> {
    if envelope.data.is_empty() {
        ctx.show_notice(REPOS_CONTAINER, Tone::Muted, "No public repositories found");
        return Ok(());
    }
    ctx.render(REPOS_CONTAINER, templates::GITHUB_REPOS, |_| GitHubReposView {
        cards: envelope.data.iter().map(github_mapper::to_repo_card).collect(),
    })
}
