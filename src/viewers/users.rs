use crate::error::Result;
use crate::mappers::{self, user_mapper};
use crate::models::envelope::Envelope;
use crate::models::user::User;
use crate::services::placeholder_service::PlaceholderService;
use crate::ui::bindings::Action;
use crate::ui::document::ContainerId;
use crate::ui::navigation::Section;
use crate::ui::templates;
use crate::views::common::EmptyView;
use crate::views::users::UsersView;

use super::ViewContext;

pub const CONTAINER: ContainerId = ContainerId::UsersContent;

const NO_USERS: EmptyView = EmptyView {
    icon: "👥",
    title: "No Users Found",
    hint: None,
};

pub async fn list_users(ctx: &mut ViewContext<'_>, service: &PlaceholderService) -> bool {
    ctx.run(CONTAINER, "fetching users", service.list_users(), render_users)
        .await
}

pub async fn open_user(ctx: &mut ViewContext<'_>, service: &PlaceholderService, id: i64) -> bool {
    ctx.run(CONTAINER, "fetching user details", service.get_user(id), render_user)
        .await
}

fn render_users(ctx: &mut ViewContext<'_>, envelope: Envelope<Vec<User>>) -> Result<()> {
    if envelope.data.is_empty() {
        return ctx.render_empty(CONTAINER, &NO_USERS);
    }
    ctx.render(CONTAINER, templates::USERS_LIST, |binder| UsersView {
        summary: mappers::to_summary(&envelope.metadata, "user", "users"),
        cards: envelope
            .data
            .iter()
            .map(|user| user_mapper::to_card(user, binder.bind(Action::OpenUser(user.id))))
            .collect(),
    })
}

fn render_user(ctx: &mut ViewContext<'_>, envelope: Envelope<User>) -> Result<()> {
    let user = envelope.data;
    let link_posts = ctx.document.navigation.has(Section::Posts);
    ctx.render(CONTAINER, templates::USERS_DETAIL, |binder| {
        let back = binder.bind(Action::ListUsers);
        let view_posts = link_posts.then(|| binder.bind(Action::ViewPostsByUser(user.id)));
        user_mapper::to_detail_view(&user, back, view_posts)
    })
}
