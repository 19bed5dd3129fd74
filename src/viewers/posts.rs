use crate::error::Result;
use crate::mappers::{self, post_mapper};
use crate::models::envelope::Envelope;
use crate::models::post::Post;
use crate::services::placeholder_service::PlaceholderService;
use crate::ui::bindings::Action;
use crate::ui::document::ContainerId;
use crate::ui::navigation::Section;
use crate::ui::templates;
use crate::views::common::EmptyView;
use crate::views::posts::PostsView;

use super::ViewContext;

pub const CONTAINER: ContainerId = ContainerId::PostsContent;

const NO_POSTS: EmptyView = EmptyView {
    icon: "📭",
    title: "No Posts Found",
    hint: Some("Try different filter options"),
};

pub async fn list_posts(ctx: &mut ViewContext<'_>, service: &PlaceholderService) -> bool {
    let user_id = ctx.document.inputs.post_user_id().map(str::to_string);
    let limit = ctx.document.inputs.post_limit().map(str::to_string);
    ctx.run(
        CONTAINER,
        "fetching posts",
        service.list_posts(user_id.as_deref(), limit.as_deref()),
        render_posts,
    )
    .await
}

pub async fn open_post(ctx: &mut ViewContext<'_>, service: &PlaceholderService, id: i64) -> bool {
    ctx.run(CONTAINER, "fetching post details", service.get_post(id), render_post)
        .await
}

fn render_posts(ctx: &mut ViewContext<'_>, envelope: Envelope<Vec<Post>>) -> Result<()> {
    if envelope.data.is_empty() {
        return ctx.render_empty(CONTAINER, &NO_POSTS);
    }
    ctx.render(CONTAINER, templates::POSTS_LIST, |binder| PostsView {
        summary: mappers::to_summary(&envelope.metadata, "post", "posts"),
        cards: envelope
            .data
            .iter()
            .map(|post| post_mapper::to_card(post, binder.bind(Action::OpenPost(post.id))))
            .collect(),
    })
}

fn render_post(ctx: &mut ViewContext<'_>, envelope: Envelope<Post>) -> Result<()> {
    let post = envelope.data;
    let link_author = ctx.document.navigation.has(Section::Users);
    ctx.render(CONTAINER, templates::POSTS_DETAIL, |binder| {
        let back = binder.bind(Action::BackToPosts);
        let open_user = link_author.then(|| binder.bind(Action::OpenUser(post.user_id)));
        post_mapper::to_detail_view(&post, back, open_user)
    })
}
