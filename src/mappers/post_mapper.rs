use crate::html;
use crate::models::post::Post;
use crate::ui::bindings::BindingId;
use crate::views::posts::{PostCard, PostDetailView};

pub const EXCERPT_CHARS: usize = 100;

pub fn to_card(model: &Post, open: BindingId) -> PostCard {
    PostCard {
        open,
        id: model.id,
        user_id: model.user_id,
        title: model.title.clone(),
        excerpt: html::truncate(&model.body, EXCERPT_CHARS),
    }
}

pub fn to_detail_view(model: &Post, back: BindingId, open_user: Option<BindingId>) -> PostDetailView {
    PostDetailView {
        back,
        open_user,
        id: model.id,
        user_id: model.user_id,
        title: model.title.clone(),
        body: model.body.clone(),
    }
}
