use crate::models::user::User;
use crate::ui::bindings::BindingId;
use crate::validators;
use crate::views::common::InfoItem;
use crate::views::users::{InfoGroup, UserCard, UserDetailView};

pub fn to_card(model: &User, open: BindingId) -> UserCard {
    UserCard {
        open,
        name: model.name.clone(),
        username: model.username.clone(),
        email: model.email.clone(),
        phone: model.phone.clone(),
        website: model.website.clone(),
        company: model.company.name.clone(),
    }
}

pub fn to_detail_view(model: &User, back: BindingId, view_posts: Option<BindingId>) -> UserDetailView {
    let address = &model.address;
    let company = &model.company;
    let groups = vec![
        InfoGroup {
            heading: "Contact Information",
            items: vec![
                InfoItem::text("Email", &model.email),
                InfoItem::text("Phone", &model.phone),
                InfoItem::link("Website", &model.website, validators::to_safe_href(&model.website)),
            ],
        },
        InfoGroup {
            heading: "Address",
            items: vec![
                InfoItem::text("Street", format!("{}, {}", address.street, address.suite)),
                InfoItem::text("City", &address.city),
                InfoItem::text("Zipcode", &address.zipcode),
            ],
        },
        InfoGroup {
            heading: "Company",
            items: vec![
                InfoItem::text("Name", &company.name),
                InfoItem::text("Catch Phrase", &company.catch_phrase),
                InfoItem::text("Business", &company.bs),
            ],
        },
    ];

    UserDetailView {
        back,
        view_posts,
        id: model.id,
        name: model.name.clone(),
        username: model.username.clone(),
        groups,
    }
}
