use handlebars::Handlebars;

use crate::error::SetupError;

pub const PAGE: &str = "template";
pub const ERROR: &str = "error";
pub const EMPTY: &str = "empty";
pub const NOTICE: &str = "notice";
pub const GITHUB_USERS: &str = "github/users";
pub const GITHUB_USER: &str = "github/user";
pub const GITHUB_REPOS: &str = "github/repos";
pub const POSTS_LIST: &str = "posts/list";
pub const POSTS_DETAIL: &str = "posts/detail";
pub const USERS_LIST: &str = "users/list";
pub const USERS_DETAIL: &str = "users/detail";
pub const NOT_FOUND: &str = "errors/404";
pub const INTERNAL_ERROR: &str = "errors/500";

const SOURCES: [(&str, &str); 13] = [
    (PAGE, include_str!("../templates/template.hbs")),
    (ERROR, include_str!("../templates/error.hbs")),
    (EMPTY, include_str!("../templates/empty.hbs")),
    (NOTICE, include_str!("../templates/notice.hbs")),
    (GITHUB_USERS, include_str!("../templates/github/users.hbs")),
    (GITHUB_USER, include_str!("../templates/github/user.hbs")),
    (GITHUB_REPOS, include_str!("../templates/github/repos.hbs")),
    (POSTS_LIST, include_str!("../templates/posts/list.hbs")),
    (POSTS_DETAIL, include_str!("../templates/posts/detail.hbs")),
    (USERS_LIST, include_str!("../templates/users/list.hbs")),
    (USERS_DETAIL, include_str!("../templates/users/detail.hbs")),
    (NOT_FOUND, include_str!("../templates/errors/404.hbs")),
    (INTERNAL_ERROR, include_str!("../templates/errors/500.hbs")),
];

/// Build the template registry. Every `{{value}}` is HTML-escaped.
pub fn registry() -> Result<Handlebars<'static>, SetupError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    for (name, source) in SOURCES {
        handlebars.register_template_string(name, source)?;
    }
    Ok(handlebars)
}
