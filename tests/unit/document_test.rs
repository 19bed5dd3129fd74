//! Unit tests for the in-memory document: containers, bindings and inputs.

use global_trend_viewer::ui::bindings::{Action, Bindings, Scope};
use global_trend_viewer::ui::document::{ContainerId, Document, FormInputs};
use global_trend_viewer::ui::navigation::{Navigation, Section};

fn document() -> Document {
    Document::new(Navigation::new(Section::ALL.to_vec()).unwrap())
}

#[test]
fn test_nested_container_is_rendered_into_its_slot() {
    let mut doc = document();
    let parent = format!("<div class=\"detail\">{}</div>", ContainerId::Repositories.slot());
    doc.replace(ContainerId::GitHubContent, parent);
    doc.replace(ContainerId::Repositories, "<p>repos</p>".to_string());

    assert_eq!(doc.render(ContainerId::GitHubContent), "<div class=\"detail\"><p>repos</p></div>");
    assert_eq!(doc.render(ContainerId::Repositories), "<p>repos</p>");
}

#[test]
fn test_replacing_parent_discards_nested_content_and_bindings() {
    let mut doc = document();
    doc.replace(ContainerId::GitHubContent, ContainerId::Repositories.slot());
    doc.replace(ContainerId::Repositories, "<p>repos</p>".to_string());
    doc.bindings.bind(Scope::Container(ContainerId::Repositories), Action::ListGitHubUsers);
    doc.bindings.bind(Scope::Container(ContainerId::GitHubContent), Action::BackToGitHubUsers);

    doc.replace(ContainerId::GitHubContent, "<p>fresh</p>".to_string());

    assert!(doc.html(ContainerId::Repositories).is_none());
    assert!(doc.bindings.is_empty());
}

#[test]
fn test_binder_scopes_new_bindings_and_releases_old_ones() {
    let mut doc = document();
    let old = {
        let mut binder = doc.binder(ContainerId::PostsContent);
        binder.bind(Action::OpenPost(1))
    };
    doc.fill(ContainerId::PostsContent, "<a>1</a>".to_string());

    let new = {
        let mut binder = doc.binder(ContainerId::PostsContent);
        binder.bind(Action::OpenPost(2))
    };
    doc.fill(ContainerId::PostsContent, "<a>2</a>".to_string());

    assert!(doc.bindings.get(old).is_none());
    let binding = doc.bindings.get(new).unwrap();
    assert_eq!(binding.action, Action::OpenPost(2));
    assert_eq!(binding.scope, Scope::Container(ContainerId::PostsContent));
    assert_eq!(doc.html(ContainerId::PostsContent), Some("<a>2</a>"));
}

#[test]
fn test_other_containers_keep_their_bindings() {
    let mut doc = document();
    doc.bindings.bind(Scope::Static, Action::Activate(Section::Posts));
    doc.bindings.bind(Scope::Container(ContainerId::UsersContent), Action::OpenUser(1));

    doc.replace(ContainerId::PostsContent, String::new());

    assert_eq!(doc.bindings.len(), 2);
}

#[test]
fn test_bindings_are_enumerable_by_scope() {
    let mut bindings = Bindings::new();
    let nav = bindings.bind(Scope::Static, Action::Activate(Section::GitHub));
    bindings.bind(Scope::Container(ContainerId::PostsContent), Action::OpenPost(3));
    bindings.bind(Scope::Container(ContainerId::PostsContent), Action::OpenPost(4));

    assert_eq!(bindings.find_static(&Action::Activate(Section::GitHub)), Some(nav));
    assert_eq!(bindings.find_static(&Action::OpenPost(3)), None);
    assert_eq!(bindings.in_scope(Scope::Container(ContainerId::PostsContent)).count(), 2);
    assert_eq!(bindings.iter().count(), 3);

    bindings.release(ContainerId::PostsContent);
    assert_eq!(bindings.len(), 1);
}

#[test]
fn test_form_input_defaults() {
    let mut inputs = FormInputs::default();
    assert_eq!(inputs.github_since(), "0");
    assert_eq!(inputs.github_per_page(), "10");
    assert_eq!(inputs.post_user_id(), None);
    assert_eq!(inputs.post_limit(), None);

    inputs.github_since = " 135 ".to_string();
    inputs.post_user_id = "1".to_string();
    inputs.post_limit = "   ".to_string();
    assert_eq!(inputs.github_since(), "135");
    assert_eq!(inputs.post_user_id(), Some("1"));
    assert_eq!(inputs.post_limit(), None);

    inputs.reset_posts();
    assert_eq!(inputs.post_user_id(), None);
    assert_eq!(inputs.github_since(), "135");
}
