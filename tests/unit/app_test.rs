//! Unit tests for bootstrapping, navigation, the loading indicator and page rendering.

#[path = "../support/fake_api.rs"]
mod fake_api;

use rstest::rstest;
use serde_json::json;

use fake_api::{app_with, app_with_sections, binding_for, ok, post, FakeApi};
use global_trend_viewer::app::App;
use global_trend_viewer::error::{DispatchError, SetupError};
use global_trend_viewer::ui::bindings::{Action, Scope};
use global_trend_viewer::ui::document::ContainerId;
use global_trend_viewer::ui::navigation::Section;

#[test]
fn test_bootstrap_registers_navigation_bindings() {
    let api = FakeApi::new();
    let app = app_with(&api);

    let statics: Vec<Action> = app
        .document()
        .bindings
        .in_scope(Scope::Static)
        .map(|binding| binding.action.clone())
        .collect();
    assert_eq!(
        statics,
        vec![
            Action::Activate(Section::GitHub),
            Action::Activate(Section::Posts),
            Action::Activate(Section::Users),
            Action::ListUsers,
        ]
    );
    assert_eq!(app.document().navigation.active(), Section::GitHub);
    assert!(api.requests().is_empty());
}

#[test]
fn test_bootstrap_rejects_unknown_sections() {
    let api = FakeApi::new();
    let result = App::bootstrap(api, &["github", "weather"]);
    assert!(matches!(result, Err(SetupError::UnknownSection(name)) if name == "weather"));
}

#[tokio::test]
async fn test_navigation_click_switches_sections_without_fetching() {
    let api = FakeApi::new();
    let mut app = app_with(&api);

    let posts = binding_for(&app, &Action::Activate(Section::Posts));
    app.trigger(posts).await.unwrap();

    assert_eq!(app.document().navigation.active(), Section::Posts);
    assert!(api.requests().is_empty());

    let page = app.render_page().unwrap();
    assert!(page.contains("class=\"api-section active\""));
    assert_eq!(page.matches("api-section active").count(), 1);
    assert_eq!(page.matches("nav-btn active").count(), 1);
    assert!(page.contains("nav-btn active\" data-section=\"posts\""));
}

#[tokio::test]
async fn test_unknown_binding_is_reported() {
    let api = FakeApi::new();
    let mut app = app_with(&api);

    let err = app.trigger(9999).await.unwrap_err();
    assert!(matches!(err, DispatchError::UnknownBinding(9999)));
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_released_binding_is_ignored() {
    let api = FakeApi::new();
    api.respond("/api/posts/5", 200, ok(post(5, 1, "nesciunt quas odio", "body")));
    api.respond("/api/posts", 200, ok(json!([post(5, 1, "nesciunt quas odio", "body")])));
    let mut app = app_with(&api);

    app.dispatch(Action::OpenPost(5)).await;
    let back = binding_for(&app, &Action::BackToPosts);
    api.clear_requests();

    app.trigger(back).await.unwrap();
    assert!(app.document().bindings.get(back).is_none());
    app.trigger(back).await.unwrap();

    assert_eq!(api.requests(), vec!["/api/posts"]);
    assert!(app.container_html(ContainerId::PostsContent).contains("nesciunt quas odio"));
    assert!(app.render_page().is_ok());
}

#[test]
fn test_reduced_sections_skip_users_controls() {
    let api = FakeApi::new();
    let app = app_with_sections(&api, &["github", "posts"]);

    let statics: Vec<Action> = app
        .document()
        .bindings
        .in_scope(Scope::Static)
        .map(|binding| binding.action.clone())
        .collect();
    assert_eq!(statics, vec![Action::Activate(Section::GitHub), Action::Activate(Section::Posts)]);

    let page = app.render_page().unwrap();
    assert!(!page.contains("Load Users"));
    assert_eq!(page.matches("nav-btn").count(), 2);
}

#[rstest]
#[case::success(200, json!({"success": true, "data": []}))]
#[case::invalid(200, json!({"success": false}))]
#[case::http_error(500, json!({"message": "boom"}))]
#[tokio::test]
async fn test_loading_indicator_brackets_every_fetch(#[case] status: u16, #[case] body: serde_json::Value) {
    let api = FakeApi::new();
    api.respond("/api/users", status, body);
    let mut app = app_with(&api);
    assert!(!app.document().loading.is_visible());

    app.dispatch(Action::ListUsers).await;

    assert_eq!(api.loading_seen(), vec![true]);
    assert!(!app.document().loading.is_visible());
}

#[tokio::test]
async fn test_unreachable_backend_shows_fallback() {
    let api = FakeApi::new();
    let mut app = app_with(&api);

    app.dispatch(Action::ListPosts).await;

    let html = app.container_html(ContainerId::PostsContent);
    assert!(html.contains("error-card"));
    assert!(html.contains("Failed to fetch posts"));
    assert!(!app.document().loading.is_visible());
}

#[tokio::test]
async fn test_page_carries_inputs_and_container_content() {
    let api = FakeApi::new();
    api.respond("/api/posts?userId=3", 200, ok(json!([
        {"id": 21, "userId": 3, "title": "asperiores ea ipsam", "body": "x"}
    ])));
    let mut app = app_with(&api);

    app.submit_posts(Some("3".to_string()), None).await;

    let page = app.render_page().unwrap();
    assert!(page.contains("id=\"post-user-id\" name=\"userId\" type=\"number\" min=\"1\" value=\"3\""));
    assert!(page.contains("asperiores ea ipsam"));
    let card = binding_for(&app, &Action::OpenPost(21));
    assert!(page.contains(&format!("href=\"/actions/{}\"", card)));
}
