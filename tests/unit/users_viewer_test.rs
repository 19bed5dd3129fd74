//! Unit tests for the users viewer.

#[path = "../support/fake_api.rs"]
mod fake_api;

use serde_json::json;

use fake_api::{app_with, app_with_sections, binding_for, leanne, ok, FakeApi};
use global_trend_viewer::ui::bindings::Action;
use global_trend_viewer::ui::document::ContainerId;
use global_trend_viewer::ui::navigation::Section;

#[tokio::test]
async fn test_list_renders_summary_cards() {
    let api = FakeApi::new();
    api.respond("/api/users", 200, ok(json!([leanne()])));
    let mut app = app_with(&api);

    app.dispatch(Action::ListUsers).await;

    let html = app.container_html(ContainerId::UsersContent);
    assert_eq!(html.matches("class=\"card\"").count(), 1);
    assert!(html.contains("Leanne Graham"));
    assert!(html.contains("@Bret"));
    assert!(html.contains("Sincere@april.biz"));
    assert!(html.contains("Romaguera-Crona"));
    binding_for(&app, &Action::OpenUser(1));
}

#[tokio::test]
async fn test_empty_list() {
    let api = FakeApi::new();
    api.respond("/api/users", 200, ok(json!([])));
    let mut app = app_with(&api);

    app.dispatch(Action::ListUsers).await;

    let html = app.container_html(ContainerId::UsersContent);
    assert!(html.contains("No Users Found"));
    assert!(!html.contains("error-card"));
}

#[tokio::test]
async fn test_server_error_without_message_uses_fallback() {
    let api = FakeApi::new();
    api.respond_raw("/api/users", 500, "upstream exploded");
    let mut app = app_with(&api);

    app.dispatch(Action::ListUsers).await;

    assert!(app.container_html(ContainerId::UsersContent).contains("<p>Failed to fetch users</p>"));
}

#[tokio::test]
async fn test_detail_view() {
    let api = FakeApi::new();
    api.respond("/api/users/1", 200, ok(leanne()));
    let mut app = app_with(&api);

    app.dispatch(Action::OpenUser(1)).await;

    let html = app.container_html(ContainerId::UsersContent);
    assert!(html.contains("← Back to Users"));
    assert!(html.contains("@Bret • ID: 1"));
    assert!(html.contains("Kulas Light, Apt. 556"));
    assert!(html.contains("92998-3874"));
    assert!(html.contains("Multi-layered client-server neural-net"));
    assert!(html.contains("href=\"http://hildegard.org\""));
    assert!(html.contains("View Posts by This User"));
}

#[tokio::test]
async fn test_back_lists_users() {
    let api = FakeApi::new();
    api.respond("/api/users/1", 200, ok(leanne()));
    api.respond("/api/users", 200, ok(json!([leanne()])));
    let mut app = app_with(&api);

    app.dispatch(Action::OpenUser(1)).await;
    let back = binding_for(&app, &Action::ListUsers);
    app.trigger(back).await.unwrap();

    assert_eq!(api.requests(), vec!["/api/users/1", "/api/users"]);
    assert!(app.container_html(ContainerId::UsersContent).contains("@Bret"));
}

#[tokio::test]
async fn test_view_posts_by_user_switches_section_and_filters() {
    let api = FakeApi::new();
    api.respond("/api/users/1", 200, ok(leanne()));
    api.respond("/api/posts?userId=1", 200, ok(json!([
        {"id": 1, "userId": 1, "title": "sunt aut facere", "body": "quia et suscipit"}
    ])));
    let mut app = app_with(&api);

    app.dispatch(Action::OpenUser(1)).await;
    let shortcut = binding_for(&app, &Action::ViewPostsByUser(1));
    api.clear_requests();
    app.trigger(shortcut).await.unwrap();

    assert_eq!(app.document().navigation.active(), Section::Posts);
    assert_eq!(app.document().inputs.post_user_id, "1");
    assert_eq!(api.requests(), vec!["/api/posts?userId=1"]);
    assert!(app.container_html(ContainerId::PostsContent).contains("sunt aut facere"));
}

#[tokio::test]
async fn test_no_posts_shortcut_without_a_posts_section() {
    let api = FakeApi::new();
    api.respond("/api/users/1", 200, ok(leanne()));
    let mut app = app_with_sections(&api, &["users"]);

    app.dispatch(Action::OpenUser(1)).await;

    let html = app.container_html(ContainerId::UsersContent);
    assert!(html.contains("@Bret • ID: 1"));
    assert!(!html.contains("View Posts by This User"));
    assert_eq!(app.document().navigation.active(), Section::Users);
}
