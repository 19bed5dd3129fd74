//! Recording stand-in for the backend API.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use global_trend_viewer::app::App;
use global_trend_viewer::error::ClientError;
use global_trend_viewer::services::api_client::{ApiClient, ApiRequest, ApiResponse};
use global_trend_viewer::ui::bindings::{Action, BindingId};
use global_trend_viewer::ui::loading::LoadingIndicator;

#[derive(Default)]
pub struct FakeApi {
    routes: Mutex<HashMap<String, (u16, String)>>,
    requests: Mutex<Vec<String>>,
    loading: Mutex<Option<LoadingIndicator>>,
    loading_seen: Mutex<Vec<bool>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(FakeApi::default())
    }

    /// Answer `url` (path plus query) with `status` and a JSON body.
    pub fn respond(&self, url: &str, status: u16, body: Value) {
        self.respond_raw(url, status, &body.to_string());
    }

    pub fn respond_raw(&self, url: &str, status: u16, body: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), (status, body.to_string()));
    }

    /// Record whether the loading indicator is up whenever a request is issued.
    pub fn watch(&self, loading: LoadingIndicator) {
        *self.loading.lock().unwrap() = Some(loading);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn loading_seen(&self) -> Vec<bool> {
        self.loading_seen.lock().unwrap().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
        self.loading_seen.lock().unwrap().clear();
    }
}

#[async_trait]
impl ApiClient for FakeApi {
    async fn get(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = request.to_string();
        self.requests.lock().unwrap().push(url.clone());
        if let Some(loading) = self.loading.lock().unwrap().as_ref() {
            self.loading_seen.lock().unwrap().push(loading.is_visible());
        }

        // Unregistered urls behave like an unreachable server.
        match self.routes.lock().unwrap().get(&url) {
            Some((status, body)) => Ok(ApiResponse {
                status: *status,
                body: body.clone(),
            }),
            None => Err(ClientError::InvalidUrl(url)),
        }
    }
}

pub fn ok(data: Value) -> Value {
    json!({ "success": true, "message": "Request successful", "data": data })
}

pub fn app_with(api: &Arc<FakeApi>) -> App {
    app_with_sections(api, &["github", "posts", "users"])
}

pub fn app_with_sections(api: &Arc<FakeApi>, sections: &[&str]) -> App {
    let app = App::bootstrap(api.clone(), sections).unwrap();
    api.watch(app.loading_indicator());
    app
}

/// The binding currently registered for `action`.
pub fn binding_for(app: &App, action: &Action) -> BindingId {
    app.document()
        .bindings
        .iter()
        .find(|binding| &binding.action == action)
        .map(|binding| binding.id)
        .unwrap_or_else(|| panic!("no binding for {:?}", action))
}

pub fn leanne() -> Value {
    json!({
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "phone": "1-770-736-8031",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        },
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874"
        }
    })
}

pub fn post(id: i64, user_id: i64, title: &str, body: &str) -> Value {
    json!({ "id": id, "userId": user_id, "title": title, "body": body })
}
