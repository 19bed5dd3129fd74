use std::sync::Arc;

use crate::error::Result;
use crate::models::envelope::Envelope;
use crate::models::post::Post;
use crate::models::user::User;

use super::api_client::{ApiClient, ApiRequest};
use super::envelope;

pub const LIST_POSTS_FALLBACK: &str = "Failed to fetch posts";
pub const POST_DETAIL_FALLBACK: &str = "Failed to fetch post details";
pub const LIST_USERS_FALLBACK: &str = "Failed to fetch users";
pub const USER_DETAIL_FALLBACK: &str = "Failed to fetch user details";

/// Client for the posts/users demo endpoints.
#[derive(Clone)]
pub struct PlaceholderService {
    pub client: Arc<dyn ApiClient>,
}

impl PlaceholderService {
    pub fn posts_request(user_id: Option<&str>, limit: Option<&str>) -> ApiRequest {
        let mut request = ApiRequest::new("/api/posts");
        if let Some(user_id) = user_id {
            request = request.query("userId", user_id);
        }
        if let Some(limit) = limit {
            request = request.query("limit", limit);
        }
        request
    }

    pub async fn list_posts(&self, user_id: Option<&str>, limit: Option<&str>) -> Result<Envelope<Vec<Post>>> {
        log::info!("Listing posts, userId: {:?}, limit: {:?}", user_id, limit);
        let request = Self::posts_request(user_id, limit);
        envelope::fetch(self.client.as_ref(), &request, LIST_POSTS_FALLBACK).await
    }

    pub async fn get_post(&self, id: i64) -> Result<Envelope<Post>> {
        log::info!("Fetching post {}", id);
        let request = ApiRequest::new(format!("/api/posts/{}", id));
        envelope::fetch(self.client.as_ref(), &request, POST_DETAIL_FALLBACK).await
    }

    pub async fn list_users(&self) -> Result<Envelope<Vec<User>>> {
        log::info!("Listing users");
        let request = ApiRequest::new("/api/users");
        envelope::fetch(self.client.as_ref(), &request, LIST_USERS_FALLBACK).await
    }

    pub async fn get_user(&self, id: i64) -> Result<Envelope<User>> {
        log::info!("Fetching user {}", id);
        let request = ApiRequest::new(format!("/api/users/{}", id));
        envelope::fetch(self.client.as_ref(), &request, USER_DETAIL_FALLBACK).await
    }
}
