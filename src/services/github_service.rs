use std::sync::Arc;

use crate::error::Result;
use crate::models::envelope::Envelope;
use crate::models::github_repo::GitHubRepo;
use crate::models::github_user::{GitHubUserDetail, GitHubUserSummary};

use super::api_client::{ApiClient, ApiRequest};
use super::envelope;

pub const LIST_USERS_FALLBACK: &str = "Failed to fetch GitHub users";
pub const USER_DETAIL_FALLBACK: &str = "Failed to fetch user details";
pub const REPOS_FALLBACK: &str = "Failed to fetch repositories";

/// Client for the `/api/github` endpoint family.
#[derive(Clone)]
pub struct GitHubService {
    pub client: Arc<dyn ApiClient>,
}

impl GitHubService {
    pub fn users_request(since: &str, per_page: &str) -> ApiRequest {
        ApiRequest::new("/api/github/users")
            .query("since", since)
            .query("perPage", per_page)
    }

    pub fn user_request(username: &str) -> ApiRequest {
        ApiRequest::new(format!("/api/github/users/{}", urlencoding::encode(username)))
    }

    pub fn repos_request(username: &str, page: u32, per_page: u32) -> ApiRequest {
        ApiRequest::new(format!("/api/github/users/{}/repos", urlencoding::encode(username)))
            .query("page", page)
            .query("perPage", per_page)
    }

    pub async fn list_users(&self, since: &str, per_page: &str) -> Result<Envelope<Vec<GitHubUserSummary>>> {
        log::info!("Listing GitHub users, since: {}, perPage: {}", since, per_page);
        let request = Self::users_request(since, per_page);
        envelope::fetch(self.client.as_ref(), &request, LIST_USERS_FALLBACK).await
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Envelope<GitHubUserDetail>> {
        log::info!("Fetching GitHub user, username: {}", username);
        let request = Self::user_request(username);
        envelope::fetch(self.client.as_ref(), &request, USER_DETAIL_FALLBACK).await
    }

    pub async fn list_repos(&self, username: &str, page: u32, per_page: u32) -> Result<Envelope<Vec<GitHubRepo>>> {
        log::info!("Listing repositories, username: {}, page: {}", username, page);
        let request = Self::repos_request(username, page, per_page);
        envelope::fetch(self.client.as_ref(), &request, REPOS_FALLBACK).await
    }
}
