use serde::Deserialize;

/// One entry of the GitHub users listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubUserSummary {
    pub id: i64,
    pub login: String,
    #[serde(alias = "avatar_url")]
    pub avatar_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubUserDetail {
    pub login: String,
    #[serde(default, alias = "avatar_url")]
    pub avatar_url: Option<String>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub blog: Option<String>,
    #[serde(alias = "public_repos")]
    pub public_repos: Option<u64>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    #[serde(alias = "public_gists")]
    pub public_gists: Option<u64>,
}
