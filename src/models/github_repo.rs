use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(alias = "stargazers_count")]
    pub stargazers_count: Option<u64>,
    #[serde(alias = "forks_count")]
    pub forks_count: Option<u64>,
    #[serde(alias = "html_url")]
    pub html_url: String,
}
