pub mod api_client;
pub mod envelope;
pub mod github_service;
pub mod placeholder_service;
