pub mod envelope;
pub mod github_repo;
pub mod github_user;
pub mod post;
pub mod user;
