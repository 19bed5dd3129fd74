pub mod common;
pub mod github;
pub mod page;
pub mod posts;
pub mod users;
