use thiserror::Error;

/// Failures of the HTTP transport itself (no response was received).
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

/// Everything that ends a viewer operation in an error card.
///
/// `Display` is exactly the text shown to the user.
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{fallback}")]
    Unreachable { fallback: String, reason: String },

    #[error("Invalid response from server")]
    InvalidResponse,

    #[error("Failed to render view: {0}")]
    Template(#[from] handlebars::RenderError),
}

/// Configuration problems detected while the application is set up.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("No sections configured")]
    NoSections,

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),
}

/// Problems turning a trigger into an action.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Unknown binding: {0}")]
    UnknownBinding(u64),

    #[error("Failed to render page: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl DispatchError {
    pub fn status_code(&self) -> u16 {
        match self {
            DispatchError::UnknownBinding(_) => 404,
            DispatchError::Render(_) => 500,
        }
    }
}

pub type Result<T, E = ViewError> = std::result::Result<T, E>;
