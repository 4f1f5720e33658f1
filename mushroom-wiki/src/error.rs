//! Error types for catalog loading and page fetching.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WikiError {
    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("Unexpected HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WikiError {
    /// Text shown to the chat user when looking up `name` failed with this error.
    pub fn user_message(&self, name: &str) -> String {
        match self {
            WikiError::NotFound(_) => {
                format!("Couldn't find a page for '{}'. Try something else!", name)
            }
            _ => format!("Something went wrong looking up {}.", name),
        }
    }
}

pub type Result<T> = std::result::Result<T, WikiError>;
