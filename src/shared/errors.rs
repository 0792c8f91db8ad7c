use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteError {
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Missing attribute on delete trigger: {attribute}")]
    MissingAttribute { attribute: String },

    #[error("DOM error: {0}")]
    Dom(String),
}

impl DeleteError {
    /// True for failures of the DELETE request itself (as opposed to page wiring).
    pub fn is_request_failure(&self) -> bool {
        matches!(self, DeleteError::Http { .. } | DeleteError::Transport(_))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("Config field {field} is not a plain element id: {value:?}")]
    InvalidId { field: &'static str, value: String },

    #[error("Config field {field} is missing placeholder {placeholder}")]
    MissingPlaceholder {
        field: &'static str,
        placeholder: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, DeleteError>;
