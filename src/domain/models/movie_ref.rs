use serde::{Deserialize, Serialize};

use crate::shared::errors::{DeleteError, Result};

/// Identifiers read from a delete trigger's data attributes.
///
/// Both values are opaque to the client and forwarded verbatim into URL paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRef {
    pub user_id: String,
    pub movie_id: String,
}

impl MovieRef {
    pub fn new(user_id: impl Into<String>, movie_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            movie_id: movie_id.into(),
        }
    }

    /// Build from raw attribute values, naming the first missing or blank one.
    pub fn from_attributes(
        user_attribute: &str,
        user_id: Option<String>,
        movie_attribute: &str,
        movie_id: Option<String>,
    ) -> Result<Self> {
        let user_id = require(user_attribute, user_id)?;
        let movie_id = require(movie_attribute, movie_id)?;
        Ok(Self { user_id, movie_id })
    }
}

fn require(attribute: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DeleteError::MissingAttribute {
            attribute: attribute.to_string(),
        }),
    }
}
