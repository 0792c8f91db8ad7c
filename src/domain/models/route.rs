use serde::{Deserialize, Serialize};

use super::MovieRef;

pub const USER_ID_PLACEHOLDER: &str = "{user_id}";
pub const MOVIE_ID_PLACEHOLDER: &str = "{movie_id}";

/// A URL path with `{user_id}` / `{movie_id}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTemplate(String);

impl RouteTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn has_placeholder(&self, placeholder: &str) -> bool {
        self.0.contains(placeholder)
    }

    /// Substitute the identifiers verbatim (no percent-encoding).
    pub fn render(&self, movie: &MovieRef) -> String {
        let mut out = String::with_capacity(self.0.len() + movie.user_id.len() + movie.movie_id.len());
        let mut rest = self.0.as_str();

        // Single pass so substituted values are never scanned for placeholders.
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix(USER_ID_PLACEHOLDER) {
                out.push_str(&movie.user_id);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(MOVIE_ID_PLACEHOLDER) {
                out.push_str(&movie.movie_id);
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }
        out.push_str(rest);
        out
    }
}
