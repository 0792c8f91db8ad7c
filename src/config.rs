//! Handler configuration
//!
//! Defaults match the MovieWeb templates: `.delete-movie` links carrying
//! `data-user` / `data-movie`, and a `#myModal` confirmation dialog.
//! A page can override any field by embedding JSON in a
//! `<script type="application/json" id="delete-movie-config">` element.

use serde::{Deserialize, Serialize};

use crate::domain::models::{RouteTemplate, MOVIE_ID_PLACEHOLDER, USER_ID_PLACEHOLDER};
use crate::shared::errors::ConfigError;

/// Id of the optional script element holding a JSON config.
pub const CONFIG_ELEMENT_ID: &str = "delete-movie-config";

pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to delete movie";

/// How a failed deletion is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorReporting {
    /// Console entry only.
    Console,
    /// Console entry plus a blocking alert.
    #[default]
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteConfig {
    pub trigger_selector: String,
    pub user_attribute: String,
    pub movie_attribute: String,
    pub modal_id: String,
    pub confirm_id: String,
    pub cancel_id: String,
    /// Matched only inside the modal.
    pub close_selector: String,
    pub require_confirmation: bool,
    pub error_reporting: ErrorReporting,
    pub delete_route: RouteTemplate,
    pub redirect_route: RouteTemplate,
    pub failure_message: String,
    /// Prefix for request URLs; empty means same origin.
    pub api_base_url: String,
}

impl Default for DeleteConfig {
    fn default() -> Self {
        Self {
            trigger_selector: ".delete-movie".to_string(),
            user_attribute: "data-user".to_string(),
            movie_attribute: "data-movie".to_string(),
            modal_id: "myModal".to_string(),
            confirm_id: "confirmDelete".to_string(),
            cancel_id: "cancelDelete".to_string(),
            close_selector: ".close".to_string(),
            require_confirmation: true,
            error_reporting: ErrorReporting::Alert,
            delete_route: RouteTemplate::new("/users/{user_id}/delete_movie/{movie_id}"),
            redirect_route: RouteTemplate::new("/users/{user_id}"),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
            api_base_url: String::new(),
        }
    }
}

impl DeleteConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DeleteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("trigger_selector", &self.trigger_selector),
            ("user_attribute", &self.user_attribute),
            ("movie_attribute", &self.movie_attribute),
            ("modal_id", &self.modal_id),
            ("confirm_id", &self.confirm_id),
            ("cancel_id", &self.cancel_id),
            ("close_selector", &self.close_selector),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(field));
            }
        }

        if !self.delete_route.has_placeholder(USER_ID_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder {
                field: "delete_route",
                placeholder: USER_ID_PLACEHOLDER,
            });
        }
        if !self.delete_route.has_placeholder(MOVIE_ID_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder {
                field: "delete_route",
                placeholder: MOVIE_ID_PLACEHOLDER,
            });
        }
        if !self.redirect_route.has_placeholder(USER_ID_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder {
                field: "redirect_route",
                placeholder: USER_ID_PLACEHOLDER,
            });
        }
        for (field, value) in [
            ("modal_id", &self.modal_id),
            ("confirm_id", &self.confirm_id),
            ("cancel_id", &self.cancel_id),
        ] {
            if !is_plain_id(value) {
                return Err(ConfigError::InvalidId {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn modal_selector(&self) -> String {
        format!("#{}", self.modal_id)
    }

    pub fn confirm_selector(&self) -> String {
        format!("#{}", self.confirm_id)
    }

    pub fn cancel_selector(&self) -> String {
        format!("#{}", self.cancel_id)
    }
}

/// Ids end up in `#id` selectors unescaped, so only plain CSS identifiers pass.
fn is_plain_id(id: &str) -> bool {
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
