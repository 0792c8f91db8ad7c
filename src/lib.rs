// Public API exports (shared between browser and native builds)
pub mod config;
pub mod domain;
pub mod shared;

// Dioxus markup for the delete link and confirmation modal
pub mod app;

// Browser-only glue (NOT compiled natively)
#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use config::{DeleteConfig, ErrorReporting};
pub use domain::models::{MovieRef, PageEvent, RouteTemplate, TriggerAction};
pub use domain::services::{classify_click, classify_key, DeleteFlow, DomNode};
pub use shared::errors::{ConfigError, DeleteError};
pub use shared::services::{HttpMovieService, MovieService, PageEffects};
