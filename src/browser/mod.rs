//! Browser glue (wasm32 only)
//!
//! The generated module is loaded with `<script type="module">`, which runs
//! after the document is parsed, so the config element and modal are present.

pub mod listeners;
pub mod page;

use wasm_bindgen::prelude::*;

use crate::config::{DeleteConfig, CONFIG_ELEMENT_ID};
use crate::shared::logging;

pub use listeners::{install, BrowserFlow};
pub use page::BrowserPage;

/// Read the page's embedded config, falling back to defaults.
pub fn load_config() -> DeleteConfig {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(json) = json else {
        return DeleteConfig::default();
    };

    match DeleteConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            logging::log_config_rejected(&e.to_string());
            web_sys::console::warn_1(&format!("[movieweb] {}; using defaults", e).into());
            DeleteConfig::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    match install(load_config()) {
        Ok(_) => web_sys::console::log_1(&"[movieweb] delete handler ready".into()),
        Err(e) => web_sys::console::error_1(&format!("[movieweb] {}", e).into()),
    }
}
