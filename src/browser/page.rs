use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::DeleteConfig;
use crate::domain::services::DomNode;
use crate::shared::errors::{DeleteError, Result};
use crate::shared::services::PageEffects;

/// `PageEffects` over the live document.
pub struct BrowserPage {
    window: Window,
    document: Document,
    modal_id: String,
}

impl BrowserPage {
    pub fn new(config: &DeleteConfig) -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| DeleteError::Dom("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| DeleteError::Dom("no document".to_string()))?;
        Ok(Self {
            window,
            document,
            modal_id: config.modal_id.clone(),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn set_modal_display(&self, display: &str) -> Result<()> {
        let modal = self
            .document
            .get_element_by_id(&self.modal_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| DeleteError::Dom(format!("confirmation modal #{} not found", self.modal_id)))?;
        modal
            .style()
            .set_property("display", display)
            .map_err(|e| DeleteError::Dom(format!("failed to toggle modal: {:?}", e)))
    }
}

impl PageEffects for BrowserPage {
    fn show_modal(&self) -> Result<()> {
        self.set_modal_display("block")
    }

    fn hide_modal(&self) {
        // Nothing to hide when the modal is missing; show_modal already reported it.
        if let Err(e) = self.set_modal_display("none") {
            tracing::debug!("{}", e);
        }
    }

    fn navigate(&self, url: &str) {
        if let Err(e) = self.window.location().set_href(url) {
            web_sys::console::error_1(&format!("Navigation to {} failed: {:?}", url, e).into());
        }
    }

    fn log_error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            web_sys::console::error_1(&format!("Alert \"{}\" failed: {:?}", message, e).into());
        }
    }
}

impl DomNode for web_sys::Element {
    fn closest(&self, selector: &str) -> Option<Self> {
        // An invalid selector matches nothing.
        web_sys::Element::closest(self, selector).ok().flatten()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}
