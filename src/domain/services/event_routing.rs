//! Delegated event classification
//!
//! One listener on the document sees every click. The clicked node is walked
//! up with `closest()` to find which part of the flow it belongs to, so rows
//! inserted after page load are handled like the initial ones.

use keyboard_types::Key;

use crate::config::DeleteConfig;
use crate::domain::models::{MovieRef, PageEvent};

/// Minimal element interface needed to classify events.
pub trait DomNode: Sized {
    /// Nearest inclusive ancestor matching `selector`.
    fn closest(&self, selector: &str) -> Option<Self>;
    fn attribute(&self, name: &str) -> Option<String>;
}

pub fn classify_click<N: DomNode>(target: &N, config: &DeleteConfig) -> PageEvent {
    if target.closest(&config.confirm_selector()).is_some() {
        return PageEvent::Confirm;
    }
    if target.closest(&config.cancel_selector()).is_some() {
        return PageEvent::Dismiss;
    }
    if let Some(close) = target.closest(&config.close_selector) {
        if close.closest(&config.modal_selector()).is_some() {
            return PageEvent::Dismiss;
        }
    }

    match target.closest(&config.trigger_selector) {
        Some(trigger) => read_trigger(&trigger, config),
        None => PageEvent::Ignored,
    }
}

fn read_trigger<N: DomNode>(trigger: &N, config: &DeleteConfig) -> PageEvent {
    let movie = MovieRef::from_attributes(
        &config.user_attribute,
        trigger.attribute(&config.user_attribute),
        &config.movie_attribute,
        trigger.attribute(&config.movie_attribute),
    );
    match movie {
        Ok(movie) => PageEvent::Trigger(movie),
        Err(e) => PageEvent::BrokenTrigger(e),
    }
}

/// Escape dismisses the modal while a deletion awaits confirmation.
pub fn classify_key(key: &str, awaiting_confirmation: bool) -> PageEvent {
    match key.parse::<Key>() {
        Ok(Key::Escape) if awaiting_confirmation => PageEvent::Dismiss,
        _ => PageEvent::Ignored,
    }
}
