//! The movie deletion flow
//!
//! Trigger → (confirmation) → DELETE → redirect or error report.
//! The pending movie doubles as the modal's visibility flag: it is set when
//! the modal opens and taken out on confirm or dismiss. A confirmation click
//! therefore consumes it exactly once, and repeated clicks on the confirm
//! control cannot send duplicate requests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{DeleteConfig, ErrorReporting};
use crate::domain::models::{MovieRef, PageEvent, TriggerAction};
use crate::shared::errors::{DeleteError, Result};
use crate::shared::logging;
use crate::shared::services::{MovieService, PageEffects};

struct FlowInner<S, P> {
    config: DeleteConfig,
    service: S,
    page: P,
    pending: RefCell<Option<MovieRef>>,
}

/// Cheap to clone; clones share the pending slot.
pub struct DeleteFlow<S, P> {
    inner: Rc<FlowInner<S, P>>,
}

impl<S, P> Clone for DeleteFlow<S, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: MovieService, P: PageEffects> DeleteFlow<S, P> {
    pub fn new(config: DeleteConfig, service: S, page: P) -> Self {
        Self {
            inner: Rc::new(FlowInner {
                config,
                service,
                page,
                pending: RefCell::new(None),
            }),
        }
    }

    pub fn config(&self) -> &DeleteConfig {
        &self.inner.config
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        self.inner.pending.borrow().is_some()
    }

    pub fn pending(&self) -> Option<MovieRef> {
        self.inner.pending.borrow().clone()
    }

    pub fn on_trigger(&self, movie: MovieRef) -> TriggerAction {
        logging::log_trigger_click(&movie);

        if !self.inner.config.require_confirmation {
            return TriggerAction::Delete(movie);
        }

        // A newer trigger replaces whatever was waiting.
        *self.inner.pending.borrow_mut() = Some(movie.clone());
        if let Err(e) = self.inner.page.show_modal() {
            // No way to confirm, so nothing is deleted.
            self.inner.pending.borrow_mut().take();
            logging::log_confirmation_unavailable(&e.to_string());
            self.report(&e);
            return TriggerAction::Aborted(e);
        }
        logging::log_confirmation_shown(&movie);
        TriggerAction::AwaitConfirmation
    }

    /// Take the pending movie and close the modal. `None` if nothing waits.
    pub fn on_confirm(&self) -> Option<MovieRef> {
        let movie = self.inner.pending.borrow_mut().take()?;
        self.inner.page.hide_modal();
        Some(movie)
    }

    pub fn on_dismiss(&self) {
        let had_pending = self.inner.pending.borrow_mut().take().is_some();
        logging::log_confirmation_dismissed(had_pending);
        self.inner.page.hide_modal();
    }

    /// Send the DELETE, then redirect on success or report on failure.
    ///
    /// Returns the redirect URL. Errors are reported to the page before being
    /// returned; nothing is retried.
    pub async fn delete(&self, movie: MovieRef) -> Result<String> {
        let config = &self.inner.config;
        let path = config.delete_route.render(&movie);
        logging::log_delete_start(&path);

        match self.inner.service.delete_movie(&path).await {
            Ok(()) => {
                let url = config.redirect_route.render(&movie);
                logging::log_navigation(&url);
                self.inner.page.navigate(&url);
                Ok(url)
            }
            Err(e) => {
                logging::log_delete_failure(&path, &e.to_string());
                self.report(&e);
                Err(e)
            }
        }
    }

    fn report(&self, error: &DeleteError) {
        let page = &self.inner.page;
        page.log_error(&format!("Error deleting movie: {}", error));
        if self.inner.config.error_reporting == ErrorReporting::Alert {
            page.alert(&self.inner.config.failure_message);
        }
    }

    /// Apply a classified page event. Returns the movie to delete, if any;
    /// the caller decides how to drive the request future.
    pub fn handle(&self, event: PageEvent) -> Option<MovieRef> {
        match event {
            PageEvent::Trigger(movie) => match self.on_trigger(movie) {
                TriggerAction::Delete(movie) => Some(movie),
                TriggerAction::AwaitConfirmation | TriggerAction::Aborted(_) => None,
            },
            PageEvent::BrokenTrigger(e) => {
                logging::log_trigger_unreadable(&e.to_string());
                self.inner.page.log_error(&format!("Error deleting movie: {}", e));
                None
            }
            PageEvent::Confirm => self.on_confirm(),
            PageEvent::Dismiss => {
                self.on_dismiss();
                None
            }
            PageEvent::Ignored => None,
        }
    }

    /// `handle` followed by the request, for callers that can await inline.
    pub async fn dispatch(&self, event: PageEvent) -> Option<Result<String>> {
        let movie = self.handle(event)?;
        Some(self.delete(movie).await)
    }
}
