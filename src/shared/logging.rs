//! Structured logging for the movie deletion flow
//!
//! Every event carries an `operation` field so a subscriber can filter one
//! stage of the flow (setup, trigger, confirmation, request, navigation).

use crate::domain::models::MovieRef;

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Setup,
    Trigger,
    Confirmation,
    DeleteRequest,
    Navigation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Setup => "setup",
            LogOperation::Trigger => "trigger",
            LogOperation::Confirmation => "confirmation",
            LogOperation::DeleteRequest => "delete_request",
            LogOperation::Navigation => "navigation",
        }
    }
}

/// Log listener installation
pub fn log_listeners_installed(trigger_selector: &str, require_confirmation: bool) {
    tracing::info!(
        operation = LogOperation::Setup.as_str(),
        trigger_selector = trigger_selector,
        require_confirmation = require_confirmation,
        "Delete listeners installed"
    );
}

/// Log a rejected config (defaults are used instead)
pub fn log_config_rejected(error: &str) {
    tracing::warn!(
        operation = LogOperation::Setup.as_str(),
        error = error,
        "Invalid delete config, falling back to defaults"
    );
}

pub fn log_trigger_click(movie: &MovieRef) {
    tracing::debug!(
        operation = LogOperation::Trigger.as_str(),
        user_id = %movie.user_id,
        movie_id = %movie.movie_id,
        "Delete trigger clicked"
    );
}

/// Log a trigger that could not be read (missing data attribute)
pub fn log_trigger_unreadable(error: &str) {
    tracing::warn!(
        operation = LogOperation::Trigger.as_str(),
        error = error,
        "Ignoring unreadable delete trigger"
    );
}

pub fn log_confirmation_shown(movie: &MovieRef) {
    tracing::debug!(
        operation = LogOperation::Confirmation.as_str(),
        user_id = %movie.user_id,
        movie_id = %movie.movie_id,
        "Confirmation modal shown"
    );
}

/// Log a trigger that needed confirmation but had no modal to show
pub fn log_confirmation_unavailable(error: &str) {
    tracing::error!(
        operation = LogOperation::Confirmation.as_str(),
        error = error,
        "Confirmation modal unavailable, deletion aborted"
    );
}

pub fn log_confirmation_dismissed(had_pending: bool) {
    tracing::debug!(
        operation = LogOperation::Confirmation.as_str(),
        had_pending = had_pending,
        "Confirmation modal dismissed"
    );
}

pub fn log_delete_start(path: &str) {
    tracing::info!(
        operation = LogOperation::DeleteRequest.as_str(),
        path = path,
        "Sending DELETE request"
    );
}

pub fn log_delete_failure(path: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::DeleteRequest.as_str(),
        path = path,
        error = error,
        "Failed to delete movie"
    );
}

pub fn log_navigation(url: &str) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        url = url,
        "Movie deleted, redirecting"
    );
}
