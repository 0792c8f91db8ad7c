use super::MovieRef;
use crate::shared::errors::DeleteError;

/// What a delegated click (or key press) means for the deletion flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// A delete trigger was clicked; its default navigation must be prevented.
    Trigger(MovieRef),
    /// A delete trigger without usable identifiers.
    BrokenTrigger(DeleteError),
    /// The modal's confirm control was activated.
    Confirm,
    /// Cancel, close or Escape.
    Dismiss,
    /// Unrelated to the flow.
    Ignored,
}

impl PageEvent {
    /// Trigger clicks are links: their default action is always prevented.
    pub fn prevents_default(&self) -> bool {
        matches!(self, PageEvent::Trigger(_) | PageEvent::BrokenTrigger(_))
    }
}

/// Result of a trigger click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerAction {
    /// The modal is shown and the movie waits for confirmation.
    AwaitConfirmation,
    /// Confirmation is disabled: delete right away.
    Delete(MovieRef),
    /// Confirmation is required but the modal could not be shown; nothing is deleted.
    Aborted(DeleteError),
}
