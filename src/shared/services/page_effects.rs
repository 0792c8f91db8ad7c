use crate::shared::errors::Result;

/// Side effects the deletion flow has on the page.
///
/// The browser implementation lives in `crate::browser`; tests record calls.
pub trait PageEffects {
    /// Fails when the page has no modal to show.
    fn show_modal(&self) -> Result<()>;
    fn hide_modal(&self);
    fn navigate(&self, url: &str);
    /// Developer console entry.
    fn log_error(&self, message: &str);
    /// Blocking user-facing alert.
    fn alert(&self, message: &str);
}
