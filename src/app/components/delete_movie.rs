use dioxus::prelude::*;

use crate::config::DeleteConfig;

/// Markup matches the default `DeleteConfig`; pages with custom selectors
/// render their own links and modal.
const TRIGGER_CLASS: &str = "delete-movie";
const CLOSE_CLASS: &str = "close";

/// Delete link for one movie row.
/// The document-level listener picks it up through its class and data attributes.
#[component]
pub fn DeleteMovieLink(
    user_id: String,
    movie_id: String,
    #[props(default = "Delete")]
    label: &'static str,
) -> Element {
    rsx! {
        a {
            class: "{TRIGGER_CLASS} c-delete-movie",
            href: "#",
            "data-user": "{user_id}",
            "data-movie": "{movie_id}",
            "{label}"
        }
    }
}

/// Confirmation modal, hidden until a delete link is clicked.
/// Uses CSS classes: c-modal, c-modal__content, c-modal__close, c-modal__actions
#[component]
pub fn DeleteMovieModal(
    #[props(default = "Are you sure you want to delete this movie?")]
    message: &'static str,
) -> Element {
    let config = DeleteConfig::default();

    rsx! {
        div {
            id: "{config.modal_id}",
            class: "c-modal",
            style: "display: none;",
            div { class: "c-modal__content",
                span { class: "{CLOSE_CLASS} c-modal__close", "×" }
                p { class: "c-modal__message", "{message}" }
                div { class: "c-modal__actions",
                    button {
                        id: "{config.confirm_id}",
                        class: "c-modal__btn c-modal__btn--danger",
                        "Yes, Delete"
                    }
                    button {
                        id: "{config.cancel_id}",
                        class: "c-modal__btn c-modal__btn--cancel",
                        "Cancel"
                    }
                }
            }
        }
    }
}
