// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod movie_ref;
pub mod route;
pub mod page_event;

pub use movie_ref::MovieRef;
pub use route::{RouteTemplate, USER_ID_PLACEHOLDER, MOVIE_ID_PLACEHOLDER};
pub use page_event::{PageEvent, TriggerAction};
