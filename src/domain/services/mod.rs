pub mod delete_flow;
pub mod event_routing;

pub use delete_flow::DeleteFlow;
pub use event_routing::{classify_click, classify_key, DomNode};
