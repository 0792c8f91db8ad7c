use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, KeyboardEvent, Node};

use crate::browser::page::BrowserPage;
use crate::config::DeleteConfig;
use crate::domain::models::MovieRef;
use crate::domain::services::{classify_click, classify_key, DeleteFlow};
use crate::shared::errors::{DeleteError, Result};
use crate::shared::logging;
use crate::shared::services::HttpMovieService;

pub type BrowserFlow = DeleteFlow<HttpMovieService, BrowserPage>;

fn js_error(context: &str, value: JsValue) -> DeleteError {
    let detail = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    DeleteError::Dom(format!("{}: {}", context, detail))
}

/// Clicks on text inside a link report the text node as target.
fn event_element(event: &Event) -> Option<Element> {
    let node = event.target()?.dyn_into::<Node>().ok()?;
    match node.dyn_into::<Element>() {
        Ok(element) => Some(element),
        Err(node) => node.parent_element(),
    }
}

fn spawn_delete(flow: &BrowserFlow, movie: MovieRef) {
    let flow = flow.clone();
    spawn_local(async move {
        // Failures are already reported to the page by the flow.
        let _ = flow.delete(movie).await;
    });
}

/// Register one delegated click listener and one keydown listener on the
/// document. Rows added after this call are covered too.
pub fn install(config: DeleteConfig) -> Result<BrowserFlow> {
    let page = BrowserPage::new(&config)?;
    let document = page.document().clone();
    let require_confirmation = config.require_confirmation;
    let service = HttpMovieService::with_base_url(config.api_base_url.clone());
    let flow = DeleteFlow::new(config, service, page);

    let click_flow = flow.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(target) = event_element(&event) else {
            return;
        };
        let page_event = classify_click(&target, click_flow.config());
        if page_event.prevents_default() {
            event.prevent_default();
        }
        if let Some(movie) = click_flow.handle(page_event) {
            spawn_delete(&click_flow, movie);
        }
    });
    document
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| js_error("click listener", e))?;
    // Listeners live for the whole page.
    on_click.forget();

    let key_flow = flow.clone();
    let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let page_event = classify_key(&event.key(), key_flow.is_awaiting_confirmation());
        key_flow.handle(page_event);
    });
    document
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        .map_err(|e| js_error("keydown listener", e))?;
    on_keydown.forget();

    logging::log_listeners_installed(&flow.config().trigger_selector, require_confirmation);
    Ok(flow)
}
