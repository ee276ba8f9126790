//! Browser Helpers
//!
//! Thin wrappers over `window` APIs used by the views.

use wasm_bindgen_futures::JsFuture;
use web_sys::{CustomEvent, CustomEventInit};

use market_core::detail::{ChatTarget, OPEN_CHAT_EVENT};

/// Current location as (pathname, search)
pub fn location() -> (String, String) {
    web_sys::window()
        .map(|window| {
            let location = window.location();
            (
                location.pathname().unwrap_or_default(),
                location.search().unwrap_or_default(),
            )
        })
        .unwrap_or_default()
}

pub fn current_href() -> String {
    web_sys::window()
        .and_then(|window| window.location().href().ok())
        .unwrap_or_default()
}

pub fn navigate(url: &str) {
    log::info!("navigating to {url}");
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            log::error!("navigation to {url} failed: {e:?}");
        }
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write failed: {:?}", e))
}

/// Ask the chat widget to open a conversation with the seller.
pub fn open_chat(target: &ChatTarget) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let detail = serde_wasm_bindgen::to_value(target)
        .map_err(|e| format!("Failed to serialize chat target: {}", e))?;

    let init = CustomEventInit::new();
    init.set_detail(&detail);
    let event = CustomEvent::new_with_event_init_dict(OPEN_CHAT_EVENT, &init)
        .map_err(|e| format!("Failed to create event: {:?}", e))?;
    window
        .dispatch_event(&event)
        .map(|_| ())
        .map_err(|e| format!("Failed to dispatch event: {:?}", e))
}

