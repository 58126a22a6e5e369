//! Small browser helpers: external links, the signed-in user's name, timers.

use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;

use nutri_core::event_bus::EventBus;
use nutri_types::{NutriError, Result, event::AppEvent};

const USER_STORAGE_KEY: &str = "user";

/// Open a link in a new browsing context without leaking the opener or referrer
pub fn open_external(url: &str) -> Result<()> {
    if !is_safe_link(url) {
        return Err(NutriError::Validation(format!("refusing to open link: {}", url)));
    }
    gloo_utils::window()
        .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
        .map_err(|e| NutriError::JsInterop(format!("{:?}", e)))?;
    Ok(())
}

/// Only web and mail links are opened; anything else (e.g. `javascript:`) is dropped
pub fn is_safe_link(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    ["https://", "http://", "mailto:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}

#[derive(Deserialize)]
struct StoredUser {
    name: Option<String>,
}

/// Display name the auth layer left in `localStorage["user"]`, if any
pub fn current_user_name() -> Option<String> {
    let storage = gloo_utils::window().local_storage().ok().flatten()?;
    let raw = storage.get_item(USER_STORAGE_KEY).ok().flatten()?;
    parse_user_name(&raw)
}

pub fn parse_user_name(raw: &str) -> Option<String> {
    serde_json::from_str::<StoredUser>(raw)
        .ok()
        .and_then(|u| u.name)
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

/// Publish `ToastExpired { id }` after `delay_ms`
pub fn schedule_toast_expiry(bus: EventBus, id: u64, delay_ms: u32) {
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        bus.emit(AppEvent::ToastExpired { id });
    });
}
