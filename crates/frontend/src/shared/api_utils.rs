//! API utilities for talking to the processing service
//!
//! Provides helper functions for resolving the service address and
//! constructing request URLs.

use wasm_bindgen::JsValue;

/// Window global the hosting page may set before the app starts to point
/// the client at the processing service.
const API_URL_GLOBAL: &str = "PDF_PROCESSOR_API_URL";

/// Get the base URL of the processing service
///
/// The hosting page can set `window.PDF_PROCESSOR_API_URL` at startup; when
/// absent the base falls back to the current host with the service's default
/// port 3000.
///
/// # Returns
/// - Base URL like "http://localhost:3000" (no trailing slash)
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };

    if let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(API_URL_GLOBAL)) {
        if let Some(base) = value.as_string() {
            if !base.is_empty() {
                return base.trim_end_matches('/').to_string();
            }
        }
    }

    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full service URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/upload");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
