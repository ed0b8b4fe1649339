//! Transient blob helpers: save bytes to disk or show them in a new tab

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// How long the object URL behind an opened tab stays valid. Load completion
/// in the new context is not observable from here, and revoking eagerly can
/// race the load.
const VIEW_URL_TTL_MS: u32 = 60_000;

fn bytes_to_blob(bytes: &[u8], mime_type: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_type);

    Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Materialize `bytes` as a temporary object URL and trigger a save under
/// `filename`. The URL is revoked before returning, whatever the user does
/// with the save dialog.
pub fn save_bytes(bytes: &[u8], mime_type: &str, filename: &str) -> Result<(), String> {
    let blob = bytes_to_blob(bytes, mime_type)?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

/// Show `bytes` as a document in a new browsing context.
///
/// The object URL is not revoked here: the new context may not have loaded
/// it yet. A deferred task revokes it after [`VIEW_URL_TTL_MS`].
pub fn open_bytes_in_new_tab(bytes: &[u8], mime_type: &str) -> Result<(), String> {
    let blob = bytes_to_blob(bytes, mime_type)?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let window = web_sys::window().ok_or("No window object")?;
    let opened = window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| format!("Failed to open window: {:?}", e))?;
    if opened.is_none() {
        log::warn!("Browser blocked opening the visualization tab");
    }

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(VIEW_URL_TTL_MS).await;
        Url::revoke_object_url(&url).ok();
    });

    Ok(())
}
