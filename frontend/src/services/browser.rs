//! Browser-side effects: file downloads and clipboard access.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, Clipboard, HtmlAnchorElement, Url};

use crate::types::{AppError, AppResult};

fn browser_err(context: &str, e: JsValue) -> AppError {
    AppError::Browser(format!("{}: {:?}", context, e))
}

/// Offer `content` as a file download named `filename`.
///
/// Builds a blob URL, clicks a detached anchor pointing at it, then
/// revokes the URL.
pub fn download_text(content: &str, filename: &str, mime: &str) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Browser("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| AppError::Browser("no document".into()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| browser_err("Failed to create Blob", e))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| browser_err("Failed to create object URL", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| browser_err("Failed to create anchor", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| AppError::Browser("Element is not an anchor".into()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).map_err(|e| browser_err("Failed to revoke object URL", e))?;

    log::info!("💾 Downloaded {}", filename);
    Ok(())
}

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Browser("no global window".into()))?;

    // Not every context exposes navigator.clipboard (plain http, old browsers).
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .ok_or_else(|| AppError::Browser("Clipboard is not available".into()))?
        .unchecked_into::<Clipboard>();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|e| browser_err("Clipboard write failed", e))?;

    log::info!("📋 Copied {} bytes to clipboard", text.len());
    Ok(())
}
