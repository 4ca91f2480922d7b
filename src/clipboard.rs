use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard API unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// `navigator.clipboard.writeText(text)`, looked up at call time so browsers
/// without the API (or insecure origins) report `Unavailable`.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web::window().ok_or(ClipboardError::Unavailable)?;
    let navigator = window.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| ClipboardError::Unavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }
    let write = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .ok_or(ClipboardError::Unavailable)?;
    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| ClipboardError::Unavailable)?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))
}
