//! Error types shared by every behavior.
//!
//! A behavior that fails to mount is logged and skipped; the rest of the page
//! keeps working. Per-element DOM failures go through [`report`] and never
//! propagate past the element they concern.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("DOM operation `{op}` failed: {message}")]
    Dom { op: &'static str, message: String },
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl SiteError {
    /// Wrap a JavaScript exception thrown by a DOM call.
    #[must_use]
    pub fn dom(op: &'static str, err: &JsValue) -> Self {
        Self::Dom { op, message: js_message(err) }
    }
}

/// Best-effort human readable text for a thrown JavaScript value.
#[must_use]
pub fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

/// Log a failed DOM mutation and carry on.
pub fn report<T>(result: Result<T, SiteError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{err}");
            None
        }
    }
}
