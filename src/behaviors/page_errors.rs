//! Passive logging of page-wide failures.
//!
//! Resource load errors and unhandled promise rejections are logged and
//! otherwise ignored. Nothing here alters page behavior.

#[cfg(test)]
#[path = "page_errors_test.rs"]
mod page_errors_test;

use std::fmt;

use wasm_bindgen::JsCast;
use web_sys::{Element, ErrorEvent, Event, PromiseRejectionEvent, Window};

use crate::dom::{self, ListenOptions, Listener};
use crate::error::{SiteError, js_message};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageFault {
    /// An `<img>`, `<script>`, `<link>` or similar failed to load.
    Resource { url: Option<String> },
    /// An uncaught script error.
    Script { message: String },
    Rejection { reason: String },
}

impl fmt::Display for PageFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource { url: Some(url) } => write!(f, "resource failed to load: {url}"),
            Self::Resource { url: None } => write!(f, "resource failed to load"),
            Self::Script { message } => write!(f, "uncaught error: {message}"),
            Self::Rejection { reason } => write!(f, "unhandled promise rejection: {reason}"),
        }
    }
}

/// Pick the URL that identifies a failed resource, preferring `src`.
#[must_use]
pub fn resource_url(src: Option<String>, href: Option<String>) -> Option<String> {
    src.filter(|s| !s.is_empty()).or_else(|| href.filter(|h| !h.is_empty()))
}

fn classify_error(event: &Event) -> PageFault {
    if let Some(err) = event.dyn_ref::<ErrorEvent>() {
        return PageFault::Script { message: err.message() };
    }
    let target = event.target();
    let url = target
        .as_ref()
        .and_then(|t| t.dyn_ref::<Element>())
        .and_then(|el| resource_url(el.get_attribute("src"), el.get_attribute("href")));
    PageFault::Resource { url }
}

fn classify_rejection(event: &Event) -> PageFault {
    let reason = event
        .dyn_ref::<PromiseRejectionEvent>()
        .map_or_else(|| "unknown".to_owned(), |e| js_message(&e.reason()));
    PageFault::Rejection { reason }
}

/// # Errors
///
/// Fails if the listeners cannot be registered.
pub fn mount(window: &Window) -> Result<Vec<Listener>, SiteError> {
    // Resource errors do not bubble; listen in the capture phase.
    let errors = dom::listen(window, "error", ListenOptions::capture(), |event| {
        log::warn!("{}", classify_error(&event));
    })?;
    let rejections = dom::listen(window, "unhandledrejection", ListenOptions::default(), |event| {
        log::warn!("{}", classify_rejection(&event));
    })?;
    Ok(vec![errors, rejections])
}
