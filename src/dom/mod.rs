//! Thin DOM layer shared by every behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! Behaviors never call `web_sys` element methods directly when mutating the
//! page; they go through [`Node`], which `web_sys::Element` implements. Tests
//! swap in the in-memory node from `memory` so the side effects of each
//! behavior are checked natively, without a browser.

pub mod listener;
pub mod live_region;
#[cfg(test)]
pub mod memory;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, NodeList, Window};

use crate::error::SiteError;

pub use listener::{ListenOptions, Listener, listen, listen_once};

/// The element operations behaviors rely on.
///
/// Handles are shared references into the page, so mutation takes `&self`.
pub trait Node {
    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str) -> Result<(), SiteError>;
    fn remove_attr(&self, name: &str) -> Result<(), SiteError>;

    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str) -> Result<(), SiteError>;
    fn remove_class(&self, class: &str) -> Result<(), SiteError>;

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    fn focus(&self) -> Result<(), SiteError>;

    /// Whether the control refuses activation. Controls without a native
    /// `disabled` property report `aria-disabled`.
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool) -> Result<(), SiteError>;
}

impl Node for Element {
    fn attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) -> Result<(), SiteError> {
        self.set_attribute(name, value).map_err(|e| SiteError::dom("setAttribute", &e))
    }

    fn remove_attr(&self, name: &str) -> Result<(), SiteError> {
        self.remove_attribute(name).map_err(|e| SiteError::dom("removeAttribute", &e))
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), SiteError> {
        self.class_list().add_1(class).map_err(|e| SiteError::dom("classList.add", &e))
    }

    fn remove_class(&self, class: &str) -> Result<(), SiteError> {
        self.class_list().remove_1(class).map_err(|e| SiteError::dom("classList.remove", &e))
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn focus(&self) -> Result<(), SiteError> {
        match self.dyn_ref::<HtmlElement>() {
            Some(el) => el.focus().map_err(|e| SiteError::dom("focus", &e)),
            None => Ok(()),
        }
    }

    fn is_disabled(&self) -> bool {
        if let Some(button) = self.dyn_ref::<HtmlButtonElement>() {
            return button.disabled();
        }
        if let Some(input) = self.dyn_ref::<HtmlInputElement>() {
            return input.disabled();
        }
        self.get_attribute("aria-disabled").as_deref() == Some("true")
    }

    fn set_disabled(&self, disabled: bool) -> Result<(), SiteError> {
        if let Some(button) = self.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
            return Ok(());
        }
        if let Some(input) = self.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
            return Ok(());
        }
        if disabled {
            self.set_attr("aria-disabled", "true")
        } else {
            self.remove_attr("aria-disabled")
        }
    }
}

/// The global window and its document.
///
/// # Errors
///
/// Fails outside a browser main thread.
pub fn window_and_document() -> Result<(Window, Document), SiteError> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    let document = window.document().ok_or(SiteError::NoDocument)?;
    Ok((window, document))
}

/// Every element in the document matching `selector`, in document order.
///
/// # Errors
///
/// Fails when `selector` is not a valid CSS selector.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| SiteError::dom("querySelectorAll", &e))?;
    Ok(elements(&list))
}

/// First descendant of `root` matching `selector`. Invalid selectors count
/// as no match.
#[must_use]
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("{}", SiteError::dom("querySelector", &err));
            None
        }
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    let mut out = Vec::new();
    for i in 0..list.length() {
        let Some(node) = list.item(i) else {
            continue;
        };
        if let Ok(el) = node.dyn_into::<Element>() {
            out.push(el);
        }
    }
    out
}

/// Current vertical scroll offset of the page.
#[must_use]
pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_default()
}
