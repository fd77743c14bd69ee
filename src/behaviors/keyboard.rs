//! Keyboard-vs-pointer modality flag on `<body>`.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use crate::consts::KEYBOARD_NAV_CLASS;
use crate::dom::{self, ListenOptions, Listener, Node};
use crate::error::{SiteError, report};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputModality {
    #[default]
    Pointer,
    Keyboard,
}

/// Tab switches to keyboard styling; any mouse press switches back.
pub fn on_key_down<N: Node>(body: &N, key: &str) -> Result<Option<InputModality>, SiteError> {
    if key != "Tab" {
        return Ok(None);
    }
    body.add_class(KEYBOARD_NAV_CLASS)?;
    Ok(Some(InputModality::Keyboard))
}

pub fn on_mouse_down<N: Node>(body: &N) -> Result<InputModality, SiteError> {
    body.remove_class(KEYBOARD_NAV_CLASS)?;
    Ok(InputModality::Pointer)
}

/// # Errors
///
/// Fails without a body or if the listeners cannot be registered.
pub fn mount(document: &Document) -> Result<Vec<Listener>, SiteError> {
    let body: Element = document.body().ok_or(SiteError::NoBody)?.into();

    let key_body = body.clone();
    let keys = dom::listen(document, "keydown", ListenOptions::default(), move |event| {
        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
            report(on_key_down(&key_body, &key_event.key()));
        }
    })?;
    let mouse = dom::listen(document, "mousedown", ListenOptions::default(), move |_| {
        report(on_mouse_down(&body));
    })?;
    Ok(vec![keys, mouse])
}
