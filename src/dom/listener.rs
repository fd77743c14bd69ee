//! Event listener registration with drop-based removal.
//!
//! A [`Listener`] owns its closure. Dropping it detaches the handler, so the
//! mounted site controls the lifetime of every handler it installs.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::SiteError;

/// Flags passed to `addEventListener`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListenOptions {
    pub passive: bool,
    pub capture: bool,
}

impl ListenOptions {
    #[must_use]
    pub fn passive() -> Self {
        Self { passive: true, capture: false }
    }

    #[must_use]
    pub fn capture() -> Self {
        Self { passive: false, capture: true }
    }
}

pub struct Listener {
    target: EventTarget,
    event: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self.target.remove_event_listener_with_callback_and_bool(
            self.event,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        ) {
            log::debug!("{}", SiteError::dom("removeEventListener", &err));
        }
    }
}

/// Attach `handler` to `target` for `event`.
///
/// # Errors
///
/// Fails if the browser rejects the registration.
pub fn listen<F>(target: &EventTarget, event: &'static str, options: ListenOptions, handler: F) -> Result<Listener, SiteError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let opts = AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_capture(options.capture);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(event, callback.as_ref().unchecked_ref(), &opts)
        .map_err(|e| SiteError::dom("addEventListener", &e))?;
    Ok(Listener { target: target.clone(), event, capture: options.capture, callback })
}

/// Attach a handler that runs at most once and frees itself afterwards.
///
/// Used for page lifecycle events that fire before a [`Site`](crate::site::Site)
/// exists or after it stops mattering.
///
/// # Errors
///
/// Fails if the browser rejects the registration.
pub fn listen_once<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    F: FnOnce(Event) + 'static,
{
    let callback = Closure::once_into_js(handler);
    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(event, callback.unchecked_ref(), &opts)
        .map_err(|e| SiteError::dom("addEventListener", &e))
}
