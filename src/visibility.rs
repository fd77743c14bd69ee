//! Viewport-visibility capability.
//!
//! TRADE-OFFS
//! ==========
//! Lazy images and fade-in both react to elements entering the viewport. The
//! choice between a real `IntersectionObserver` and the "everything is
//! visible now" fallback is made once at startup by [`select_watcher`]; the
//! behaviors only see the [`VisibilityWatcher`] trait.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::error::SiteError;

pub type EnterCallback<N> = Rc<dyn Fn(&N)>;

#[derive(Debug, Clone, PartialEq)]
pub struct WatchOptions {
    /// CSS margin grown around the viewport before testing intersection.
    pub root_margin: String,
    /// Visible fraction that counts as intersecting.
    pub threshold: f64,
    /// Stop watching a target after its first intersection.
    pub once: bool,
}

/// Reports elements entering the viewport.
pub trait VisibilityWatcher<N> {
    /// Start watching `targets`, calling `on_enter` for each one that
    /// becomes visible.
    ///
    /// # Errors
    ///
    /// Fails when the underlying observer cannot be created.
    fn watch(&self, targets: Vec<N>, options: &WatchOptions, on_enter: EnterCallback<N>) -> Result<WatchHandle, SiteError>;
}

/// Keeps a watch alive. Dropping it disconnects the observer.
pub enum WatchHandle {
    Observer {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    },
    Immediate,
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        if let Self::Observer { observer, .. } = self {
            observer.disconnect();
        }
    }
}

/// What the observer does with one intersection entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    Ignore,
    Enter,
    /// Report the target, then stop observing it.
    EnterAndUnobserve,
}

#[must_use]
pub fn entry_action(intersecting: bool, once: bool) -> EntryAction {
    match (intersecting, once) {
        (false, _) => EntryAction::Ignore,
        (true, false) => EntryAction::Enter,
        (true, true) => EntryAction::EnterAndUnobserve,
    }
}

/// Fallback for browsers without `IntersectionObserver`: every target counts
/// as visible right away.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateWatcher;

impl<N> VisibilityWatcher<N> for ImmediateWatcher {
    fn watch(&self, targets: Vec<N>, _options: &WatchOptions, on_enter: EnterCallback<N>) -> Result<WatchHandle, SiteError> {
        for target in &targets {
            on_enter(target);
        }
        Ok(WatchHandle::Immediate)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ObserverWatcher;

impl VisibilityWatcher<Element> for ObserverWatcher {
    fn watch(
        &self,
        targets: Vec<Element>,
        options: &WatchOptions,
        on_enter: EnterCallback<Element>,
    ) -> Result<WatchHandle, SiteError> {
        let once = options.once;
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let action = entry_action(entry.is_intersecting(), once);
                if action == EntryAction::Ignore {
                    continue;
                }
                let target = entry.target();
                on_enter(&target);
                if action == EntryAction::EnterAndUnobserve {
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| SiteError::dom("new IntersectionObserver", &e))?;
        for target in &targets {
            observer.observe(target);
        }
        Ok(WatchHandle::Observer { observer, _callback: callback })
    }
}

/// Pick the observer-backed watcher when the browser has one.
#[must_use]
pub fn select_watcher(window: &Window) -> Rc<dyn VisibilityWatcher<Element>> {
    let supported = js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
    if supported {
        Rc::new(ObserverWatcher)
    } else {
        log::debug!("IntersectionObserver unavailable; revealing content immediately");
        Rc::new(ImmediateWatcher)
    }
}
