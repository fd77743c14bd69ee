//! Composition root: mounts every behavior against the loaded page and owns
//! everything they leave behind.
//!
//! A behavior that fails to mount is logged and skipped. Dropping the
//! [`Site`] detaches every listener and disconnects every observer.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use std::rc::Rc;

use web_sys::{Document, Window};

use crate::behaviors::{buttons, fade_in, faq, form, keyboard, lazy_images, nav, page_errors, smooth_scroll, swipe};
use crate::config::SiteConfig;
use crate::dom::Listener;
use crate::error::SiteError;
use crate::schedule::{Scheduler, TimeoutScheduler};
use crate::visibility::{WatchHandle, select_watcher};

#[derive(Default)]
pub struct Site {
    listeners: Vec<Listener>,
    watches: Vec<WatchHandle>,
    /// Held apart from `watches` so unload cleanup can drop it alone.
    fade_in: Option<WatchHandle>,
}

/// Unwrap a behavior's mount result, logging and skipping a failure.
fn mounted<T>(behavior: &str, result: Result<T, SiteError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{behavior} disabled: {err}");
            None
        }
    }
}

impl Site {
    #[must_use]
    pub fn mount(window: &Window, document: &Document, config: &SiteConfig) -> Self {
        let scheduler: Rc<dyn Scheduler> = Rc::new(TimeoutScheduler);
        let watcher = select_watcher(window);
        let timing = &config.timing;
        let mut site = Self::default();

        site.keep_listeners(
            "faq",
            faq::mount(document, Rc::clone(&scheduler), timing.faq_focus_ms),
        );
        let lazy = lazy_images::mount(document, watcher.as_ref(), &config.lazy_images);
        if let Some(lazy) = mounted("lazy images", lazy).flatten() {
            site.watches.push(lazy.watch);
            site.listeners.extend(lazy.failure_listeners);
        }
        site.keep_listeners("smooth scroll", smooth_scroll::mount(window, document, &config.nav));
        // The form reserves its submit control before the button manager runs.
        site.keep_listeners(
            "audit form",
            form::mount(window, document, Rc::clone(&scheduler), timing.form_submit_ms, &config.form),
        );
        site.keep_listeners(
            "buttons",
            buttons::mount(window, document, Rc::clone(&scheduler), timing.button_reset_ms),
        );
        site.fade_in = mounted("fade-in", fade_in::mount(document, watcher.as_ref(), &config.fade_in)).flatten();
        site.keep_listeners("swipe", swipe::mount(document, &config.swipe));
        site.keep_listeners("keyboard", keyboard::mount(document));
        site.keep_listeners("page errors", page_errors::mount(window));
        site.keep_listeners("nav", nav::mount(window, document, &config.nav).map(Some));

        site
    }

    fn keep_listeners<I>(&mut self, behavior: &str, result: Result<I, SiteError>)
    where
        I: IntoIterator<Item = Listener>,
    {
        if let Some(listeners) = mounted(behavior, result) {
            self.listeners.extend(listeners);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.watches.len() + usize::from(self.fade_in.is_some())
    }

    /// Stop the fade-in observer. The lazy-image observer and all listeners
    /// stay attached.
    pub fn disconnect_fade_in(&mut self) {
        if self.fade_in.take().is_some() {
            log::debug!("fade-in observer disconnected");
        }
    }
}
