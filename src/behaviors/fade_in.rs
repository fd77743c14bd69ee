//! Scroll-triggered reveal of `.fade-in` elements.
//!
//! Elements stay observed after their first reveal, so one that scrolls out
//! and back in re-enters the observer callback. The class is only ever added.

#[cfg(test)]
#[path = "fade_in_test.rs"]
mod fade_in_test;

use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::FadeInConfig;
use crate::consts::VISIBLE_CLASS;
use crate::dom::{self, Node};
use crate::error::{SiteError, report};
use crate::visibility::{EnterCallback, VisibilityWatcher, WatchHandle, WatchOptions};

#[must_use]
pub fn watch_options(config: &FadeInConfig) -> WatchOptions {
    WatchOptions { root_margin: config.root_margin.clone(), threshold: config.threshold, once: false }
}

/// Reveal `elements` as `watcher` reports them visible.
///
/// # Errors
///
/// Fails when the watcher cannot start.
pub fn watch_elements<N: Node + 'static>(
    watcher: &dyn VisibilityWatcher<N>,
    elements: Vec<N>,
    config: &FadeInConfig,
) -> Result<WatchHandle, SiteError> {
    let on_enter: EnterCallback<N> = Rc::new(|el: &N| {
        report(el.add_class(VISIBLE_CLASS));
    });
    watcher.watch(elements, &watch_options(config), on_enter)
}

/// # Errors
///
/// Fails on selector or observer errors.
pub fn mount(
    document: &Document,
    watcher: &dyn VisibilityWatcher<Element>,
    config: &FadeInConfig,
) -> Result<Option<WatchHandle>, SiteError> {
    let elements = dom::query_all(document, ".fade-in")?;
    if elements.is_empty() {
        return Ok(None);
    }
    watch_elements(watcher, elements, config).map(Some)
}
