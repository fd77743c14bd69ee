//! Smooth scrolling for same-page anchors, offset by the fixed nav bar.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::NavConfig;
use crate::consts::NAVBAR_ID;
use crate::dom::{self, ListenOptions, Listener};
use crate::error::SiteError;

/// Whether a `#...` href names a real in-page target.
#[must_use]
pub fn is_routable(href: Option<&str>) -> bool {
    matches!(href, Some(h) if !h.is_empty() && h != "#")
}

/// What a click on an in-page anchor should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<T> {
    /// Bare `#` or no href; the click is left alone.
    Skip,
    /// No element matches the href, or it is not a valid selector. The click
    /// is left alone and the href is logged.
    Missing(String),
    /// Cancel the default jump and scroll to the target.
    Scroll(T),
}

/// Decide how to handle a click on an anchor with `href`, looking the target
/// up with `find` only when the href is routable.
#[must_use]
pub fn route<T>(href: Option<&str>, find: impl FnOnce(&str) -> Option<T>) -> Route<T> {
    let Some(href) = href.filter(|h| is_routable(Some(*h))) else {
        return Route::Skip;
    };
    match find(href) {
        Some(target) => Route::Scroll(target),
        None => Route::Missing(href.to_owned()),
    }
}

/// Height reserved for the nav bar: its measured height, or the fallback.
#[must_use]
pub fn nav_height(measured: Option<f64>, config: &NavConfig) -> f64 {
    measured.unwrap_or(config.fallback_height)
}

/// Page offset to scroll to so the target lands just below the nav bar.
#[must_use]
pub fn destination(target_top: f64, page_offset: f64, nav_height: f64, config: &NavConfig) -> f64 {
    (target_top + page_offset - nav_height - config.scroll_buffer).max(0.0)
}

fn find_target(document: &Document, href: &str) -> Option<Element> {
    match document.query_selector(href) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("{}", SiteError::dom("querySelector", &err));
            None
        }
    }
}

fn measure_nav(document: &Document) -> Option<f64> {
    let nav = document.get_element_by_id(NAVBAR_ID)?;
    nav.dyn_ref::<HtmlElement>().map(|nav| f64::from(nav.offset_height()))
}

fn scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Intercept clicks on every `a[href^="#"]`.
///
/// # Errors
///
/// Fails on selector or listener registration errors.
pub fn mount(window: &Window, document: &Document, config: &NavConfig) -> Result<Vec<Listener>, SiteError> {
    let anchors = dom::query_all(document, r##"a[href^="#"]"##)?;
    let mut listeners = Vec::with_capacity(anchors.len());
    for anchor in anchors {
        let link = anchor.clone();
        let window = window.clone();
        let document = document.clone();
        let config = config.clone();
        listeners.push(dom::listen(&anchor, "click", ListenOptions::default(), move |event| {
            let href = link.get_attribute("href");
            let target = match route(href.as_deref(), |href| find_target(&document, href)) {
                Route::Skip => return,
                Route::Missing(href) => {
                    log::warn!("scroll target not found: {href}");
                    return;
                }
                Route::Scroll(target) => target,
            };
            event.prevent_default();

            let top = destination(
                target.get_bounding_client_rect().top(),
                dom::scroll_offset(&window),
                nav_height(measure_nav(&document), &config),
                &config,
            );
            scroll_to(&window, top);
        })?);
    }
    Ok(listeners)
}
