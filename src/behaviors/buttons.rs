//! Loading feedback for `.btn` controls.
//!
//! Submit controls and links leaving the site switch to a "Loading..." label
//! and disable themselves on click. A click on a control that is already
//! disabled has its default action suppressed, preventing double submission
//! and double navigation. If nothing else restores the control within the
//! reset delay, it restores itself.

#[cfg(test)]
#[path = "buttons_test.rs"]
mod buttons_test;

use std::cell::RefCell;
use std::rc::Rc;

use url::Url;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlButtonElement, HtmlInputElement, Window};

use crate::consts::LOADING_LABEL;
use crate::dom::{self, ListenOptions, Listener, Node};
use crate::error::{SiteError, report};
use crate::schedule::{Scheduler, TaskSlot};

const INITIALIZED_ATTR: &str = "data-initialized";

/// Whether `href` leaves the host of `page`.
///
/// Fragment, root-relative, and query-only hrefs never do; anything that
/// fails to resolve counts as internal.
#[must_use]
pub fn is_external_link(href: &str, page: &Url) -> bool {
    if href.is_empty() || href.starts_with(['#', '/', '?']) {
        return false;
    }
    match page.join(href) {
        Ok(resolved) => resolved.host_str() != page.host_str(),
        Err(_) => false,
    }
}

/// Mark `node` as wired. Returns `false` if it already was.
///
/// # Errors
///
/// Propagates DOM mutation failures.
pub fn claim<N: Node>(node: &N) -> Result<bool, SiteError> {
    if node.attr(INITIALIZED_ATTR).is_some() {
        return Ok(false);
    }
    node.set_attr(INITIALIZED_ATTR, "true")?;
    Ok(true)
}

/// What the caller should do with the click event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Not a loading-state control; leave the event alone.
    PassThrough,
    /// Already pending; cancel the default action.
    Suppress,
    /// Entered the loading state; let the default action run.
    Loading,
}

pub struct LoadingButton<N> {
    node: N,
    reset_delay_ms: u32,
    reset: TaskSlot,
}

impl<N: Node + Clone + 'static> LoadingButton<N> {
    #[must_use]
    pub fn new(node: N, reset_delay_ms: u32) -> Self {
        Self { node, reset_delay_ms, reset: TaskSlot::new() }
    }

    /// Handle a click. `engaged` says whether this control shows loading
    /// state at all (submit control or external link).
    pub fn click(&mut self, engaged: bool, scheduler: &dyn Scheduler) -> ClickOutcome {
        if !engaged {
            return ClickOutcome::PassThrough;
        }
        if self.node.is_disabled() {
            return ClickOutcome::Suppress;
        }

        let original = self.node.text();
        self.node.set_text(LOADING_LABEL);
        report(self.node.set_disabled(true));

        let node = self.node.clone();
        let handle = scheduler.schedule(
            self.reset_delay_ms,
            Box::new(move || {
                if node.text() == LOADING_LABEL {
                    node.set_text(&original);
                    report(node.set_disabled(false));
                }
            }),
        );
        self.reset.replace(handle);
        ClickOutcome::Loading
    }
}

/// Whether a click on a control shows loading state: submit controls always
/// do, anchors only when `href` leaves the site. Without a page URL every
/// link counts as internal.
#[must_use]
pub fn engages(is_submit: bool, href: Option<&str>, page: Option<&Url>) -> bool {
    if is_submit {
        return true;
    }
    match (href, page) {
        (Some(href), Some(page)) => is_external_link(href, page),
        _ => false,
    }
}

fn is_submit(el: &Element) -> bool {
    if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
        return button.type_() == "submit";
    }
    el.dyn_ref::<HtmlInputElement>().is_some_and(|input| input.type_() == "submit")
}

fn anchor_href(el: &Element) -> Option<String> {
    el.dyn_ref::<HtmlAnchorElement>().map(HtmlAnchorElement::href)
}

/// Wire loading state onto every `.btn` not yet claimed. Controls reserved
/// earlier, such as the audit form's submit button, are left alone.
///
/// # Errors
///
/// Fails on selector or listener registration errors.
pub fn mount(
    window: &Window,
    document: &Document,
    scheduler: Rc<dyn Scheduler>,
    reset_delay_ms: u32,
) -> Result<Vec<Listener>, SiteError> {
    let page = window.location().href().map(|href| Url::parse(&href));
    let page = match page {
        Ok(Ok(url)) => Some(url),
        _ => {
            log::debug!("page URL unavailable; treating all links as internal");
            None
        }
    };

    let mut listeners = Vec::new();
    for el in dom::query_all(document, ".btn")? {
        if !report(claim(&el)).unwrap_or(false) {
            continue;
        }
        let button = Rc::new(RefCell::new(LoadingButton::new(el.clone(), reset_delay_ms)));
        let target = el.clone();
        let page = page.clone();
        let scheduler = Rc::clone(&scheduler);
        listeners.push(dom::listen(&el, "click", ListenOptions::default(), move |event| {
            let engaged = engages(is_submit(&target), anchor_href(&target).as_deref(), page.as_ref());
            if button.borrow_mut().click(engaged, scheduler.as_ref()) == ClickOutcome::Suppress {
                event.prevent_default();
            }
        })?);
    }
    Ok(listeners)
}
