//! Navigation bar visibility driven by scroll position.
//!
//! Scroll events are coalesced to one evaluation per animation frame. The
//! bar is revealed once the page has scrolled down past `show_after` and is
//! hidden again near the top.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Window};

use crate::config::NavConfig;
use crate::consts::{NAVBAR_ID, VISIBLE_CLASS};
use crate::dom::{self, ListenOptions, Listener, Node};
use crate::error::{SiteError, report};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavUpdate {
    Show,
    Hide,
    Unchanged,
}

/// Scroll sampling state for the page session.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    last_offset: f64,
    frame_pending: bool,
    show_after: f64,
    hide_at: f64,
}

impl ScrollTracker {
    #[must_use]
    pub fn new(config: &NavConfig) -> Self {
        Self { last_offset: 0.0, frame_pending: false, show_after: config.show_after, hide_at: config.hide_at }
    }

    /// Called per scroll event. Returns `true` when a frame must be
    /// requested; `false` while one is already pending.
    pub fn request_frame(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// The frame ran but there was nothing to sample.
    pub fn abandon_frame(&mut self) {
        self.frame_pending = false;
    }

    /// Evaluate one sampled offset.
    pub fn on_frame(&mut self, offset: f64) -> NavUpdate {
        self.frame_pending = false;
        // Elastic overscroll reports negative offsets.
        if offset < 0.0 {
            return NavUpdate::Unchanged;
        }
        let update = if offset > self.show_after && offset > self.last_offset {
            NavUpdate::Show
        } else if offset <= self.hide_at {
            NavUpdate::Hide
        } else {
            NavUpdate::Unchanged
        };
        self.last_offset = offset;
        update
    }

    #[must_use]
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }
}

/// Apply a scroll decision to the nav bar.
pub fn apply<N: Node>(nav: &N, update: NavUpdate) -> Result<(), SiteError> {
    match update {
        NavUpdate::Show => nav.add_class(VISIBLE_CLASS),
        NavUpdate::Hide => nav.remove_class(VISIBLE_CLASS),
        NavUpdate::Unchanged => Ok(()),
    }
}

fn run_frame(window: &Window, document: &Document, tracker: &RefCell<ScrollTracker>) {
    let Some(nav) = document.get_element_by_id(NAVBAR_ID) else {
        tracker.borrow_mut().abandon_frame();
        return;
    };
    let update = tracker.borrow_mut().on_frame(dom::scroll_offset(window));
    report(apply(&nav, update));
}

fn schedule_frame(window: &Window, document: &Document, tracker: &Rc<RefCell<ScrollTracker>>) {
    if !tracker.borrow_mut().request_frame() {
        return;
    }

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let document_for_cb = document.clone();
    let tracker_for_cb = Rc::clone(tracker);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        run_frame(&window_for_cb, &document_for_cb, &tracker_for_cb);
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        run_frame(window, document, tracker);
    }
}

/// Install the passive scroll listener.
///
/// # Errors
///
/// Fails if the listener cannot be registered.
pub fn mount(window: &Window, document: &Document, config: &NavConfig) -> Result<Listener, SiteError> {
    let tracker = Rc::new(RefCell::new(ScrollTracker::new(config)));
    let window_for_cb = window.clone();
    let document_for_cb = document.clone();
    dom::listen(window, "scroll", ListenOptions::passive(), move |_| {
        schedule_frame(&window_for_cb, &document_for_cb, &tracker);
    })
}
