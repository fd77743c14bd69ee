//! Horizontal swipe detection.
//!
//! Swipes are only logged for now; nothing is bound to them.

#[cfg(test)]
#[path = "swipe_test.rs"]
mod swipe_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, TouchEvent};

use crate::config::SwipeConfig;
use crate::dom::{self, ListenOptions, Listener};
use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// The most recent gesture's endpoints. Overwritten by every touch.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: (f64, f64),
    threshold: f64,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(config: &SwipeConfig) -> Self {
        Self { start: (0.0, 0.0), threshold: config.threshold }
    }

    pub fn on_start(&mut self, x: f64, y: f64) {
        self.start = (x, y);
    }

    /// Classify the gesture ending at (`x`, `y`). Only near-horizontal
    /// gestures count.
    #[must_use]
    pub fn on_end(&self, x: f64, y: f64) -> Option<SwipeDirection> {
        let dx = (x - self.start.0).abs();
        let dy = (y - self.start.1).abs();
        if dx <= self.threshold || dy >= self.threshold {
            return None;
        }
        if x < self.start.0 { Some(SwipeDirection::Left) } else { Some(SwipeDirection::Right) }
    }
}

fn touch_point(event: &Event) -> Option<(f64, f64)> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().item(0)?;
    Some((f64::from(touch.screen_x()), f64::from(touch.screen_y())))
}

/// # Errors
///
/// Fails if the touch listeners cannot be registered.
pub fn mount(document: &Document, config: &SwipeConfig) -> Result<Vec<Listener>, SiteError> {
    let tracker = Rc::new(RefCell::new(SwipeTracker::new(config)));

    let on_start = Rc::clone(&tracker);
    let start = dom::listen(document, "touchstart", ListenOptions::passive(), move |event| {
        if let Some((x, y)) = touch_point(&event) {
            on_start.borrow_mut().on_start(x, y);
        }
    })?;

    let end = dom::listen(document, "touchend", ListenOptions::passive(), move |event| {
        let Some((x, y)) = touch_point(&event) else {
            return;
        };
        match tracker.borrow().on_end(x, y) {
            Some(SwipeDirection::Left) => log::info!("swipe left detected"),
            Some(SwipeDirection::Right) => log::info!("swipe right detected"),
            None => {}
        }
    })?;

    Ok(vec![start, end])
}
