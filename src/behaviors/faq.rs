//! Accessible FAQ accordion.
//!
//! Each `.faq-item` holds a `.faq-question` control and a `.faq-answer`
//! panel. Open/closed state lives on the item's `open` class; at most one
//! item is open at a time. Opening an item moves focus into its answer after
//! the expand animation settles. The pending focus shift is cancelled by the
//! next toggle, so a fast reopen never focuses a stale panel.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use crate::consts::{FAQ_ICON_CLOSED, FAQ_ICON_OPEN, OPEN_CLASS};
use crate::dom::{self, ListenOptions, Listener, Node};
use crate::error::{SiteError, report};
use crate::schedule::{Scheduler, TaskSlot};

/// Id assigned to the answer panel of the item at 1-based `position`.
#[must_use]
pub fn answer_id(position: usize) -> String {
    format!("faq-answer-{position}")
}

/// Keys that toggle a focused question.
#[must_use]
pub fn is_toggle_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

/// The elements making up one accordion item.
#[derive(Clone)]
pub struct FaqItem<N> {
    /// 1-based position among all `.faq-item` elements in the document.
    pub position: usize,
    pub container: N,
    pub question: N,
    pub answer: N,
    pub icon: N,
    /// First paragraph of the answer; receives focus on open.
    pub focus_target: Option<N>,
}

pub struct Accordion<N> {
    items: Vec<FaqItem<N>>,
    scheduler: Rc<dyn Scheduler>,
    focus_delay_ms: u32,
    pending_focus: TaskSlot,
}

impl<N: Node + Clone + 'static> Accordion<N> {
    #[must_use]
    pub fn new(items: Vec<FaqItem<N>>, scheduler: Rc<dyn Scheduler>, focus_delay_ms: u32) -> Self {
        Self { items, scheduler, focus_delay_ms, pending_focus: TaskSlot::new() }
    }

    /// Link each question to its answer and mark everything collapsed.
    ///
    /// # Errors
    ///
    /// Stops at the first attribute the page refuses.
    pub fn prepare(&self) -> Result<(), SiteError> {
        for item in &self.items {
            let id = answer_id(item.position);
            item.answer.set_attr("id", &id)?;
            item.question.set_attr("aria-controls", &id)?;
            item.question.set_attr("aria-expanded", "false")?;
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|item| item.container.has_class(OPEN_CLASS))
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        self.items.iter().filter(|item| item.container.has_class(OPEN_CLASS)).count()
    }

    /// Flip the item at `index`, closing every other open item first.
    ///
    /// # Errors
    ///
    /// Propagates DOM mutation failures.
    pub fn toggle(&mut self, index: usize) -> Result<(), SiteError> {
        let Some(target) = self.items.get(index) else {
            return Ok(());
        };
        let was_open = target.container.has_class(OPEN_CLASS);
        self.pending_focus.clear();

        for (i, item) in self.items.iter().enumerate() {
            if i != index && item.container.has_class(OPEN_CLASS) {
                close(item)?;
            }
        }

        let target = &self.items[index];
        if was_open {
            close(target)
        } else {
            self.open(index)
        }
    }

    fn open(&mut self, index: usize) -> Result<(), SiteError> {
        let item = &self.items[index];
        item.container.add_class(OPEN_CLASS)?;
        item.answer.add_class(OPEN_CLASS)?;
        item.question.set_attr("aria-expanded", "true")?;
        item.icon.set_text(FAQ_ICON_OPEN);

        if let Some(target) = item.focus_target.clone() {
            let handle = self.scheduler.schedule(
                self.focus_delay_ms,
                Box::new(move || {
                    report(target.set_attr("tabindex", "-1"));
                    report(target.focus());
                }),
            );
            self.pending_focus.replace(handle);
        }
        Ok(())
    }
}

fn close<N: Node>(item: &FaqItem<N>) -> Result<(), SiteError> {
    item.container.remove_class(OPEN_CLASS)?;
    item.answer.remove_class(OPEN_CLASS)?;
    item.question.set_attr("aria-expanded", "false")?;
    item.icon.set_text(FAQ_ICON_CLOSED);
    if let Some(target) = &item.focus_target {
        if target.attr("tabindex").as_deref() == Some("-1") {
            target.remove_attr("tabindex")?;
        }
    }
    Ok(())
}

fn locate(position: usize, container: Element) -> Option<FaqItem<Element>> {
    let question = dom::query_in(&container, ".faq-question")?;
    let answer = dom::query_in(&container, ".faq-answer")?;
    let icon = dom::query_in(&question, ".faq-icon")?;
    let focus_target = dom::query_in(&answer, "p");
    Some(FaqItem { position, container, question, answer, icon, focus_target })
}

/// Wire click and keyboard toggles onto every complete FAQ item.
///
/// # Errors
///
/// Fails on an unusable selector or listener registration.
pub fn mount(document: &Document, scheduler: Rc<dyn Scheduler>, focus_delay_ms: u32) -> Result<Vec<Listener>, SiteError> {
    let items: Vec<FaqItem<Element>> = dom::query_all(document, ".faq-item")?
        .into_iter()
        .enumerate()
        .filter_map(|(i, container)| locate(i + 1, container))
        .collect();
    let questions: Vec<Element> = items.iter().map(|item| item.question.clone()).collect();

    let accordion = Accordion::new(items, scheduler, focus_delay_ms);
    accordion.prepare()?;
    log::debug!("faq: {} items", accordion.len());
    let accordion = Rc::new(RefCell::new(accordion));

    let mut listeners = Vec::with_capacity(questions.len() * 2);
    for (index, question) in questions.iter().enumerate() {
        let on_click = Rc::clone(&accordion);
        listeners.push(dom::listen(question, "click", ListenOptions::default(), move |_| {
            report(on_click.borrow_mut().toggle(index));
        })?);

        let on_key = Rc::clone(&accordion);
        listeners.push(dom::listen(question, "keydown", ListenOptions::default(), move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if is_toggle_key(&key_event.key()) {
                event.prevent_default();
                report(on_key.borrow_mut().toggle(index));
            }
        })?);
    }
    Ok(listeners)
}
