//! In-memory [`Node`] for native tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use super::Node;
use crate::error::SiteError;

#[derive(Default)]
struct Inner {
    attrs: RefCell<BTreeMap<String, String>>,
    classes: RefCell<BTreeSet<String>>,
    text: RefCell<String>,
    disabled: Cell<bool>,
    focus_count: Cell<u32>,
}

/// Cheaply cloneable handle; clones share state like DOM references do.
#[derive(Clone, Default)]
pub struct MemNode(Rc<Inner>);

impl MemNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let node = Self::new();
        node.set_text(text);
        node
    }

    #[must_use]
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0.attrs.borrow_mut().insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.0.classes.borrow_mut().insert(class.into());
        self
    }

    /// How many times `focus` has been called.
    #[must_use]
    pub fn focus_count(&self) -> u32 {
        self.0.focus_count.get()
    }

    #[must_use]
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Node for MemNode {
    fn attr(&self, name: &str) -> Option<String> {
        self.0.attrs.borrow().get(name).cloned()
    }

    fn set_attr(&self, name: &str, value: &str) -> Result<(), SiteError> {
        self.0.attrs.borrow_mut().insert(name.into(), value.into());
        Ok(())
    }

    fn remove_attr(&self, name: &str) -> Result<(), SiteError> {
        self.0.attrs.borrow_mut().remove(name);
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), SiteError> {
        self.0.classes.borrow_mut().insert(class.into());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), SiteError> {
        self.0.classes.borrow_mut().remove(class);
        Ok(())
    }

    fn text(&self) -> String {
        self.0.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.0.text.borrow_mut() = text.to_owned();
    }

    fn focus(&self) -> Result<(), SiteError> {
        self.0.focus_count.set(self.0.focus_count.get() + 1);
        Ok(())
    }

    fn is_disabled(&self) -> bool {
        self.0.disabled.get()
    }

    fn set_disabled(&self, disabled: bool) -> Result<(), SiteError> {
        self.0.disabled.set(disabled);
        Ok(())
    }
}
