use super::*;
use crate::dom::memory::MemNode;
use crate::visibility::ImmediateWatcher;

#[test]
fn options_keep_observing() {
    let opts = watch_options(&FadeInConfig::default());
    assert!(!opts.once);
    assert_eq!(opts.root_margin, "0px 0px -120px 0px");
    assert!((opts.threshold - 0.1).abs() < f64::EPSILON);
}

#[test]
fn fallback_reveals_everything() {
    let elements = vec![MemNode::new().with_class("fade-in"), MemNode::new().with_class("fade-in")];
    let handle = watch_elements(&ImmediateWatcher, elements.clone(), &FadeInConfig::default());
    assert!(handle.is_ok());
    assert!(elements.iter().all(|el| el.has_class("visible")));
}

#[test]
fn repeated_entry_is_harmless() {
    let el = MemNode::new();
    let first = watch_elements(&ImmediateWatcher, vec![el.clone()], &FadeInConfig::default());
    let second = watch_elements(&ImmediateWatcher, vec![el.clone()], &FadeInConfig::default());
    assert!(first.is_ok() && second.is_ok());
    assert!(el.has_class("visible"));
}
