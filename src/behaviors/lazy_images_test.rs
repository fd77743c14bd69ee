use super::*;
use crate::dom::memory::MemNode;
use crate::visibility::ImmediateWatcher;

fn deferred_image() -> MemNode {
    MemNode::new()
        .with_class("lazy")
        .with_attr("data-src", "/img/hero.webp")
        .with_attr("data-srcset", "/img/hero-2x.webp 2x")
}

#[test]
fn watch_options_are_one_shot_with_margin() {
    let opts = watch_options(&LazyImageConfig::default());
    assert!(opts.once);
    assert_eq!(opts.root_margin, "50px 0px");
    assert!(opts.threshold.abs() < f64::EPSILON);
}

#[test]
fn loading_transfers_and_removes_deferred_attributes() {
    let img = deferred_image();
    assert!(load_deferred(&img).is_ok());
    assert_eq!(img.attr("src").as_deref(), Some("/img/hero.webp"));
    assert_eq!(img.attr("srcset").as_deref(), Some("/img/hero-2x.webp 2x"));
    assert_eq!(img.attr("data-src"), None);
    assert_eq!(img.attr("data-srcset"), None);
    assert!(!img.has_class("lazy"));
}

#[test]
fn second_load_is_a_noop() {
    let img = deferred_image();
    assert!(load_deferred(&img).is_ok());
    assert!(img.set_attr("src", "/img/swapped.webp").is_ok());
    assert!(load_deferred(&img).is_ok());
    assert_eq!(img.attr("src").as_deref(), Some("/img/swapped.webp"));
}

#[test]
fn srcset_only_image_keeps_its_src() {
    let img = MemNode::new().with_attr("src", "/img/placeholder.svg").with_attr("data-srcset", "/a.webp 1x");
    assert!(load_deferred(&img).is_ok());
    assert_eq!(img.attr("src").as_deref(), Some("/img/placeholder.svg"));
    assert_eq!(img.attr("srcset").as_deref(), Some("/a.webp 1x"));
}

#[test]
fn empty_deferred_value_is_not_transferred() {
    let img = MemNode::new().with_attr("data-src", "");
    assert!(load_deferred(&img).is_ok());
    assert_eq!(img.attr("src"), None);
    assert_eq!(img.attr("data-src").as_deref(), Some(""));
}

#[test]
fn fallback_watcher_loads_everything_immediately() {
    let images = vec![deferred_image(), deferred_image()];

    let handle = watch_images(&ImmediateWatcher, images.clone(), &LazyImageConfig::default());

    assert!(matches!(handle, Ok(WatchHandle::Immediate)));
    assert!(images.iter().all(|img| img.attr("src").is_some() && img.attr("data-src").is_none()));
}
