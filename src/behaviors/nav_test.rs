#![allow(clippy::float_cmp)]

use super::*;
use crate::dom::memory::MemNode;

fn tracker() -> ScrollTracker {
    ScrollTracker::new(&NavConfig::default())
}

#[test]
fn scrolling_down_past_threshold_shows_nav() {
    let mut t = tracker();
    assert_eq!(t.on_frame(80.0), NavUpdate::Unchanged);
    assert_eq!(t.on_frame(150.0), NavUpdate::Show);
}

#[test]
fn threshold_itself_does_not_show() {
    let mut t = tracker();
    assert_eq!(t.on_frame(100.0), NavUpdate::Unchanged);
}

#[test]
fn scrolling_up_above_hide_line_keeps_state() {
    let mut t = tracker();
    t.on_frame(400.0);
    assert_eq!(t.on_frame(300.0), NavUpdate::Unchanged);
    assert_eq!(t.on_frame(51.0), NavUpdate::Unchanged);
}

#[test]
fn near_top_hides_nav() {
    let mut t = tracker();
    t.on_frame(400.0);
    assert_eq!(t.on_frame(50.0), NavUpdate::Hide);
    assert_eq!(t.on_frame(0.0), NavUpdate::Hide);
}

#[test]
fn negative_offset_changes_nothing() {
    let mut t = tracker();
    t.on_frame(200.0);
    assert_eq!(t.on_frame(-30.0), NavUpdate::Unchanged);
    assert_eq!(t.last_offset(), 200.0);
}

#[test]
fn every_offset_obeys_the_rules() {
    for s in -200..1000 {
        let s = f64::from(s);
        let mut t = tracker();
        t.on_frame(s - 10.0);
        let update = t.on_frame(s);
        if s < 0.0 {
            assert_eq!(update, NavUpdate::Unchanged, "offset {s}");
        } else if s > 100.0 {
            assert_eq!(update, NavUpdate::Show, "offset {s}");
        } else if s <= 50.0 {
            assert_eq!(update, NavUpdate::Hide, "offset {s}");
        }
    }
}

#[test]
fn frames_are_coalesced_until_sampled() {
    let mut t = tracker();
    assert!(t.request_frame());
    assert!(!t.request_frame());
    assert!(!t.request_frame());
    t.on_frame(10.0);
    assert!(!t.frame_pending());
    assert!(t.request_frame());
}

#[test]
fn abandoned_frame_releases_pending_flag() {
    let mut t = tracker();
    assert!(t.request_frame());
    t.abandon_frame();
    assert!(t.request_frame());
    assert_eq!(t.last_offset(), 0.0);
}

#[test]
fn apply_toggles_visible_class() {
    let nav = MemNode::new();
    assert!(apply(&nav, NavUpdate::Show).is_ok());
    assert!(nav.has_class("visible"));
    assert!(apply(&nav, NavUpdate::Unchanged).is_ok());
    assert!(nav.has_class("visible"));
    assert!(apply(&nav, NavUpdate::Hide).is_ok());
    assert!(!nav.has_class("visible"));
}

#[test]
fn custom_thresholds_are_honoured() {
    let cfg = NavConfig { show_after: 300.0, hide_at: 10.0, ..NavConfig::default() };
    let mut t = ScrollTracker::new(&cfg);
    assert_eq!(t.on_frame(200.0), NavUpdate::Unchanged);
    assert_eq!(t.on_frame(301.0), NavUpdate::Show);
    assert_eq!(t.on_frame(20.0), NavUpdate::Unchanged);
    assert_eq!(t.on_frame(10.0), NavUpdate::Hide);
}
