//! Independent page behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module owns one concern and exposes a pure core (tested natively)
//! plus a `mount` function that wires it to the live page. Behaviors share
//! nothing but DOM lookups; [`crate::site::Site`] is the only place they meet.

pub mod buttons;
pub mod faq;
pub mod fade_in;
pub mod form;
pub mod keyboard;
pub mod lazy_images;
pub mod nav;
pub mod page_errors;
pub mod smooth_scroll;
pub mod swipe;
