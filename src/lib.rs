//! Interactive behaviors for the marketing site.
//!
//! This crate is compiled to WebAssembly and loaded by every page. Once the
//! document is ready it wires ten independent behaviors onto the existing
//! markup; there is no rendering and no network traffic.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Composition root owning listeners and observers |
//! | [`behaviors`] | One module per page behavior |
//! | [`dom`] | `Node` trait, queries, listeners, live region |
//! | [`schedule`] | Cancelable delayed tasks |
//! | [`visibility`] | Viewport-visibility capability and its fallback |
//! | [`config`] | Tunables and the inline JSON override block |
//! | [`error`] | Error type and log-and-continue reporting |
//! | [`banner`] | Console greeting |
//! | [`consts`] | Defaults and the DOM contract |

pub mod banner;
pub mod behaviors;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod schedule;
pub mod site;
pub mod visibility;

use std::cell::RefCell;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Window};

use crate::config::SiteConfig;
use crate::error::{SiteError, report};
use crate::site::Site;

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// Wasm entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = boot() {
        web_sys::console::error_1(&JsValue::from_str(&format!("site behaviors failed to start: {err}")));
    }
}

fn boot() -> Result<(), SiteError> {
    let (window, document) = dom::window_and_document()?;

    let loaded = SiteConfig::load(&document);
    let config = loaded.as_ref().map_or_else(|_| SiteConfig::default(), Clone::clone);
    if let Err(err) = console_log::init_with_level(config.level()) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console logger unavailable: {err}")));
    }
    if let Err(err) = loaded {
        log::warn!("{err}; using defaults");
    }

    report(dom::listen_once(&window, "beforeunload", |_| {
        SITE.with(|slot| {
            if let Some(site) = slot.borrow_mut().as_mut() {
                site.disconnect_fade_in();
            }
        });
    }));

    if document.ready_state() == "loading" {
        let ready_window = window.clone();
        let ready_document = document.clone();
        dom::listen_once(&document, "DOMContentLoaded", move |_| {
            mount(&ready_window, &ready_document, &config);
        })
    } else {
        mount(&window, &document, &config);
        Ok(())
    }
}

fn mount(window: &Window, document: &Document, config: &SiteConfig) {
    let site = Site::mount(window, document, config);
    if config.banner.enabled {
        banner::show(&config.banner);
    }
    log::info!(
        "site behaviors initialized ({} listeners, {} observers)",
        site.listener_count(),
        site.observer_count()
    );
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
}
