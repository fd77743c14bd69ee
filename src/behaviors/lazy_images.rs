//! Deferred image loading.
//!
//! Images carry their real sources in `data-src` / `data-srcset` and load once
//! they come within the configured margin of the viewport. Each image is
//! consumed exactly once: the deferred attributes are removed as they are
//! transferred. Load failures are logged by listeners attached at mount.

#[cfg(test)]
#[path = "lazy_images_test.rs"]
mod lazy_images_test;

use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::LazyImageConfig;
use crate::consts::LAZY_CLASS;
use crate::dom::{self, ListenOptions, Listener, Node};
use crate::error::{SiteError, report};
use crate::visibility::{EnterCallback, VisibilityWatcher, WatchHandle, WatchOptions};

const SELECTOR: &str = "img[data-src], img[data-srcset]";

/// (deferred attribute, live attribute)
const TRANSFERS: [(&str, &str); 2] = [("data-src", "src"), ("data-srcset", "srcset")];

#[must_use]
pub fn watch_options(config: &LazyImageConfig) -> WatchOptions {
    WatchOptions { root_margin: config.root_margin.clone(), threshold: 0.0, once: true }
}

/// Move deferred sources into the live attributes and drop the lazy marker.
///
/// Empty deferred values are left untouched.
///
/// # Errors
///
/// Propagates DOM mutation failures.
pub fn load_deferred<N: Node>(img: &N) -> Result<(), SiteError> {
    for (deferred, live) in TRANSFERS {
        let Some(value) = img.attr(deferred).filter(|v| !v.is_empty()) else {
            continue;
        };
        img.set_attr(live, &value)?;
        img.remove_attr(deferred)?;
    }
    img.remove_class(LAZY_CLASS)
}

/// Hand `images` to `watcher`, loading each one on first visibility.
///
/// # Errors
///
/// Fails when the watcher cannot start.
pub fn watch_images<N: Node + 'static>(
    watcher: &dyn VisibilityWatcher<N>,
    images: Vec<N>,
    config: &LazyImageConfig,
) -> Result<WatchHandle, SiteError> {
    let on_enter: EnterCallback<N> = Rc::new(|img: &N| {
        report(load_deferred(img));
    });
    watcher.watch(images, &watch_options(config), on_enter)
}

/// A mounted lazy-image behavior: the visibility watch plus one `error`
/// listener per image.
pub struct LazyImages {
    pub watch: WatchHandle,
    pub failure_listeners: Vec<Listener>,
}

fn log_load_failure(img: &Element) -> Result<Listener, SiteError> {
    let target = img.clone();
    dom::listen(img, "error", ListenOptions::default(), move |_| {
        log::warn!("image failed to load: {}", target.get_attribute("src").unwrap_or_default());
    })
}

/// Start lazy loading for every deferred image on the page.
///
/// # Errors
///
/// Fails on selector or observer errors. A page without deferred images
/// mounts nothing.
pub fn mount(
    document: &Document,
    watcher: &dyn VisibilityWatcher<Element>,
    config: &LazyImageConfig,
) -> Result<Option<LazyImages>, SiteError> {
    let images = dom::query_all(document, SELECTOR)?;
    if images.is_empty() {
        return Ok(None);
    }
    log::debug!("lazy images: {}", images.len());
    let failure_listeners = images.iter().filter_map(|img| report(log_load_failure(img))).collect();
    let watch = watch_images(watcher, images, config)?;
    Ok(Some(LazyImages { watch, failure_listeners }))
}
