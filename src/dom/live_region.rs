//! Screen reader announcements through a visually hidden live region.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::consts::LIVE_REGION_ID;
use crate::error::SiteError;

/// Inline style keeping the region off-screen but readable by assistive tech.
const HIDDEN_STYLE: [(&str, &str); 5] = [
    ("position", "absolute"),
    ("left", "-10000px"),
    ("width", "1px"),
    ("height", "1px"),
    ("overflow", "hidden"),
];

fn live_region(document: &Document) -> Result<HtmlElement, SiteError> {
    if let Some(existing) = document.get_element_by_id(LIVE_REGION_ID) {
        if let Ok(region) = existing.dyn_into::<HtmlElement>() {
            return Ok(region);
        }
    }

    let region = document
        .create_element("div")
        .map_err(|e| SiteError::dom("createElement", &e))?
        .dyn_into::<HtmlElement>()
        .map_err(|e| SiteError::dom("createElement", &e))?;
    region.set_id(LIVE_REGION_ID);
    region
        .set_attribute("aria-live", "polite")
        .map_err(|e| SiteError::dom("setAttribute", &e))?;
    region
        .set_attribute("aria-atomic", "true")
        .map_err(|e| SiteError::dom("setAttribute", &e))?;
    let style = region.style();
    for (property, value) in HIDDEN_STYLE {
        style
            .set_property(property, value)
            .map_err(|e| SiteError::dom("style.setProperty", &e))?;
    }

    let body = document.body().ok_or(SiteError::NoBody)?;
    body.append_child(&region).map_err(|e| SiteError::dom("appendChild", &e))?;
    Ok(region)
}

/// Replace the live region's text with `message`, creating the region on
/// first use.
///
/// # Errors
///
/// Fails if the region cannot be created.
pub fn announce(document: &Document, message: &str) -> Result<(), SiteError> {
    live_region(document)?.set_text_content(Some(message));
    Ok(())
}
