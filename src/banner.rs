//! Styled console greeting printed once the page is wired.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use wasm_bindgen::JsValue;

use crate::config::BannerConfig;

const BRAND_STYLE: &str = "color: #DC2626; font-size: 24px; font-weight: bold;";
const BODY_STYLE: &str = "color: #6B6B6B; font-size: 14px;";

/// Console format string with two `%c` style slots.
#[must_use]
pub fn format(config: &BannerConfig) -> String {
    format!(
        "%c{}%c\n{}\n\nInterested in the code? Contact: {}",
        config.brand, config.tagline, config.contact
    )
}

pub fn show(config: &BannerConfig) {
    web_sys::console::log_3(
        &JsValue::from_str(&format(config)),
        &JsValue::from_str(BRAND_STYLE),
        &JsValue::from_str(BODY_STYLE),
    );
}
