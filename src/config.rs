//! Page-level configuration.
//!
//! Every tunable has a default matching the shipped markup and stylesheet.
//! A page may override any subset through an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   { "nav": { "showAfter": 160 }, "logLevel": "debug" }
//! </script>
//! ```
//!
//! Missing keys keep their defaults. A malformed block is reported once and
//! the defaults are used wholesale.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;
use web_sys::Document;

use crate::consts;
use crate::error::SiteError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub timing: TimingConfig,
    pub lazy_images: LazyImageConfig,
    pub fade_in: FadeInConfig,
    pub swipe: SwipeConfig,
    pub form: FormConfig,
    pub banner: BannerConfig,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    pub show_after: f64,
    pub hide_at: f64,
    pub fallback_height: f64,
    pub scroll_buffer: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimingConfig {
    pub faq_focus_ms: u32,
    pub button_reset_ms: u32,
    pub form_submit_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LazyImageConfig {
    pub root_margin: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FadeInConfig {
    pub root_margin: String,
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwipeConfig {
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    pub id: String,
    pub success_message: String,
    pub missing_fields_message: String,
    pub invalid_email_message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BannerConfig {
    pub enabled: bool,
    pub brand: String,
    pub tagline: String,
    pub contact: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav: NavConfig::default(),
            timing: TimingConfig::default(),
            lazy_images: LazyImageConfig::default(),
            fade_in: FadeInConfig::default(),
            swipe: SwipeConfig::default(),
            form: FormConfig::default(),
            banner: BannerConfig::default(),
            log_level: "info".into(),
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            show_after: consts::NAV_SHOW_AFTER_PX,
            hide_at: consts::NAV_HIDE_AT_PX,
            fallback_height: consts::NAV_FALLBACK_HEIGHT_PX,
            scroll_buffer: consts::SCROLL_BUFFER_PX,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            faq_focus_ms: consts::FAQ_FOCUS_DELAY_MS,
            button_reset_ms: consts::BUTTON_RESET_DELAY_MS,
            form_submit_ms: consts::FORM_SUBMIT_DELAY_MS,
        }
    }
}

impl Default for LazyImageConfig {
    fn default() -> Self {
        Self { root_margin: consts::LAZY_ROOT_MARGIN.into() }
    }
}

impl Default for FadeInConfig {
    fn default() -> Self {
        Self { root_margin: consts::FADE_IN_ROOT_MARGIN.into(), threshold: consts::FADE_IN_THRESHOLD }
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self { threshold: consts::SWIPE_THRESHOLD_PX }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            id: consts::AUDIT_FORM_ID.into(),
            success_message: "Thank you! Your free audit request has been submitted. \
                              You'll receive your analysis within 12 hours."
                .into(),
            missing_fields_message: "Please fill in all required fields.".into(),
            invalid_email_message: "Please enter a valid email address.".into(),
        }
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            brand: "ArmanLeads".into(),
            tagline: "Premium Dental Marketing".into(),
            contact: "hello@armanleads.com".into(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override block on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] when the text is not valid JSON or a key
    /// has the wrong type.
    pub fn from_json(text: &str) -> Result<Self, SiteError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }

    /// Read the inline `#site-config` block, if the page has one.
    ///
    /// # Errors
    ///
    /// Propagates [`SiteConfig::from_json`] failures; a missing block is not
    /// an error.
    pub fn load(document: &Document) -> Result<Self, SiteError> {
        match document.get_element_by_id(consts::CONFIG_ELEMENT_ID) {
            Some(block) => Self::from_json(&block.text_content().unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }

    /// Console log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }
}
