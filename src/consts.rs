//! Shared constants for the site behaviors crate.
//!
//! Numeric tunables live in [`crate::config::SiteConfig`]; the values here are
//! its defaults plus the fixed DOM contract (ids, classes, attributes, labels)
//! that the page markup is written against.

// ── Navigation ──────────────────────────────────────────────────

/// Id of the fixed navigation bar.
pub const NAVBAR_ID: &str = "navbar";

/// Scroll offset past which a downward scroll reveals the nav bar.
pub const NAV_SHOW_AFTER_PX: f64 = 100.0;

/// Scroll offset at or below which the nav bar is hidden again.
pub const NAV_HIDE_AT_PX: f64 = 50.0;

/// Nav height used when the nav bar is missing from the page.
pub const NAV_FALLBACK_HEIGHT_PX: f64 = 72.0;

/// Gap left between the nav bar and a smooth-scroll target.
pub const SCROLL_BUFFER_PX: f64 = 20.0;

// ── Timing ──────────────────────────────────────────────────────

/// Delay before focus moves into a freshly opened FAQ answer.
pub const FAQ_FOCUS_DELAY_MS: u32 = 300;

/// Delay after which a loading button restores itself.
pub const BUTTON_RESET_DELAY_MS: u32 = 3000;

/// Simulated network latency of the audit form submission.
pub const FORM_SUBMIT_DELAY_MS: u32 = 1500;

// ── Observers ───────────────────────────────────────────────────

/// Lazy images start loading this far ahead of the viewport.
pub const LAZY_ROOT_MARGIN: &str = "50px 0px";

/// Fade-in triggers 120px above the bottom edge of the viewport.
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -120px 0px";

/// Visible fraction needed before a fade-in element is revealed.
pub const FADE_IN_THRESHOLD: f64 = 0.1;

// ── Gestures ────────────────────────────────────────────────────

/// Minimum horizontal travel for a swipe, and maximum vertical drift.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

// ── DOM contract ────────────────────────────────────────────────

/// Class toggled on the nav bar and on revealed fade-in elements.
pub const VISIBLE_CLASS: &str = "visible";

/// Class marking an open FAQ item and its answer panel.
pub const OPEN_CLASS: &str = "open";

/// Marker class removed from a lazy image once it loads.
pub const LAZY_CLASS: &str = "lazy";

/// Body class enabling focus-ring styling.
pub const KEYBOARD_NAV_CLASS: &str = "keyboard-navigation";

/// Id of the form handled by the audit form behavior.
pub const AUDIT_FORM_ID: &str = "auditForm";

/// Id of the inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Id of the visually hidden live region used for announcements.
pub const LIVE_REGION_ID: &str = "live-region";

/// Label shown on a button while its action is pending.
pub const LOADING_LABEL: &str = "Loading...";

/// Label shown on the audit form submit button while sending.
pub const SENDING_LABEL: &str = "Sending...";

/// FAQ icon glyph for a closed item.
pub const FAQ_ICON_CLOSED: &str = "+";

/// FAQ icon glyph for an open item.
pub const FAQ_ICON_OPEN: &str = "×";
