#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_page_contract() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.nav.show_after, 100.0);
    assert_eq!(cfg.nav.hide_at, 50.0);
    assert_eq!(cfg.nav.fallback_height, 72.0);
    assert_eq!(cfg.nav.scroll_buffer, 20.0);
    assert_eq!(cfg.timing.faq_focus_ms, 300);
    assert_eq!(cfg.timing.button_reset_ms, 3000);
    assert_eq!(cfg.timing.form_submit_ms, 1500);
    assert_eq!(cfg.lazy_images.root_margin, "50px 0px");
    assert_eq!(cfg.fade_in.root_margin, "0px 0px -120px 0px");
    assert_eq!(cfg.fade_in.threshold, 0.1);
    assert_eq!(cfg.swipe.threshold, 50.0);
    assert_eq!(cfg.form.id, "auditForm");
}

#[test]
fn empty_block_yields_defaults() {
    assert_eq!(SiteConfig::from_json("  \n").map_err(|e| e.to_string()), Ok(SiteConfig::default()));
}

#[test]
fn partial_override_keeps_other_defaults() {
    let Ok(cfg) = SiteConfig::from_json(r#"{ "nav": { "showAfter": 160 }, "logLevel": "debug" }"#) else {
        panic!("override should parse");
    };
    assert_eq!(cfg.nav.show_after, 160.0);
    assert_eq!(cfg.nav.hide_at, 50.0);
    assert_eq!(cfg.timing, TimingConfig::default());
    assert_eq!(cfg.level(), log::Level::Debug);
}

#[test]
fn malformed_block_is_a_config_error() {
    let result = SiteConfig::from_json("{ nav: 1 }");
    assert!(matches!(result, Err(SiteError::Config(_))));
}

#[test]
fn wrong_type_is_a_config_error() {
    let result = SiteConfig::from_json(r#"{ "timing": { "faqFocusMs": "soon" } }"#);
    assert!(matches!(result, Err(SiteError::Config(_))));
}

#[test]
fn unknown_level_falls_back_to_info() {
    let cfg = SiteConfig { log_level: "chatty".into(), ..SiteConfig::default() };
    assert_eq!(cfg.level(), log::Level::Info);
}

#[test]
fn banner_can_be_disabled() {
    let Ok(cfg) = SiteConfig::from_json(r#"{ "banner": { "enabled": false } }"#) else {
        panic!("override should parse");
    };
    assert!(!cfg.banner.enabled);
    assert_eq!(cfg.banner.brand, "ArmanLeads");
}

#[test]
fn form_messages_can_be_reworded() {
    let Ok(cfg) = SiteConfig::from_json(r#"{ "form": { "invalidEmailMessage": "Check your email." } }"#) else {
        panic!("override should parse");
    };
    assert_eq!(cfg.form.invalid_email_message, "Check your email.");
    assert_eq!(cfg.form.missing_fields_message, "Please fill in all required fields.");
    assert_eq!(cfg.form.id, "auditForm");
}
