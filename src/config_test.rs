#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_page_markup() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.theme.toggle_selector, ".theme-toggle");
    assert_eq!(cfg.theme.storage_key, "theme");
    assert_eq!(cfg.nav.menu_selector, ".nav-menu");
    assert_eq!(cfg.nav.cancel_key, "Escape");
    assert_eq!(cfg.scroll.hero_selector, ".child-illustration");
    assert_eq!(cfg.counter.selector, ".stat-number");
    assert_eq!(cfg.anchor.selector, "a[href^=\"#\"]");
}

#[test]
fn default_banner_and_tagline() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.banner, "Beyond Class Academy");
    assert_eq!(cfg.tagline, "Think. Create. Lead.");
}

#[test]
fn tagline_override() {
    let cfg = SiteConfig::from_json(r#"{"tagline": "Learn more."}"#).unwrap();
    assert_eq!(cfg.tagline, "Learn more.");
    assert_eq!(cfg.banner, "Beyond Class Academy");
}

#[test]
fn default_tuning_constants() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.theme.spin_ms, 300);
    assert_eq!(cfg.scroll.header_shadow_after_px, 10.0);
    assert_eq!(cfg.scroll.parallax_speed, 0.3);
    assert_eq!(cfg.scroll.debounce_ms, 10);
    assert_eq!(cfg.reveal.threshold, 0.1);
    assert_eq!(cfg.reveal.root_margin, "0px 0px -50px 0px");
    assert_eq!(cfg.counter.threshold, 0.5);
    assert_eq!(cfg.counter.duration_ms, 2000.0);
    assert_eq!(cfg.anchor.header_offset_px, 80.0);
}

#[test]
fn empty_object_yields_defaults() {
    let cfg = SiteConfig::from_json("{}").unwrap();
    assert_eq!(cfg.banner, SiteConfig::default().banner);
    assert_eq!(cfg.nav.open_class, "active");
}

#[test]
fn partial_override_keeps_sibling_defaults() {
    let cfg = SiteConfig::from_json(r#"{"scroll": {"parallax_speed": 0.5}, "theme": {"storage_key": "site-theme"}}"#)
        .unwrap();
    assert_eq!(cfg.scroll.parallax_speed, 0.5);
    assert_eq!(cfg.scroll.header_selector, ".header");
    assert_eq!(cfg.theme.storage_key, "site-theme");
    assert_eq!(cfg.theme.spin_ms, 300);
}

#[test]
fn malformed_json_is_config_error() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, BehaviorError::Config(_)));
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn wrong_field_type_is_config_error() {
    let err = SiteConfig::from_json(r#"{"counter": {"duration_ms": "slow"}}"#).unwrap_err();
    assert!(matches!(err, BehaviorError::Config(_)));
}
