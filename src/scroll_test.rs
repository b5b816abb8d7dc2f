#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- header ---

#[test]
fn header_flat_at_top() {
    let cfg = ScrollConfig::default();
    assert!(!header_elevated(0.0, cfg.header_shadow_after_px));
    assert_eq!(header_shadow(0.0, &cfg), NO_SHADOW);
}

#[test]
fn header_flat_at_threshold() {
    let cfg = ScrollConfig::default();
    assert_eq!(header_shadow(10.0, &cfg), NO_SHADOW);
}

#[test]
fn header_elevated_past_threshold() {
    let cfg = ScrollConfig::default();
    assert_eq!(header_shadow(11.0, &cfg), "var(--shadow-md)");
}

#[test]
fn header_shadow_is_idempotent() {
    let cfg = ScrollConfig::default();
    assert_eq!(header_shadow(500.0, &cfg), header_shadow(500.0, &cfg));
}

// --- parallax ---

#[test]
fn parallax_tracks_offset_within_viewport() {
    let mut p = Parallax::new(0.3);
    let shift = p.update(100.0, 800.0).unwrap();
    assert!(approx_eq(shift, 30.0));
    assert!(approx_eq(p.last().unwrap(), 30.0));
}

#[test]
fn parallax_at_top_is_zero() {
    let mut p = Parallax::new(0.3);
    assert_eq!(p.update(0.0, 800.0), Some(0.0));
}

#[test]
fn parallax_freezes_at_viewport_height() {
    let mut p = Parallax::new(0.3);
    p.update(700.0, 800.0);
    assert_eq!(p.update(800.0, 800.0), None);
    assert_eq!(p.update(5000.0, 800.0), None);
    assert!(approx_eq(p.last().unwrap(), 210.0));
}

#[test]
fn parallax_resumes_when_scrolled_back() {
    let mut p = Parallax::new(0.3);
    assert_eq!(p.update(900.0, 800.0), None);
    assert!(p.last().is_none());
    let shift = p.update(400.0, 800.0).unwrap();
    assert!(approx_eq(shift, 120.0));
}

#[test]
fn translate_y_formats_pixels() {
    assert_eq!(translate_y(30.0), "translateY(30px)");
    assert_eq!(translate_y(0.0), "translateY(0px)");
}
