//! Selectors, class names, and tuning constants for every behavior.
//!
//! All structs deserialize with `#[serde(default)]`, so the host page may pass
//! a partial JSON object and only override what differs from the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::BehaviorError;

/// Top-level configuration handed to the browser binding at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name logged once when the behaviors start.
    pub banner: String,
    /// Logged on the line after the banner.
    pub tagline: String,
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
    pub counter: CounterConfig,
    pub anchor: AnchorConfig,
    /// Body fade-in transition applied before `load`.
    pub fade_in_transition: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            banner: "Beyond Class Academy".into(),
            tagline: "Think. Create. Lead.".into(),
            theme: ThemeConfig::default(),
            nav: NavConfig::default(),
            scroll: ScrollConfig::default(),
            reveal: RevealConfig::default(),
            counter: CounterConfig::default(),
            anchor: AnchorConfig::default(),
            fade_in_transition: "opacity 0.3s ease".into(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::Config`] if `json` is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self, BehaviorError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Selector matching every theme toggle button (desktop and mobile).
    pub toggle_selector: String,
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Duration of the rotate affordance on the clicked toggle.
    pub spin_ms: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".theme-toggle".into(),
            storage_key: "theme".into(),
            spin_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub toggle_selector: String,
    pub menu_selector: String,
    pub link_selector: String,
    /// Class mirrored on the menu and toggle while open.
    pub open_class: String,
    /// `KeyboardEvent.key` that closes an open menu.
    pub cancel_key: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".nav-toggle".into(),
            menu_selector: ".nav-menu".into(),
            link_selector: ".nav-link".into(),
            open_class: "active".into(),
            cancel_key: "Escape".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub header_selector: String,
    /// Offsets strictly above this many pixels elevate the header.
    pub header_shadow_after_px: f64,
    /// `box-shadow` value applied while elevated.
    pub header_shadow: String,
    pub hero_selector: String,
    /// Hero translation per pixel scrolled.
    pub parallax_speed: f64,
    /// Quiet window for the debounced scroll listener.
    pub debounce_ms: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_selector: ".header".into(),
            header_shadow_after_px: 10.0,
            header_shadow: "var(--shadow-md)".into(),
            hero_selector: ".child-illustration".into(),
            parallax_speed: 0.3,
            debounce_ms: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
    /// Initial downward offset of hidden targets.
    pub offset_px: f64,
    pub transition: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".feature-card, .program-card, .impact-stat, .impact-highlight".into(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
            offset_px: 20.0,
            transition: "opacity 0.6s ease, transform 0.6s ease".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub selector: String,
    pub threshold: f64,
    /// Total ramp duration; divided by `frame_ms` to get the frame budget.
    pub duration_ms: f64,
    /// Nominal frame length used to size the per-frame increment.
    pub frame_ms: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            selector: ".stat-number".into(),
            threshold: 0.5,
            duration_ms: 2000.0,
            frame_ms: 16.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub selector: String,
    /// Height of the fixed header subtracted from the scroll target.
    pub header_offset_px: f64,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            selector: "a[href^=\"#\"]".into(),
            header_offset_px: 80.0,
        }
    }
}
