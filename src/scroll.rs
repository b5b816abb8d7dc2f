//! Header elevation and hero parallax as functions of the scroll offset.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::ScrollConfig;

/// `box-shadow` value for a header that is not elevated.
pub const NO_SHADOW: &str = "none";

/// Whether the header should carry its shadow at `offset`.
#[must_use]
pub fn header_elevated(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// The header's inline `box-shadow` for `offset`.
#[must_use]
pub fn header_shadow(offset: f64, cfg: &ScrollConfig) -> &str {
    if header_elevated(offset, cfg.header_shadow_after_px) {
        &cfg.header_shadow
    } else {
        NO_SHADOW
    }
}

/// Hero parallax. Updates stop once the hero has scrolled a full viewport
/// away, leaving the last translation in place.
#[derive(Debug, Clone, Copy)]
pub struct Parallax {
    speed: f64,
    last: Option<f64>,
}

impl Parallax {
    #[must_use]
    pub fn new(speed: f64) -> Self {
        Self { speed, last: None }
    }

    /// New vertical translation for `offset`, or `None` when frozen.
    pub fn update(&mut self, offset: f64, viewport_height: f64) -> Option<f64> {
        if offset >= viewport_height {
            return None;
        }
        let shift = offset * self.speed;
        self.last = Some(shift);
        Some(shift)
    }

    /// The last translation applied, if any.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.last
    }
}

/// CSS transform for a vertical translation in pixels.
#[must_use]
pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}
