//! Fade-in reveal for cards and stats.
//!
//! Targets start transparent and shifted down. The first intersection settles
//! them; later intersections re-apply the same settled style, which is a no-op
//! in the browser, so targets are never unobserved.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::RevealConfig;
use crate::scroll::translate_y;

/// Inline style for a reveal target.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealStyle {
    /// Always exactly `0.0` or `1.0`.
    pub opacity: f64,
    pub transform: String,
}

impl RevealStyle {
    /// Hidden and shifted down by `offset_px`.
    #[must_use]
    pub fn hidden(offset_px: f64) -> Self {
        Self { opacity: 0.0, transform: translate_y(offset_px) }
    }

    /// Fully visible and settled.
    #[must_use]
    pub fn visible() -> Self {
        Self { opacity: 1.0, transform: "translateY(0)".into() }
    }

    /// `opacity` as a CSS value.
    #[must_use]
    pub fn opacity_css(&self) -> &'static str {
        if self.opacity > 0.0 { "1" } else { "0" }
    }
}

/// One observed element's reveal state.
#[derive(Debug, Clone, Default)]
pub struct RevealTarget {
    revealed: bool,
}

impl RevealTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Style applied before observation starts.
    #[must_use]
    pub fn initial_style(cfg: &RevealConfig) -> RevealStyle {
        RevealStyle::hidden(cfg.offset_px)
    }

    /// Handle an intersection callback. Returns the style to apply, if any.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> Option<RevealStyle> {
        if !is_intersecting {
            return None;
        }
        if !self.revealed {
            log::debug!("reveal target entered viewport");
        }
        self.revealed = true;
        Some(RevealStyle::visible())
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}
