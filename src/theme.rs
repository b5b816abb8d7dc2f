//! Theme state machine shared by every toggle button.
//!
//! One [`ThemeController`] exists per page. Desktop and mobile toggles all hold
//! a handle to the same controller, so they can never disagree about the
//! current theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::prefs::{PreferenceStore, Theme};

/// Transform applied to the clicked toggle when the theme flips.
pub const SPIN_TRANSFORM: &str = "rotate(360deg)";
/// Transform restored once the spin duration has elapsed.
pub const REST_TRANSFORM: &str = "rotate(0deg)";

/// Owns the current theme and writes every change through to the store.
#[derive(Debug)]
pub struct ThemeController<S> {
    current: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Load the initial theme from `store`.
    pub fn new(store: S) -> Self {
        let current = store.get();
        log::debug!("theme loaded: {current}");
        Self { current, store }
    }

    /// The theme currently applied.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme, persist it, and return the new value.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.flipped();
        self.store.set(self.current);
        log::debug!("theme toggled to {}", self.current);
        self.current
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
