//! Focus outlines only for keyboard users.
//!
//! A mouse press switches to pointer mode, a Tab press back to keyboard mode.
//! On `focusin` the binding hides the outline in pointer mode and restores the
//! stylesheet outline in keyboard mode.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusMode {
    Pointer,
    #[default]
    Keyboard,
}

#[derive(Debug, Default)]
pub struct FocusTracker {
    mode: FocusMode,
}

impl FocusTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> FocusMode {
        self.mode
    }

    pub fn on_mouse_down(&mut self) {
        self.mode = FocusMode::Pointer;
    }

    pub fn on_key_down(&mut self, key: &str) {
        if key == "Tab" {
            self.mode = FocusMode::Keyboard;
        }
    }

    /// Inline `outline` for a newly focused element.
    #[must_use]
    pub fn outline(&self) -> &'static str {
        match self.mode {
            FocusMode::Pointer => "none",
            FocusMode::Keyboard => "",
        }
    }
}
