//! Mobile navigation menu: open/closed state and scroll-lock effects.
//!
//! The browser binding translates clicks and key presses into [`NavEvent`]s
//! and applies whatever [`ScrollLock`] effect the transition returns. Events
//! that leave the state unchanged return `None`, so the binding never touches
//! the DOM for them.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Menu visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

/// Inputs to the menu state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The hamburger toggle was clicked.
    TriggerClick,
    /// A navigation link inside the menu was clicked.
    LinkClick,
    /// The cancel key (Escape) was pressed.
    CancelKey,
    /// A click landed outside both the menu and its toggle.
    OutsideClick,
}

/// Body scroll side effect of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollLock {
    /// Menu opened: set `overflow: hidden` on the body.
    Lock,
    /// Menu closed: clear the body's inline overflow.
    Release,
}

impl ScrollLock {
    /// Inline `overflow` value for the body.
    #[must_use]
    pub fn overflow(self) -> &'static str {
        match self {
            Self::Lock => "hidden",
            Self::Release => "",
        }
    }
}

/// Classify a document-level click.
///
/// Only a click inside neither the menu nor the toggle counts as outside;
/// toggle clicks are already handled by the toggle's own listener.
#[must_use]
pub fn classify_document_click(in_menu: bool, in_trigger: bool) -> Option<NavEvent> {
    if in_menu || in_trigger {
        None
    } else {
        Some(NavEvent::OutsideClick)
    }
}

/// Owns the menu state for the page.
#[derive(Debug, Default)]
pub struct NavController {
    state: NavState,
}

impl NavController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> NavState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == NavState::Open
    }

    /// Apply `event` and return the scroll-lock effect, if the state changed.
    pub fn handle(&mut self, event: NavEvent) -> Option<ScrollLock> {
        let next = match (self.state, event) {
            (NavState::Closed, NavEvent::TriggerClick) => NavState::Open,
            (NavState::Open, _) => NavState::Closed,
            (NavState::Closed, _) => return None,
        };
        log::debug!("nav {:?} -> {next:?} on {event:?}", self.state);
        self.state = next;
        Some(match next {
            NavState::Open => ScrollLock::Lock,
            NavState::Closed => ScrollLock::Release,
        })
    }
}
