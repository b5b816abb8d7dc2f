//! Trailing-edge debounce.
//!
//! Each event issues a fresh [`Ticket`] and re-arms the timer. When a timer
//! fires it presents its ticket; only the most recent one is honored, so a
//! burst of events runs the body once, after the burst goes quiet.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Identifies one scheduled run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Ticket issuer for one debounced event source.
///
/// The browser binding also drops the pending timer on every event, so a
/// stale ticket never reaches [`Debouncer::fire`] there; the ticket check is
/// what makes the trailing-edge rule hold without real timers.
#[derive(Debug)]
pub struct Debouncer {
    wait_ms: u32,
    issued: u64,
    fired: u64,
}

impl Debouncer {
    #[must_use]
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms, issued: 0, fired: 0 }
    }

    /// Quiet window after the last event.
    #[must_use]
    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Record an event and return the ticket for the timer it arms.
    pub fn trigger(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Called when a timer fires. Returns `true` if `ticket` is the latest
    /// and has not run yet.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.issued || self.fired == ticket.0 {
            return false;
        }
        self.fired = ticket.0;
        true
    }

    /// Whether an event is waiting for its quiet window.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.fired != self.issued
    }
}
