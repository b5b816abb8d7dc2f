//! Animated statistic counters.
//!
//! A counter's pre-rendered text (e.g. `"1,234+"`) is split into an integer
//! goal and a literal suffix. [`CounterRamp`] then counts from zero to the goal
//! in fixed per-frame increments, one [`CounterRamp::advance`] per animation
//! frame, and snaps to the exact goal on the last frame.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::config::CounterConfig;

/// Parsed counter text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterTarget {
    pub goal: u64,
    /// The source text with every digit and comma removed.
    pub suffix: String,
}

impl CounterTarget {
    /// Split `text` into goal and suffix. Text without digits has goal 0.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let goal = text
            .chars()
            .filter_map(|c| c.to_digit(10))
            .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d)));
        let suffix = text.chars().filter(|c| !c.is_ascii_digit() && *c != ',').collect();
        Self { goal, suffix }
    }
}

/// Formats a counter value with thousands grouping.
pub trait NumberFormat {
    fn format(&self, value: u64) -> String;
}

/// Fixed-separator grouping, e.g. `1234567` → `"1,234,567"`.
#[derive(Debug, Clone, Copy)]
pub struct Grouping {
    pub separator: char,
}

impl Default for Grouping {
    fn default() -> Self {
        Self { separator: ',' }
    }
}

impl NumberFormat for Grouping {
    fn format(&self, value: u64) -> String {
        let digits = value.to_string();
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.separator);
            }
            out.push(ch);
        }
        out
    }
}

/// One rendered frame of a ramp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RampFrame {
    pub value: u64,
    pub text: String,
    /// No further frames are needed.
    pub done: bool,
}

/// Step function for a counter animation.
#[derive(Debug, Clone)]
pub struct CounterRamp {
    target: CounterTarget,
    increment: f64,
    running: f64,
    done: bool,
}

impl CounterRamp {
    /// Size the per-frame increment from the duration and nominal frame length.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(target: CounterTarget, cfg: &CounterConfig) -> Self {
        let frames = cfg.duration_ms / cfg.frame_ms;
        let frames = if frames.is_finite() && frames >= 1.0 { frames } else { 1.0 };
        let increment = target.goal as f64 / frames;
        Self { target, increment, running: 0.0, done: false }
    }

    #[must_use]
    pub fn target(&self) -> &CounterTarget {
        &self.target
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one frame and return what to display.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn advance(&mut self, fmt: &impl NumberFormat) -> RampFrame {
        let goal = self.target.goal;
        if !self.done {
            self.running += self.increment;
            if self.running < goal as f64 {
                let value = (self.running.floor() as u64).min(goal);
                return self.frame(value, fmt);
            }
            self.done = true;
            log::debug!("counter reached {goal}{}", self.target.suffix);
        }
        self.frame(goal, fmt)
    }

    fn frame(&self, value: u64, fmt: &impl NumberFormat) -> RampFrame {
        RampFrame {
            value,
            text: format!("{}{}", fmt.format(value), self.target.suffix),
            done: self.done,
        }
    }
}

/// At-most-once guard for a counter element.
#[derive(Debug, Clone, Default)]
pub struct CounterWatch {
    started: bool,
}

impl CounterWatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle an intersection. Returns a ramp the first time the element is
    /// visible; the caller unobserves it at that point.
    pub fn on_intersection(&mut self, is_intersecting: bool, text: &str, cfg: &CounterConfig) -> Option<CounterRamp> {
        if !is_intersecting || self.started {
            return None;
        }
        self.started = true;
        Some(CounterRamp::new(CounterTarget::parse(text), cfg))
    }
}
