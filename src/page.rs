//! Whole-page presentation: the body fade-in.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Whether the body should be hidden and faded in on `load`.
///
/// `ready_state` is `document.readyState`. Once it is `"complete"` the `load`
/// event has already fired, so hiding the body would leave it transparent.
#[must_use]
pub fn fade_in_needed(ready_state: &str) -> bool {
    ready_state != "complete"
}
