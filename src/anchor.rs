//! In-page anchor links with smooth, header-aware scrolling.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// What a click on an anchor link should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction {
    /// Bare `#`: cancel the default jump and do nothing else.
    Swallow,
    /// Look up the fragment with this selector and scroll to it if found.
    Resolve(String),
    /// Not an in-page link; leave the browser default alone.
    Ignore,
}

#[must_use]
pub fn anchor_action(href: Option<&str>) -> AnchorAction {
    match href {
        Some("#") => AnchorAction::Swallow,
        Some(fragment) if fragment.starts_with('#') => AnchorAction::Resolve(fragment.to_owned()),
        _ => AnchorAction::Ignore,
    }
}

/// Document-relative scroll position that puts the target just below the
/// fixed header.
#[must_use]
pub fn scroll_target(rect_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    rect_top + page_y_offset - header_offset
}
