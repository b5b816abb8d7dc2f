//! Smooth scrolling for in-page anchor links.

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use super::dom;
use crate::anchor::{AnchorAction, anchor_action, scroll_target};
use crate::config::AnchorConfig;
use crate::error::BehaviorError;

pub fn install(window: &Window, doc: &Document, cfg: &AnchorConfig) -> Result<(), BehaviorError> {
    for link in dom::query_all(doc, &cfg.selector)? {
        let window = window.clone();
        let doc = doc.clone();
        let header_offset = cfg.header_offset_px;
        let anchor = link.clone();
        EventListener::new_with_options(&link, "click", EventListenerOptions::enable_prevent_default(), move |event| {
            match anchor_action(anchor.get_attribute("href").as_deref()) {
                AnchorAction::Swallow => event.prevent_default(),
                AnchorAction::Resolve(selector) => match doc.query_selector(&selector) {
                    Ok(Some(target)) => {
                        event.prevent_default();
                        let top = scroll_target(
                            target.get_bounding_client_rect().top(),
                            dom::scroll_offset(&window),
                            header_offset,
                        );
                        let options = ScrollToOptions::new();
                        options.set_top(top);
                        options.set_behavior(ScrollBehavior::Smooth);
                        window.scroll_to_with_scroll_to_options(&options);
                    }
                    Ok(None) => log::debug!("anchor {selector} has no target"),
                    Err(err) => log::debug!("anchor {selector} is not a valid selector: {err:?}"),
                },
                AnchorAction::Ignore => {}
            }
        })
        .forget();
    }
    Ok(())
}
