//! Small DOM helpers shared by the behavior bindings.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlElement, Node, Window};

use crate::error::BehaviorError;

pub fn js_err(err: JsValue) -> BehaviorError {
    BehaviorError::Js(format!("{err:?}"))
}

pub fn window() -> Result<Window, BehaviorError> {
    web_sys::window().ok_or(BehaviorError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, BehaviorError> {
    window.document().ok_or(BehaviorError::NoDocument)
}

/// First element matching `selector`.
pub fn query(doc: &Document, selector: &str) -> Result<HtmlElement, BehaviorError> {
    let found = doc.query_selector(selector).map_err(js_err)?;
    let element = found.ok_or_else(|| BehaviorError::MissingElement(selector.to_owned()))?;
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| BehaviorError::MissingElement(selector.to_owned()))
}

/// Every HTML element matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<HtmlElement>, BehaviorError> {
    let list = doc.query_selector_all(selector).map_err(js_err)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| match node.dyn_into::<HtmlElement>() {
            Ok(el) => Some(el),
            Err(_) => None,
        })
        .collect())
}

/// The node an event was dispatched to.
pub fn event_node(event: &Event) -> Option<Node> {
    match event.target()?.dyn_into::<Node>() {
        Ok(node) => Some(node),
        Err(_) => None,
    }
}

/// The HTML element an event was dispatched to.
pub fn event_element(event: &Event) -> Option<HtmlElement> {
    match event.target()?.dyn_into::<HtmlElement>() {
        Ok(el) => Some(el),
        Err(_) => None,
    }
}

/// Set one inline style property. An empty value removes it.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let style = el.style();
    let result = if value.is_empty() {
        style.remove_property(property).map(drop)
    } else {
        style.set_property(property, value)
    };
    if let Err(err) = result {
        log::warn!("failed to set {property}: {err:?}");
    }
}

/// Current vertical scroll offset, 0 if unreadable.
pub fn scroll_offset(window: &Window) -> f64 {
    match window.scroll_y() {
        Ok(y) => y,
        Err(err) => {
            log::warn!("scroll offset unavailable: {err:?}");
            0.0
        }
    }
}

/// Viewport height in CSS pixels, 0 if unreadable.
pub fn viewport_height(window: &Window) -> f64 {
    match window.inner_height() {
        Ok(h) => h.as_f64().unwrap_or(0.0),
        Err(err) => {
            log::warn!("viewport height unavailable: {err:?}");
            0.0
        }
    }
}
