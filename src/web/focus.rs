//! Focus outlines for keyboard users only.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

use super::dom;
use crate::focus::FocusTracker;

pub fn install(doc: &Document) {
    let tracker = Rc::new(RefCell::new(FocusTracker::new()));

    {
        let tracker = Rc::clone(&tracker);
        EventListener::new(doc, "mousedown", move |_| tracker.borrow_mut().on_mouse_down()).forget();
    }
    {
        let tracker = Rc::clone(&tracker);
        EventListener::new(doc, "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                tracker.borrow_mut().on_key_down(&key_event.key());
            }
        })
        .forget();
    }
    EventListener::new(doc, "focusin", move |event| {
        if let Some(el) = dom::event_element(event) {
            dom::set_style(&el, "outline", tracker.borrow().outline());
        }
    })
    .forget();
}
