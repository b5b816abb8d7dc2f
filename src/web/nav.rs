//! Mobile navigation menu.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent, Node};

use super::dom;
use crate::config::NavConfig;
use crate::error::BehaviorError;
use crate::nav::{NavController, NavEvent, ScrollLock, classify_document_click};

struct NavDom {
    toggle: HtmlElement,
    menu: HtmlElement,
    body: HtmlElement,
    open_class: String,
}

impl NavDom {
    fn apply(&self, lock: ScrollLock) {
        let open = lock == ScrollLock::Lock;
        for el in [&self.toggle, &self.menu] {
            if let Err(err) = el.class_list().toggle_with_force(&self.open_class, open) {
                log::warn!("failed to toggle {}: {err:?}", self.open_class);
            }
        }
        dom::set_style(&self.body, "overflow", lock.overflow());
    }

    fn contains(el: &HtmlElement, node: Option<&Node>) -> bool {
        node.is_some_and(|n| el.contains(Some(n)))
    }
}

struct Nav {
    state: RefCell<NavController>,
    dom: NavDom,
}

impl Nav {
    fn dispatch(&self, event: NavEvent) {
        let effect = self.state.borrow_mut().handle(event);
        if let Some(lock) = effect {
            self.dom.apply(lock);
        }
    }
}

pub fn install(doc: &Document, body: &HtmlElement, cfg: &NavConfig) -> Result<(), BehaviorError> {
    let nav = Rc::new(Nav {
        state: RefCell::new(NavController::new()),
        dom: NavDom {
            toggle: dom::query(doc, &cfg.toggle_selector)?,
            menu: dom::query(doc, &cfg.menu_selector)?,
            body: body.clone(),
            open_class: cfg.open_class.clone(),
        },
    });

    {
        let toggle = nav.dom.toggle.clone();
        let nav = Rc::clone(&nav);
        EventListener::new(&toggle, "click", move |_| nav.dispatch(NavEvent::TriggerClick)).forget();
    }

    for link in dom::query_all(doc, &cfg.link_selector)? {
        let nav = Rc::clone(&nav);
        EventListener::new(&link, "click", move |_| nav.dispatch(NavEvent::LinkClick)).forget();
    }

    {
        let nav = Rc::clone(&nav);
        EventListener::new(doc, "click", move |event| {
            let target = dom::event_node(event);
            let in_menu = NavDom::contains(&nav.dom.menu, target.as_ref());
            let in_trigger = NavDom::contains(&nav.dom.toggle, target.as_ref());
            if let Some(outside) = classify_document_click(in_menu, in_trigger) {
                nav.dispatch(outside);
            }
        })
        .forget();
    }

    let cancel_key = cfg.cancel_key.clone();
    EventListener::new(doc, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if key_event.key() == cancel_key {
            nav.dispatch(NavEvent::CancelKey);
        }
    })
    .forget();

    Ok(())
}
