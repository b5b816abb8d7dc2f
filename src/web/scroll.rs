//! Header elevation (debounced) and hero parallax (every scroll event).
//!
//! The two effects hold independent `scroll` listeners on the window.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::{Document, Window};

use super::dom;
use crate::config::ScrollConfig;
use crate::debounce::Debouncer;
use crate::error::BehaviorError;
use crate::scroll::{Parallax, header_shadow, translate_y};

pub fn install_header(window: &Window, doc: &Document, cfg: &ScrollConfig) -> Result<(), BehaviorError> {
    let header = dom::query(doc, &cfg.header_selector)?;
    let cfg = Rc::new(cfg.clone());
    let debouncer = Rc::new(RefCell::new(Debouncer::new(cfg.debounce_ms)));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let win = window.clone();
    EventListener::new(window, "scroll", move |_| {
        let (ticket, wait_ms) = {
            let mut debouncer = debouncer.borrow_mut();
            (debouncer.trigger(), debouncer.wait_ms())
        };
        let debouncer = Rc::clone(&debouncer);
        let header = header.clone();
        let cfg = Rc::clone(&cfg);
        let win = win.clone();
        let timeout = Timeout::new(wait_ms, move || {
            if debouncer.borrow_mut().fire(ticket) {
                let offset = dom::scroll_offset(&win);
                dom::set_style(&header, "box-shadow", header_shadow(offset, &cfg));
            }
        });
        // Dropping the previous timeout cancels it; the ticket check in the
        // callback is the same rule, checked by the core's tests.
        *pending.borrow_mut() = Some(timeout);
    })
    .forget();
    Ok(())
}

pub fn install_parallax(window: &Window, doc: &Document, cfg: &ScrollConfig) -> Result<(), BehaviorError> {
    let hero = dom::query(doc, &cfg.hero_selector)?;
    let parallax = RefCell::new(Parallax::new(cfg.parallax_speed));

    let win = window.clone();
    EventListener::new(window, "scroll", move |_| {
        let offset = dom::scroll_offset(&win);
        let shift = parallax.borrow_mut().update(offset, dom::viewport_height(&win));
        if let Some(shift) = shift {
            dom::set_style(&hero, "transform", &translate_y(shift));
        }
    })
    .forget();
    Ok(())
}
