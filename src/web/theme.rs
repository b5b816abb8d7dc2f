//! Theme toggle buttons.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement, Window};

use super::{dom, storage};
use crate::config::ThemeConfig;
use crate::error::BehaviorError;
use crate::prefs::Theme;
use crate::theme::{REST_TRANSFORM, SPIN_TRANSFORM, ThemeController};

/// Apply the stored theme to `body` and wire every toggle to one controller.
pub fn install(window: &Window, doc: &Document, body: &HtmlElement, cfg: &ThemeConfig) -> Result<(), BehaviorError> {
    let controller = ThemeController::new(storage::open_or_memory(window, &cfg.storage_key));
    apply(body, controller.current());
    let controller = Rc::new(RefCell::new(controller));

    let toggles = dom::query_all(doc, &cfg.toggle_selector)?;
    if toggles.is_empty() {
        return Err(BehaviorError::MissingElement(cfg.toggle_selector.clone()));
    }

    for toggle in toggles {
        let controller = Rc::clone(&controller);
        let body = body.clone();
        let button = toggle.clone();
        let spin_ms = cfg.spin_ms;
        EventListener::new(&toggle, "click", move |_| {
            let theme = controller.borrow_mut().toggle();
            apply(&body, theme);

            dom::set_style(&button, "transform", SPIN_TRANSFORM);
            let button = button.clone();
            Timeout::new(spin_ms, move || dom::set_style(&button, "transform", REST_TRANSFORM)).forget();
        })
        .forget();
    }
    Ok(())
}

/// Make `theme`'s class the only theme class on `body`.
fn apply(body: &HtmlElement, theme: Theme) {
    let classes = body.class_list();
    for class in Theme::ALL_CLASSES {
        if let Err(err) = classes.remove_1(class) {
            log::warn!("failed to remove {class}: {err:?}");
        }
    }
    if let Err(err) = classes.add_1(theme.class_name()) {
        log::warn!("failed to apply {theme} theme: {err:?}");
    }
}
