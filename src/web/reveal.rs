//! Intersection observers for fade-in reveals and counter ramps.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{AnimationFrame, request_animation_frame};
use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use super::dom;
use crate::config::{CounterConfig, RevealConfig};
use crate::counter::{CounterRamp, CounterWatch, NumberFormat};
use crate::error::BehaviorError;
use crate::reveal::{RevealStyle, RevealTarget};

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Build an observer that lives for the rest of the page.
fn new_observer(threshold: f64, root_margin: Option<&str>, callback: EntryCallback) -> Result<IntersectionObserver, BehaviorError> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).map_err(dom::js_err)?;
    callback.forget();
    Ok(observer)
}

fn entries(list: &Array) -> impl Iterator<Item = IntersectionObserverEntry> + '_ {
    list.iter().map(|value| value.unchecked_into::<IntersectionObserverEntry>())
}

fn apply_style(el: &HtmlElement, style: &RevealStyle) {
    dom::set_style(el, "opacity", style.opacity_css());
    dom::set_style(el, "transform", &style.transform);
}

/// Index of `target` among the observed elements.
fn position(observed: &[HtmlElement], target: &Element) -> Option<usize> {
    observed.iter().position(|el| AsRef::<Element>::as_ref(el) == target)
}

pub fn install_reveal(doc: &Document, cfg: &RevealConfig) -> Result<(), BehaviorError> {
    let elements = dom::query_all(doc, &cfg.selector)?;
    if elements.is_empty() {
        return Err(BehaviorError::MissingElement(cfg.selector.clone()));
    }

    let hidden = RevealTarget::initial_style(cfg);
    for el in &elements {
        apply_style(el, &hidden);
        dom::set_style(el, "transition", &cfg.transition);
    }

    let targets = RefCell::new(vec![RevealTarget::new(); elements.len()]);
    let observed = elements.clone();
    let callback = EntryCallback::new(move |list: Array, _observer: IntersectionObserver| {
        for entry in entries(&list) {
            let Some(index) = position(&observed, &entry.target()) else {
                continue;
            };
            let style = targets.borrow_mut()[index].on_intersection(entry.is_intersecting());
            if let Some(style) = style {
                apply_style(&observed[index], &style);
            }
        }
    });

    let observer = new_observer(cfg.threshold, Some(&cfg.root_margin), callback)?;
    for el in &elements {
        observer.observe(el);
    }
    Ok(())
}

/// Browser locale grouping via `Number.prototype.toLocaleString`.
struct LocaleFormat {
    locale: String,
}

impl LocaleFormat {
    fn for_window(window: &Window) -> Self {
        let locale = window.navigator().language().unwrap_or_else(|| "en-US".into());
        Self { locale }
    }
}

impl NumberFormat for LocaleFormat {
    #[allow(clippy::cast_precision_loss)]
    fn format(&self, value: u64) -> String {
        js_sys::Number::from(value as f64).to_locale_string(&self.locale).into()
    }
}

/// A running ramp and the frame request that will advance it.
struct RampLoop {
    ramp: CounterRamp,
    frame: Option<AnimationFrame>,
}

fn step(el: HtmlElement, state: Rc<RefCell<RampLoop>>, fmt: Rc<LocaleFormat>) {
    let frame = {
        let mut running = state.borrow_mut();
        running.frame.take();
        running.ramp.advance(&*fmt)
    };
    el.set_text_content(Some(&frame.text));
    if frame.done {
        return;
    }
    let next = Rc::clone(&state);
    let handle = request_animation_frame(move |_| step(el, next, fmt));
    state.borrow_mut().frame = Some(handle);
}

pub fn install_counters(window: &Window, doc: &Document, cfg: &CounterConfig) -> Result<(), BehaviorError> {
    let elements = dom::query_all(doc, &cfg.selector)?;
    if elements.is_empty() {
        return Err(BehaviorError::MissingElement(cfg.selector.clone()));
    }

    let fmt = Rc::new(LocaleFormat::for_window(window));
    let watches = RefCell::new(vec![CounterWatch::new(); elements.len()]);
    let observed = elements.clone();
    let threshold = cfg.threshold;
    let cfg = cfg.clone();
    let callback = EntryCallback::new(move |list: Array, observer: IntersectionObserver| {
        for entry in entries(&list) {
            let target = entry.target();
            let Some(index) = position(&observed, &target) else {
                continue;
            };
            let el = &observed[index];
            let text = el.text_content().unwrap_or_default();
            let ramp = watches.borrow_mut()[index].on_intersection(entry.is_intersecting(), &text, &cfg);
            let Some(ramp) = ramp else {
                continue;
            };
            observer.unobserve(&target);
            let state = Rc::new(RefCell::new(RampLoop { ramp, frame: None }));
            step(el.clone(), state, Rc::clone(&fmt));
        }
    });

    let observer = new_observer(threshold, None, callback)?;
    for el in &elements {
        observer.observe(el);
    }
    Ok(())
}
