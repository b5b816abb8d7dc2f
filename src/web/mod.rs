//! Browser binding: `wasm-bindgen` entry points and DOM wiring.
//!
//! Each behavior installs independently. A behavior whose elements are
//! missing from the page is skipped and the rest still install.

mod anchor;
mod dom;
mod focus;
mod nav;
mod reveal;
mod scroll;
mod storage;
mod theme;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::config::SiteConfig;
use crate::error::BehaviorError;
use crate::page;

pub use storage::LocalStorage;

/// Install every behavior with the default configuration.
#[wasm_bindgen]
pub fn start() {
    init_logging();
    run(&SiteConfig::default());
}

/// Install every behavior with a JSON config; missing fields keep their
/// defaults and an invalid object falls back to the defaults entirely.
#[wasm_bindgen]
pub fn start_with_config(json: &str) {
    init_logging();
    let cfg = match SiteConfig::from_json(json) {
        Ok(cfg) => cfg,
        Err(err) => {
            log::warn!("{err}; using default config");
            SiteConfig::default()
        }
    };
    run(&cfg);
}

fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("logger already initialized");
    }
}

fn run(cfg: &SiteConfig) {
    if let Err(err) = install(cfg) {
        log::error!("site behaviors not installed: {err}");
    }
}

fn install(cfg: &SiteConfig) -> Result<(), BehaviorError> {
    let window = dom::window()?;
    let doc = dom::document(&window)?;
    let body = doc.body().ok_or_else(|| BehaviorError::MissingElement("body".into()))?;

    log::info!("{}", cfg.banner);
    log::info!("{}", cfg.tagline);
    install_fade_in(&window, &doc, &body, &cfg.fade_in_transition);

    report("theme", theme::install(&window, &doc, &body, &cfg.theme));
    report("nav", nav::install(&doc, &body, &cfg.nav));
    report("anchors", anchor::install(&window, &doc, &cfg.anchor));
    report("header", scroll::install_header(&window, &doc, &cfg.scroll));
    report("reveal", reveal::install_reveal(&doc, &cfg.reveal));
    report("counters", reveal::install_counters(&window, &doc, &cfg.counter));
    report("parallax", scroll::install_parallax(&window, &doc, &cfg.scroll));
    focus::install(&doc);
    Ok(())
}

fn report(behavior: &str, result: Result<(), BehaviorError>) {
    match result {
        Ok(()) => log::debug!("{behavior} installed"),
        Err(err @ BehaviorError::MissingElement(_)) => log::debug!("{behavior} skipped: {err}"),
        Err(err) => log::warn!("{behavior} disabled: {err}"),
    }
}

/// Hide the body until `load` to avoid a flash of unstyled content. Skipped
/// when the page finished loading before the module started.
fn install_fade_in(window: &web_sys::Window, doc: &Document, body: &HtmlElement, transition: &str) {
    let ready_state = doc.ready_state();
    if !page::fade_in_needed(&ready_state) {
        dom::set_style(body, "opacity", "1");
        return;
    }
    dom::set_style(body, "opacity", "0");
    dom::set_style(body, "transition", transition);
    let body = body.clone();
    EventListener::new(window, "load", move |_| dom::set_style(&body, "opacity", "1")).forget();
}
