//! Client-side behavior layer for the marketing site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Each
//! behavior is split into a pure core, testable natively, and a thin binding
//! in [`web`] (behind the `web` feature) that wires DOM events to the core and
//! applies its decisions to elements.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`prefs`] | Persisted light/dark preference |
//! | [`theme`] | Theme state machine shared by every toggle button |
//! | [`nav`] | Mobile navigation open/closed state and scroll-lock effects |
//! | [`scroll`] | Header elevation and hero parallax as functions of scroll offset |
//! | [`debounce`] | Trailing-edge debounce tickets |
//! | [`reveal`] | Fade-in reveal styles for cards and stats |
//! | [`counter`] | Counter text parsing, grouping, and the per-frame ramp |
//! | [`anchor`] | In-page anchor resolution and header-offset scrolling |
//! | [`focus`] | Pointer vs keyboard focus mode |
//! | [`page`] | Body fade-in decision |
//! | [`config`] | Selectors and tuning constants |
//! | [`error`] | Error type for the browser binding |
//! | `web` | `wasm-bindgen` entry points and DOM wiring (feature `web`) |

pub mod anchor;
pub mod config;
pub mod counter;
pub mod debounce;
pub mod error;
pub mod focus;
pub mod nav;
pub mod page;
pub mod prefs;
pub mod reveal;
pub mod scroll;
pub mod theme;

#[cfg(feature = "web")]
pub mod web;

pub use config::SiteConfig;
pub use error::BehaviorError;
