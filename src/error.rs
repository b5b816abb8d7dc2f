//! Error type for the browser binding.
//!
//! Nothing here is fatal: the binding logs these and skips the affected
//! behavior so the rest of the page keeps working.

/// Failure while installing or running a behavior.
#[derive(Debug, thiserror::Error)]
pub enum BehaviorError {
    /// A selector the behavior depends on matched nothing.
    #[error("no element matches selector: {0}")]
    MissingElement(String),
    /// The global `window` is not available (not running in a browser).
    #[error("window is not available")]
    NoWindow,
    /// The window has no `document`.
    #[error("document is not available")]
    NoDocument,
    /// `localStorage` is disabled or inaccessible.
    #[error("local storage is unavailable")]
    StorageUnavailable,
    /// A DOM call threw.
    #[error("dom call failed: {0}")]
    Js(String),
    /// The host passed a config object that does not deserialize.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
