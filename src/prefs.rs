//! Persisted light/dark preference.
//!
//! The preference is a single string flag, `"light"` or `"dark"`. Reads never
//! fail: an absent, invalid, or unreadable value is [`Theme::Light`]. Writes
//! that fail are logged and dropped.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::fmt;
use std::str::FromStr;

/// The two page themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The persisted string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The class applied to `<body>` while this theme is active.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light-theme",
            Self::Dark => "dark-theme",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Every theme class, for exclusive application.
    pub const ALL_CLASSES: [&'static str; 2] = ["light-theme", "dark-theme"];
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored value that is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Resolve a raw stored value to a theme, defaulting to light.
#[must_use]
pub fn theme_from_stored(raw: Option<&str>) -> Theme {
    match raw.map(str::parse::<Theme>) {
        Some(Ok(theme)) => theme,
        Some(Err(UnknownTheme(value))) => {
            log::warn!("ignoring stored theme {value:?}");
            Theme::default()
        }
        None => Theme::default(),
    }
}

/// Resolve the outcome of a storage read. A failed read is light.
pub fn theme_from_read<E: fmt::Debug>(read: Result<Option<String>, E>) -> Theme {
    match read {
        Ok(raw) => theme_from_stored(raw.as_deref()),
        Err(err) => {
            log::warn!("reading theme preference failed: {err:?}");
            Theme::default()
        }
    }
}

/// Durable storage for the theme preference.
pub trait PreferenceStore {
    /// The persisted theme, or light when unset, invalid, or unreadable.
    fn get(&self) -> Theme;

    /// Persist `theme`. Failures are swallowed.
    fn set(&mut self, theme: Theme);
}

/// In-process store. Used in tests and as the fallback when the browser's
/// storage is unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
    /// Number of successful writes.
    pub writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `raw`, valid or not.
    #[must_use]
    pub fn with_raw(raw: &str) -> Self {
        Self { value: Some(raw.to_owned()), writes: 0 }
    }

    /// The raw stored string, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Theme {
        theme_from_stored(self.value.as_deref())
    }

    fn set(&mut self, theme: Theme) {
        self.value = Some(theme.as_str().to_owned());
        self.writes += 1;
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self) -> Theme {
        (**self).get()
    }

    fn set(&mut self, theme: Theme) {
        (**self).set(theme);
    }
}
