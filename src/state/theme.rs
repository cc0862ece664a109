//! Light/dark theme preference.
//!
//! The resolved theme is written to an attribute on the `<html>` element and
//! persisted under a single storage key. Without a persisted value the
//! system `prefers-color-scheme` signal decides; without either the page is
//! left in its default (light) styling.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Theme applied to the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted or attribute value. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Environment the theme store reads from and writes to.
pub trait ThemeHost {
    /// Persisted preference, if any.
    fn stored(&self) -> Option<String>;
    /// Persist a preference.
    fn store(&self, value: &str);
    /// System-level dark color-scheme signal.
    fn prefers_dark(&self) -> bool;
    /// Current value of the theme attribute on the root element.
    fn attribute(&self) -> Option<String>;
    fn set_attribute(&self, value: &str);
}

/// Apply the startup theme and return the resolved value.
///
/// A valid persisted value wins. Otherwise a dark system preference sets
/// `dark`. Otherwise the attribute is left untouched and the resolved theme
/// is [`Theme::Light`].
pub fn apply(host: &impl ThemeHost) -> Theme {
    let stored = host.stored();
    let persisted = stored.as_deref().and_then(Theme::parse);
    if persisted.is_none() {
        if let Some(raw) = stored.as_deref() {
            log::warn!("ignoring unrecognised theme preference '{raw}'");
        }
    }

    let resolved = persisted.or_else(|| host.prefers_dark().then_some(Theme::Dark));
    match resolved {
        Some(theme) => {
            host.set_attribute(theme.as_str());
            theme
        }
        None => Theme::Light,
    }
}

/// Theme currently shown by the document.
pub fn current(host: &impl ThemeHost) -> Theme {
    match host.attribute().as_deref() {
        Some("dark") => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Flip the document theme, persist it, and return the new value.
pub fn toggle(host: &impl ThemeHost) -> Theme {
    let next = current(host).toggled();
    host.set_attribute(next.as_str());
    host.store(next.as_str());
    log::debug!("theme switched to {}", next.as_str());
    next
}
